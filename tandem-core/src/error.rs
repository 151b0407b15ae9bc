//! Structured errors for matrix and scalar operations
//!
//! Every failure is reported synchronously to the caller. Shape faults are
//! caller bugs, singularity is a property of the data, and the two are kept
//! apart so callers can react differently.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const SINGULAR: &str = "SINGULAR";
}

/// Error type for scalar operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    #[error("Invalid number format: {0}")]
    Parse(String),

    #[error("Division by zero")]
    DivisionByZero,
}

impl ScalarError {
    pub fn code(&self) -> &'static str {
        match self {
            ScalarError::Parse(_) => codes::PARSE_ERROR,
            ScalarError::DivisionByZero => codes::DIV_ZERO,
        }
    }
}

/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A shape precondition failed: constructor data length, same-size,
    /// transpose-size or multiplication-size checks.
    #[error("{op}: dimension mismatch, expected {expected}, got {actual}")]
    DimensionMismatch {
        op: &'static str,
        expected: String,
        actual: String,
    },

    #[error("matrix is not square: {rows}×{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// No admissible pivot was found in `column` during forward elimination.
    #[error("matrix is singular: no pivot in column {column}")]
    Singular { column: usize },

    #[error(transparent)]
    Arithmetic(#[from] ScalarError),
}

impl MatrixError {
    /// Shape error for two `rows×cols` shapes
    pub fn shape(op: &'static str, expected: (usize, usize), actual: (usize, usize)) -> Self {
        MatrixError::DimensionMismatch {
            op,
            expected: format!("{}×{}", expected.0, expected.1),
            actual: format!("{}×{}", actual.0, actual.1),
        }
    }

    /// Shape error for a flat buffer length
    pub fn length(op: &'static str, expected: usize, actual: usize) -> Self {
        MatrixError::DimensionMismatch {
            op,
            expected: format!("{} elements", expected),
            actual: format!("{} elements", actual),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            MatrixError::NotSquare { .. } => codes::NOT_SQUARE,
            MatrixError::Singular { .. } => codes::SINGULAR,
            MatrixError::Arithmetic(e) => e.code(),
        }
    }

    /// True for numerical degeneracy of the input rather than a caller bug
    pub fn is_singular(&self) -> bool {
        matches!(self, MatrixError::Singular { .. })
    }
}
