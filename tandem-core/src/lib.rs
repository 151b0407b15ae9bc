//! Tandem Core - Fundamental types
//!
//! This crate provides the core types used by the Tandem matrix engine:
//! - `Scalar`: the arithmetic capability set the engine is generic over
//! - `Decimal`: arbitrary precision fixed-scale decimal back-end (`f64` is the other)
//! - `BufferPool`: size-keyed pool of reusable scratch buffers
//! - `MatrixError` / `ScalarError`: structured errors

mod decimal;
mod error;
mod format;
mod pool;
mod scalar;

pub use decimal::{Decimal, DECIMAL_MAX_PARSE_SCALE, DECIMAL_PIVOT_EXPONENT, DECIMAL_SCALE};
pub use error::{codes, MatrixError, ScalarError};
pub use format::{scientific, SCIENTIFIC_DIGITS};
pub use pool::{BufferPool, PoolStats};
pub use scalar::{Scalar, FLOAT_PIVOT_TOLERANCE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BufferPool, Decimal, MatrixError, Scalar, ScalarError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generic code sees the same contract from both back-ends
    fn one_third<S: Scalar>() -> S {
        let three = S::one().add(&S::one()).add(&S::one());
        three.reciprocal().unwrap()
    }

    #[test]
    fn test_generic_float() {
        let x: f64 = one_third();
        assert!((x - 1.0 / 3.0).abs() < 1e-15);
        assert!(!x.is_degenerate());
    }

    #[test]
    fn test_generic_decimal() {
        let x: Decimal = one_third();
        assert_eq!(x.scale(), DECIMAL_SCALE);
        let back = x.mul(&Decimal::from_i64(3));
        // 0.333…3 × 3 = 0.999…9, one unit in the last place below one
        assert!(back < Decimal::ONE);
        assert!(Decimal::ONE.sub(&back).is_degenerate());
    }

    #[test]
    fn test_prelude_exports() {
        use crate::prelude::*;
        let mut pool: BufferPool<Decimal> = BufferPool::new();
        let buf = pool.acquire(2);
        assert!(buf.iter().all(Scalar::is_zero));
        assert_eq!(codes::SINGULAR, MatrixError::Singular { column: 0 }.code());
    }
}
