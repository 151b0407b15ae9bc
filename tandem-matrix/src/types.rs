//! Core matrix type

use std::fmt;

use tandem_core::{MatrixError, Scalar};

use crate::helpers::{check_len, element_count};

/// An M×N matrix stored in column-major order
///
/// Element `(i, j)` lives at linear index `i + j·M`. The shape is fixed for
/// the lifetime of the matrix and the backing vector always holds exactly
/// `M·N` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<S> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<S>,
}

impl<S: Scalar> Matrix<S> {
    /// Wrap caller data (column-major) without copying it
    pub fn from_vec(rows: usize, cols: usize, data: Vec<S>) -> Result<Self, MatrixError> {
        check_len(element_count(rows, cols, "from_vec")?, data.len(), "from_vec")?;
        Ok(Self { rows, cols, data })
    }

    /// Zero-initialized M×N matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![S::zero(); rows * cols] }
    }

    /// Build from row-major values, the order matrices are usually written in
    pub fn from_row_slice(rows: usize, cols: usize, values: &[S]) -> Result<Self, MatrixError> {
        check_len(element_count(rows, cols, "from_row_slice")?, values.len(), "from_row_slice")?;
        let mut data = Vec::with_capacity(values.len());
        for j in 0..cols {
            for i in 0..rows {
                data.push(values[i * cols + j].clone());
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// M×N matrix with ones on the leading diagonal
    pub fn identity_of(rows: usize, cols: usize) -> Self {
        let mut m = Self::zeros(rows, cols);
        m.identity();
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total element count M·N
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&S> {
        if row < self.rows && col < self.cols {
            self.data.get(row + col * self.rows)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut S> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row + col * self.rows)
        } else {
            None
        }
    }

    /// Column-major backing data
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    /// Column-major backing data, for refilling in place
    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.data
    }

    /// Give the backing vector back to the caller
    pub fn into_vec(self) -> Vec<S> {
        self.data
    }

    /// Same M and N
    pub fn same_size(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// `other` has the shape of `self` transposed
    pub fn transposes_to(&self, other: &Self) -> bool {
        self.rows == other.cols && self.cols == other.rows
    }

    /// `self · other` is defined
    pub fn multiplies_with(&self, other: &Self) -> bool {
        self.cols == other.rows
    }
}

impl<S: Scalar> fmt::Display for Matrix<S> {
    /// One line per row, each element in fixed-width scientific notation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{} ", self.data[i + j * self.rows].to_scientific())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
