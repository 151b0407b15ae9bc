//! Basic matrix operations: load, dot, identity, transpose, multiply
//!
//! Operations that produce a matrix follow a two-phase protocol: compute the
//! whole result into a scratch buffer borrowed from the pool, then commit it
//! into the destination. A destination that aliases an operand (the in-place
//! variants below) is therefore never read after it has been written.

use tandem_core::{BufferPool, MatrixError, Scalar};

use crate::helpers::{check_len, check_product_dims, check_same_dims, check_transposed_dims};
use crate::types::Matrix;

/// Zero `data` and put ones on the leading `min(rows, cols)` diagonal
pub(crate) fn fill_identity<S: Scalar>(data: &mut [S], rows: usize, cols: usize) {
    data.fill(S::zero());
    for i in 0..rows.min(cols) {
        data[i + i * rows] = S::one();
    }
}

/// Row-major walk of `src` (rows×cols) written column-major into `out` (cols×rows)
fn transpose_kernel<S: Scalar>(src: &[S], rows: usize, cols: usize, out: &mut [S]) {
    let mut out_index = 0;
    for i in 0..rows {
        for j in 0..cols {
            out[out_index] = src[i + j * rows].clone();
            out_index += 1;
        }
    }
}

/// Dense product of `lhs` (rows×inner) and `rhs` (inner×cols) into `out`
fn mul_kernel<S: Scalar>(lhs: &[S], rows: usize, inner: usize, rhs: &[S], cols: usize, out: &mut [S]) {
    for j in 0..cols {
        for i in 0..rows {
            let mut acc = S::zero();
            for k in 0..inner {
                acc = acc.add(&lhs[i + k * rows].mul(&rhs[k + j * inner]));
            }
            out[i + j * rows] = acc;
        }
    }
}

impl<S: Scalar> Matrix<S> {
    /// Overwrite the contents with a copy of `data` (column-major)
    pub fn load(&mut self, data: &[S]) -> Result<&mut Self, MatrixError> {
        check_len(self.len(), data.len(), "load")?;
        self.data.clone_from_slice(data);
        Ok(self)
    }

    /// Sum of elementwise products, accumulated in column-major order
    pub fn dot(&self, other: &Self) -> Result<S, MatrixError> {
        check_same_dims(self.shape(), other.shape(), "dot")?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(S::zero(), |acc, (a, b)| acc.add(&a.mul(b))))
    }

    /// Turn `self` into an identity matrix
    ///
    /// Rows or columns outside the leading square block stay zero, so a 3×5
    /// matrix becomes a 3×3 identity padded with two zero columns.
    pub fn identity(&mut self) -> &mut Self {
        fill_identity(&mut self.data, self.rows, self.cols);
        self
    }

    // ========== Transpose ==========

    fn transposed(&self, pool: &mut BufferPool<S>) -> Vec<S> {
        let mut buf = pool.acquire(self.len());
        transpose_kernel(&self.data, self.rows, self.cols, &mut buf);
        buf
    }

    /// Store `selfᵀ` into `dest`
    pub fn transpose_into<'d>(
        &self,
        dest: &'d mut Matrix<S>,
        pool: &mut BufferPool<S>,
    ) -> Result<&'d mut Matrix<S>, MatrixError> {
        check_transposed_dims(self.shape(), dest.shape(), "transpose")?;
        let buf = self.transposed(pool);
        pool.release_into(buf, &mut dest.data);
        Ok(dest)
    }

    /// Transpose in place; only a square matrix can hold its own transpose
    pub fn transpose(&mut self, pool: &mut BufferPool<S>) -> Result<&mut Self, MatrixError> {
        check_transposed_dims(self.shape(), self.shape(), "transpose")?;
        let buf = self.transposed(pool);
        pool.release_into(buf, &mut self.data);
        Ok(self)
    }

    // ========== Multiply ==========

    fn product(lhs: &Self, rhs: &Self, pool: &mut BufferPool<S>) -> Vec<S> {
        let mut buf = pool.acquire(lhs.rows * rhs.cols);
        mul_kernel(&lhs.data, lhs.rows, lhs.cols, &rhs.data, rhs.cols, &mut buf);
        buf
    }

    /// Store `self · rhs` into `dest`
    pub fn mul_into<'d>(
        &self,
        rhs: &Matrix<S>,
        dest: &'d mut Matrix<S>,
        pool: &mut BufferPool<S>,
    ) -> Result<&'d mut Matrix<S>, MatrixError> {
        check_product_dims(self.shape(), rhs.shape(), dest.shape(), "mul")?;
        let buf = Self::product(self, rhs, pool);
        pool.release_into(buf, &mut dest.data);
        Ok(dest)
    }

    /// `self = self · rhs`
    pub fn mul_assign(&mut self, rhs: &Matrix<S>, pool: &mut BufferPool<S>) -> Result<&mut Self, MatrixError> {
        check_product_dims(self.shape(), rhs.shape(), self.shape(), "mul")?;
        let buf = Self::product(self, rhs, pool);
        pool.release_into(buf, &mut self.data);
        Ok(self)
    }

    /// `self = lhs · self`
    pub fn pre_mul_assign(&mut self, lhs: &Matrix<S>, pool: &mut BufferPool<S>) -> Result<&mut Self, MatrixError> {
        check_product_dims(lhs.shape(), self.shape(), self.shape(), "mul")?;
        let buf = Self::product(lhs, self, pool);
        pool.release_into(buf, &mut self.data);
        Ok(self)
    }

    /// `self = self · self`
    pub fn square(&mut self, pool: &mut BufferPool<S>) -> Result<&mut Self, MatrixError> {
        check_product_dims(self.shape(), self.shape(), self.shape(), "mul")?;
        let this: &Self = self;
        let buf = Self::product(this, this, pool);
        pool.release_into(buf, &mut self.data);
        Ok(self)
    }
}
