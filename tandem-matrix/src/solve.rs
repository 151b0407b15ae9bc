//! Matrix inversion by Gauss-Jordan elimination with partial pivoting
//!
//! The augmented matrix `[A | I]` is never built. Its two halves live in two
//! scratch buffers of equal shape, `lhs` (a copy of `A`) and `rhs` (starts as
//! the identity), and every row operation is applied to both.

use tandem_core::{BufferPool, MatrixError, Scalar};
use tracing::debug;

use crate::helpers::{check_same_dims, check_square};
use crate::ops::fill_identity;
use crate::types::Matrix;

/// Reduce `lhs` (n×n, column-major) to the identity, mirroring every row operation on `rhs`
fn gauss_jordan<S: Scalar>(lhs: &mut [S], rhs: &mut [S], n: usize) -> Result<(), MatrixError> {
    let at = |row: usize, col: usize| row + col * n;

    // Forward elimination
    for i in 0..n {
        let pivot_row = (i..n)
            .find(|&r| !lhs[at(r, i)].is_degenerate())
            .ok_or_else(|| {
                debug!(scalar = S::NAME, column = i, "no admissible pivot");
                MatrixError::Singular { column: i }
            })?;

        if pivot_row != i {
            debug!(
                scalar = S::NAME,
                column = i,
                from = pivot_row,
                pivot = lhs[at(pivot_row, i)].to_f64(),
                "swapping pivot row"
            );
            // Columns left of `i` are already zero in lhs
            for j in i..n {
                lhs.swap(at(i, j), at(pivot_row, j));
            }
            for j in 0..n {
                rhs.swap(at(i, j), at(pivot_row, j));
            }
        }

        let factor = lhs[at(i, i)].reciprocal()?;
        lhs[at(i, i)] = S::one();
        for j in i + 1..n {
            let scaled = lhs[at(i, j)].mul(&factor);
            lhs[at(i, j)] = scaled;
        }
        for j in 0..n {
            let scaled = rhs[at(i, j)].mul(&factor);
            rhs[at(i, j)] = scaled;
        }

        for k in i + 1..n {
            let f = std::mem::replace(&mut lhs[at(k, i)], S::zero());
            for j in i + 1..n {
                let reduced = lhs[at(k, j)].sub(&f.mul(&lhs[at(i, j)]));
                lhs[at(k, j)] = reduced;
            }
            for j in 0..n {
                let reduced = rhs[at(k, j)].sub(&f.mul(&rhs[at(i, j)]));
                rhs[at(k, j)] = reduced;
            }
        }
    }

    // Back substitution: lhs is unit upper triangular, only rhs changes
    for i in (0..n).rev() {
        for k in (0..i).rev() {
            let f = std::mem::replace(&mut lhs[at(k, i)], S::zero());
            for j in 0..n {
                let reduced = rhs[at(k, j)].sub(&f.mul(&rhs[at(i, j)]));
                rhs[at(k, j)] = reduced;
            }
        }
    }

    Ok(())
}

impl<S: Scalar> Matrix<S> {
    /// Inverse of `self` in a scratch buffer; both scratch buffers go back to the pool on failure
    fn inverse_scratch(&self, pool: &mut BufferPool<S>) -> Result<Vec<S>, MatrixError> {
        let mut lhs = pool.acquire_copy(&self.data);
        let mut rhs = pool.acquire(self.len());
        fill_identity(&mut rhs, self.rows, self.cols);

        let outcome = gauss_jordan(&mut lhs, &mut rhs, self.rows);
        pool.release(lhs);
        match outcome {
            Ok(()) => Ok(rhs),
            Err(e) => {
                pool.release(rhs);
                Err(e)
            }
        }
    }

    /// Store `self⁻¹` into `dest`
    ///
    /// Fails with `NotSquare`, `DimensionMismatch` (dest shape) or `Singular`.
    /// On failure `dest` is left untouched.
    pub fn invert_into<'d>(
        &self,
        dest: &'d mut Matrix<S>,
        pool: &mut BufferPool<S>,
    ) -> Result<&'d mut Matrix<S>, MatrixError> {
        check_square(self.shape())?;
        check_same_dims(self.shape(), dest.shape(), "invert")?;
        let inverse = self.inverse_scratch(pool)?;
        pool.release_into(inverse, &mut dest.data);
        Ok(dest)
    }

    /// Invert in place
    pub fn invert(&mut self, pool: &mut BufferPool<S>) -> Result<&mut Self, MatrixError> {
        check_square(self.shape())?;
        let inverse = self.inverse_scratch(pool)?;
        pool.release_into(inverse, &mut self.data);
        Ok(self)
    }
}
