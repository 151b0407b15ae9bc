//! Tandem Matrix - Dense matrices in two precisions
//!
//! Provides a column-major dense matrix generic over [`Scalar`]:
//! - Construction (from caller data, zeros, row-major slices, identity)
//! - Basic operations (load, dot, identity, transpose, multiply)
//! - Inversion (Gauss-Jordan with partial pivoting)
//! - Diagnostic rendering in fixed-width scientific notation
//!
//! One implementation serves both back-ends: `f64` for speed and
//! [`Decimal`] for exact sums and products with 100-digit divisions.
//!
//! Every operation that writes a matrix borrows its scratch space from a
//! caller-owned [`BufferPool`] and commits the finished result into the
//! destination, so in-place variants never read half-written data.
//!
//! ```
//! use tandem_matrix::{BufferPool, FloatMatrix};
//!
//! let mut pool = BufferPool::new();
//! let mut a = FloatMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
//! a.invert(&mut pool).unwrap();
//! assert!((a.get(1, 0).unwrap() - 1.5).abs() < 1e-12);
//! ```

mod helpers;
mod ops;
mod solve;
mod types;

pub use types::Matrix;

pub use tandem_core::{BufferPool, Decimal, MatrixError, PoolStats, Scalar};

/// Matrix over machine floats
pub type FloatMatrix = Matrix<f64>;

/// Matrix over arbitrary precision decimals
pub type DecimalMatrix = Matrix<Decimal>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_one_engine() {
        let mut float_pool = BufferPool::new();
        let mut decimal_pool = BufferPool::new();

        let mut f = FloatMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 2.0]).unwrap();
        let mut d = DecimalMatrix::from_row_slice(
            2,
            2,
            &[Decimal::from_i64(2), Decimal::ZERO, Decimal::ZERO, Decimal::from_i64(2)],
        )
        .unwrap();

        f.square(&mut float_pool).unwrap();
        d.square(&mut decimal_pool).unwrap();

        assert_eq!(f.to_string(), d.to_string());
        assert_eq!(f.to_string(), " 4.000e+00  0.000e+00 \n 0.000e+00  4.000e+00 \n");
    }

    #[test]
    fn test_aliases_render_ties_alike() {
        let f = FloatMatrix::from_vec(1, 2, vec![1.0625, -0.00012345]).unwrap();
        let d = DecimalMatrix::from_vec(
            1,
            2,
            vec!["1.0625".parse().unwrap(), "-0.00012345".parse().unwrap()],
        )
        .unwrap();

        assert_eq!(f.to_string(), d.to_string());
        assert_eq!(f.to_string(), " 1.063e+00 -1.235e-04 \n");
    }

    #[test]
    fn test_pools_are_independent() {
        let mut first: BufferPool<f64> = BufferPool::new();
        let second: BufferPool<f64> = BufferPool::new();

        let a = FloatMatrix::identity_of(3, 3);
        let mut b = FloatMatrix::zeros(3, 3);
        a.transpose_into(&mut b, &mut first).unwrap();

        assert_eq!(first.retained(9), 1);
        assert_eq!(second.stats(), PoolStats::default());
    }
}
