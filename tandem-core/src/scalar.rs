//! Scalar arithmetic shared by the matrix engine
//!
//! The engine is written once against [`Scalar`] and instantiated for two
//! back-ends: machine `f64` and arbitrary precision [`Decimal`](crate::Decimal).
//! The back-ends differ in rounding and in how a near-zero pivot is detected.

use std::fmt;

use crate::error::ScalarError;
use crate::format;

/// Pivots with `|x|` below this are treated as zero by the `f64` back-end
pub const FLOAT_PIVOT_TOLERANCE: f64 = 1e-6;

/// Arithmetic capability set required by the matrix engine
pub trait Scalar: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Back-end name used in log events
    const NAME: &'static str;

    fn zero() -> Self;

    fn one() -> Self;

    fn add(&self, rhs: &Self) -> Self;

    fn sub(&self, rhs: &Self) -> Self;

    fn mul(&self, rhs: &Self) -> Self;

    /// `1 / self`, rounded the way the back-end rounds divisions
    fn reciprocal(&self) -> Result<Self, ScalarError>;

    fn is_zero(&self) -> bool;

    /// True when the magnitude is too small to serve as an elimination pivot
    fn is_degenerate(&self) -> bool;

    /// Nearest `f64` (lossy for decimals)
    fn to_f64(&self) -> f64;

    /// Fixed-width scientific rendering, e.g. `" 1.000e+00"`
    fn to_scientific(&self) -> String;
}

impl Scalar for f64 {
    const NAME: &'static str = "f64";

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn reciprocal(&self) -> Result<Self, ScalarError> {
        if *self == 0.0 {
            Err(ScalarError::DivisionByZero)
        } else {
            Ok(1.0 / self)
        }
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_degenerate(&self) -> bool {
        self.abs() < FLOAT_PIVOT_TOLERANCE
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn to_scientific(&self) -> String {
        format::scientific(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_constants() {
        assert_eq!(<f64 as Scalar>::zero(), 0.0);
        assert_eq!(<f64 as Scalar>::one(), 1.0);
    }

    #[test]
    fn test_float_arithmetic() {
        let a = 1.5_f64;
        let b = 0.25_f64;
        assert_eq!(Scalar::add(&a, &b), 1.75);
        assert_eq!(Scalar::sub(&a, &b), 1.25);
        assert_eq!(Scalar::mul(&a, &b), 0.375);
    }

    #[test]
    fn test_float_reciprocal() {
        assert_eq!(Scalar::reciprocal(&4.0_f64), Ok(0.25));
        assert_eq!(Scalar::reciprocal(&0.0_f64), Err(ScalarError::DivisionByZero));
    }

    fn widen<S: Scalar>(values: &[S]) -> Vec<f64> {
        values.iter().map(Scalar::to_f64).collect()
    }

    #[test]
    fn test_to_f64_generic() {
        assert_eq!(widen(&[1.5_f64, -2.0]), vec![1.5, -2.0]);
        let decimals = [crate::Decimal::from_i64(3), "-0.25".parse().unwrap()];
        assert_eq!(widen(&decimals), vec![3.0, -0.25]);
    }

    #[test]
    fn test_float_degenerate() {
        assert!(0.0_f64.is_degenerate());
        assert!(9e-7_f64.is_degenerate());
        assert!((-9e-7_f64).is_degenerate());
        assert!(!1e-6_f64.is_degenerate());
        assert!(!(-2.0_f64).is_degenerate());
    }
}
