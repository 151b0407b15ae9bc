//! Arbitrary precision fixed-scale decimals using dashu
//!
//! A `Decimal` is an unscaled `IBig` and a non-negative scale, so the value
//! is `unscaled × 10^-scale`. Addition, subtraction and multiplication are
//! exact. Division is the only rounding operation: the quotient is rounded
//! to a caller-chosen number of fractional digits with round-half-even.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScalarError;
use crate::format;
use crate::scalar::Scalar;

/// Fractional digits kept by `reciprocal` (and therefore by every pivot division)
pub const DECIMAL_SCALE: u32 = 100;

/// Pivots with `|x| < 10^-DECIMAL_PIVOT_EXPONENT` are treated as zero
pub const DECIMAL_PIVOT_EXPONENT: u32 = 6;

/// Largest scale (or power-of-ten shift) accepted when parsing text
///
/// Exponent forms are compact: `"1e50000000"` is eleven bytes but a
/// fifty-million-digit integer. Inputs past this bound fail with
/// `ScalarError::Parse`.
pub const DECIMAL_MAX_PARSE_SCALE: u32 = 10 * DECIMAL_SCALE;

fn pow10(exp: u32) -> IBig {
    IBig::from(10u8).pow(exp as usize)
}

fn magnitude(value: &IBig) -> IBig {
    if *value < IBig::ZERO {
        -value.clone()
    } else {
        value.clone()
    }
}

/// Arbitrary precision decimal number
#[derive(Debug, Clone)]
pub struct Decimal {
    unscaled: IBig,
    scale: u32,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal { unscaled: IBig::ZERO, scale: 0 };
    pub const ONE: Decimal = Decimal { unscaled: IBig::ONE, scale: 0 };

    // ========== Construction ==========

    /// `unscaled × 10^-scale`
    pub fn new(unscaled: IBig, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    pub fn from_i64(n: i64) -> Self {
        Self { unscaled: IBig::from(n), scale: 0 }
    }

    pub fn unscaled(&self) -> &IBig {
        &self.unscaled
    }

    /// Number of fractional digits carried
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Unscaled value expressed at a larger scale
    fn unscaled_at(&self, scale: u32) -> IBig {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            self.unscaled.clone()
        } else {
            &self.unscaled * pow10(scale - self.scale)
        }
    }

    /// Exact conversion from dashu's `significand × 10^exponent` form
    ///
    /// `None` when the scale or shift would pass `DECIMAL_MAX_PARSE_SCALE`.
    fn from_dbig(value: DBig) -> Option<Self> {
        let (significand, exponent) = value.into_repr().into_parts();
        let shift = u32::try_from(exponent.unsigned_abs())
            .ok()
            .filter(|shift| *shift <= DECIMAL_MAX_PARSE_SCALE)?;
        if exponent >= 0 {
            Some(Self { unscaled: significand * pow10(shift), scale: 0 })
        } else {
            Some(Self { unscaled: significand, scale: shift })
        }
    }

    fn to_dbig(&self) -> DBig {
        DBig::from_parts(self.unscaled.clone(), -(self.scale as isize))
    }

    /// Same value with trailing fractional zeros removed
    pub fn normalized(&self) -> Self {
        let ten = IBig::from(10u8);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > 0 && &unscaled % &ten == IBig::ZERO {
            unscaled = unscaled / &ten;
            scale -= 1;
        }
        Self { unscaled, scale }
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.unscaled == IBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled < IBig::ZERO
    }

    /// `|self| < 10^-exponent`, evaluated exactly
    pub fn is_below(&self, exponent: u32) -> bool {
        magnitude(&self.unscaled) * pow10(exponent) < pow10(self.scale)
    }

    // ========== Basic Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        let scale = self.scale.max(other.scale);
        Self { unscaled: self.unscaled_at(scale) + other.unscaled_at(scale), scale }
    }

    pub fn sub(&self, other: &Self) -> Self {
        let scale = self.scale.max(other.scale);
        Self { unscaled: self.unscaled_at(scale) - other.unscaled_at(scale), scale }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { unscaled: &self.unscaled * &other.unscaled, scale: self.scale + other.scale }
    }

    pub fn neg(&self) -> Self {
        Self { unscaled: -self.unscaled.clone(), scale: self.scale }
    }

    pub fn abs(&self) -> Self {
        Self { unscaled: magnitude(&self.unscaled), scale: self.scale }
    }

    /// Quotient rounded to `scale` fractional digits, ties to even
    pub fn div_scaled(&self, divisor: &Self, scale: u32) -> Result<Self, ScalarError> {
        if divisor.is_zero() {
            return Err(ScalarError::DivisionByZero);
        }

        // (a·10^-sa) / (b·10^-sb) = q·10^-scale  =>  q = a·10^(scale+sb) / (b·10^sa)
        let numerator = &self.unscaled * pow10(scale + divisor.scale);
        let denominator = &divisor.unscaled * pow10(self.scale);
        let negative = (numerator < IBig::ZERO) != (denominator < IBig::ZERO);

        let num = magnitude(&numerator);
        let den = magnitude(&denominator);
        let mut quotient = &num / &den;
        let remainder = &num - &quotient * &den;

        let round_up = match (remainder * IBig::from(2u8)).cmp(&den) {
            Ordering::Greater => true,
            Ordering::Equal => &quotient % IBig::from(2u8) != IBig::ZERO,
            Ordering::Less => false,
        };
        if round_up {
            quotient = quotient + IBig::ONE;
        }

        let unscaled = if negative { -quotient } else { quotient };
        Ok(Self { unscaled, scale })
    }

    // ========== Conversion ==========

    /// Nearest f64 (may lose precision, NaN if out of range)
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    /// Fixed-width scientific rendering, rounded half-up at four significant digits
    pub fn to_scientific(&self) -> String {
        if self.is_zero() {
            return format::compose(false, "0", 0);
        }

        let digits = magnitude(&self.unscaled).to_string();
        let exponent = digits.len() as i64 - 1 - self.scale as i64;
        format::compose(self.is_negative(), &digits, exponent)
    }
}

// ========== Scalar Back-end ==========

impl Scalar for Decimal {
    const NAME: &'static str = "decimal";

    fn zero() -> Self {
        Decimal::ZERO
    }

    fn one() -> Self {
        Decimal::ONE
    }

    fn add(&self, rhs: &Self) -> Self {
        Decimal::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Decimal::sub(self, rhs)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Decimal::mul(self, rhs)
    }

    fn reciprocal(&self) -> Result<Self, ScalarError> {
        Decimal::ONE.div_scaled(self, DECIMAL_SCALE)
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }

    fn is_degenerate(&self) -> bool {
        self.is_below(DECIMAL_PIVOT_EXPONENT)
    }

    fn to_f64(&self) -> f64 {
        Decimal::to_f64(self)
    }

    fn to_scientific(&self) -> String {
        Decimal::to_scientific(self)
    }
}

// ========== Trait Implementations ==========

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl FromStr for Decimal {
    type Err = ScalarError;

    /// Supports: "123", "-3.14", "1.5e10", "602214076e-5"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ScalarError::Parse(s.to_string());

        // Integer mantissa with exponent: build significand and exponent directly
        let parsed: DBig = match s.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exp)) if !mantissa.contains('.') => {
                let mantissa: IBig = mantissa.parse().map_err(|_| invalid())?;
                let exp: isize = exp.parse().map_err(|_| invalid())?;
                DBig::from_parts(mantissa, exp)
            }
            _ => s.parse().map_err(|_| invalid())?,
        };

        Self::from_dbig(parsed).ok_or_else(invalid)
    }
}

impl fmt::Display for Decimal {
    /// Plain notation, all carried fractional digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.to_dbig();
        if self.scale == 0 {
            write!(f, "{}", value)
        } else {
            write!(f, "{:.*}", self.scale as usize, value)
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    /// Compares values, not representations: `1.50 == 1.5`
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.unscaled_at(scale).cmp(&other.unscaled_at(scale))
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
