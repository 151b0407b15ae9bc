//! Fixed-width scientific rendering shared by both back-ends
//!
//! Output follows the `% 6.3e` convention: a leading space for non-negative
//! values, four significant digits and an exponent of at least two digits,
//! e.g. `" 1.000e+00"` and `"-5.000e-01"`. Both back-ends round the dropped
//! digits half-up, so equal values render identically.

/// Significant digits printed by [`scientific`] and `Decimal::to_scientific`
pub const SCIENTIFIC_DIGITS: usize = 4;

/// Round a digit string half-up to `SCIENTIFIC_DIGITS` digits
///
/// `exponent` is the decimal exponent of the first digit; a carry out of the
/// leading digit bumps it by one.
fn round_half_up(digits: &str, exponent: i64) -> (String, i64) {
    let digits = digits.as_bytes();
    if digits.len() <= SCIENTIFIC_DIGITS {
        let mut padded: String = digits.iter().map(|&b| b as char).collect();
        padded.extend(std::iter::repeat('0').take(SCIENTIFIC_DIGITS - digits.len()));
        return (padded, exponent);
    }

    let mut head = digits[..SCIENTIFIC_DIGITS].to_vec();
    let mut exponent = exponent;
    if digits[SCIENTIFIC_DIGITS] >= b'5' {
        let mut carry = true;
        for d in head.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 9999.5 rounds to 10000
            head.insert(0, b'1');
            head.truncate(SCIENTIFIC_DIGITS);
            exponent += 1;
        }
    }
    (head.iter().map(|&b| b as char).collect(), exponent)
}

/// Assemble the rendered form from a sign, the significant digits of the
/// magnitude (most significant first) and the exponent of the first digit
pub(crate) fn compose(negative: bool, digits: &str, exponent: i64) -> String {
    let (digits, exponent) = round_half_up(digits, exponent);
    let (lead, rest) = digits.split_at(1);
    format!(
        "{}{}.{}e{}{:02}",
        if negative { '-' } else { ' ' },
        lead,
        rest,
        if exponent < 0 { '-' } else { '+' },
        exponent.unsigned_abs()
    )
}

/// Render an `f64` in fixed-width scientific notation
///
/// Rounding starts from the shortest digits that round-trip the value.
pub fn scientific(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:>10}", value);
    }

    let raw = format!("{:e}", value.abs());
    let (mantissa, exponent) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return raw,
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    compose(value.is_sign_negative(), &digits, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_positive() {
        assert_eq!(scientific(1.0), " 1.000e+00");
        assert_eq!(scientific(12346.0), " 1.235e+04");
    }

    #[test]
    fn test_scientific_negative() {
        assert_eq!(scientific(-0.5), "-5.000e-01");
        assert_eq!(scientific(-2.5e-120), "-2.500e-120");
    }

    #[test]
    fn test_scientific_zero() {
        assert_eq!(scientific(0.0), " 0.000e+00");
    }

    #[test]
    fn test_scientific_ties_round_up() {
        assert_eq!(scientific(1.0625), " 1.063e+00");
        assert_eq!(scientific(-1.0625), "-1.063e+00");
        assert_eq!(scientific(12345.0), " 1.235e+04");
        assert_eq!(scientific(0.00012345), " 1.235e-04");
    }

    #[test]
    fn test_scientific_carry_into_exponent() {
        assert_eq!(scientific(9.9995), " 1.000e+01");
        assert_eq!(scientific(99995.0), " 1.000e+05");
    }

    #[test]
    fn test_scientific_non_finite() {
        assert_eq!(scientific(f64::NAN).trim(), "NaN");
        assert_eq!(scientific(f64::INFINITY).trim(), "inf");
    }

    #[test]
    fn test_compose_pads_short_digits() {
        assert_eq!(compose(false, "5", -1), " 5.000e-01");
        assert_eq!(compose(true, "12", 3), "-1.200e+03");
    }
}
