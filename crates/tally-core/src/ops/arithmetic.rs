//! Operation Set: the four binary decimal functions
//!
//! All functions are pure and borrow their operands. Only `divide` can fail.

use bigdecimal::{num_bigint::BigInt, BigDecimal, Zero};

use crate::errors::{Result, TallyError};

/// Returns `a + b`
pub fn add(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    a + b
}

/// Returns `a - b`
pub fn subtract(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    a - b
}

/// Returns `a * b`
pub fn multiply(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    a * b
}

/// Returns `a / b`
///
/// A quotient with a finite decimal expansion is exact at any length.
/// Otherwise it is rounded to bigdecimal's default working precision.
/// The quotient is trimmed of trailing zeros, but never below the ideal
/// scale `scale(a) - scale(b)` and never to a negative scale, so `6 / 3`
/// yields `2` and `1.50 / 0.5` yields `3.0`.
///
/// # Errors
///
/// Returns `DivisionByZero` when `b` is exactly zero, whatever its scale or sign.
pub fn divide(a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
    if b.is_zero() {
        return Err(TallyError::DivisionByZero);
    }

    let ideal_scale = (scale_of(a) - scale_of(b)).max(0);
    let quotient = exact_quotient(a, b).unwrap_or_else(|| a / b).normalized();

    if scale_of(&quotient) < ideal_scale {
        Ok(quotient.with_scale(ideal_scale))
    } else {
        Ok(quotient)
    }
}

/// `a / b` when it terminates, `None` when it repeats
///
/// `b` must be non-zero. With `b = m * 2^i * 5^j` and `m` coprime to 10, the
/// quotient terminates iff `m` divides the digits of `a`, and then
/// `a * 10^max(i, j) / b` is an integer.
fn exact_quotient(a: &BigDecimal, b: &BigDecimal) -> Option<BigDecimal> {
    let (numerator, numerator_scale) = a.as_bigint_and_exponent();
    let (denominator, denominator_scale) = b.as_bigint_and_exponent();

    let shift = factor_count(&denominator, 2).max(factor_count(&denominator, 5));
    let widened = numerator * BigInt::from(10).pow(shift);
    if !(&widened % &denominator).is_zero() {
        return None;
    }

    Some(BigDecimal::new(
        widened / denominator,
        numerator_scale - denominator_scale + i64::from(shift),
    ))
}

/// How many times `prime` divides the non-zero `value`
fn factor_count(value: &BigInt, prime: u32) -> u32 {
    let prime = BigInt::from(prime);
    let mut rest = value.clone();
    let mut count = 0;
    while (&rest % &prime).is_zero() {
        rest /= &prime;
        count += 1;
    }
    count
}

fn scale_of(value: &BigDecimal) -> i64 {
    value.as_bigint_and_exponent().1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_add_keeps_operand_scale() {
        assert_eq!(add(&dec("10.5"), &dec("0.5")).to_string(), "11.0");
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(&dec("10"), &dec("5")), dec("5"));
    }

    #[test]
    fn test_multiply_keeps_operand_scale() {
        assert_eq!(multiply(&dec("10.5"), &dec("2")).to_string(), "21.0");
    }

    #[test]
    fn test_divide_exact_integer_quotient() {
        assert_eq!(divide(&dec("6"), &dec("3")).unwrap().to_string(), "2");
        assert_eq!(divide(&dec("20"), &dec("4")).unwrap().to_string(), "5");
    }

    #[test]
    fn test_divide_respects_ideal_scale() {
        assert_eq!(divide(&dec("1.50"), &dec("0.5")).unwrap().to_string(), "3.0");
        assert_eq!(divide(&dec("10"), &dec("0.5")).unwrap().to_string(), "20");
        assert_eq!(divide(&dec("1"), &dec("4")).unwrap().to_string(), "0.25");
    }

    #[test]
    fn test_divide_by_zero_any_form() {
        for zero in ["0", "0.0", "-0", "0.000"] {
            assert_eq!(
                divide(&dec("7"), &dec(zero)),
                Err(TallyError::DivisionByZero),
                "zero form {zero}"
            );
        }
    }

    #[test]
    fn test_divide_long_terminating_quotient_is_exact() {
        let zeros = "0".repeat(150);
        let quotient = divide(&dec(&format!("1{zeros}1")), &dec("2")).unwrap();

        assert_eq!(quotient, dec(&format!("5{zeros}.5")));
        assert_eq!(quotient.to_string(), format!("5{zeros}.5"));
    }

    #[test]
    fn test_divide_long_divisor() {
        let divisor = format!("1{}", "0".repeat(120));
        let quotient = divide(&dec("3"), &dec(&divisor)).unwrap();
        assert_eq!(quotient * dec(&divisor), dec("3"));
    }

    #[test]
    fn test_divide_repeating_quotient_is_rounded() {
        let third = divide(&dec("1"), &dec("3")).unwrap();
        assert!(third.to_string().starts_with("0.3333333333"));
        assert_ne!(&third * dec("3"), dec("1"));
    }

    #[test]
    fn test_divide_negative_operands() {
        assert_eq!(divide(&dec("-7.5"), &dec("2.5")).unwrap().to_string(), "-3");
        assert_eq!(divide(&dec("1"), &dec("-8")).unwrap().to_string(), "-0.125");
    }

    #[test]
    fn test_no_binary_rounding() {
        assert_eq!(add(&dec("0.1"), &dec("0.2")), dec("0.3"));
    }
}
