//! Calculation construction, evaluation and rendering

use std::str::FromStr;

use tally_core::{BigDecimal, Calculation, Operation, TallyError};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[test]
fn test_calculation_operations() {
    let cases = [
        ("10", "5", Operation::Add, "15"),
        ("10", "5", Operation::Subtract, "5"),
        ("10", "5", Operation::Multiply, "50"),
        ("10", "2", Operation::Divide, "5"),
        ("10.5", "0.5", Operation::Add, "11.0"),
        ("10.5", "0.5", Operation::Subtract, "10.0"),
        ("10.5", "2", Operation::Multiply, "21.0"),
        ("10", "0.5", Operation::Divide, "20"),
    ];

    for (a, b, op, expected) in cases {
        let calc = Calculation::new(dec(a), dec(b), op);
        assert_eq!(
            calc.perform().unwrap(),
            dec(expected),
            "Failed {} operation with {} and {}",
            op,
            a,
            b
        );
    }
}

#[test]
fn test_calculation_display() {
    let calc = Calculation::new(dec("10"), dec("5"), Operation::Add);
    assert_eq!(calc.to_string(), "Calculation(10, 5, add)");
}

#[test]
fn test_calculation_display_keeps_decimal_scale() {
    let calc = Calculation::create(dec("2.50"), dec("-1"), Operation::Divide);
    assert_eq!(calc.to_string(), "Calculation(2.50, -1, divide)");
}

#[test]
fn test_divide_by_zero() {
    let calc = Calculation::new(dec("10"), dec("0"), Operation::Divide);
    let err = calc.perform().unwrap_err();

    assert_eq!(err, TallyError::DivisionByZero);
    assert_eq!(err.to_string(), "Cannot divide by zero");
}

#[test]
fn test_negative_zero_divisor_is_still_zero() {
    let calc = Calculation::new(dec("-3.5"), dec("-0.00"), Operation::Divide);
    assert_eq!(calc.perform(), Err(TallyError::DivisionByZero));
}
