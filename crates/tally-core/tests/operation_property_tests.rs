//! Property tests for the arithmetic laws over exact decimals

use std::str::FromStr;

use proptest::prelude::*;
use tally_core::ops::arithmetic::{add, divide, multiply, subtract};
use tally_core::{BigDecimal, TallyError};

fn decimal_strategy() -> impl Strategy<Value = BigDecimal> {
    (any::<i32>(), 0u32..6).prop_map(|(digits, scale)| {
        BigDecimal::from_str(&format!("{}e-{}", digits, scale)).unwrap()
    })
}

proptest! {
    #[test]
    fn add_matches_integer_sum(a in any::<i32>(), b in any::<i32>()) {
        let expected = BigDecimal::from(a as i64 + b as i64);
        prop_assert_eq!(add(&BigDecimal::from(a), &BigDecimal::from(b)), expected);
    }

    #[test]
    fn subtract_is_inverse_of_add(a in decimal_strategy(), b in decimal_strategy()) {
        prop_assert_eq!(subtract(&add(&a, &b), &b), a);
    }

    #[test]
    fn multiply_matches_integer_product(a in any::<i32>(), b in any::<i32>()) {
        let expected = BigDecimal::from(a as i64 * b as i64);
        prop_assert_eq!(multiply(&BigDecimal::from(a), &BigDecimal::from(b)), expected);
    }

    #[test]
    fn divide_undoes_multiply(a in decimal_strategy(), b in decimal_strategy()) {
        prop_assume!(b != BigDecimal::from(0));
        let product = multiply(&a, &b);
        prop_assert_eq!(divide(&product, &b).unwrap(), a);
    }

    #[test]
    fn divide_by_zero_always_fails(a in decimal_strategy(), scale in 0i64..6) {
        let zero = BigDecimal::from(0).with_scale(scale);
        prop_assert_eq!(divide(&a, &zero), Err(TallyError::DivisionByZero));
    }
}
