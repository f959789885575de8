//! Property tests for the calculation engine.

use proptest::prelude::*;

use calc_console::{evaluate, CalcError, Operator};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: add, subtract and multiply agree with exact integer math.
    #[test]
    fn property_integer_operations_are_exact(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (i64::from(a), i64::from(b));
        prop_assert_eq!(evaluate(a, Operator::Add, b).unwrap(), (x + y) as f64);
        prop_assert_eq!(evaluate(a, Operator::Subtract, b).unwrap(), (x - y) as f64);
        prop_assert_eq!(evaluate(a, Operator::Multiply, b).unwrap(), (x * y) as f64);
    }

    /// PROPERTY: division by a non-zero divisor is floating-point division.
    #[test]
    fn property_division_is_floating_point(
        a in any::<i32>(),
        b in any::<i32>().prop_filter("non-zero divisor", |b| *b != 0),
    ) {
        let value = evaluate(a, Operator::Divide, b).unwrap();
        prop_assert_eq!(value, f64::from(a) / f64::from(b));
    }

    /// PROPERTY: dividing by zero always fails and never yields a number.
    #[test]
    fn property_divide_by_zero_always_fails(a in any::<i32>()) {
        prop_assert!(matches!(
            evaluate(a, Operator::Divide, 0),
            Err(CalcError::DivisionByZero)
        ));
    }

    /// PROPERTY: addition and multiplication commute.
    #[test]
    fn property_add_and_multiply_commute(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(
            evaluate(a, Operator::Add, b).unwrap(),
            evaluate(b, Operator::Add, a).unwrap()
        );
        prop_assert_eq!(
            evaluate(a, Operator::Multiply, b).unwrap(),
            evaluate(b, Operator::Multiply, a).unwrap()
        );
    }
}
