//! Property tests for input parsing and whole sessions.

use std::io::Cursor;

use proptest::prelude::*;

use calc_console::ui::{format_value, Console, UiContext};
use calc_console::{evaluate, parse_integer, Operator, Session, SessionOptions};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_integer` never panics on arbitrary input.
    #[test]
    fn property_parse_integer_never_panics(text in "(?s).{0,64}") {
        let _ = parse_integer(&text);
    }

    /// PROPERTY: every i32 round-trips through its decimal text, padded or not.
    #[test]
    fn property_parse_integer_accepts_decimal_text(n in any::<i32>(), pad in 0usize..3) {
        let padded = format!("{}{}{}", " ".repeat(pad), n, " ".repeat(pad));
        prop_assert_eq!(parse_integer(&padded).unwrap(), n);
    }

    /// PROPERTY: a scripted session prints the engine's result for any operands.
    #[test]
    fn property_session_prints_engine_result(
        a in -10_000i32..10_000,
        b in -10_000i32..10_000,
        op in prop::sample::select(Operator::CHECK_ORDER.to_vec()),
    ) {
        prop_assume!(!(op == Operator::Divide && b == 0));

        let script = format!("{a}\n{}\n{b}\nno\n", op.symbol());
        let mut session = Session::new(
            Cursor::new(script.into_bytes()),
            Console::new(Vec::new(), UiContext::plain()),
            SessionOptions::default(),
        );
        let summary = session.run().unwrap();
        let out = String::from_utf8(session.into_console().into_inner()).unwrap();

        let expected = format!(
            "The result of {a} {} {b} is: {}",
            op.symbol(),
            format_value(evaluate(a, op, b).unwrap())
        );
        prop_assert!(out.contains(&expected), "missing '{}' in:\n{}", expected, out);
        prop_assert_eq!(summary.calculations, 1);
    }

    /// PROPERTY: sessions on arbitrary bytes, valid UTF-8 or not, always
    /// terminate with the farewell.
    #[test]
    fn property_session_always_terminates(script in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut session = Session::new(
            Cursor::new(script),
            Console::new(Vec::new(), UiContext::plain()),
            SessionOptions::default(),
        );
        session.run().unwrap();
        let out = String::from_utf8(session.into_console().into_inner()).unwrap();
        prop_assert!(out.ends_with("Thank you for using this calculator.\n"));
    }
}
