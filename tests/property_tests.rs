//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences.

use keycalc::core::{apply, format_number, Digit, EngineConfig, EngineState, Entry, KeyEvent, Operator};
use keycalc::Engine;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(value in 0..11u8) -> Digit {
        Digit::from_value(value).unwrap_or(Digit::DoubleZero)
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

fn arbitrary_key() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(KeyEvent::Digit),
        1 => Just(KeyEvent::Dot),
        2 => arbitrary_operator().prop_map(KeyEvent::Operator),
        1 => Just(KeyEvent::Equals),
        1 => Just(KeyEvent::Percent),
        1 => Just(KeyEvent::Delete),
        1 => Just(KeyEvent::ClearAll),
    ]
}

fn run(keys: &[KeyEvent]) -> Engine {
    let mut engine = Engine::new();
    engine.handle_all(keys.iter().copied());
    engine
}

proptest! {
    #[test]
    fn typed_digits_echo_with_leading_zeros_collapsed(
        digits in prop::collection::vec(0..10u8, 1..15)
    ) {
        let keys: Vec<KeyEvent> = digits
            .iter()
            .map(|d| KeyEvent::Digit(Digit::from_value(*d).unwrap()))
            .collect();
        let typed: String = digits.iter().map(|d| d.to_string()).collect();
        let collapsed = typed.trim_start_matches('0');
        let expected = if collapsed.is_empty() { "0" } else { collapsed };

        prop_assert_eq!(run(&keys).display_text(), expected);
    }

    #[test]
    fn typed_decimal_echoes_literally(
        int in 1..1000u32,
        frac in prop::collection::vec(0..10u8, 0..6)
    ) {
        let literal = format!(
            "{int}.{}",
            frac.iter().map(|d| d.to_string()).collect::<String>()
        );
        let keys: Vec<KeyEvent> = literal
            .chars()
            .map(literal_key)
            .collect();

        prop_assert_eq!(run(&keys).display_text(), literal);
    }

    #[test]
    fn clear_all_is_idempotent(keys in prop::collection::vec(arbitrary_key(), 0..30)) {
        let mut once = run(&keys);
        once.handle(KeyEvent::ClearAll);
        let mut twice = once.clone();
        twice.handle(KeyEvent::ClearAll);

        prop_assert_eq!(once.state(), &EngineState::new());
        prop_assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn entry_never_has_two_dots(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let mut engine = Engine::new();
        for key in keys {
            engine.handle(key);
            if let Entry::Text(text) = &engine.state().current {
                prop_assert!(text.matches('.').count() <= 1, "entry {:?}", text);
            }
        }
    }

    #[test]
    fn pending_operator_always_has_left_operand(
        keys in prop::collection::vec(arbitrary_key(), 0..40)
    ) {
        let mut engine = Engine::new();
        for key in keys {
            engine.handle(key);
            let state = engine.state();
            prop_assert!(state.pending.is_none() || state.previous.is_some());
        }
    }

    #[test]
    fn display_is_never_empty(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let mut engine = Engine::new();
        for key in keys {
            engine.handle(key);
            prop_assert!(!engine.display_text().is_empty());
        }
    }

    #[test]
    fn delete_after_equals_resets(keys in prop::collection::vec(arbitrary_key(), 0..30)) {
        let mut engine = run(&keys);
        engine.handle(KeyEvent::Equals);
        if engine.state().just_evaluated {
            engine.handle(KeyEvent::Delete);
            prop_assert_eq!(engine.state(), &EngineState::new());
        }
    }

    #[test]
    fn transitions_are_deterministic(keys in prop::collection::vec(arbitrary_key(), 0..30)) {
        let config = EngineConfig::default();
        let a = keys.iter().fold(EngineState::new(), |s, k| apply(s, *k, &config));
        let b = keys.iter().fold(EngineState::new(), |s, k| apply(s, *k, &config));
        prop_assert_eq!(a.display_text(), b.display_text());
    }

    #[test]
    fn integer_values_format_without_fraction(n in -1_000_000_000i64..1_000_000_000i64) {
        prop_assert_eq!(format_number(n as f64), n.to_string());
    }

    #[test]
    fn formatted_values_round_trip(n in -1e15f64..1e15f64) {
        let text = format_number(n);
        prop_assert_eq!(text.parse::<f64>().unwrap(), n);
    }

    #[test]
    fn digit_limit_is_respected(
        limit in 1..10usize,
        digits in prop::collection::vec(arbitrary_digit(), 0..30)
    ) {
        let config = EngineConfig { max_entry_digits: Some(limit) };
        let state = digits
            .into_iter()
            .fold(EngineState::new(), |s, d| apply(s, KeyEvent::Digit(d), &config));
        prop_assert!(state.current.digit_count() <= limit);
    }
}

fn literal_key(c: char) -> KeyEvent {
    match c {
        '.' => KeyEvent::Dot,
        _ => KeyEvent::Digit(Digit::from_value(c.to_digit(10).unwrap() as u8).unwrap()),
    }
}
