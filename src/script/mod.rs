//! Textual key scripts.
//!
//! Front ends that receive keys as text (a terminal, a test fixture) turn
//! them into [`KeyEvent`]s here. The engine itself never sees text.
//!
//! Parsing a whole script uses Stillwater's `Validation` so that every bad
//! token is reported at once instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use keycalc::script::parse_script;
//! use stillwater::validation::Validation;
//!
//! match parse_script("2 0 0 + 1 0 %") {
//!     Validation::Success(keys) => assert_eq!(keys.len(), 7),
//!     Validation::Failure(_) => panic!("script should parse"),
//! }
//!
//! assert!(parse_script("1 + banana * ?").is_failure());
//! ```

pub mod error;

pub use error::{ParseKeyError, ScriptError};

use crate::core::{Digit, KeyEvent, Operator};
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

impl FromStr for KeyEvent {
    type Err = ParseKeyError;

    /// Parse one key token.
    ///
    /// Accepts the canonical tokens produced by `Display` plus common
    /// keypad labels (`x` and `×` for multiply, `÷` for divide, `C` for
    /// clear, `⌫` for delete).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let event = match token {
            "" => return Err(ParseKeyError::Empty),
            "00" => KeyEvent::Digit(Digit::DoubleZero),
            "." | "," => KeyEvent::Dot,
            "+" => KeyEvent::Operator(Operator::Add),
            "-" | "−" => KeyEvent::Operator(Operator::Subtract),
            "*" | "x" | "X" | "×" => KeyEvent::Operator(Operator::Multiply),
            "/" | "÷" => KeyEvent::Operator(Operator::Divide),
            "=" => KeyEvent::Equals,
            "%" => KeyEvent::Percent,
            "DEL" | "del" | "<" | "⌫" => KeyEvent::Delete,
            "AC" | "ac" | "C" | "c" => KeyEvent::ClearAll,
            _ => single_digit(token).ok_or_else(|| ParseKeyError::UnknownKey {
                token: token.to_string(),
            })?,
        };
        Ok(event)
    }
}

fn single_digit(token: &str) -> Option<KeyEvent> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c
            .to_digit(10)
            .and_then(|value| Digit::from_value(value as u8))
            .map(KeyEvent::Digit),
        _ => None,
    }
}

/// Parse a whitespace-separated key script.
///
/// Returns all keys on success, or every bad token with its position.
pub fn parse_script(script: &str) -> Validation<Vec<KeyEvent>, NonEmptyVec<ScriptError>> {
    let keys: Vec<Validation<KeyEvent, NonEmptyVec<ScriptError>>> = script
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| match token.parse::<KeyEvent>() {
            Ok(event) => Validation::success(event),
            Err(source) => Validation::fail(ScriptError {
                position: index + 1,
                source,
            }),
        })
        .collect();

    Validation::all_vec(keys)
}

/// Render keys back into a script accepted by [`parse_script`].
pub fn render_script(keys: &[KeyEvent]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
