//! Key events delivered to the engine.
//!
//! A `KeyEvent` is one discrete user action. The set is closed: every
//! transition in the engine is total over these variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A digit key. `DoubleZero` is the `00` key found on many keypads.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    DoubleZero,
}

impl Digit {
    /// Text appended to the entry when this key is pressed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::DoubleZero => "00",
        }
    }

    /// Single digit key for `0..=9`.
    ///
    /// ```rust
    /// use keycalc::core::Digit;
    ///
    /// assert_eq!(Digit::from_value(7), Some(Digit::Seven));
    /// assert_eq!(Digit::from_value(10), None);
    /// ```
    pub fn from_value(value: u8) -> Option<Self> {
        let digit = match value {
            0 => Self::Zero,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            _ => return None,
        };
        Some(digit)
    }
}

/// Binary operator, applied strictly left to right.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown between the operands on the display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Whether `%` takes a share of the left operand for this operator.
    pub fn is_additive(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    /// Apply the operator with IEEE double semantics.
    ///
    /// Division by zero yields positive infinity regardless of the sign of
    /// either operand, which the formatter turns into the error sentinel.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::INFINITY
                } else {
                    a / b
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One user action on the keypad.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum KeyEvent {
    Digit(Digit),
    Dot,
    Operator(Operator),
    Equals,
    Percent,
    Delete,
    ClearAll,
}

impl KeyEvent {
    /// Short name for logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Dot => "Dot",
            Self::Operator(_) => "Operator",
            Self::Equals => "Equals",
            Self::Percent => "Percent",
            Self::Delete => "Delete",
            Self::ClearAll => "ClearAll",
        }
    }
}

impl From<Digit> for KeyEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for KeyEvent {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// Canonical token, accepted back by `KeyEvent::from_str`.
impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => f.write_str(d.as_str()),
            Self::Dot => f.write_str("."),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Equals => f.write_str("="),
            Self::Percent => f.write_str("%"),
            Self::Delete => f.write_str("DEL"),
            Self::ClearAll => f.write_str("AC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_text_matches_key_label() {
        assert_eq!(Digit::Zero.as_str(), "0");
        assert_eq!(Digit::Nine.as_str(), "9");
        assert_eq!(Digit::DoubleZero.as_str(), "00");
    }

    #[test]
    fn from_value_covers_all_single_digits() {
        for value in 0..10u8 {
            let digit = Digit::from_value(value).unwrap();
            assert_eq!(digit.as_str(), value.to_string());
        }
        assert!(Digit::from_value(42).is_none());
    }

    #[test]
    fn operator_apply_uses_ieee_arithmetic() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), -1.0);
        assert_eq!(Operator::Multiply.apply(0.5, 4.0), 2.0);
        assert_eq!(Operator::Divide.apply(1.0, 4.0), 0.25);
    }

    #[test]
    fn divide_by_zero_is_positive_infinity() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-5.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(5.0, -0.0), f64::INFINITY);
    }

    #[test]
    fn additive_operators() {
        assert!(Operator::Add.is_additive());
        assert!(Operator::Subtract.is_additive());
        assert!(!Operator::Multiply.is_additive());
        assert!(!Operator::Divide.is_additive());
    }

    #[test]
    fn display_renders_canonical_tokens() {
        assert_eq!(KeyEvent::Digit(Digit::DoubleZero).to_string(), "00");
        assert_eq!(KeyEvent::Operator(Operator::Multiply).to_string(), "*");
        assert_eq!(KeyEvent::Delete.to_string(), "DEL");
        assert_eq!(KeyEvent::ClearAll.to_string(), "AC");
    }

    #[test]
    fn key_event_serializes_correctly() {
        let event = KeyEvent::Operator(Operator::Divide);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: KeyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
