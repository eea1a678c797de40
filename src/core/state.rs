//! Engine state and its derived mode.
//!
//! `EngineState` is the only persistent data the calculator has. It is a
//! plain value: transitions consume one state and return the next.

use super::format::{format_number, parse_entry, ERROR_TEXT};
use super::key::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The operand under construction.
///
/// Kept as text rather than a number so that a trailing `.` and leading
/// zero suppression survive until the value is needed.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Entry {
    /// Decimal literal being typed, or a formatted result. Empty means the
    /// right operand has not been started.
    Text(String),

    /// A non-finite result. Sticky until cleared.
    Error,
}

impl Entry {
    /// The `"0"` entry every fresh number starts from.
    pub fn zero() -> Self {
        Self::Text("0".to_string())
    }

    /// Entry holding an empty right operand.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Entry for a computed value; non-finite values become `Error`.
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Self::Text(format_number(value))
        } else {
            Self::Error
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Whether the entry is exactly `"0"`.
    pub fn is_zero_literal(&self) -> bool {
        matches!(self, Self::Text(text) if text == "0")
    }

    pub fn has_dot(&self) -> bool {
        matches!(self, Self::Text(text) if text.contains('.'))
    }

    /// Number of decimal digits typed so far.
    pub fn digit_count(&self) -> usize {
        match self {
            Self::Text(text) => text.chars().filter(char::is_ascii_digit).count(),
            Self::Error => 0,
        }
    }

    /// Numeric value; empty is zero and `Error` is NaN.
    pub fn value(&self) -> f64 {
        match self {
            Self::Text(text) => parse_entry(text),
            Self::Error => f64::NAN,
        }
    }

    /// Text as shown on the display.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete calculator state.
///
/// # Invariants
///
/// - `current` never contains more than one `.`.
/// - `pending` is only `Some` while `previous` is `Some`.
/// - `just_evaluated` is only set by `equals` and cleared by the next
///   digit, dot, operator or percent.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{EngineState, Entry};
///
/// let state = EngineState::new();
/// assert_eq!(state.current, Entry::zero());
/// assert_eq!(state.display_text(), "0");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineState {
    /// Operand being typed or the last result.
    pub current: Entry,
    /// Left operand captured when an operator was chosen.
    pub previous: Option<f64>,
    /// Operator waiting for its right operand.
    pub pending: Option<Operator>,
    /// Set right after `=` until the next input decides what to do with
    /// the result.
    pub just_evaluated: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Initial state. `ClearAll` resets to exactly this value.
    pub fn new() -> Self {
        Self {
            current: Entry::zero(),
            previous: None,
            pending: None,
            just_evaluated: false,
        }
    }

    /// The pending operation with its captured left operand, if any.
    pub fn pending_operation(&self) -> Option<(f64, Operator)> {
        match (self.previous, self.pending) {
            (Some(previous), Some(op)) => Some((previous, op)),
            _ => None,
        }
    }

    /// Compose the text a front end should show.
    ///
    /// With an operator pending this is `<left><op><right>`, where the right
    /// side stays empty until the user types it. Otherwise it is the entry,
    /// with an empty entry shown as `0`.
    pub fn display_text(&self) -> String {
        if let Some((previous, op)) = self.pending_operation() {
            format!("{}{}{}", format_number(previous), op.symbol(), self.current)
        } else if self.current.is_empty() {
            "0".to_string()
        } else {
            self.current.to_string()
        }
    }

    /// Classify the state for logging and front ends.
    pub fn mode(&self) -> Mode {
        if self.current.is_error() {
            Mode::Error
        } else if self.just_evaluated {
            Mode::Evaluated
        } else if self.pending.is_some() && self.current.is_empty() {
            Mode::AwaitingOperand
        } else {
            Mode::Entering
        }
    }
}

/// Coarse view of where the engine is in its input cycle.
///
/// Derived from [`EngineState`] on demand; never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Mode {
    /// Typing an operand.
    Entering,
    /// Operator chosen, right operand not started.
    AwaitingOperand,
    /// Showing the result of `=`.
    Evaluated,
    /// Showing the error sentinel.
    Error,
}

impl Mode {
    pub fn name(&self) -> &str {
        match self {
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::Evaluated => "Evaluated",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
