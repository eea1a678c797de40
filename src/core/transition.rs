//! Pure state transitions, one per key.
//!
//! Each function consumes a state and returns the next one. None of them
//! fail: every key is meaningful in every state, even if only as a no-op.

use super::config::EngineConfig;
use super::key::{Digit, KeyEvent, Operator};
use super::state::{EngineState, Entry};
use log::{debug, trace, warn};

/// Dispatch a key event to its transition.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{apply, Digit, EngineConfig, EngineState, KeyEvent, Operator};
///
/// let config = EngineConfig::default();
/// let keys = [
///     KeyEvent::Digit(Digit::Three),
///     KeyEvent::Operator(Operator::Add),
///     KeyEvent::Digit(Digit::Four),
/// ];
///
/// let state = keys
///     .into_iter()
///     .fold(EngineState::new(), |state, key| apply(state, key, &config));
/// assert_eq!(state.display_text(), "3+4");
/// ```
pub fn apply(state: EngineState, event: KeyEvent, config: &EngineConfig) -> EngineState {
    match event {
        KeyEvent::Digit(d) => digit(state, d, config),
        KeyEvent::Dot => dot(state),
        KeyEvent::Operator(op) => operator(state, op),
        KeyEvent::Equals => equals(state),
        KeyEvent::Percent => percent(state),
        KeyEvent::Delete => delete(state),
        KeyEvent::ClearAll => clear_all(),
    }
}

/// After `=`, typing starts a new number instead of editing the result.
fn start_fresh_if_evaluated(mut state: EngineState) -> EngineState {
    if state.just_evaluated && state.pending.is_none() {
        state.current = Entry::zero();
        state.just_evaluated = false;
    }
    state
}

/// Append a digit to the entry.
///
/// A lone `"0"` is replaced rather than extended, and `00` on a lone
/// `"0"` does nothing.
pub fn digit(state: EngineState, d: Digit, config: &EngineConfig) -> EngineState {
    let mut state = start_fresh_if_evaluated(state);

    let next = match &state.current {
        Entry::Error => {
            debug!("ignoring digit {} while in error", d.as_str());
            return state;
        }
        _ if state.current.is_zero_literal() => {
            if d == Digit::DoubleZero {
                return state;
            }
            d.as_str().to_string()
        }
        Entry::Text(text) => format!("{text}{}", d.as_str()),
    };

    let next = Entry::Text(next);
    if !config.allows_digits(next.digit_count()) {
        debug!(
            "ignoring digit {}: entry limit of {:?} digits reached",
            d.as_str(),
            config.max_entry_digits
        );
        return state;
    }

    state.current = next;
    state
}

/// Add a decimal point unless the entry already has one.
pub fn dot(state: EngineState) -> EngineState {
    let mut state = start_fresh_if_evaluated(state);
    if state.current.has_dot() {
        return state;
    }

    match &mut state.current {
        Entry::Error => debug!("ignoring dot while in error"),
        Entry::Text(text) if text.is_empty() => text.push_str("0."),
        Entry::Text(text) => text.push('.'),
    }
    state
}

/// Choose the next operator, evaluating any complete pending operation
/// first so that operations chain left to right.
pub fn operator(state: EngineState, next: Operator) -> EngineState {
    let chain = state.pending_operation().is_some()
        && !state.current.is_empty()
        && !state.just_evaluated;

    let mut state = if chain {
        trace!("chaining pending operation before {}", next);
        equals(state)
    } else {
        state
    };

    state.previous = Some(state.current.value());
    state.pending = Some(next);
    state.current = Entry::empty();
    state.just_evaluated = false;
    state
}

/// Evaluate the pending operation. Without one this does nothing.
pub fn equals(state: EngineState) -> EngineState {
    let Some((left, op)) = state.pending_operation() else {
        return state;
    };

    let right = state.current.value();
    let current = Entry::from_value(op.apply(left, right));
    if current.is_error() {
        warn!("{left} {op} {right} has no finite result, showing error");
    }

    EngineState {
        current,
        previous: None,
        pending: None,
        just_evaluated: true,
    }
}

/// Turn the entry into a percentage.
///
/// With `+` or `-` pending the result is that share of the left operand,
/// so `200 + 10 %` becomes `200 + 20`. Otherwise the entry is divided by
/// 100. The pending operation is kept.
pub fn percent(mut state: EngineState) -> EngineState {
    if state.current.is_empty() {
        return state;
    }
    if state.current.is_error() {
        debug!("ignoring percent while in error");
        return state;
    }

    let entry = state.current.value();
    let value = match state.pending_operation() {
        Some((left, op)) if op.is_additive() => left * (entry / 100.0),
        _ => entry / 100.0,
    };

    state.current = Entry::from_value(value);
    state.just_evaluated = false;
    state
}

/// Remove the last character of the entry.
///
/// Right after `=` this clears everything instead of editing the result.
pub fn delete(mut state: EngineState) -> EngineState {
    if state.just_evaluated {
        return clear_all();
    }

    match &mut state.current {
        Entry::Error => debug!("ignoring delete while in error"),
        Entry::Text(text) if text.len() <= 1 => *text = "0".to_string(),
        Entry::Text(text) => {
            text.pop();
        }
    }
    state
}

/// Reset to the initial state.
pub fn clear_all() -> EngineState {
    EngineState::new()
}
