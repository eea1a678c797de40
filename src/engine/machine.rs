//! Engine that owns the calculator state and applies key events.

use crate::core::{transition, EngineConfig, EngineState, Entry, KeyEvent, Mode};
use crate::engine::error::BuildError;
use log::debug;

/// Calculator engine.
///
/// Owns exactly one [`EngineState`]. Events must be delivered one at a
/// time; each is fully applied before `handle` returns.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Digit, KeyEvent, Operator};
/// use keycalc::engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.handle(KeyEvent::Digit(Digit::Three));
/// engine.handle(KeyEvent::Operator(Operator::Add));
/// engine.handle(KeyEvent::Digit(Digit::Four));
/// assert_eq!(engine.display_text(), "3+4");
///
/// engine.handle(KeyEvent::Equals);
/// assert_eq!(engine.display_text(), "7");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Engine {
    state: EngineState,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine in the initial state with no digit limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state.
    ///
    /// Returns an error if the state breaks an engine invariant or the
    /// configuration is invalid.
    pub fn from_state(state: EngineState, config: EngineConfig) -> Result<Self, BuildError> {
        config.validate()?;
        validate_state(&state)?;
        Ok(Self { state, config })
    }

    /// Apply one key event.
    pub fn handle(&mut self, event: KeyEvent) {
        let before = self.state.mode();
        let state = std::mem::take(&mut self.state);
        self.state = transition::apply(state, event, &self.config);
        debug!(
            "{} '{}': {} -> {} [{}]",
            event.name(),
            event,
            before,
            self.state.mode(),
            self.state.display_text()
        );
    }

    /// Apply a sequence of key events in order.
    pub fn handle_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        for event in events {
            self.handle(event);
        }
    }

    /// Text a front end should render.
    pub fn display_text(&self) -> String {
        self.state.display_text()
    }

    /// Current state (pure)
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Give up the engine, keeping its state.
    pub fn into_state(self) -> EngineState {
        self.state
    }

    /// Current mode (pure)
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn validate_state(state: &EngineState) -> Result<(), BuildError> {
    if state.pending.is_some() && state.previous.is_none() {
        return Err(BuildError::OperatorWithoutOperand);
    }
    if let Entry::Text(text) = &state.current {
        if text.matches('.').count() > 1 {
            return Err(BuildError::MultipleDots(text.clone()));
        }
    }
    Ok(())
}
