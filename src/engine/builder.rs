//! Builder for constructing engines.

use crate::core::{EngineConfig, EngineState};
use crate::engine::error::BuildError;
use crate::engine::machine::Engine;

/// Builder for constructing engines with a fluent API.
///
/// # Example
///
/// ```rust
/// use keycalc::engine::EngineBuilder;
///
/// let engine = EngineBuilder::new().max_entry_digits(12).build().unwrap();
/// assert_eq!(engine.config().max_entry_digits, Some(12));
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    state: Option<EngineState>,
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured state (optional).
    pub fn state(mut self, state: EngineState) -> Self {
        self.state = Some(state);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Cap the number of digits in the entry.
    pub fn max_entry_digits(mut self, n: usize) -> Self {
        self.config.max_entry_digits = Some(n);
        self
    }

    /// Build the engine.
    /// Returns an error if the configuration or supplied state is invalid.
    pub fn build(self) -> Result<Engine, BuildError> {
        Engine::from_state(self.state.unwrap_or_default(), self.config)
    }
}
