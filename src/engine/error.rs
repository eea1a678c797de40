//! Errors raised while assembling an engine.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Operator pending without a left operand")]
    OperatorWithoutOperand,

    #[error("Entry '{0}' has more than one decimal point")]
    MultipleDots(String),
}
