//! Key parsing errors.

use thiserror::Error;

/// A token that does not name any key.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseKeyError {
    #[error("Empty key token")]
    Empty,

    #[error("Unknown key '{token}'")]
    UnknownKey { token: String },
}

/// A bad token inside a key script, with its 1-based position.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Key {position}: {source}")]
pub struct ScriptError {
    pub position: usize,
    pub source: ParseKeyError,
}
