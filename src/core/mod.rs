//! Pure calculator core.
//!
//! This module contains everything that decides what a key press means:
//! - Key events via `KeyEvent`, `Digit` and `Operator`
//! - The single `EngineState` value and its derived `Mode`
//! - Number formatting for the display
//! - One pure transition function per key
//!
//! Nothing here performs I/O or holds state between calls.

mod config;
mod format;
mod key;
mod state;
pub mod transition;

pub use config::{ConfigError, EngineConfig};
pub use format::{format_number, parse_entry, ERROR_TEXT};
pub use key::{Digit, KeyEvent, Operator};
pub use state::{EngineState, Entry, Mode};
pub use transition::apply;
