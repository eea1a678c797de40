//! Keycalc: a key-event driven calculator state machine
//!
//! Keycalc follows a "pure core, imperative shell" layout. The core turns
//! one key press and one state into the next state with plain functions;
//! the engine owns the single state instance and reports what to display.
//! Rendering keys and painting the display are left to the caller.
//!
//! # Core Concepts
//!
//! - **KeyEvent**: One discrete key press (digit, dot, operator, `=`, `%`,
//!   delete, clear)
//! - **EngineState**: The entry being typed plus any pending operation
//! - **Engine**: Applies events in order and composes the display text
//!
//! Operators chain strictly left to right: pressing an operator while a
//! complete operation is pending evaluates it first.
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{Digit, KeyEvent, Operator};
//! use keycalc::Engine;
//!
//! let mut engine = Engine::new();
//! engine.handle_all([
//!     KeyEvent::Digit(Digit::Three),
//!     KeyEvent::Operator(Operator::Add),
//!     KeyEvent::Digit(Digit::Four),
//!     KeyEvent::Operator(Operator::Multiply),
//!     KeyEvent::Digit(Digit::Two),
//!     KeyEvent::Equals,
//! ]);
//! assert_eq!(engine.display_text(), "14");
//! ```

pub mod core;
pub mod engine;
pub mod script;

// Re-export commonly used types
pub use crate::core::{Digit, EngineConfig, EngineState, KeyEvent, Mode, Operator};
pub use engine::{BuildError, Engine, EngineBuilder};
pub use script::parse_script;
