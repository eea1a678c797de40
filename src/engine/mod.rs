//! Stateful shell around the pure core.
//!
//! `Engine` holds the one `EngineState` instance and feeds it through the
//! transitions in [`crate::core::transition`].

pub mod builder;
pub mod error;
pub mod machine;

pub use builder::EngineBuilder;
pub use error::BuildError;
pub use machine::Engine;
