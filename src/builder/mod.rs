//! Builder API for declaring workflows.
//!
//! Workflows are static configuration: they are declared once while the
//! application starts, checked when built, and never changed afterwards.

pub mod machine;
pub mod macros;
pub mod transition;

pub use crate::core::ConfigError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
