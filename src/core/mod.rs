//! Core workflow types.
//!
//! This module contains the building blocks of a workflow:
//! - States holding their outgoing transitions by name
//! - Transitions with guard predicates and ordered actions
//! - Errors for misconfigured workflows and failed lookups
//! - Records of fired transitions
//!
//! None of these types change after construction. All mutable state lives
//! in the entity and the actions context supplied by the caller.

mod action;
mod entity;
mod error;
mod guard;
mod history;
mod state;
mod transition;

pub use action::Action;
pub use entity::StatefulEntity;
pub use error::{ConfigError, LookupError};
pub use guard::Guard;
pub use history::{TransitionHistory, TransitionRecord};
pub use state::State;
pub use transition::{Transition, TransitionOutcome};
