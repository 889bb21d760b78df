//! Issueflow: a keyed workflow state machine
//!
//! Issueflow drives status changes of issue-like entities through a fixed,
//! declared workflow. States and transitions are addressed by string keys
//! and are built once while the application starts; afterwards the machine
//! is read-only and may be shared freely across threads.
//!
//! # Core Concepts
//!
//! - **State**: a named status with its outgoing transitions, keyed by name
//! - **Transition**: a named edge guarded by predicates and carrying ordered
//!   actions over the entity and a caller-supplied actions context
//! - **StateMachine**: the ordered registry of states and the entry point for
//!   firing transitions
//!
//! Guards that do not hold reject a transition without error; asking for a
//! state or transition that was never declared is a [`LookupError`].
//!
//! # Example
//!
//! ```rust
//! use issueflow::{StateMachine, StatefulEntity, Transition};
//!
//! #[derive(Default)]
//! struct Issue {
//!     status: String,
//!     resolution: Option<String>,
//! }
//!
//! impl StatefulEntity for Issue {
//!     fn state_key(&self) -> &str {
//!         &self.status
//!     }
//!
//!     fn set_state_key(&mut self, key: &str) {
//!         self.status = key.to_string();
//!     }
//! }
//!
//! let machine: StateMachine<Issue, Vec<String>> = StateMachine::builder()
//!     .states(["OPEN", "RESOLVED", "CLOSED"])
//!     .transition(
//!         Transition::builder("resolve")
//!             .from("OPEN")
//!             .to("RESOLVED")
//!             .action(|issue: &mut Issue, log: &mut Vec<String>| {
//!                 issue.resolution = Some("FIXED".into());
//!                 log.push("resolved".into());
//!             })
//!             .build()
//!             .unwrap(),
//!     )
//!     .transition(Transition::builder("close").from("RESOLVED").to("CLOSED").build().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let mut issue = Issue { status: "OPEN".into(), ..Issue::default() };
//! let mut log = Vec::new();
//!
//! machine.fire(&mut issue, "resolve", &mut log).unwrap();
//! machine.fire(&mut issue, "close", &mut log).unwrap();
//!
//! assert_eq!(issue.status, "CLOSED");
//! assert_eq!(log, vec!["resolved"]);
//! ```

pub mod builder;
pub mod core;
pub mod describe;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{StateMachineBuilder, TransitionBuilder};
pub use crate::core::{
    Action, ConfigError, Guard, LookupError, State, StatefulEntity, Transition,
    TransitionHistory, TransitionOutcome, TransitionRecord,
};
pub use crate::describe::MachineDescription;
pub use crate::machine::StateMachine;
