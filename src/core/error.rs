//! Configuration and lookup errors.
//!
//! Configuration errors are programming mistakes in the declared workflow and
//! surface while building. Lookup errors surface per call when a state or
//! transition is requested that the machine does not know about.

use thiserror::Error;

/// Errors raised while declaring states and transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("State key must be set")]
    BlankStateKey,

    #[error("Transition key must be set")]
    BlankTransitionKey,

    #[error("Originating state must be set on transition '{transition}'")]
    MissingOriginState { transition: String },

    #[error("Destination state must be set on transition '{transition}'")]
    MissingDestinationState { transition: String },

    #[error("Transition '{transition}' is declared several times from the originating state '{state}'")]
    DuplicateTransition { transition: String, state: String },

    #[error("Originating state does not exist: {state} (transition '{transition}')")]
    UnknownOriginState { transition: String, state: String },

    #[error("Destination state does not exist: {state} (transition '{transition}')")]
    UnknownDestinationState { transition: String, state: String },
}

/// Errors raised when resolving states and transitions at run time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unknown state: {state}")]
    UnknownState { state: String },

    #[error("Transition from state {state} does not exist: {transition}")]
    UnknownTransition { state: String, transition: String },

    #[error("Several automatic transitions are available from state {state}: {}", .transitions.join(", "))]
    AmbiguousAutomaticTransition {
        state: String,
        transitions: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_transition_message_names_transition_and_state() {
        let err = ConfigError::DuplicateTransition {
            transition: "close".to_string(),
            state: "CLOSE".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Transition 'close' is declared several times from the originating state 'CLOSE'"
        );
    }

    #[test]
    fn unknown_transition_message_names_state_and_transition() {
        let err = LookupError::UnknownTransition {
            state: "VALIDATED".to_string(),
            transition: "Unknown Transition".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Transition from state VALIDATED does not exist: Unknown Transition"
        );
    }

    #[test]
    fn ambiguous_automatic_message_lists_candidates() {
        let err = LookupError::AmbiguousAutomaticTransition {
            state: "RESOLVED".to_string(),
            transitions: vec!["autoclose".to_string(), "autoreopen".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Several automatic transitions are available from state RESOLVED: autoclose, autoreopen"
        );
    }
}
