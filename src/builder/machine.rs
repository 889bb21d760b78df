//! Builder for constructing state machines.

use crate::core::{ConfigError, State, Transition};
use crate::machine::StateMachine;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing state machines with a fluent API.
///
/// State keys and transitions may be declared in any order; consistency is
/// checked by [`StateMachineBuilder::build`].
pub struct StateMachineBuilder<E, C> {
    state_keys: Vec<String>,
    transitions: Vec<Transition<E, C>>,
}

impl<E, C> StateMachineBuilder<E, C> {
    pub fn new() -> Self {
        Self {
            state_keys: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Declare state keys, in order.
    ///
    /// A key declared more than once keeps its first position.
    pub fn states<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.declare(key.as_ref());
        }
        self
    }

    /// Declare a single state key.
    pub fn state(mut self, key: impl AsRef<str>) -> Self {
        self.declare(key.as_ref());
        self
    }

    /// Attach a transition to the state named by its `from` key.
    pub fn transition(mut self, transition: Transition<E, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Attach several transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<E, C>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    fn declare(&mut self, key: &str) {
        if !self.state_keys.iter().any(|declared| declared == key) {
            self.state_keys.push(key.to_string());
        }
    }

    fn is_declared(&self, key: &str) -> bool {
        self.state_keys.iter().any(|declared| declared == key)
    }

    /// Check the whole configuration, accumulating every problem found.
    ///
    /// Unlike [`StateMachineBuilder::build`], which stops at the first
    /// error, this reports all blank keys, dangling endpoints and duplicate
    /// names in one pass.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        for key in &self.state_keys {
            if key.trim().is_empty() {
                checks.push(Validation::fail(ConfigError::BlankStateKey));
            }
        }

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for transition in &self.transitions {
            if !self.is_declared(transition.from()) {
                checks.push(Validation::fail(ConfigError::UnknownOriginState {
                    transition: transition.key().to_string(),
                    state: transition.from().to_string(),
                }));
            }

            if !self.is_declared(transition.to()) {
                checks.push(Validation::fail(ConfigError::UnknownDestinationState {
                    transition: transition.key().to_string(),
                    state: transition.to().to_string(),
                }));
            }

            if !seen.insert((transition.from(), transition.key())) {
                checks.push(Validation::fail(ConfigError::DuplicateTransition {
                    transition: transition.key().to_string(),
                    state: transition.from().to_string(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the state machine, failing on the first configuration error.
    pub fn build(self) -> Result<StateMachine<E, C>, ConfigError> {
        for transition in &self.transitions {
            if !self.is_declared(transition.from()) {
                return Err(ConfigError::UnknownOriginState {
                    transition: transition.key().to_string(),
                    state: transition.from().to_string(),
                });
            }
            if !self.is_declared(transition.to()) {
                return Err(ConfigError::UnknownDestinationState {
                    transition: transition.key().to_string(),
                    state: transition.to().to_string(),
                });
            }
        }

        let mut outgoing: HashMap<String, Vec<Transition<E, C>>> = HashMap::new();
        for transition in self.transitions {
            outgoing
                .entry(transition.from().to_string())
                .or_default()
                .push(transition);
        }

        let states = self
            .state_keys
            .into_iter()
            .map(|key| {
                let transitions = outgoing.remove(&key).unwrap_or_default();
                State::new(key, transitions)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let machine = StateMachine::from_states(states);
        tracing::debug!(
            states = machine.state_keys().len(),
            transitions = machine.states().map(|s| s.transitions().len()).sum::<usize>(),
            "Built state machine"
        );
        Ok(machine)
    }
}

impl<E, C> Default for StateMachineBuilder<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(name: &str, from: &str, to: &str) -> Transition<(), ()> {
        Transition::builder(name).from(from).to(to).build().unwrap()
    }

    #[test]
    fn builds_machine_in_declaration_order() {
        let machine = StateMachineBuilder::<(), ()>::new()
            .states(["OPEN", "RESOLVED", "CLOSED"])
            .transition(transition("resolve", "OPEN", "RESOLVED"))
            .transition(transition("close", "RESOLVED", "CLOSED"))
            .build()
            .unwrap();

        assert_eq!(machine.state_keys(), vec!["OPEN", "RESOLVED", "CLOSED"]);
    }

    #[test]
    fn transitions_may_precede_states() {
        let machine = StateMachineBuilder::new()
            .transition(transition("resolve", "OPEN", "RESOLVED"))
            .states(["OPEN", "RESOLVED"])
            .build()
            .unwrap();

        let open = machine.state("OPEN").unwrap();
        assert_eq!(open.transition("resolve").unwrap().to(), "RESOLVED");
    }

    #[test]
    fn duplicate_state_keys_keep_first_position() {
        let machine = StateMachineBuilder::<(), ()>::new()
            .states(["OPEN", "CLOSED"])
            .state("OPEN")
            .state("RESOLVED")
            .build()
            .unwrap();

        assert_eq!(machine.state_keys(), vec!["OPEN", "CLOSED", "RESOLVED"]);
    }

    #[test]
    fn undeclared_origin_fails_build() {
        let result = StateMachineBuilder::new()
            .states(["RESOLVED"])
            .transition(transition("resolve", "OPEN", "RESOLVED"))
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::UnknownOriginState {
                transition: "resolve".to_string(),
                state: "OPEN".to_string(),
            }
        );
    }

    #[test]
    fn undeclared_destination_fails_build() {
        let result = StateMachineBuilder::new()
            .states(["OPEN"])
            .transition(transition("resolve", "OPEN", "RESOLVED"))
            .build();

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDestinationState { .. }));
        assert!(err.to_string().contains("RESOLVED"));
    }

    #[test]
    fn blank_state_key_fails_build() {
        let result = StateMachineBuilder::<(), ()>::new()
            .states(["OPEN", ""])
            .build();

        assert_eq!(result.unwrap_err(), ConfigError::BlankStateKey);
    }

    #[test]
    fn duplicate_transition_fails_build() {
        let result = StateMachineBuilder::new()
            .states(["RESOLVED", "CLOSED", "REOPENED"])
            .transition(transition("close", "RESOLVED", "CLOSED"))
            .transition(transition("close", "RESOLVED", "REOPENED"))
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::DuplicateTransition {
                transition: "close".to_string(),
                state: "RESOLVED".to_string(),
            }
        );
    }

    #[test]
    fn validate_accumulates_all_problems() {
        let builder = StateMachineBuilder::new()
            .states(["OPEN", " "])
            .transition(transition("resolve", "OPEN", "RESOLVED"))
            .transition(transition("close", "RESOLVED", "CLOSED"))
            .transition(transition("resolve", "OPEN", "OPEN"));

        match builder.validate() {
            Validation::Failure(errors) => {
                // blank key, resolve->RESOLVED, close from RESOLVED,
                // close->CLOSED, duplicate resolve
                assert_eq!(errors.len(), 5);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::BlankStateKey)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::DuplicateTransition { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::UnknownOriginState { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validate_succeeds_for_consistent_configuration() {
        let builder = StateMachineBuilder::new()
            .states(["OPEN", "RESOLVED"])
            .transition(transition("resolve", "OPEN", "RESOLVED"));

        assert!(builder.validate().is_success());
        assert!(builder.build().is_ok());
    }
}
