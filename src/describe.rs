//! Serializable snapshot of a workflow's topology.
//!
//! Guards and actions are closures and cannot be serialized; the snapshot
//! keeps only how many of each a transition carries.

use crate::core::{State, Transition};
use crate::machine::StateMachine;
use serde::{Deserialize, Serialize};

/// Topology of a built [`StateMachine`], with states in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDescription {
    pub states: Vec<StateDescription>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescription {
    pub key: String,
    pub transitions: Vec<TransitionDescription>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDescription {
    pub key: String,
    pub from: String,
    pub to: String,
    pub automatic: bool,
    pub guards: usize,
    pub actions: usize,
}

impl MachineDescription {
    pub fn state_keys(&self) -> Vec<&str> {
        self.states.iter().map(|state| state.key.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<E, C> From<&StateMachine<E, C>> for MachineDescription {
    fn from(machine: &StateMachine<E, C>) -> Self {
        Self {
            states: machine.states().map(StateDescription::from).collect(),
        }
    }
}

impl<E, C> From<&State<E, C>> for StateDescription {
    fn from(state: &State<E, C>) -> Self {
        Self {
            key: state.key().to_string(),
            transitions: state
                .transitions()
                .iter()
                .map(TransitionDescription::from)
                .collect(),
        }
    }
}

impl<E, C> From<&Transition<E, C>> for TransitionDescription {
    fn from(transition: &Transition<E, C>) -> Self {
        Self {
            key: transition.key().to_string(),
            from: transition.from().to_string(),
            to: transition.to().to_string(),
            automatic: transition.is_automatic(),
            guards: transition.guards().len(),
            actions: transition.actions().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> StateMachine<u32, ()> {
        StateMachine::builder()
            .states(["OPEN", "RESOLVED", "CLOSED"])
            .transition(
                Transition::builder("resolve")
                    .from("OPEN")
                    .to("RESOLVED")
                    .when(|count: &u32, _: &()| *count > 0)
                    .action(|count: &mut u32, _: &mut ()| *count += 1)
                    .build()
                    .unwrap(),
            )
            .transition(
                Transition::builder("autoclose")
                    .from("RESOLVED")
                    .to("CLOSED")
                    .automatic()
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn description_keeps_declaration_order() {
        let description = machine().describe();

        assert_eq!(description.state_keys(), vec!["OPEN", "RESOLVED", "CLOSED"]);
        assert!(description.states[2].transitions.is_empty());
    }

    #[test]
    fn description_counts_guards_and_actions() {
        let description = machine().describe();

        assert_eq!(
            description.states[0].transitions,
            vec![TransitionDescription {
                key: "resolve".to_string(),
                from: "OPEN".to_string(),
                to: "RESOLVED".to_string(),
                automatic: false,
                guards: 1,
                actions: 1,
            }]
        );
        assert!(description.states[1].transitions[0].automatic);
    }

    #[test]
    fn description_serializes_to_json() {
        let description = machine().describe();

        let json = description.to_json().unwrap();
        let deserialized: MachineDescription = serde_json::from_str(&json).unwrap();

        assert_eq!(description, deserialized);
        assert!(json.find("\"OPEN\"").unwrap() < json.find("\"CLOSED\"").unwrap());
    }
}
