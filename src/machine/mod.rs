//! The process-wide workflow registry.
//!
//! A [`StateMachine`] maps state keys to [`State`]s, keeps them in
//! declaration order, and offers the run-time entry points used by the
//! embedding application: resolving a state, listing the moves available
//! to an entity, and firing a transition on it.
//!
//! Once built the machine is never mutated, so it can be shared by reference
//! or behind an `Arc` across any number of threads.

use crate::builder::StateMachineBuilder;
use crate::core::{LookupError, State, StatefulEntity, Transition, TransitionOutcome};
use crate::describe::MachineDescription;
use std::collections::HashMap;

/// Ordered registry of workflow states.
///
/// `E` is the entity being transitioned and `C` the actions context handed
/// to guards and actions alongside it.
pub struct StateMachine<E, C> {
    states: Vec<State<E, C>>,
    index: HashMap<String, usize>,
}

impl<E, C> StateMachine<E, C> {
    /// Start declaring a state machine.
    pub fn builder() -> StateMachineBuilder<E, C> {
        StateMachineBuilder::new()
    }

    pub(crate) fn from_states(states: Vec<State<E, C>>) -> Self {
        let index = states
            .iter()
            .enumerate()
            .map(|(position, state)| (state.key().to_string(), position))
            .collect();
        Self { states, index }
    }

    /// Look up a state by key.
    pub fn state(&self, key: &str) -> Result<&State<E, C>, LookupError> {
        self.index
            .get(key)
            .map(|&position| &self.states[position])
            .ok_or_else(|| LookupError::UnknownState {
                state: key.to_string(),
            })
    }

    /// Declared state keys, in declaration order.
    pub fn state_keys(&self) -> Vec<&str> {
        self.states.iter().map(State::key).collect()
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &State<E, C>> {
        self.states.iter()
    }

    /// Look up the transition `name` leaving state `key`.
    pub fn transition(&self, key: &str, name: &str) -> Result<&Transition<E, C>, LookupError> {
        self.state(key)?.transition(name)
    }

    /// Serializable snapshot of the declared states and transitions.
    pub fn describe(&self) -> MachineDescription {
        MachineDescription::from(self)
    }
}

impl<E: StatefulEntity, C> StateMachine<E, C> {
    /// Manual transitions currently available to `entity`.
    pub fn out_transitions(&self, entity: &E, ctx: &C) -> Result<Vec<&Transition<E, C>>, LookupError> {
        Ok(self.state(entity.state_key())?.out_transitions(entity, ctx))
    }

    /// Fire the transition `name` from the entity's current state.
    ///
    /// On success the entity is moved to the transition's destination. A
    /// rejected transition leaves the entity where it was. Automatic
    /// transitions are always rejected here, use
    /// [`StateMachine::fire_automatic`] for those.
    pub fn fire(
        &self,
        entity: &mut E,
        name: &str,
        ctx: &mut C,
    ) -> Result<TransitionOutcome, LookupError> {
        let transition = self.transition(entity.state_key(), name)?;
        if transition.is_automatic() {
            tracing::debug!(
                transition = %transition.key(),
                state = %transition.from(),
                "Automatic transition cannot be fired by name"
            );
            return Ok(TransitionOutcome::Rejected {
                transition: transition.key().to_string(),
                from: transition.from().to_string(),
            });
        }
        Ok(Self::apply(transition, entity, ctx))
    }

    /// Fire the automatic transition eligible from the entity's current
    /// state, if there is exactly one.
    pub fn fire_automatic(
        &self,
        entity: &mut E,
        ctx: &mut C,
    ) -> Result<Option<TransitionOutcome>, LookupError> {
        let state = self.state(entity.state_key())?;
        let Some(transition) = state.automatic_transition(entity, ctx)? else {
            return Ok(None);
        };
        Ok(Some(Self::apply(transition, entity, ctx)))
    }

    fn apply(transition: &Transition<E, C>, entity: &mut E, ctx: &mut C) -> TransitionOutcome {
        let outcome = transition.execute(entity, ctx);
        match &outcome {
            TransitionOutcome::Fired(record) => {
                entity.set_state_key(&record.to);
                tracing::debug!(
                    transition = %record.transition,
                    from = %record.from,
                    to = %record.to,
                    "Transition fired"
                );
            }
            TransitionOutcome::Rejected { transition, from } => {
                tracing::debug!(
                    transition = %transition,
                    state = %from,
                    "Transition rejected by guard"
                );
            }
        }
        outcome
    }
}

impl<E, C> std::fmt::Debug for StateMachine<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.states)
            .finish()
    }
}
