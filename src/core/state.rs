//! Workflow states and their outgoing transitions.

use super::error::{ConfigError, LookupError};
use super::transition::Transition;
use std::collections::HashSet;

/// One status an entity can hold, together with the legal moves out of it.
///
/// Transitions are kept in declaration order. Their names are unique within
/// the state; this is checked on construction.
///
/// # Example
///
/// ```rust
/// use issueflow::core::{State, Transition};
///
/// let resolve = Transition::<(), ()>::builder("resolve")
///     .from("OPEN")
///     .to("RESOLVED")
///     .build()
///     .unwrap();
///
/// let open = State::new("OPEN", vec![resolve]).unwrap();
/// assert_eq!(open.transition("resolve").unwrap().to(), "RESOLVED");
/// assert!(open.transition("close").is_err());
/// ```
pub struct State<E, C> {
    key: String,
    transitions: Vec<Transition<E, C>>,
}

impl<E, C> State<E, C> {
    /// Create a state from its key and outgoing transitions.
    ///
    /// Fails when the key is blank or when two transitions share a name.
    pub fn new(
        key: impl Into<String>,
        transitions: Vec<Transition<E, C>>,
    ) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::BlankStateKey);
        }

        let mut seen = HashSet::with_capacity(transitions.len());
        for transition in &transitions {
            if !seen.insert(transition.key()) {
                return Err(ConfigError::DuplicateTransition {
                    transition: transition.key().to_string(),
                    state: key,
                });
            }
        }

        Ok(Self { key, transitions })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All outgoing transitions, in declaration order.
    pub fn transitions(&self) -> &[Transition<E, C>] {
        &self.transitions
    }

    /// Look up an outgoing transition by name.
    pub fn transition(&self, name: &str) -> Result<&Transition<E, C>, LookupError> {
        self.transitions
            .iter()
            .find(|transition| transition.key() == name)
            .ok_or_else(|| LookupError::UnknownTransition {
                state: self.key.clone(),
                transition: name.to_string(),
            })
    }

    /// Manual transitions whose guards currently hold for `entity`.
    pub fn out_transitions(&self, entity: &E, ctx: &C) -> Vec<&Transition<E, C>> {
        self.transitions
            .iter()
            .filter(|transition| !transition.is_automatic())
            .filter(|transition| transition.supports(entity, ctx))
            .collect()
    }

    /// The automatic transition whose guards currently hold for `entity`.
    ///
    /// Several eligible automatic transitions make the outcome ambiguous and
    /// are reported as an error.
    pub fn automatic_transition(
        &self,
        entity: &E,
        ctx: &C,
    ) -> Result<Option<&Transition<E, C>>, LookupError> {
        let mut eligible = self
            .transitions
            .iter()
            .filter(|transition| transition.is_automatic())
            .filter(|transition| transition.supports(entity, ctx));

        let Some(first) = eligible.next() else {
            return Ok(None);
        };

        let others: Vec<&Transition<E, C>> = eligible.collect();
        if others.is_empty() {
            return Ok(Some(first));
        }

        Err(LookupError::AmbiguousAutomaticTransition {
            state: self.key.clone(),
            transitions: std::iter::once(first)
                .chain(others)
                .map(|transition| transition.key().to_string())
                .collect(),
        })
    }
}

impl<E, C> std::fmt::Debug for State<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("key", &self.key)
            .field("transitions", &self.transitions)
            .finish()
    }
}
