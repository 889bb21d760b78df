//! Builder for constructing transitions.

use crate::core::{Action, ConfigError, Guard, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// The name is given up front; `from` and `to` are required before
/// [`TransitionBuilder::build`]. Guards and actions are optional and keep the
/// order in which they are added.
pub struct TransitionBuilder<E, C> {
    key: String,
    from: Option<String>,
    to: Option<String>,
    guards: Vec<Guard<E, C>>,
    actions: Vec<Action<E, C>>,
    automatic: bool,
}

impl<E, C> TransitionBuilder<E, C> {
    /// Create a builder for a transition named `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            from: None,
            to: None,
            guards: Vec::new(),
            actions: Vec::new(),
            automatic: false,
        }
    }

    /// Set the originating state key (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the destination state key (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add a guard.
    pub fn guard(mut self, guard: Guard<E, C>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add a guard using a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E, &C) -> bool + Send + Sync + 'static,
    {
        self.guards.push(Guard::new(predicate));
        self
    }

    /// Append an action using a closure.
    pub fn action<F>(mut self, effect: F) -> Self
    where
        F: Fn(&mut E, &mut C) + Send + Sync + 'static,
    {
        self.actions.push(Action::new(effect));
        self
    }

    /// Append an already constructed action, e.g. one shared between
    /// several transitions.
    pub fn with_action(mut self, action: Action<E, C>) -> Self {
        self.actions.push(action);
        self
    }

    /// Mark the transition as triggered by the system instead of a user.
    pub fn automatic(mut self) -> Self {
        self.automatic = true;
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<E, C>, ConfigError> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::BlankTransitionKey);
        }

        let from = self
            .from
            .filter(|from| !from.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingOriginState {
                transition: self.key.clone(),
            })?;
        let to = self
            .to
            .filter(|to| !to.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingDestinationState {
                transition: self.key.clone(),
            })?;

        Ok(Transition {
            key: self.key,
            from,
            to,
            guards: self.guards,
            actions: self.actions,
            automatic: self.automatic,
        })
    }
}
