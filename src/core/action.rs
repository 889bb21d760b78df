//! Side-effecting steps run when a transition fires.

use std::sync::Arc;

/// A function applied to the entity and the actions context once every
/// guard of a transition has passed.
///
/// Actions typically set fields on the entity (resolution, assignee, close
/// date) or push entries into the context (audit log, notification queue).
pub struct Action<E, C> {
    effect: Arc<dyn Fn(&mut E, &mut C) + Send + Sync>,
}

impl<E, C> Action<E, C> {
    /// Wrap a closure as an action.
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn(&mut E, &mut C) + Send + Sync + 'static,
    {
        Action {
            effect: Arc::new(effect),
        }
    }

    /// Apply the action to the entity and context.
    pub fn run(&self, entity: &mut E, ctx: &mut C) {
        (self.effect)(entity, ctx)
    }
}

impl<E, C> Clone for Action<E, C> {
    fn clone(&self) -> Self {
        Self {
            effect: Arc::clone(&self.effect),
        }
    }
}

impl<E, C> std::fmt::Debug for Action<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Action")
    }
}
