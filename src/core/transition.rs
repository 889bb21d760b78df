//! Guarded, actionable edges between states.

use super::action::Action;
use super::guard::Guard;
use super::history::TransitionRecord;
use crate::builder::TransitionBuilder;
use chrono::Utc;

/// Result of attempting a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Every guard passed and every action ran
    Fired(TransitionRecord),

    /// A guard did not pass; no action ran
    Rejected { transition: String, from: String },
}

impl TransitionOutcome {
    pub fn is_fired(&self) -> bool {
        matches!(self, Self::Fired(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The record of the fired transition, if it fired.
    pub fn record(&self) -> Option<&TransitionRecord> {
        match self {
            Self::Fired(record) => Some(record),
            Self::Rejected { .. } => None,
        }
    }
}

/// A named edge from one state key to another.
///
/// Names are unique only among the transitions leaving the same state.
/// A transition is immutable once built; construct it with
/// [`Transition::builder`].
///
/// # Example
///
/// ```rust
/// use issueflow::core::Transition;
///
/// #[derive(Default)]
/// struct Issue {
///     resolution: Option<String>,
/// }
///
/// let resolve = Transition::builder("resolve")
///     .from("OPEN")
///     .to("RESOLVED")
///     .when(|issue: &Issue, _ctx: &()| issue.resolution.is_none())
///     .action(|issue: &mut Issue, _ctx: &mut ()| issue.resolution = Some("FIXED".into()))
///     .build()
///     .unwrap();
///
/// let mut issue = Issue::default();
/// assert!(resolve.execute(&mut issue, &mut ()).is_fired());
/// assert_eq!(issue.resolution.as_deref(), Some("FIXED"));
///
/// // The guard no longer holds.
/// assert!(resolve.execute(&mut issue, &mut ()).is_rejected());
/// ```
pub struct Transition<E, C> {
    pub(crate) key: String,
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) guards: Vec<Guard<E, C>>,
    pub(crate) actions: Vec<Action<E, C>>,
    pub(crate) automatic: bool,
}

impl<E, C> Transition<E, C> {
    /// Start building a transition named `key`.
    pub fn builder(key: impl Into<String>) -> TransitionBuilder<E, C> {
        TransitionBuilder::new(key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Alias of [`Transition::key`].
    pub fn name(&self) -> &str {
        &self.key
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Whether the transition is triggered by the system rather than a user.
    pub fn is_automatic(&self) -> bool {
        self.automatic
    }

    pub fn guards(&self) -> &[Guard<E, C>] {
        &self.guards
    }

    pub fn actions(&self) -> &[Action<E, C>] {
        &self.actions
    }

    /// Check whether every guard holds.
    ///
    /// All guards are evaluated, in declaration order, and the results are
    /// ANDed. A transition without guards is always supported.
    pub fn supports(&self, entity: &E, ctx: &C) -> bool {
        self.guards
            .iter()
            .map(|guard| guard.check(entity, ctx))
            .fold(true, |all, passed| all & passed)
    }

    /// Evaluate the guards, then run the actions in declaration order.
    ///
    /// Moving the entity to [`Transition::to`] is left to the caller, see
    /// [`crate::StateMachine::fire`] for a helper doing both.
    pub fn execute(&self, entity: &mut E, ctx: &mut C) -> TransitionOutcome {
        if !self.supports(entity, ctx) {
            return TransitionOutcome::Rejected {
                transition: self.key.clone(),
                from: self.from.clone(),
            };
        }

        for action in &self.actions {
            action.run(entity, ctx);
        }

        TransitionOutcome::Fired(TransitionRecord {
            transition: self.key.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            timestamp: Utc::now(),
        })
    }
}

impl<E, C> Clone for Transition<E, C> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            guards: self.guards.clone(),
            actions: self.actions.clone(),
            automatic: self.automatic,
        }
    }
}

impl<E, C> std::fmt::Debug for Transition<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("key", &self.key)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guards", &self.guards.len())
            .field("actions", &self.actions.len())
            .field("automatic", &self.automatic)
            .finish()
    }
}
