//! Guard predicates for controlling transitions.
//!
//! Guards are boolean functions over the entity being transitioned and the
//! caller's actions context. They decide whether a transition may fire right
//! now, without changing anything.

use std::sync::Arc;

/// Predicate that must hold for a transition to fire.
///
/// Guards receive shared references only, so they cannot mutate the entity
/// or the context. They are expected to be deterministic.
///
/// # Example
///
/// ```rust
/// use issueflow::core::Guard;
///
/// struct Issue {
///     resolution: Option<String>,
/// }
///
/// let unresolved = Guard::new(|issue: &Issue, _ctx: &()| issue.resolution.is_none());
///
/// assert!(unresolved.check(&Issue { resolution: None }, &()));
/// assert!(!unresolved.check(&Issue { resolution: Some("FIXED".into()) }, &()));
/// ```
pub struct Guard<E, C> {
    predicate: Arc<dyn Fn(&E, &C) -> bool + Send + Sync>,
}

impl<E, C> Guard<E, C> {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E, &C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against an entity and its context.
    pub fn check(&self, entity: &E, ctx: &C) -> bool {
        (self.predicate)(entity, ctx)
    }
}

impl<E, C> Clone for Guard<E, C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<E, C> std::fmt::Debug for Guard<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Issue {
        status: &'static str,
        assignee: Option<&'static str>,
    }

    struct Ctx {
        scan: bool,
    }

    #[test]
    fn guard_reads_entity() {
        let guard = Guard::new(|i: &Issue, _: &Ctx| i.assignee.is_some());

        let assigned = Issue {
            status: "OPEN",
            assignee: Some("alice"),
        };
        let unassigned = Issue {
            status: "OPEN",
            assignee: None,
        };

        assert!(guard.check(&assigned, &Ctx { scan: false }));
        assert!(!guard.check(&unassigned, &Ctx { scan: false }));
    }

    #[test]
    fn guard_reads_context() {
        let guard = Guard::new(|_: &Issue, ctx: &Ctx| ctx.scan);
        let issue = Issue {
            status: "OPEN",
            assignee: None,
        };

        assert!(guard.check(&issue, &Ctx { scan: true }));
        assert!(!guard.check(&issue, &Ctx { scan: false }));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|i: &Issue, _: &Ctx| i.status == "OPEN");
        let issue = Issue {
            status: "OPEN",
            assignee: None,
        };
        let ctx = Ctx { scan: false };

        assert_eq!(guard.check(&issue, &ctx), guard.check(&issue, &ctx));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|i: &Issue, _: &Ctx| i.status == "RESOLVED");
        let cloned = guard.clone();
        let issue = Issue {
            status: "RESOLVED",
            assignee: None,
        };

        assert!(cloned.check(&issue, &Ctx { scan: false }));
    }
}
