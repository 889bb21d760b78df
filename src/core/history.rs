//! Transition history tracking.
//!
//! Records of fired transitions, in the order they happened. The history is
//! a plain value: callers keep it wherever suits them (on the entity, inside
//! the actions context, in their own storage).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use issueflow::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     transition: "resolve".to_string(),
///     from: "OPEN".to_string(),
///     to: "RESOLVED".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "RESOLVED");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the transition that fired
    pub transition: String,
    /// Key of the originating state
    pub from: String,
    /// Key of the destination state
    pub to: String,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of fired transitions.
///
/// `record` returns a new history with the record appended and leaves the
/// receiver untouched.
///
/// # Example
///
/// ```rust
/// use issueflow::core::{TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = TransitionHistory::new()
///     .record(TransitionRecord {
///         transition: "resolve".to_string(),
///         from: "OPEN".to_string(),
///         to: "RESOLVED".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(TransitionRecord {
///         transition: "close".to_string(),
///         from: "RESOLVED".to_string(),
///         to: "CLOSED".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.path(), vec!["OPEN", "RESOLVED", "CLOSED"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: Vec<TransitionRecord>,
}

impl TransitionHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// State keys visited, starting with the first originating state.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Time elapsed between the first and the last record.
    ///
    /// `None` when empty, or when timestamps run backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
