//! Entities carrying a workflow state key.

/// An entity whose current workflow state is stored as a state key.
///
/// The state machine never owns this value; it reads it to find the current
/// state and writes the destination key after a transition fires.
///
/// # Example
///
/// ```rust
/// use issueflow::core::StatefulEntity;
///
/// struct Issue {
///     status: String,
/// }
///
/// impl StatefulEntity for Issue {
///     fn state_key(&self) -> &str {
///         &self.status
///     }
///
///     fn set_state_key(&mut self, key: &str) {
///         self.status = key.to_string();
///     }
/// }
/// ```
pub trait StatefulEntity {
    fn state_key(&self) -> &str;

    fn set_state_key(&mut self, key: &str);
}
