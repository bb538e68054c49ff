//! Linear undo/redo history.
//!
//! Two stacks of state names: the past stack records visited states and
//! feeds `undo`; the future stack records undone states and feeds `redo`.
//! Every new state change consumes one redo slot, so redos made stale by a
//! divergent change expire one at a time rather than all at once.

use serde::{Deserialize, Serialize};

/// Undo/redo bookkeeping for a state machine.
///
/// The history does not know the machine's current state; callers hand it
/// in at each operation and receive the replacement state back. `undo` and
/// `redo` return `None` when the corresponding stack is empty, and in that
/// case nothing is mutated.
///
/// # Example
///
/// ```rust
/// use statewalk::History;
///
/// let mut history = History::new();
/// history.record("idle".to_string());
///
/// assert!(history.can_undo());
/// assert_eq!(history.undo("busy".to_string()), Some("idle".to_string()));
/// assert_eq!(history.redo("idle".to_string()), Some("busy".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    past: Vec<String>,
    future: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state change away from `prev`.
    ///
    /// Pushes `prev` onto the past stack and discards one pending redo if
    /// any exists. Popping an empty future stack is a no-op.
    pub fn record(&mut self, prev: String) {
        self.future.pop();
        self.past.push(prev);
    }

    /// Take one step back.
    ///
    /// Pops the most recent past state and stores `current` for a later
    /// [`History::redo`]. Returns the state to move to, or `None` (with no
    /// mutation) when there is nothing to undo.
    pub fn undo(&mut self, current: String) -> Option<String> {
        let prev = self.past.pop()?;
        self.future.push(current);
        Some(prev)
    }

    /// Take one step forward again.
    ///
    /// Pops the most recently undone state and stores `current` back on the
    /// past stack. Returns the state to move to, or `None` (with no
    /// mutation) when there is nothing to redo.
    pub fn redo(&mut self, current: String) -> Option<String> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Empty the past stack. Pending redos are left in place.
    pub fn clear_past(&mut self) {
        self.past.clear();
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available.
    pub fn depth(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Visited states, oldest first.
    pub fn past(&self) -> &[String] {
        &self.past
    }

    /// Undone states, oldest first.
    pub fn future(&self) -> &[String] {
        &self.future
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn record_grows_past_stack() {
        let mut history = History::new();
        history.record("a".to_string());
        history.record("b".to_string());

        assert_eq!(history.past(), &["a".to_string(), "b".to_string()]);
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn record_on_empty_future_is_safe() {
        let mut history = History::new();
        // Nothing to discard; must not panic.
        history.record("a".to_string());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn record_discards_one_pending_redo() {
        let mut history = History::new();
        history.record("a".to_string());
        history.record("b".to_string());
        history.undo("c".to_string());
        history.undo("b".to_string());
        assert_eq!(history.redo_depth(), 2);

        history.record("a".to_string());
        assert_eq!(history.redo_depth(), 1);
    }

    #[test]
    fn undo_moves_current_to_future() {
        let mut history = History::new();
        history.record("idle".to_string());

        assert_eq!(history.undo("busy".to_string()), Some("idle".to_string()));
        assert_eq!(history.future(), &["busy".to_string()]);
        assert!(!history.can_undo());
    }

    #[test]
    fn undo_on_empty_past_mutates_nothing() {
        let mut history = History::new();
        assert_eq!(history.undo("busy".to_string()), None);
        assert!(!history.can_redo());
    }

    #[test]
    fn redo_moves_current_back_to_past() {
        let mut history = History::new();
        history.record("idle".to_string());
        history.undo("busy".to_string());

        assert_eq!(history.redo("idle".to_string()), Some("busy".to_string()));
        assert_eq!(history.past(), &["idle".to_string()]);
        assert!(!history.can_redo());
    }

    #[test]
    fn redo_on_empty_future_mutates_nothing() {
        let mut history = History::new();
        history.record("idle".to_string());

        assert_eq!(history.redo("busy".to_string()), None);
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn clear_past_leaves_future_alone() {
        let mut history = History::new();
        history.record("a".to_string());
        history.record("b".to_string());
        history.undo("c".to_string());

        history.clear_past();

        assert!(!history.can_undo());
        assert!(history.can_redo());
    }
}
