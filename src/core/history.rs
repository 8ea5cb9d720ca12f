//! Undo/redo history for state transitions.
//!
//! Two independent stacks of state identifiers: one of states vacated by
//! successful transitions (undo), one of states vacated by `undo` itself
//! (redo). Any new transition invalidates the redo stack.

use serde::{Deserialize, Serialize};

/// Two-stack linear history of visited states.
///
/// Both stacks hold state identifiers, most recent last. They are never
/// cross-validated against a machine configuration — the machine records
/// whatever state it vacates, and stepping back re-enters it unchecked.
///
/// # Example
///
/// ```rust
/// use waypoint::core::TransitionHistory;
///
/// let mut history = TransitionHistory::new();
///
/// // The machine moved off "idle".
/// history.record("idle".to_string());
/// assert_eq!(history.undo_depth(), 1);
///
/// // Undoing from "running" lands back on "idle" and remembers
/// // "running" for redo.
/// assert_eq!(history.undo("running"), Some("idle".to_string()));
/// assert_eq!(history.redo_depth(), 1);
///
/// assert_eq!(history.redo("idle"), Some("running".to_string()));
/// assert_eq!(history.redo_depth(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
}

impl TransitionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful transition away from `vacated`.
    ///
    /// Pushes onto the undo stack and drops the entire redo stack: once a
    /// new transition happens, the previously undone future is
    /// unreachable.
    pub fn record(&mut self, vacated: String) {
        self.undo_stack.push(vacated);
        self.redo_stack.clear();
    }

    /// Step back one entry.
    ///
    /// Returns the state to re-enter, remembering `current` on the redo
    /// stack. `None` when the undo stack is exhausted, in which case
    /// nothing changes.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_string());
        Some(previous)
    }

    /// Step forward into an entry undone earlier.
    ///
    /// Counterpart of [`undo`](TransitionHistory::undo): returns the state
    /// to re-enter, remembering `current` on the undo stack. `None` when
    /// the redo stack is exhausted, in which case nothing changes.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.to_string());
        Some(next)
    }

    /// Drop the undo stack.
    ///
    /// The redo stack is left alone: entries already undone stay redoable.
    pub fn clear_undo(&mut self) {
        self.undo_stack.clear();
    }

    /// Number of states reachable by repeated undo.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of states reachable by repeated redo.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// States on the undo stack, oldest first.
    pub fn undo_states(&self) -> &[String] {
        &self.undo_stack
    }

    /// States on the redo stack, oldest first.
    pub fn redo_states(&self) -> &[String] {
        &self.redo_stack
    }
}
