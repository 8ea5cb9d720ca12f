//! The state machine runtime.

use super::config::MachineConfig;
use super::history::TransitionHistory;
use thiserror::Error;

/// Errors returned by state machine operations.
///
/// Structural failures are reported through this enum; exhausted undo/redo
/// history is not an error and is reported as a plain `bool` instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The requested target state is not declared in the configuration.
    #[error("unknown state '{requested}'")]
    InvalidState { requested: String },

    /// The current state has no transition registered for the event.
    #[error("state '{current}' has no transition for event '{event}'")]
    InvalidEvent { event: String, current: String },
}

/// A finite state machine with linear undo/redo history.
///
/// The machine owns its configuration, the active state identifier, and a
/// [`TransitionHistory`]. Every successful transition records the vacated
/// state for undo and invalidates the redo stack; failed operations leave
/// the machine completely untouched.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateMachine;
/// use waypoint::machine_config;
///
/// let config = machine_config! {
///     initial: "red",
///     states: {
///         "red" => { "go" => "green" },
///         "green" => { "caution" => "yellow" },
///         "yellow" => { "stop" => "red" },
///     }
/// }
/// .unwrap();
///
/// let mut light = StateMachine::new(config);
/// light.trigger("go").unwrap();
/// light.trigger("caution").unwrap();
/// assert_eq!(light.current_state(), "yellow");
///
/// assert!(light.undo());
/// assert_eq!(light.current_state(), "green");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateMachine {
    config: MachineConfig,
    current: String,
    history: TransitionHistory,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state with empty
    /// history.
    ///
    /// The configuration is not validated here. A machine built from a
    /// configuration whose initial state was never declared starts out in
    /// that undeclared state; the validating builder in [`crate::builder`]
    /// rules this out up front.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial().to_string();
        Self {
            config,
            current,
            history: TransitionHistory::new(),
        }
    }

    /// The active state identifier (pure).
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// The machine's configuration (pure).
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The undo/redo history (pure).
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Jump directly to `target`.
    ///
    /// On success the vacated state is pushed onto the undo stack and the
    /// redo stack is emptied. Fails with [`MachineError::InvalidState`]
    /// when `target` is not a declared state, leaving the machine
    /// untouched.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.config.contains(target) {
            return Err(MachineError::InvalidState {
                requested: target.to_string(),
            });
        }
        let vacated = std::mem::replace(&mut self.current, target.to_string());
        self.history.record(vacated);
        Ok(())
    }

    /// Fire `event` in the current state.
    ///
    /// Resolves the event through the current state's transition table and
    /// delegates to [`change_state`](StateMachine::change_state). Fails
    /// with [`MachineError::InvalidEvent`] when no transition is registered
    /// for `event` — including when the current state itself was never
    /// declared, which leaves no table to consult — and propagates
    /// [`MachineError::InvalidState`] when the resolved target is
    /// undeclared. A failed call leaves the machine untouched.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .config
            .target_for(&self.current, event)
            .ok_or_else(|| MachineError::InvalidEvent {
                event: event.to_string(),
                current: self.current.clone(),
            })?
            .to_string();
        self.change_state(&target)
    }

    /// Return to the configured initial state.
    ///
    /// Never fails and never touches history: an `undo` after `reset`
    /// steps back into pre-reset history, not to the state the reset
    /// replaced.
    pub fn reset(&mut self) {
        self.current = self.config.initial().to_string();
    }

    /// All declared state identifiers, in declaration order (pure).
    pub fn states(&self) -> Vec<&str> {
        self.config.state_ids().collect()
    }

    /// Declared states whose transition table handles `event`, in
    /// declaration order (pure). Empty when none do.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config
            .state_ids()
            .filter(|id| {
                self.config
                    .definition(id)
                    .is_some_and(|def| def.handles(event))
            })
            .collect()
    }

    /// Step back to the most recently vacated state.
    ///
    /// Returns `false` without changing anything when the undo history is
    /// exhausted. On success the state being left becomes redoable.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.current) {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` without changing anything when the redo history is
    /// exhausted. On success the state being left becomes undoable again.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.current) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Whether [`undo`](StateMachine::undo) would succeed (pure).
    pub fn can_undo(&self) -> bool {
        self.history.undo_depth() > 0
    }

    /// Whether [`redo`](StateMachine::redo) would succeed (pure).
    pub fn can_redo(&self) -> bool {
        self.history.redo_depth() > 0
    }

    /// Drop the undo history.
    ///
    /// Only the undo stack is cleared; states already undone stay
    /// redoable and the current state is untouched.
    pub fn clear_history(&mut self) {
        self.history.clear_undo();
    }
}
