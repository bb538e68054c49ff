//! The state machine engine.

use crate::core::config::MachineConfig;
use crate::core::error::MachineError;
use crate::core::history::History;

/// A finite state machine with linear undo/redo.
///
/// The machine owns its configuration, a current state, and a [`History`].
/// All operations are synchronous and atomic: a failed operation leaves the
/// current state and both history stacks untouched.
///
/// # Example
///
/// ```rust
/// use statewalk::{MachineConfig, StateMachine};
///
/// let config = MachineConfig::builder()
///     .initial("idle")
///     .transition("idle", "run", "busy")
///     .transition("busy", "stop", "idle")
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(config).unwrap();
/// assert_eq!(machine.current_state(), "idle");
///
/// machine.trigger("run").unwrap();
/// assert_eq!(machine.current_state(), "busy");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "idle");
///
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "busy");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// Fails with [`MachineError::UndefinedInitial`] when the initial state
    /// is not among the configured states.
    pub fn new(config: MachineConfig) -> Result<Self, MachineError> {
        if !config.states.contains_key(&config.initial) {
            return Err(MachineError::UndefinedInitial(config.initial.clone()));
        }
        let current = config.initial.clone();
        Ok(Self {
            config,
            current,
            history: History::new(),
        })
    }

    /// Name of the current state.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Name of the configured initial state.
    pub fn initial_state(&self) -> &str {
        &self.config.initial
    }

    /// The configuration this machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move directly to `state`, bypassing transition rules.
    ///
    /// The old state becomes undoable and one pending redo (if any) is
    /// discarded. Fails with [`MachineError::UnknownState`] when `state` is
    /// not configured.
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        if !self.config.states.contains_key(state) {
            return Err(MachineError::UnknownState(state.to_string()));
        }
        self.apply(state.to_string());
        Ok(())
    }

    /// Apply `event` to the current state's transition rules.
    ///
    /// Resolves the target via the configuration and then updates history
    /// exactly like [`StateMachine::change_state`]. Fails with
    /// [`MachineError::NoTransition`] when the current state has no rule
    /// for `event`. The resolved target is trusted as configured; it is not
    /// required to be a defined state.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .config
            .states
            .get(&self.current)
            .and_then(|def| def.transitions.get(event))
            .cloned()
            .ok_or_else(|| MachineError::NoTransition {
                state: self.current.clone(),
                event: event.to_string(),
            })?;
        self.apply(target);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// History is deliberately left intact: a reset is itself undoable via
    /// the states recorded before it, and pending redos survive. Note the
    /// reset itself is not recorded, so `undo` after `reset` restores the
    /// state visited before the *last recorded change*, not the pre-reset
    /// state.
    pub fn reset(&mut self) {
        self.current = self.config.initial.clone();
    }

    /// Every configured state, in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.config.states.keys().map(String::as_str).collect()
    }

    /// States from which `event` is a valid trigger, in declaration order.
    ///
    /// Returns an empty vector when no state handles the event.
    pub fn states_with_event(&self, event: &str) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| def.transitions.contains_key(event))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.current.clone()) {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.current.clone()) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Whether [`StateMachine::undo`] would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`StateMachine::redo`] would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all undoable states. Pending redos are kept.
    pub fn clear_history(&mut self) {
        self.history.clear_past();
    }

    fn apply(&mut self, next: String) {
        let prev = std::mem::replace(&mut self.current, next);
        self.history.record(prev);
    }
}
