//! Engine error types.

use thiserror::Error;

/// Errors raised by [`crate::StateMachine`] operations.
///
/// Failures are atomic: when an operation returns an error, the current
/// state and both history stacks are exactly as they were before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// The configuration's initial state is not among its defined states.
    #[error("initial state `{0}` is not defined in the configuration")]
    UndefinedInitial(String),

    /// A state name was referenced that the configuration does not define.
    #[error("state `{0}` is not defined in the configuration")]
    UnknownState(String),

    /// The current state has no transition for the given event.
    #[error("no transition for event `{event}` from state `{state}`")]
    NoTransition {
        /// State the machine was in when the event was triggered.
        state: String,
        /// The event that failed to resolve.
        event: String,
    },
}
