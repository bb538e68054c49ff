//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state or transition")]
    NoStates,

    #[error("Initial state `{0}` is not among the defined states")]
    UndefinedInitialState(String),
}
