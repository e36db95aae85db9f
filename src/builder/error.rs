//! Build errors for state machine and state builders.

use thiserror::Error;

/// Errors that can occur when building state machines and states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State name is empty")]
    MissingStateName,

    #[error("State '{0}' is defined more than once")]
    DuplicateState(String),

    #[error("State '{state}' defines event '{event}' more than once")]
    DuplicateEvent { state: String, event: String },
}
