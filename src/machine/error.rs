//! Errors raised by state machine operations.

use crate::builder::BuildError;
use crate::core::{ConfigError, EventName, StateName};
use thiserror::Error;

/// Errors that can occur when constructing or driving a machine.
///
/// Both kinds are programmer errors reported synchronously. A failed
/// operation leaves the machine exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown state{}", unknown_state_detail(.target, .event))]
    UnknownState {
        /// Requested target, if one was resolved
        target: Option<StateName>,
        /// Event that was triggered, if the request came from `trigger`
        event: Option<EventName>,
    },
}

impl FsmError {
    pub(crate) fn unknown_target(target: &str) -> Self {
        FsmError::UnknownState {
            target: Some(target.to_string()),
            event: None,
        }
    }

    pub(crate) fn unmapped_event(event: &str, target: Option<&str>) -> Self {
        FsmError::UnknownState {
            target: target.map(str::to_string),
            event: Some(event.to_string()),
        }
    }
}

fn unknown_state_detail(target: &Option<StateName>, event: &Option<EventName>) -> String {
    match (target, event) {
        (Some(target), Some(event)) => format!(" '{target}' (via event '{event}')"),
        (Some(target), None) => format!(" '{target}'"),
        (None, Some(event)) => format!(": event '{event}' has no transition from the current state"),
        (None, None) => String::new(),
    }
}

impl From<ConfigError> for FsmError {
    fn from(e: ConfigError) -> Self {
        FsmError::InvalidConfig(e.to_string())
    }
}

impl From<BuildError> for FsmError {
    fn from(e: BuildError) -> Self {
        FsmError::InvalidConfig(e.to_string())
    }
}

/// Result type for state machine operations.
pub type Result<T> = std::result::Result<T, FsmError>;
