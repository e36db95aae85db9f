//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and the [`fsm!`](crate::fsm) macro
//! for assembling configurations with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use state::StateBuilder;

use crate::core::{StateDef, StateName};

/// Create a state definition from `(event, target)` pairs.
///
/// # Example
///
/// ```
/// use rewind::builder::state_with;
///
/// let (name, state) = state_with("running", [("stop", "idle"), ("pause", "paused")]);
///
/// assert_eq!(name, "running");
/// assert_eq!(state.target("pause"), Some("paused"));
/// ```
pub fn state_with<'a, I>(name: impl Into<StateName>, transitions: I) -> (StateName, StateDef)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let state = transitions
        .into_iter()
        .fold(StateDef::new(), |state, (event, target)| state.on(event, target));
    (name.into(), state)
}

/// Create a state definition with no outgoing transitions.
pub fn terminal_state(name: impl Into<StateName>) -> (StateName, StateDef) {
    (name.into(), StateDef::new())
}
