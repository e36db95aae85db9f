//! Builder for a single state and its outgoing transitions.

use crate::builder::error::BuildError;
use crate::core::{EventName, StateDef, StateName};

/// Builder for one state with a fluent API.
///
/// Unlike [`StateDef::on`], defining the same event twice is reported as an
/// error at build time instead of silently replacing the target.
#[derive(Clone, Debug)]
pub struct StateBuilder {
    name: StateName,
    transitions: Vec<(EventName, StateName)>,
}

impl StateBuilder {
    /// Start a state definition.
    pub fn new(name: impl Into<StateName>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    /// Add a transition fired by `event` to `target`.
    pub fn on(mut self, event: impl Into<EventName>, target: impl Into<StateName>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// Build the state, returning its name and definition.
    pub fn build(self) -> Result<(StateName, StateDef), BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::MissingStateName);
        }

        let mut state = StateDef::new();
        for (event, target) in self.transitions {
            if state.handles(&event) {
                return Err(BuildError::DuplicateEvent {
                    state: self.name,
                    event,
                });
            }
            state = state.on(event, target);
        }

        Ok((self.name, state))
    }
}
