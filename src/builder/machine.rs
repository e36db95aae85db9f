//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Configuration, StateDef, StateGraph, StateName};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind::builder::{StateBuilder, StateMachineBuilder};
///
/// let mut machine = StateMachineBuilder::new()
///     .initial("idle")
///     .state(StateBuilder::new("idle").on("start", "running"))
///     .unwrap()
///     .state(StateBuilder::new("running").on("stop", "idle"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.current_state(), "running");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<StateName>,
    states: Vec<(StateName, StateDef)>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state using a builder.
    /// Returns an error if the builder fails validation.
    pub fn state(mut self, builder: StateBuilder) -> Result<Self, BuildError> {
        let state = builder.build()?;
        self.states.push(state);
        Ok(self)
    }

    /// Add a pre-built state definition.
    pub fn add_state(mut self, name: impl Into<StateName>, state: StateDef) -> Self {
        self.states.push((name.into(), state));
        self
    }

    /// Add multiple state definitions at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (StateName, StateDef)>,
    {
        self.states.extend(states);
        self
    }

    /// Assemble the configuration without creating a machine.
    pub fn build_config(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut graph = StateGraph::with_capacity(self.states.len());
        for (name, state) in self.states {
            if graph.contains_key(&name) {
                return Err(BuildError::DuplicateState(name));
            }
            graph.insert(name, state);
        }

        Ok(Configuration {
            initial,
            states: graph,
        })
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        self.build_config().map(StateMachine::new)
    }
}
