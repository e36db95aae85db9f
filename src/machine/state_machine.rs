//! The state machine engine.

use crate::core::{
    ConfigError, Configuration, EventName, History, HistoryEntry, StateDef, StateGraph, StateName,
};
use crate::machine::error::{FsmError, Result};

/// A finite-state machine with linear undo/redo history.
///
/// The machine owns its graph, its current state and both history buffers.
/// Mutating operations take `&mut self`; sharing one machine between threads
/// requires the caller's own lock around it.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Configuration, StateDef};
/// use rewind::machine::StateMachine;
///
/// let config = Configuration::new("idle")
///     .with_state("idle", StateDef::new().on("start", "running"))
///     .with_state("running", StateDef::new().on("stop", "idle"));
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.current_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "idle");
///
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    initial: StateName,
    states: StateGraph,
    current: StateName,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state with empty history.
    ///
    /// The initial state is not checked against the graph; use
    /// [`Configuration::validate`] beforehand for that.
    pub fn new(config: Configuration) -> Self {
        let Configuration { initial, states } = config;
        tracing::debug!(initial = %initial, states = states.len(), "state machine created");
        Self {
            current: initial.clone(),
            initial,
            states,
            history: History::new(),
        }
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(Configuration::from_json(json)?))
    }

    /// Create a machine from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(Self::new(Configuration::from_value(value)?))
    }

    /// Get the active state.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Get the configured initial state.
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// Get the state graph.
    pub fn states(&self) -> &StateGraph {
        &self.states
    }

    /// Get the transition history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move to `target`, recording it in history and discarding any redo path.
    ///
    /// Fails with [`FsmError::UnknownState`] if `target` is not in the graph,
    /// in which case nothing changes.
    pub fn change_state(&mut self, target: &str) -> Result<()> {
        if !self.states.contains_key(target) {
            tracing::debug!(from = %self.current, to = target, "rejected transition to unknown state");
            return Err(FsmError::unknown_target(target));
        }
        self.enter(target, None);
        Ok(())
    }

    /// Apply the transition `event` maps to from the current state.
    ///
    /// An event with no transition from the current state is rejected with
    /// [`FsmError::UnknownState`], as is one whose target is not in the graph.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let target = self
            .states
            .get(&self.current)
            .and_then(|state| state.target(event));

        let Some(target) = target.filter(|t| self.states.contains_key(*t)) else {
            tracing::debug!(from = %self.current, event, ?target, "rejected event");
            return Err(FsmError::unmapped_event(event, target));
        };

        let target = target.to_string();
        self.enter(&target, Some(event));
        Ok(())
    }

    fn enter(&mut self, target: &str, event: Option<&str>) {
        tracing::debug!(from = %self.current, to = target, ?event, "transition");
        self.current = target.to_string();
        self.history.record(HistoryEntry::now(target));
    }

    /// Return to the initial state and drop all history.
    pub fn reset(&mut self) {
        tracing::debug!(from = %self.current, to = %self.initial, "reset");
        self.current = self.initial.clone();
        self.history.clear();
    }

    /// List state names.
    ///
    /// With no event, every state in the graph is returned once. With an
    /// event, only states that define a transition for it are returned.
    /// Order follows the graph's iteration order and is not stable.
    pub fn get_states(&self, event: Option<&str>) -> Vec<StateName> {
        match event {
            None => self.states.keys().cloned().collect(),
            Some(event) => self
                .states
                .iter()
                .filter(|(_, state)| state.handles(event))
                .map(|(name, _)| name.clone())
                .collect(),
        }
    }

    /// Events with a transition out of the current state.
    pub fn available_events(&self) -> Vec<EventName> {
        self.states
            .get(&self.current)
            .map(|state: &StateDef| state.transitions.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether [`undo`](Self::undo) would step back.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) would restore a state.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one transition.
    ///
    /// The state being left becomes the next redo target. Returns `false`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back() else {
            return false;
        };
        let previous = previous.unwrap_or(&self.initial).to_string();
        tracing::debug!(from = %self.current, to = %previous, "undo");
        self.current = previous;
        true
    }

    /// Re-enter the state most recently displaced by [`undo`](Self::undo).
    ///
    /// Only the current state is restored: the entry is not recorded again,
    /// so a later undo steps back from where the done buffer was left.
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.step_forward() else {
            return false;
        };
        tracing::debug!(from = %self.current, to = %entry.state, "redo");
        self.current = entry.state;
        true
    }

    /// Drop both history buffers without changing the current state.
    pub fn clear_history(&mut self) {
        tracing::debug!(current = %self.current, "history cleared");
        self.history.clear();
    }
}

impl From<Configuration> for StateMachine {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}

impl TryFrom<Option<Configuration>> for StateMachine {
    type Error = FsmError;

    fn try_from(config: Option<Configuration>) -> Result<Self> {
        config
            .map(Self::new)
            .ok_or_else(|| FsmError::from(ConfigError::Missing))
    }
}
