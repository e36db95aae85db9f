//! State graph types.
//!
//! A machine is described by a graph keyed on state names. Each state owns a
//! transition table mapping event names to target state names. The graph is
//! plain data: it is never mutated by the machine once constructed.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Opaque identifier naming a state. Valid names are keys of a [`StateGraph`].
pub type StateName = String;

/// Opaque identifier naming a transition trigger.
pub type EventName = String;

/// Per-state mapping: "when this event fires while in this state, go there".
pub type TransitionTable = HashMap<EventName, StateName>;

/// Mapping from state name to its definition.
pub type StateGraph = HashMap<StateName, StateDef>;

/// Definition of a single state.
///
/// # Example
///
/// ```rust
/// use rewind::core::StateDef;
///
/// let idle = StateDef::new().on("start", "running");
///
/// assert_eq!(idle.target("start"), Some("running"));
/// assert_eq!(idle.target("stop"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Outgoing transitions keyed by event name
    #[serde(default, deserialize_with = "defined_transitions")]
    pub transitions: TransitionTable,
}

/// Read a transition table, treating `null` targets as undefined events.
fn defined_transitions<'de, D>(deserializer: D) -> Result<TransitionTable, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<EventName, Option<StateName>> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(event, target)| target.map(|target| (event, target)))
        .collect())
}

impl StateDef {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outgoing transition, returning the updated definition.
    ///
    /// A later call for the same event replaces the earlier target.
    pub fn on(mut self, event: impl Into<EventName>, target: impl Into<StateName>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Look up the target state for an event, if one is defined.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state has a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Whether this state has no outgoing transitions at all.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }
}
