//! Machine configuration: the initial state plus the state graph.
//!
//! The configuration is consumed as an already-parsed value. JSON parsing is
//! provided for convenience; where the document comes from is up to the caller.

use super::state::{StateDef, StateGraph, StateName};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems found while loading or validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration is missing")]
    Missing,

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),

    #[error("Initial state '{initial}' is not defined in the state graph")]
    UnknownInitial { initial: StateName },

    #[error("State '{state}' maps event '{event}' to undefined state '{target}'")]
    UnknownTarget {
        state: StateName,
        event: String,
        target: StateName,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Declarative description of a machine.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Configuration, StateDef};
///
/// let config = Configuration::new("idle")
///     .with_state("idle", StateDef::new().on("start", "running"))
///     .with_state("running", StateDef::new().on("stop", "idle"));
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 2);
/// assert!(config.validate().is_success());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// State the machine starts in and returns to on reset
    pub initial: StateName,
    /// The state graph
    pub states: StateGraph,
}

impl Configuration {
    /// Create a configuration with an empty graph.
    pub fn new(initial: impl Into<StateName>) -> Self {
        Self {
            initial: initial.into(),
            states: StateGraph::new(),
        }
    }

    /// Add or replace a state definition.
    pub fn with_state(mut self, name: impl Into<StateName>, state: StateDef) -> Self {
        self.states.insert(name.into(), state);
        self
    }

    /// Parse a configuration from a JSON document.
    ///
    /// A `null` document is reported as [`ConfigError::Missing`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::{ConfigError, Configuration};
    ///
    /// let config = Configuration::from_json(
    ///     r#"{"initial": "idle", "states": {"idle": {"transitions": {}}}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.initial, "idle");
    ///
    /// assert_eq!(Configuration::from_json("null"), Err(ConfigError::Missing));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Convert an already-parsed JSON value into a configuration.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Err(ConfigError::Missing);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Whether `name` is a key of the state graph.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Check the graph for dangling references, accumulating every problem.
    ///
    /// Machines never call this themselves; an unvalidated configuration is
    /// accepted as-is.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.contains(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigError::UnknownInitial {
                initial: self.initial.clone(),
            })
        });

        let mut names: Vec<&StateName> = self.states.keys().collect();
        names.sort();
        for name in names {
            let mut events: Vec<(&String, &StateName)> =
                self.states[name].transitions.iter().collect();
            events.sort();
            for (event, target) in events {
                checks.push(if self.contains(target) {
                    Validation::success(())
                } else {
                    Validation::fail(ConfigError::UnknownTarget {
                        state: name.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    })
                });
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> Configuration {
        Configuration::new("closed")
            .with_state("closed", StateDef::new().on("open", "opened"))
            .with_state("opened", StateDef::new().on("close", "closed"))
    }

    #[test]
    fn new_configuration_has_empty_graph() {
        let config = Configuration::new("start");
        assert_eq!(config.initial, "start");
        assert!(config.states.is_empty());
    }

    #[test]
    fn from_json_parses_graph() {
        let config = Configuration::from_json(
            r#"{
                "initial": "idle",
                "states": {
                    "idle": {"transitions": {"start": "running"}},
                    "running": {"transitions": {"stop": "idle"}}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.initial, "idle");
        assert_eq!(config.states["idle"].target("start"), Some("running"));
        assert_eq!(config.states["running"].target("stop"), Some("idle"));
    }

    #[test]
    fn from_json_rejects_null() {
        assert_eq!(Configuration::from_json("null"), Err(ConfigError::Missing));
    }

    #[test]
    fn from_json_reports_malformed_documents() {
        let result = Configuration::from_json(r#"{"states": {}}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = Configuration::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn valid_configuration_passes() {
        assert!(door().validate().is_success());
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let config = Configuration::new("missing")
            .with_state("a", StateDef::new().on("go", "nowhere"))
            .with_state("b", StateDef::new().on("back", "a").on("jump", "void"));

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::UnknownInitial { .. })));
                let targets: Vec<&str> = errors
                    .iter()
                    .filter_map(|e| match e {
                        ConfigError::UnknownTarget { target, .. } => Some(target.as_str()),
                        _ => None,
                    })
                    .collect();
                assert_eq!(targets, vec!["nowhere", "void"]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn configuration_serializes_correctly() {
        let config = door();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = Configuration::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
