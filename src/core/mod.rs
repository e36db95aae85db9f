//! Core data types for the state machine.
//!
//! This module contains the plain data the engine operates on:
//! - The state graph (`StateDef`, `StateGraph` and the name aliases)
//! - `Configuration`, the declarative machine description
//! - `History`, the two-buffer undo/redo record
//!
//! Nothing here performs transitions; see [`crate::machine`].

mod config;
mod history;
mod state;

pub use config::{ConfigError, Configuration};
pub use history::{History, HistoryEntry};
pub use state::{EventName, StateDef, StateGraph, StateName, TransitionTable};
