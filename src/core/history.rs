//! Linear undo/redo history.
//!
//! History is kept as two independent buffers rather than a single list with
//! a cursor:
//!
//! - the *done* buffer records states entered through explicit transitions,
//!   oldest first;
//! - the *undone* buffer is a stack of entries displaced by undo, the top
//!   being the next redo target.
//!
//! An entry moves from one buffer to the other; it is never duplicated.
//! Redo hands the entry back to the caller without pushing it onto the done
//! buffer.

use super::state::StateName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A state entered through a transition, with the time it was entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state that was entered
    pub state: StateName,
    /// When the transition into `state` was applied
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn now(state: impl Into<StateName>) -> Self {
        Self {
            state: state.into(),
            entered_at: Utc::now(),
        }
    }
}

/// Done/undone history buffers.
///
/// # Example
///
/// ```rust
/// use rewind::core::{History, HistoryEntry};
///
/// let mut history = History::new();
/// history.record(HistoryEntry::now("running"));
/// history.record(HistoryEntry::now("paused"));
///
/// // Undo moves the newest entry to the undone stack and reports the
/// // state now on top of the done buffer.
/// assert_eq!(history.step_back(), Some(Some("running")));
/// assert!(history.can_redo());
///
/// let restored = history.step_forward().unwrap();
/// assert_eq!(restored.state, "paused");
/// assert_eq!(history.path(), vec!["running"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    done: Vec<HistoryEntry>,
    undone: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state entered through a transition.
    ///
    /// Any pending redo entries are discarded.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.done.push(entry);
        self.undone.clear();
    }

    /// Move the newest done entry onto the undone stack.
    ///
    /// Returns `None` when there is nothing to undo. Otherwise returns the
    /// state now on top of the done buffer, or `Some(None)` if the done
    /// buffer became empty.
    pub fn step_back(&mut self) -> Option<Option<&str>> {
        let entry = self.done.pop()?;
        self.undone.push(entry);
        Some(self.done.last().map(|e| e.state.as_str()))
    }

    /// Pop the next redo target off the undone stack.
    ///
    /// The entry is handed back to the caller and not re-recorded.
    pub fn step_forward(&mut self) -> Option<HistoryEntry> {
        self.undone.pop()
    }

    /// Empty both buffers.
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }

    /// Entries recorded through transitions, oldest first.
    pub fn done(&self) -> &[HistoryEntry] {
        &self.done
    }

    /// Entries displaced by undo; the last one is the next redo target.
    pub fn undone(&self) -> &[HistoryEntry] {
        &self.undone
    }

    /// The newest done entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.done.last()
    }

    /// Whether there is a done entry to step back from.
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    /// Whether there is an undone entry to restore.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of done entries.
    pub fn len(&self) -> usize {
        self.done.len()
    }

    /// Whether the done buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Whether either buffer holds an entry.
    pub fn has_entries(&self) -> bool {
        !self.done.is_empty() || !self.undone.is_empty()
    }

    /// State names of the done buffer, oldest first.
    pub fn path(&self) -> Vec<&str> {
        self.done.iter().map(|e| e.state.as_str()).collect()
    }

    /// Time between the oldest and newest done entries.
    ///
    /// Returns `None` when the done buffer is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.done.first(), self.done.last()) {
            let duration = last.entered_at.signed_duration_since(first.entered_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
