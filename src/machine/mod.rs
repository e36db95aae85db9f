//! The transition and history engine.
//!
//! [`StateMachine`] resolves transitions against a [`Configuration`](crate::core::Configuration)
//! and keeps the undo/redo history. Every operation is synchronous and
//! completes immediately; failures are reported as [`FsmError`].

mod error;
mod state_machine;

pub use error::{FsmError, Result};
pub use state_machine::StateMachine;
