//! Rewind: a declarative finite-state machine with undo/redo
//!
//! A machine is described by a [`Configuration`]: an initial state and a graph
//! mapping each state to its event-triggered transitions. [`StateMachine`]
//! tracks the current state, applies transitions and keeps a linear history
//! that can be stepped back and forward.
//!
//! # Core Concepts
//!
//! - **Configuration**: Plain data describing states and transitions
//! - **Transitions**: Requested directly (`change_state`) or resolved from an
//!   event (`trigger`)
//! - **History**: Two buffers, done and undone, driving `undo` and `redo`
//!
//! # Example
//!
//! ```rust
//! use rewind::{fsm, StateMachine};
//!
//! let config = fsm! {
//!     initial: idle,
//!     states: {
//!         idle => { start => running },
//!         running => { stop => idle, pause => paused },
//!         paused => { resume => running },
//!     }
//! };
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("start").unwrap();
//! machine.trigger("pause").unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "running");
//!
//! // A fresh transition invalidates the redo path.
//! machine.trigger("stop").unwrap();
//! assert!(!machine.redo());
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateBuilder, StateMachineBuilder};
pub use crate::core::{ConfigError, Configuration, History, StateDef};
pub use crate::machine::{FsmError, StateMachine};
