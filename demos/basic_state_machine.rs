//! Basic State Machine
//!
//! This example demonstrates driving a machine with events and walking its
//! history back and forth.
//!
//! Key concepts:
//! - Declarative configuration with the `fsm!` macro
//! - Event-triggered transitions
//! - Undo/redo over the linear history
//! - Redo invalidation by a fresh transition
//!
//! Run with: RUST_LOG=debug cargo run --example basic_state_machine

use rewind::{fsm, FsmError, StateMachine};

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt::init();

    println!("=== Basic State Machine Example ===\n");

    let config = fsm! {
        initial: disconnected,
        states: {
            disconnected => { dial => connecting },
            connecting => { established => connected, fail => disconnected },
            connected => { hangup => disconnected },
        }
    };
    let mut machine = StateMachine::new(config);

    println!("Initial state: {}", machine.current_state());

    machine.trigger("dial")?;
    machine.trigger("established")?;
    println!("After dial + established: {}", machine.current_state());
    println!("History: {:?}", machine.history().path());

    machine.undo();
    println!("After undo: {}", machine.current_state());

    machine.redo();
    println!("After redo: {}", machine.current_state());

    if let Err(e) = machine.trigger("dial") {
        println!("Rejected: {e}");
    }

    machine.trigger("hangup")?;
    println!(
        "After hangup: {} (redo available: {})",
        machine.current_state(),
        machine.can_redo()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
