//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine loaded from JSON.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Configuration parsed from a JSON document
//! - Querying which states react to an event
//! - Resetting back to the initial state
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use rewind::{FsmError, StateMachine};

const LIGHTS: &str = r#"{
    "initial": "red",
    "states": {
        "red": {"transitions": {"timer": "green"}},
        "green": {"transitions": {"timer": "yellow", "emergency": "red"}},
        "yellow": {"transitions": {"timer": "red", "emergency": "red"}}
    }
}"#;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt::init();

    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachine::from_json(LIGHTS)?;
    println!("Initial state: {}\n", machine.current_state());

    println!("Transition sequence:");
    for _ in 0..4 {
        machine.trigger("timer")?;
        println!("  timer -> {}", machine.current_state());
    }

    let mut interruptible = machine.get_states(Some("emergency"));
    interruptible.sort();
    println!("\nStates reacting to 'emergency': {:?}", interruptible);

    machine.trigger("emergency")?;
    println!("After emergency: {}", machine.current_state());
    println!("Transitions recorded: {}", machine.history().len());

    machine.reset();
    println!(
        "After reset: {} (history empty: {})",
        machine.current_state(),
        !machine.history().has_entries()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
