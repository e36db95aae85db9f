//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated operation sequences.

use proptest::prelude::*;
use rewind::core::{Configuration, StateDef};
use rewind::machine::{FsmError, StateMachine};
use std::collections::HashSet;

const STATES: [&str; 4] = ["idle", "running", "paused", "stopped"];
const EVENTS: [&str; 5] = ["start", "stop", "pause", "resume", "bogus"];

fn media_player() -> Configuration {
    Configuration::new("idle")
        .with_state("idle", StateDef::new().on("start", "running"))
        .with_state(
            "running",
            StateDef::new()
                .on("stop", "stopped")
                .on("pause", "paused"),
        )
        .with_state(
            "paused",
            StateDef::new()
                .on("resume", "running")
                .on("stop", "stopped"),
        )
        .with_state("stopped", StateDef::new().on("start", "running"))
}

#[derive(Clone, Debug)]
enum Op {
    Trigger(&'static str),
    Change(&'static str),
    Undo,
    Redo,
    Reset,
    Clear,
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arbitrary_event().prop_map(Op::Trigger),
        2 => arbitrary_state().prop_map(Op::Change),
        2 => Just(Op::Undo),
        2 => Just(Op::Redo),
        1 => Just(Op::Reset),
        1 => Just(Op::Clear),
    ]
}

/// Apply an op, returning whether it was a successful transition.
fn apply(machine: &mut StateMachine, op: &Op) -> bool {
    match op {
        Op::Trigger(event) => machine.trigger(event).is_ok(),
        Op::Change(state) => machine.change_state(state).is_ok(),
        Op::Undo => {
            machine.undo();
            false
        }
        Op::Redo => {
            machine.redo();
            false
        }
        Op::Reset => {
            machine.reset();
            false
        }
        Op::Clear => {
            machine.clear_history();
            false
        }
    }
}

proptest! {
    #[test]
    fn current_state_is_always_a_graph_key(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new(media_player());

        for op in &ops {
            apply(&mut machine, op);
            prop_assert!(machine.states().contains_key(machine.current_state()));
        }
    }

    #[test]
    fn done_history_counts_successful_transitions(
        steps in prop::collection::vec(
            prop_oneof![
                arbitrary_event().prop_map(Op::Trigger),
                arbitrary_state().prop_map(Op::Change),
            ],
            0..30,
        )
    ) {
        let mut machine = StateMachine::new(media_player());
        let mut successes = 0;
        let mut last_entered = None;

        for op in &steps {
            if apply(&mut machine, op) {
                successes += 1;
                last_entered = Some(machine.current_state().to_string());
            }
        }

        prop_assert_eq!(machine.history().len(), successes);
        match last_entered {
            Some(state) => {
                prop_assert_eq!(machine.current_state(), state.as_str());
            }
            None => {
                prop_assert_eq!(machine.current_state(), "idle");
            }
        }
    }

    #[test]
    fn successful_transition_invalidates_redo(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        target in arbitrary_state(),
    ) {
        let mut machine = StateMachine::new(media_player());
        for op in &ops {
            apply(&mut machine, op);
        }

        machine.change_state(target).unwrap();

        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.current_state(), target);
    }

    #[test]
    fn done_top_tracks_current_until_redo(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new(media_player());
        // Redo restores the current state without recording it, and clearing
        // history leaves the current state in place. Either one breaks the
        // link between the done buffer and the current state until the next
        // transition, undo or reset.
        let mut aligned = true;

        for op in &ops {
            match op {
                Op::Undo => aligned |= machine.undo(),
                Op::Redo => aligned &= !machine.redo(),
                Op::Reset => {
                    machine.reset();
                    aligned = true;
                }
                Op::Clear => {
                    machine.clear_history();
                    aligned = false;
                }
                _ => aligned |= apply(&mut machine, op),
            }

            if aligned {
                match machine.history().last() {
                    Some(entry) => {
                        prop_assert_eq!(entry.state.as_str(), machine.current_state());
                    }
                    None => {
                        prop_assert_eq!(machine.current_state(), machine.initial_state());
                    }
                }
            }
        }
    }

    #[test]
    fn undo_then_redo_restores_state(
        targets in prop::collection::vec(arbitrary_state(), 1..10)
    ) {
        let mut machine = StateMachine::new(media_player());
        let mut expected = vec!["idle"];
        for &target in &targets {
            machine.change_state(target).unwrap();
            expected.push(target);
        }

        for i in (0..targets.len()).rev() {
            prop_assert!(machine.undo());
            prop_assert_eq!(machine.current_state(), expected[i]);
        }
        prop_assert!(!machine.undo());

        for state in expected.iter().skip(1) {
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.current_state(), *state);
        }
        prop_assert!(!machine.redo());
    }

    #[test]
    fn failed_operations_do_not_mutate(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        bogus in "[a-z]{1,8}_unknown",
    ) {
        let mut machine = StateMachine::new(media_player());
        for op in &ops {
            apply(&mut machine, op);
        }

        let before_state = machine.current_state().to_string();
        let before_done = machine.history().done().to_vec();
        let before_undone = machine.history().undone().to_vec();

        let change = machine.change_state(&bogus);
        let trigger = machine.trigger(&bogus);

        prop_assert!(matches!(change, Err(FsmError::UnknownState { .. })), "change_state should fail");
        prop_assert!(matches!(trigger, Err(FsmError::UnknownState { .. })), "trigger should fail");
        prop_assert_eq!(machine.current_state(), before_state.as_str());
        prop_assert_eq!(machine.history().done(), &before_done[..]);
        prop_assert_eq!(machine.history().undone(), &before_undone[..]);
    }

    #[test]
    fn reset_always_restores_initial(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new(media_player());
        for op in &ops {
            apply(&mut machine, op);
        }

        machine.reset();

        prop_assert_eq!(machine.current_state(), "idle");
        prop_assert!(!machine.history().has_entries());
    }

    #[test]
    fn clear_history_never_changes_state(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new(media_player());
        for op in &ops {
            apply(&mut machine, op);
        }
        let before = machine.current_state().to_string();

        machine.clear_history();

        prop_assert_eq!(machine.current_state(), before.as_str());
        prop_assert!(!machine.history().has_entries());
    }

    #[test]
    fn get_states_by_event_matches_transition_tables(event in arbitrary_event()) {
        let machine = StateMachine::new(media_player());

        let found: HashSet<String> = machine.get_states(Some(event)).into_iter().collect();
        let expected: HashSet<String> = machine
            .states()
            .iter()
            .filter(|(_, state)| state.target(event).is_some())
            .map(|(name, _)| name.clone())
            .collect();

        prop_assert_eq!(found, expected);
    }
}

#[test]
fn get_states_lists_every_state_once() {
    let machine = StateMachine::new(media_player());

    let states = machine.get_states(None);
    let unique: HashSet<&str> = states.iter().map(String::as_str).collect();

    assert_eq!(states.len(), STATES.len());
    assert_eq!(unique, STATES.iter().copied().collect::<HashSet<&str>>());
}
