//! Property-based tests for the trap's transition table and machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and event sequences.

use mousetrap::core::State;
use mousetrap::effects::{Recorder, StateMachine};
use mousetrap::trap::{MouseAction, TrapState};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(variant in 0..4usize) -> TrapState {
        TrapState::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_action()(code in 0..6u8) -> MouseAction {
        MouseAction::ALL[usize::from(code)]
    }
}

fn run(initial: TrapState, events: &[MouseAction]) -> (TrapState, Vec<String>) {
    let mut machine = StateMachine::new(initial, Recorder::new());
    machine.accept_all(events.iter().copied());
    let (state, _, sink) = machine.into_parts();
    (state, sink.into_lines())
}

proptest! {
    #[test]
    fn next_is_total(state in arbitrary_state(), event in arbitrary_action()) {
        let next = state.next(event).into_state();
        prop_assert!(TrapState::ALL.contains(&next));
    }

    #[test]
    fn next_is_deterministic(state in arbitrary_state(), event in arbitrary_action()) {
        prop_assert_eq!(state.next(event), state.next(event));
    }

    #[test]
    fn unhandled_event_is_identity(state in arbitrary_state(), event in arbitrary_action()) {
        let result = state.next(event);
        if !result.is_handled() {
            prop_assert_eq!(result.into_state(), state);
        }
    }

    #[test]
    fn next_agrees_with_table(state in arbitrary_state(), event in arbitrary_action()) {
        let result = state.next(event);
        prop_assert_eq!(result.is_handled(), state.lookup(event).is_some());
    }

    #[test]
    fn decode_round_trips(event in arbitrary_action()) {
        let decoded = MouseAction::decode(&event.code().to_string());
        prop_assert_eq!(decoded, Ok(event));
    }

    #[test]
    fn codes_above_five_are_rejected(code in 6..1000i64) {
        prop_assert!(MouseAction::decode(&code.to_string()).is_err());
    }

    #[test]
    fn replay_is_deterministic(
        initial in arbitrary_state(),
        events in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let first = run(initial, &events);
        let second = run(initial, &events);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_event_enters_a_state(
        events in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut machine = StateMachine::new(TrapState::Waiting, Recorder::new());
        machine.accept_all(events.iter().copied());

        let entered = machine
            .sink()
            .lines()
            .iter()
            .filter(|line| TrapState::ALL.iter().any(|s| line.starts_with(&format!("{}: ", s.name()))))
            .count();
        prop_assert_eq!(entered, events.len() + 1);
    }

    #[test]
    fn history_path_follows_current_state(
        events in prop::collection::vec(arbitrary_action(), 1..40)
    ) {
        let mut machine = StateMachine::new(TrapState::Waiting, Recorder::new());
        for event in &events {
            machine.accept(*event);
            let path = machine.history().get_path();
            prop_assert_eq!(path.last().copied(), Some(machine.current_state()));
        }
        prop_assert_eq!(machine.history().len(), events.len());
        prop_assert_eq!(machine.history().events(), events);
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TrapState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
