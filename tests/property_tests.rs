//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use reckon::core::{invariants, round_result};
use reckon::{CalculatorState, Digit, Event, Operator, ERROR_DISPLAY};

prop_compose! {
    fn arbitrary_digit()(value in 0..10u8) -> Digit {
        Digit::new(value).expect("generated digit is in range")
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(
        variant in 0..5u8,
        digit in arbitrary_digit(),
        op in arbitrary_operator(),
    ) -> Event {
        match variant {
            0 => Event::Digit(digit),
            1 => Event::DecimalPoint,
            2 => Event::Clear,
            3 => Event::Operator(op),
            _ => Event::Equals,
        }
    }
}

/// Run an event sequence from the initial state.
fn run(events: &[Event]) -> CalculatorState {
    events
        .iter()
        .fold(CalculatorState::new(), |state, event| {
            state.transition(*event)
        })
}

/// Drive a state through a sequence of key labels.
fn press_keys(state: CalculatorState, keys: &str) -> CalculatorState {
    keys.chars().fold(state, |state, key| {
        state.transition(Event::try_from(key).expect("valid key label"))
    })
}

proptest! {
    // P1: digit entry never leaves a redundant leading zero.
    #[test]
    fn display_never_has_a_redundant_leading_zero(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let state = run(&events);
        let display = state.display();
        let unsigned = display.strip_prefix('-').unwrap_or(display);

        if unsigned.len() > 1 && unsigned.starts_with('0') {
            prop_assert_eq!(unsigned.as_bytes()[1], b'.', "display was {:?}", display);
        }
    }

    // P2: once a decimal point exists, pressing it again changes nothing.
    #[test]
    fn decimal_point_is_idempotent(
        events in prop::collection::vec(arbitrary_event(), 0..30)
    ) {
        let once = run(&events).decimal_point();
        let twice = once.clone().decimal_point();
        prop_assert_eq!(twice, once);
    }

    // P3: entering a, op, b, equals matches applying and rounding directly.
    #[test]
    fn entered_computation_matches_direct_application(
        a in "[1-9][0-9]{0,6}(\\.[0-9]{1,4})?",
        b in "[1-9][0-9]{0,6}(\\.[0-9]{1,4})?",
        op in arbitrary_operator(),
    ) {
        let state = press_keys(CalculatorState::new(), &a).choose_operator(op);
        let state = press_keys(state, &b).equals();

        let lhs: f64 = a.parse().unwrap();
        let rhs: f64 = b.parse().unwrap();
        let expected = round_result(op.apply(lhs, rhs));

        prop_assert_eq!(state.display(), expected.to_string());
        prop_assert_eq!(state.first_operand(), Some(expected));
        prop_assert_eq!(state.operator(), None);
    }

    // P4: division by zero always yields the error marker.
    #[test]
    fn division_by_zero_always_errors(
        a in "[0-9]{1,8}(\\.[0-9]{0,4})?",
        zero in "0{1,4}(\\.0{0,4})?",
    ) {
        let state = press_keys(CalculatorState::new(), &a)
            .choose_operator(Operator::Divide);
        let state = press_keys(state, &zero).equals();

        prop_assert_eq!(state.display(), ERROR_DISPLAY);
    }

    // P4, negative dividends: the sign of the dividend does not matter.
    #[test]
    fn division_by_zero_errors_for_negative_dividends(a in "[1-9][0-9]{0,6}") {
        let keys = format!("0-{a}=/0=");
        let state = press_keys(CalculatorState::new(), &keys);

        prop_assert_eq!(state.display(), ERROR_DISPLAY);
    }

    // P5: clear is the initial state, from anywhere.
    #[test]
    fn clear_always_returns_the_initial_state(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        prop_assert_eq!(run(&events).clear(), CalculatorState::new());
    }

    // P6: chaining evaluates left to right, rounding at each step.
    #[test]
    fn chaining_is_left_to_right(
        a in "[1-9][0-9]{0,4}",
        b in "[1-9][0-9]{0,4}",
        c in "[1-9][0-9]{0,4}",
        op1 in arbitrary_operator(),
        op2 in arbitrary_operator(),
    ) {
        let state = press_keys(CalculatorState::new(), &a).choose_operator(op1);
        let state = press_keys(state, &b).choose_operator(op2);
        let state = press_keys(state, &c).equals();

        let first = round_result(op1.apply(a.parse().unwrap(), b.parse().unwrap()));
        let expected = round_result(op2.apply(first, c.parse().unwrap()));

        prop_assert_eq!(state.display(), expected.to_string());
    }

    // P7: equals without a pending operator is a no-op.
    #[test]
    fn equals_without_an_operator_is_a_no_op(keys in "[0-9.]{0,12}") {
        let state = press_keys(CalculatorState::new(), &keys);
        let after = state.clone().equals();
        prop_assert_eq!(after, state);
    }

    // P8: every reachable state passes the structural invariant checks.
    #[test]
    fn reachable_states_are_violation_free(
        events in prop::collection::vec(arbitrary_event(), 0..60)
    ) {
        let mut state = CalculatorState::new();
        for event in &events {
            state = state.transition(*event);
            let found = invariants::violations(&state);
            prop_assert!(
                found.is_empty(),
                "violations after {:?}: {:?} (display {:?})",
                event,
                found,
                state.display()
            );
        }
    }

    // P9: transitions are deterministic.
    #[test]
    fn transitions_are_deterministic(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        prop_assert_eq!(run(&events), run(&events));
    }

    // P10: reachable states survive a serde round trip unchanged.
    #[test]
    fn reachable_states_round_trip_through_serde(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let state = run(&events);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }

    // Digit entry after an operator always starts a fresh second operand.
    #[test]
    fn digit_after_operator_replaces_the_display(
        a in "[1-9][0-9]{0,6}",
        op in arbitrary_operator(),
        digit in arbitrary_digit(),
    ) {
        let state = press_keys(CalculatorState::new(), &a)
            .choose_operator(op)
            .digit(digit);

        prop_assert_eq!(state.display(), digit.to_string());
        prop_assert!(!state.is_waiting_for_second_operand());
    }
}
