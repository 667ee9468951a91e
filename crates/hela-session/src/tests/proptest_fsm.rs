//! Property-based tests for ConvertSession.
//!
//! Generates random update/complete sequences via proptest and verifies
//! the generation-ordering invariants after every action.

use proptest::prelude::*;

use crate::ConvertSession;

// ---------------------------------------------------------------------------
// Action enum — models every session-facing operation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    /// Extend the input by one character, as live typing does.
    Append(char),
    /// Replace the whole input, as paste does.
    Replace(String),
    /// Remove the last character.
    Backspace,
    /// Deliver the conversion for the current generation.
    CompleteLatest,
    /// Deliver a result for an already superseded generation.
    CompleteStale,
    /// Run the pipeline synchronously.
    ConvertNow,
}

// ---------------------------------------------------------------------------
// Strategy: weighted random Action generation
// ---------------------------------------------------------------------------

fn arb_singlish_char() -> impl Strategy<Value = char> {
    // Vowels and the space weighted up for realistic word shapes
    prop_oneof![
        3 => Just('a'),
        2 => Just('e'),
        2 => Just('i'),
        2 => Just('o'),
        2 => Just('u'),
        2 => Just(' '),
        1 => prop::sample::select(vec![
            'k', 'g', 'c', 'j', 't', 'd', 'n', 'p', 'b', 'm',
            'y', 'r', 'l', 'v', 'w', 's', 'h', 'f',
        ]),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        40 => arb_singlish_char().prop_map(Action::Append),
        5 => "[a-z ]{0,16}".prop_map(Action::Replace),
        10 => Just(Action::Backspace),
        15 => Just(Action::CompleteLatest),
        10 => Just(Action::CompleteStale),
        5 => Just(Action::ConvertNow),
    ]
}

// ---------------------------------------------------------------------------
// Execute an Action against the session
// ---------------------------------------------------------------------------

fn execute_action(session: &mut ConvertSession, action: &Action) {
    match action {
        Action::Append(c) => {
            let mut input = session.input().to_string();
            input.push(*c);
            session.update(&input);
        }
        Action::Replace(text) => {
            session.update(text);
        }
        Action::Backspace => {
            let mut input = session.input().to_string();
            input.pop();
            session.update(&input);
        }
        Action::CompleteLatest => {
            let output = hela_core::converter::convert(session.input());
            let accepted = session.complete(session.generation(), output);
            assert!(accepted, "result for the current generation must apply");
        }
        Action::CompleteStale => {
            let stale = session.generation().wrapping_sub(1);
            let accepted = session.complete(stale, "STALE".to_string());
            assert!(!accepted, "result for a superseded generation must be dropped");
        }
        Action::ConvertNow => {
            let input = session.input().to_string();
            session.convert_now(&input);
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant checks — run after every action
// ---------------------------------------------------------------------------

fn assert_invariants(session: &ConvertSession, action: &Action, prev_generation: u64) {
    // 1. Generations never move backwards
    assert!(
        session.generation() >= prev_generation,
        "generation went backwards ({} -> {}) after {:?}",
        prev_generation,
        session.generation(),
        action,
    );

    // 2. A stale result never becomes visible
    assert_ne!(
        session.output(),
        "STALE",
        "stale output applied after {:?}",
        action,
    );

    // 3. Settled sessions reflect their input exactly
    if matches!(action, Action::CompleteLatest | Action::ConvertNow) {
        assert!(!session.is_converting(), "session still busy after {:?}", action);
        assert_eq!(
            session.output(),
            hela_core::converter::convert(session.input()),
            "settled output does not match input after {:?}",
            action,
        );
    }

    // 4. Empty input means empty output once settled
    if session.input().is_empty() && !session.is_converting() {
        assert!(
            session.output().is_empty(),
            "idle session with no input kept output {:?} after {:?}",
            session.output(),
            action,
        );
    }
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_invariants_hold(actions in prop::collection::vec(arb_action(), 1..60)) {
        let mut session = ConvertSession::new();
        for action in &actions {
            let prev_generation = session.generation();
            execute_action(&mut session, action);
            assert_invariants(&session, action, prev_generation);
        }
    }

    #[test]
    fn generation_count_matches_updates(
        inputs in prop::collection::vec("[a-z]{1,8}", 1..40)
    ) {
        let mut session = ConvertSession::new();
        for (i, input) in inputs.iter().enumerate() {
            let generation = session.update(input);
            prop_assert_eq!(generation, (i + 1) as u64);
        }
        prop_assert_eq!(session.generation(), inputs.len() as u64);
    }
}
