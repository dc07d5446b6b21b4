//! Property-based tests for the expression engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use novacalc::arith::{format_result, round_result};
use novacalc::core::{
    Action, CalculatorState, History, HistoryEntry, Operator, ScientificFn, HISTORY_LIMIT,
};
use proptest::prelude::*;

const OPERATORS: [Operator; 5] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::Percent,
];

fn run(state: CalculatorState, actions: &[Action]) -> CalculatorState {
    actions.iter().fold(state, |state, action| state.apply(action))
}

fn enter_number(state: CalculatorState, literal: &str) -> CalculatorState {
    literal.chars().fold(state, |state, c| state.enter_digit(c))
}

prop_compose! {
    fn arbitrary_operator()(index in 0..OPERATORS.len()) -> Operator {
        OPERATORS[index]
    }
}

prop_compose! {
    fn arbitrary_scientific()(index in 0..ScientificFn::ALL.len()) -> ScientificFn {
        ScientificFn::ALL[index]
    }
}

fn arbitrary_digit() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'])
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Action::Digit),
        2 => arbitrary_operator().prop_map(Action::Operator),
        2 => Just(Action::Evaluate),
        1 => arbitrary_scientific().prop_map(Action::Scientific),
        1 => Just(Action::Delete),
        1 => Just(Action::Clear),
    ]
}

fn expression_is_well_formed(expression: &str) -> bool {
    expression.is_empty()
        || OPERATORS
            .iter()
            .any(|op| expression.ends_with(&format!(" {} ", op.glyph())))
}

proptest! {
    #[test]
    fn digits_concatenate(literal in "[1-9][0-9]{0,11}") {
        let state = enter_number(CalculatorState::new(), &literal);
        prop_assert_eq!(state.display(), literal.as_str());
    }

    #[test]
    fn operand_never_has_two_decimal_points(
        digits in prop::collection::vec(arbitrary_digit(), 0..20)
    ) {
        let state = digits
            .iter()
            .fold(CalculatorState::new(), |state, d| state.enter_digit(*d));
        prop_assert!(state.display().matches('.').count() <= 1);
    }

    #[test]
    fn reachable_states_keep_invariants(
        actions in prop::collection::vec(arbitrary_action(), 0..60)
    ) {
        let mut state = CalculatorState::new();
        for action in &actions {
            state = state.apply(action);
            prop_assert!(!state.display().is_empty());
            prop_assert!(state.history().len() <= HISTORY_LIMIT);
            prop_assert!(
                expression_is_well_formed(state.expression()),
                "malformed expression {:?}",
                state.expression()
            );
        }
    }

    #[test]
    fn clear_is_idempotent(actions in prop::collection::vec(arbitrary_action(), 0..30)) {
        let state = run(CalculatorState::new(), &actions);
        let once = state.clear();
        let twice = once.clear();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.display(), "0");
        prop_assert_eq!(once.history(), state.history());
    }

    #[test]
    fn addition_matches_integer_sum(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let state = enter_number(CalculatorState::new(), &a.to_string())
            .enter_operator(Operator::Add);
        let state = enter_number(state, &b.to_string()).evaluate();

        let expected = (u64::from(a) + u64::from(b)).to_string();
        prop_assert_eq!(state.display(), expected.as_str());
        prop_assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn division_by_zero_never_records(a in 0u32..1_000_000) {
        let state = enter_number(CalculatorState::new(), &a.to_string())
            .enter_operator(Operator::Divide)
            .enter_digit('0')
            .evaluate();

        prop_assert!(state.is_error());
        prop_assert!(state.history().is_empty());
    }

    #[test]
    fn formatted_results_parse_back(value in -1.0e9f64..1.0e9) {
        let text = format_result(value);
        let parsed: f64 = text.parse().unwrap();
        prop_assert_eq!(parsed, round_result(value));
        prop_assert_eq!(format_result(parsed), text);
    }

    #[test]
    fn displayed_results_reformat_identically(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let state = run(CalculatorState::new(), &actions);
        if state.last_result() == Some(state.display()) && !state.is_error() {
            let value: f64 = state.display().parse().unwrap();
            prop_assert_eq!(format_result(value), state.display());
        }
    }

    #[test]
    fn history_never_exceeds_limit(count in 0usize..20) {
        let history = (0..count).fold(History::new(), |history, i| {
            history.record(HistoryEntry::new(format!("{i} + 0"), i.to_string()))
        });

        prop_assert_eq!(history.len(), count.min(HISTORY_LIMIT));
        if count > 0 {
            let latest = (count - 1).to_string();
            prop_assert_eq!(history.latest().map(|e| e.result.as_str()), Some(latest.as_str()));
        }
    }

    #[test]
    fn state_roundtrip_serialization(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let state = run(CalculatorState::new(), &actions);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
