//! Reducer logic for the calculator demo
//!
//! The transition logic is split across two reducers sharing one state and
//! action type: operand entry and arithmetic. Each one ignores the actions
//! of the other (the identity fallback), and [`calculator_reducer`] combines
//! them.

use crate::types::{CalcResult, CalculatorAction, CalculatorState, coerce_operand};
use reflow_core::composition::{CombinedReducer, combine_reducers};
use reflow_core::{Effect, Reducer, SmallVec};

/// Handles operand entry and its share of `Reset`
#[derive(Debug, Clone, Copy, Default)]
pub struct OperandReducer;

impl Reducer for OperandReducer {
    type State = CalculatorState;
    type Action = CalculatorAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CalculatorAction::SetOperand1(raw) => {
                state.operand1 = coerce_operand(&raw);
            },
            CalculatorAction::SetOperand2(raw) => {
                state.operand2 = coerce_operand(&raw);
            },
            CalculatorAction::Reset => {
                state.operand1 = 0.0;
                state.operand2 = 0.0;
            },
            // Arithmetic belongs to the other reducer
            _ => {},
        }

        SmallVec::new()
    }
}

/// Handles the explicit operations and its share of `Reset`
///
/// The result slot changes here and nowhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticReducer;

impl Reducer for ArithmeticReducer {
    type State = CalculatorState;
    type Action = CalculatorAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CalculatorAction::Add => {
                state.result = CalcResult::Value(state.operand1 + state.operand2);
            },
            CalculatorAction::Sub => {
                state.result = CalcResult::Value(state.operand1 - state.operand2);
            },
            CalculatorAction::Mul => {
                state.result = CalcResult::Value(state.operand1 * state.operand2);
            },
            CalculatorAction::Div => {
                // Division by zero never panics; it parks the error marker in
                // the result slot.
                state.result = if state.operand2 == 0.0 {
                    CalcResult::Error
                } else {
                    CalcResult::Value(state.operand1 / state.operand2)
                };
            },
            CalculatorAction::Reset => {
                state.result = CalcResult::default();
            },
            _ => {},
        }

        SmallVec::new()
    }
}

/// The full calculator: operand entry combined with arithmetic
#[must_use]
pub fn calculator_reducer() -> CombinedReducer<CalculatorState, CalculatorAction, ()> {
    combine_reducers(vec![
        Box::new(OperandReducer),
        Box::new(ArithmeticReducer),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_testing::{ReducerTest, assertions};

    fn reduce_all(state: &mut CalculatorState, actions: Vec<CalculatorAction>) {
        let reducer = calculator_reducer();
        for action in actions {
            reducer.reduce(state, action, &());
        }
    }

    #[test]
    fn six_divided_by_three_is_two() {
        let mut state = CalculatorState::default();
        reduce_all(
            &mut state,
            vec![
                CalculatorAction::SetOperand1("6".into()),
                CalculatorAction::SetOperand2("3".into()),
                CalculatorAction::Div,
            ],
        );
        assert_eq!(state.result, CalcResult::Value(2.0));
    }

    #[test]
    fn division_by_zero_yields_error_marker() {
        let mut state = CalculatorState::default();
        reduce_all(
            &mut state,
            vec![
                CalculatorAction::SetOperand1("6".into()),
                CalculatorAction::SetOperand2("3".into()),
                CalculatorAction::Div,
            ],
        );
        assert_eq!(state.result, CalcResult::Value(2.0));

        reduce_all(
            &mut state,
            vec![CalculatorAction::SetOperand2("0".into()), CalculatorAction::Div],
        );
        assert!(state.result.is_error());
    }

    #[test]
    fn result_only_changes_on_explicit_operation() {
        let mut state = CalculatorState::default();
        reduce_all(
            &mut state,
            vec![
                CalculatorAction::SetOperand1("2".into()),
                CalculatorAction::SetOperand2("5".into()),
                CalculatorAction::Add,
            ],
        );
        assert_eq!(state.result, CalcResult::Value(7.0));

        // Changing operands leaves the result alone until the next operation
        reduce_all(&mut state, vec![CalculatorAction::SetOperand1("100".into())]);
        assert_eq!(state.result, CalcResult::Value(7.0));

        reduce_all(&mut state, vec![CalculatorAction::Mul]);
        assert_eq!(state.result, CalcResult::Value(500.0));
    }

    #[test]
    fn unparseable_operand_propagates_nan() {
        let mut state = CalculatorState::default();
        reduce_all(
            &mut state,
            vec![
                CalculatorAction::SetOperand1("six".into()),
                CalculatorAction::SetOperand2("3".into()),
                CalculatorAction::Add,
            ],
        );
        match state.result {
            CalcResult::Value(value) => assert!(value.is_nan()),
            CalcResult::Error => panic!("NaN must propagate as a value, not the error marker"),
        }
    }

    #[test]
    fn nan_operand2_divides_to_nan_not_error() {
        // NaN is not zero, so division proceeds and the NaN propagates
        let mut state = CalculatorState::default();
        reduce_all(
            &mut state,
            vec![
                CalculatorAction::SetOperand1("1".into()),
                CalculatorAction::SetOperand2("x".into()),
                CalculatorAction::Div,
            ],
        );
        match state.result {
            CalcResult::Value(value) => assert!(value.is_nan()),
            CalcResult::Error => panic!("NaN operand must not trip the zero guard"),
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut once = CalculatorState {
            operand1: 4.0,
            operand2: 2.0,
            result: CalcResult::Value(8.0),
        };
        reduce_all(&mut once, vec![CalculatorAction::Reset]);

        let mut twice = CalculatorState {
            operand1: 4.0,
            operand2: 2.0,
            result: CalcResult::Value(8.0),
        };
        reduce_all(&mut twice, vec![CalculatorAction::Reset, CalculatorAction::Reset]);

        assert_eq!(once, twice);
        assert_eq!(once, CalculatorState::default());
    }

    #[test]
    fn operand_reducer_ignores_arithmetic() {
        ReducerTest::new(OperandReducer)
            .with_env(())
            .given_state(CalculatorState {
                operand1: 1.0,
                operand2: 2.0,
                result: CalcResult::Value(3.0),
            })
            .when_action(CalculatorAction::Div)
            .then_state(|state| {
                assert_eq!(
                    *state,
                    CalculatorState {
                        operand1: 1.0,
                        operand2: 2.0,
                        result: CalcResult::Value(3.0),
                    }
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
