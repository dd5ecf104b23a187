//! # Calculator Demo
//!
//! A two-operand arithmetic calculator on the Reflow architecture.
//!
//! This demo showcases:
//! - Raw-input coercion at the reducer boundary (blank → 0, garbage → NaN)
//! - A sentinel result for division by zero instead of a fault
//! - Reducer composition: operand entry and arithmetic are separate reducers
//!   combined over the same state and actions
//!
//! ## Example
//!
//! ```
//! use calculator::{CalculatorAction, CalculatorState, CalcResult, calculator_reducer};
//! use reflow_core::Reducer;
//!
//! let reducer = calculator_reducer();
//! let mut state = CalculatorState::default();
//!
//! reducer.reduce(&mut state, CalculatorAction::SetOperand1("6".into()), &());
//! reducer.reduce(&mut state, CalculatorAction::SetOperand2("3".into()), &());
//! reducer.reduce(&mut state, CalculatorAction::Div, &());
//! assert_eq!(state.result, CalcResult::Value(2.0));
//! ```

mod reducer;
mod types;

pub use reducer::{ArithmeticReducer, OperandReducer, calculator_reducer};
pub use types::{CalcResult, CalculatorAction, CalculatorState, coerce_operand};
