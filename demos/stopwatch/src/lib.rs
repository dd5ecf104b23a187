//! # Stopwatch Demo
//!
//! Timer-driven state on the Reflow architecture: a count-up stopwatch and a
//! countdown that stops itself at zero.
//!
//! Both features arm a repeating [`Effect::Every`](reflow_core::Effect) tick
//! under a fixed id. Stopping is an explicit
//! [`Effect::Cancel`](reflow_core::Effect); tearing the store down cancels
//! the tick too, so the scheduled repetition is never left dangling.

pub mod countdown;
pub mod stopwatch;

pub use countdown::{CountdownAction, CountdownReducer, CountdownState};
pub use stopwatch::{StopwatchAction, StopwatchReducer, StopwatchState, format_elapsed};
