//! Countdown timer
//!
//! Counts a configured limit down to zero and stops itself when it gets
//! there.

use reflow_core::{Effect, EffectId, Reducer, SmallVec, smallvec};
use std::time::Duration;

/// Cancellation id of the countdown ticker
pub const TICK_ID: EffectId = EffectId::from_static("countdown.tick");

/// Interval between ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Countdown state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownState {
    /// Seconds left
    pub remaining_seconds: u64,
    /// Whether the ticker is armed
    pub running: bool,
}

/// Countdown actions
#[derive(Debug, Clone, Copy)]
pub enum CountdownAction {
    /// Set the limit to count down from; ignored while running
    SetLimit(u64),
    /// Arm the repeating tick; a zero limit stays stopped
    Start,
    /// Cancel the tick, keeping the remaining time
    Stop,
    /// One second elapsed (fed back by the ticker)
    Tick,
}

/// Countdown reducer
#[derive(Debug, Clone, Copy, Default)]
pub struct CountdownReducer;

impl CountdownReducer {
    /// Creates a new `CountdownReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CountdownReducer {
    type State = CountdownState;
    type Action = CountdownAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CountdownAction::SetLimit(limit) => {
                if !state.running {
                    state.remaining_seconds = limit;
                }
                SmallVec::new()
            },
            CountdownAction::Start => {
                if state.running || state.remaining_seconds == 0 {
                    return SmallVec::new();
                }
                state.running = true;
                smallvec![Effect::every(
                    TICK_ID,
                    TICK_INTERVAL,
                    CountdownAction::Tick
                )]
            },
            CountdownAction::Tick => {
                if !state.running {
                    return SmallVec::new();
                }
                state.remaining_seconds = state.remaining_seconds.saturating_sub(1);
                if state.remaining_seconds == 0 {
                    // Reached zero: the countdown stops itself
                    state.running = false;
                    return smallvec![Effect::cancel(TICK_ID)];
                }
                SmallVec::new()
            },
            CountdownAction::Stop => {
                state.running = false;
                smallvec![Effect::cancel(TICK_ID)]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_testing::{ReducerTest, assertions};

    #[test]
    fn set_limit_only_while_stopped() {
        let reducer = CountdownReducer::new();

        let mut stopped = CountdownState::default();
        reducer.reduce(&mut stopped, CountdownAction::SetLimit(10), &());
        assert_eq!(stopped.remaining_seconds, 10);

        let mut running = CountdownState {
            remaining_seconds: 5,
            running: true,
        };
        reducer.reduce(&mut running, CountdownAction::SetLimit(10), &());
        assert_eq!(running.remaining_seconds, 5);
    }

    #[test]
    fn start_with_zero_limit_stays_stopped() {
        ReducerTest::new(CountdownReducer::new())
            .with_env(())
            .given_state(CountdownState::default())
            .when_action(CountdownAction::Start)
            .then_state(|state| {
                assert!(!state.running);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn start_arms_the_ticker() {
        ReducerTest::new(CountdownReducer::new())
            .with_env(())
            .given_state(CountdownState {
                remaining_seconds: 3,
                running: false,
            })
            .when_action(CountdownAction::Start)
            .then_state(|state| {
                assert!(state.running);
            })
            .then_effects(assertions::assert_has_every_effect)
            .run();
    }

    #[test]
    fn final_tick_stops_and_cancels() {
        let reducer = CountdownReducer::new();
        let mut state = CountdownState {
            remaining_seconds: 2,
            running: true,
        };

        let effects = reducer.reduce(&mut state, CountdownAction::Tick, &());
        assert_eq!(state.remaining_seconds, 1);
        assert!(state.running);
        assertions::assert_no_effects(&effects);

        let effects = reducer.reduce(&mut state, CountdownAction::Tick, &());
        assert_eq!(state.remaining_seconds, 0);
        assert!(!state.running);
        assertions::assert_has_cancel_effect(&effects, &TICK_ID);
    }

    #[test]
    fn stray_tick_while_stopped_is_noop() {
        let reducer = CountdownReducer::new();
        let mut state = CountdownState {
            remaining_seconds: 2,
            running: false,
        };

        let effects = reducer.reduce(&mut state, CountdownAction::Tick, &());
        assert_eq!(state.remaining_seconds, 2);
        assertions::assert_no_effects(&effects);
    }
}
