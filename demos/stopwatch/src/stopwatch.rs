//! Count-up stopwatch

use reflow_core::{Effect, EffectId, Reducer, SmallVec, smallvec};
use std::time::Duration;

/// Cancellation id of the stopwatch ticker
pub const TICK_ID: EffectId = EffectId::from_static("stopwatch.tick");

/// Interval between ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Stopwatch state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopwatchState {
    /// Whole seconds elapsed while running
    pub elapsed_seconds: u64,
    /// Whether the ticker is armed
    pub running: bool,
}

/// Stopwatch actions
#[derive(Debug, Clone, Copy)]
pub enum StopwatchAction {
    /// Arm the repeating tick
    Start,
    /// Cancel the tick, keeping the elapsed time
    Stop,
    /// Cancel the tick and zero the elapsed time
    Reset,
    /// One second elapsed (fed back by the ticker)
    Tick,
}

/// Stopwatch reducer
///
/// `Start` arms an [`Effect::Every`] under [`TICK_ID`]; `Stop` and `Reset`
/// cancel it. A tick arriving after the stopwatch stopped is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwatchReducer;

impl StopwatchReducer {
    /// Creates a new `StopwatchReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for StopwatchReducer {
    type State = StopwatchState;
    type Action = StopwatchAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            StopwatchAction::Start => {
                if state.running {
                    return SmallVec::new();
                }
                state.running = true;
                smallvec![Effect::every(
                    TICK_ID,
                    TICK_INTERVAL,
                    StopwatchAction::Tick
                )]
            },
            StopwatchAction::Tick => {
                if state.running {
                    state.elapsed_seconds += 1;
                }
                SmallVec::new()
            },
            StopwatchAction::Stop => {
                state.running = false;
                smallvec![Effect::cancel(TICK_ID)]
            },
            StopwatchAction::Reset => {
                state.running = false;
                state.elapsed_seconds = 0;
                smallvec![Effect::cancel(TICK_ID)]
            },
        }
    }
}

/// Format elapsed seconds as `HH:MM:SS`
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_testing::{ReducerTest, assertions};

    #[test]
    fn start_arms_the_ticker() {
        ReducerTest::new(StopwatchReducer::new())
            .with_env(())
            .given_state(StopwatchState::default())
            .when_action(StopwatchAction::Start)
            .then_state(|state| {
                assert!(state.running);
                assert_eq!(state.elapsed_seconds, 0);
            })
            .then_effects(assertions::assert_has_every_effect)
            .run();
    }

    #[test]
    fn start_while_running_is_noop() {
        ReducerTest::new(StopwatchReducer::new())
            .with_env(())
            .given_state(StopwatchState {
                elapsed_seconds: 4,
                running: true,
            })
            .when_action(StopwatchAction::Start)
            .then_state(|state| {
                assert!(state.running);
                assert_eq!(state.elapsed_seconds, 4);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn tick_counts_only_while_running() {
        let reducer = StopwatchReducer::new();

        let mut running = StopwatchState {
            elapsed_seconds: 1,
            running: true,
        };
        reducer.reduce(&mut running, StopwatchAction::Tick, &());
        assert_eq!(running.elapsed_seconds, 2);

        let mut stopped = StopwatchState {
            elapsed_seconds: 1,
            running: false,
        };
        reducer.reduce(&mut stopped, StopwatchAction::Tick, &());
        assert_eq!(stopped.elapsed_seconds, 1);
    }

    #[test]
    fn stop_cancels_and_keeps_elapsed() {
        ReducerTest::new(StopwatchReducer::new())
            .with_env(())
            .given_state(StopwatchState {
                elapsed_seconds: 7,
                running: true,
            })
            .when_action(StopwatchAction::Stop)
            .then_state(|state| {
                assert!(!state.running);
                assert_eq!(state.elapsed_seconds, 7);
            })
            .then_effects(|effects| assertions::assert_has_cancel_effect(effects, &TICK_ID))
            .run();
    }

    #[test]
    fn reset_cancels_and_zeroes() {
        ReducerTest::new(StopwatchReducer::new())
            .with_env(())
            .given_state(StopwatchState {
                elapsed_seconds: 7,
                running: true,
            })
            .when_action(StopwatchAction::Reset)
            .then_state(|state| {
                assert_eq!(*state, StopwatchState::default());
            })
            .then_effects(|effects| assertions::assert_has_cancel_effect(effects, &TICK_ID))
            .run();
    }

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3661), "01:01:01");
        assert_eq!(format_elapsed(86_399), "23:59:59");
    }
}
