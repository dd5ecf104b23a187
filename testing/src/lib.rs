//! # Reflow Testing
//!
//! Testing utilities and helpers for the Reflow state container.
//!
//! This crate provides:
//! - Mock implementations of environment traits (deterministic clocks)
//! - A fluent Given-When-Then builder for reducer tests
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use reflow_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(CounterReducer::new())
//!     .with_env(CounterEnvironment::new(test_clock()))
//!     .given_state(CounterState::default())
//!     .when_action(CounterAction::Increment)
//!     .then_state(|state| assert_eq!(state.value, 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use reflow_core::environment::Clock;

mod reducer_test;

pub use mocks::{FixedClock, StepClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use reflow_testing::mocks::FixedClock;
    /// use reflow_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock that advances a fixed step on every reading
    ///
    /// Useful when successive readings must differ - for example when ids are
    /// derived from creation timestamps.
    ///
    /// # Example
    ///
    /// ```
    /// use reflow_testing::mocks::StepClock;
    /// use reflow_core::environment::Clock;
    /// use chrono::{Duration, Utc};
    ///
    /// let clock = StepClock::new(Utc::now(), Duration::milliseconds(1));
    /// assert!(clock.now() < clock.now());
    /// ```
    #[derive(Debug)]
    pub struct StepClock {
        base: DateTime<Utc>,
        step: chrono::Duration,
        readings: AtomicI64,
    }

    impl StepClock {
        /// Create a clock starting at `base`, advancing `step` per reading
        #[must_use]
        pub const fn new(base: DateTime<Utc>, step: chrono::Duration) -> Self {
            Self {
                base,
                step,
                readings: AtomicI64::new(0),
            }
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let reading = self.readings.fetch_add(1, Ordering::SeqCst);
            self.base + self.step * i32::try_from(reading).unwrap_or(i32::MAX)
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}
