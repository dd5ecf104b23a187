//! # Persisted Counter Demo
//!
//! A counter whose value survives restarts.
//!
//! This demo showcases:
//! - A pure reducer over a three-action vocabulary
//! - The [`Persisted`] wrapper mirroring state to storage on every change
//! - Rehydration at startup (stored value if present, else zero)
//!
//! ## Example
//!
//! ```no_run
//! use counter::{CounterAction, persisted_reducer, rehydrate_counter};
//! use reflow_runtime::Store;
//! use reflow_storage::MemoryStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), reflow_runtime::StoreError> {
//! let storage = Arc::new(MemoryStore::new());
//! let initial = rehydrate_counter(storage.as_ref());
//! let store = Store::new(initial, persisted_reducer(storage), ());
//!
//! store.send(CounterAction::Increment).await?;
//! let value = store.state(|s| s.value).await;
//! assert_eq!(value, 1);
//! # Ok(())
//! # }
//! ```

use reflow_core::environment::KeyValueStore;
use reflow_core::{Deserialize, Effect, Reducer, Serialize, SmallVec};
use reflow_storage::{PersistConfig, Persisted, rehydrate};
use std::sync::Arc;

/// Root key the counter subtree is persisted under
pub const ROOT_KEY: &str = "root";

/// Counter state
///
/// The whole struct is the persisted subtree: it is serialized and written
/// on every dispatched action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current counter value
    pub value: i64,
}

/// Counter actions
#[derive(Debug, Clone, Copy)]
pub enum CounterAction {
    /// Increment the counter by 1
    Increment,
    /// Decrement the counter by 1
    Decrement,
    /// Reset the counter to 0
    Reset,
}

/// Counter reducer
///
/// A pure state machine: every effect comes from the [`Persisted`] wrapper,
/// never from here.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.value += 1;
            },
            CounterAction::Decrement => {
                state.value -= 1;
            },
            CounterAction::Reset => {
                state.value = 0;
            },
        }

        SmallVec::new()
    }
}

/// The counter reducer wrapped for persistence
///
/// Every action mirrors the whole [`CounterState`] to `storage` under
/// [`ROOT_KEY`].
#[must_use]
pub fn persisted_reducer(storage: Arc<dyn KeyValueStore>) -> Persisted<CounterReducer> {
    Persisted::new(CounterReducer::new(), storage, PersistConfig::new(ROOT_KEY))
}

/// Read the persisted counter back, falling back to zero
#[must_use]
pub fn rehydrate_counter(storage: &dyn KeyValueStore) -> CounterState {
    rehydrate(storage, ROOT_KEY).unwrap_or_default()
}
