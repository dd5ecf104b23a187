//! # Reflow Storage
//!
//! Key-value persistence for Reflow state.
//!
//! The model is a thin browser-storage-style adapter: the whole state subtree
//! is serialized as JSON and written under a fixed root key on every change,
//! and read back once at startup. There is no versioning and no migration -
//! a payload that fails to deserialize is discarded and the caller falls back
//! to its zero state.
//!
//! ## Components
//!
//! - [`MemoryStore`]: in-process adapter, also useful as a test double
//! - [`JsonFileStore`]: one JSON file per root key under a directory
//! - [`Persisted`]: reducer wrapper that mirrors state to storage on every
//!   action
//! - [`rehydrate`]: startup read-back
//!
//! ## Example
//!
//! ```ignore
//! let storage = Arc::new(JsonFileStore::new(data_dir));
//! let initial = rehydrate(storage.as_ref(), "root").unwrap_or_default();
//! let reducer = Persisted::new(CounterReducer::new(), storage, PersistConfig::new("root"));
//! let store = Store::new(initial, reducer, env);
//! ```

use reflow_core::environment::{KeyValueStore, StorageError};
use serde::de::DeserializeOwned;

mod adapters;
mod persist;

pub use adapters::{JsonFileStore, MemoryStore};
pub use persist::{PersistConfig, Persisted};

/// Read persisted state back from storage
///
/// Returns `None` when nothing is stored under `key`, when the adapter
/// cannot be read, or when the payload does not deserialize - in every case
/// the caller starts from its zero state. Failures are logged, never
/// surfaced.
pub fn rehydrate<S: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<S> {
    let payload = match storage.load(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(error = %err, key, "Failed to read persisted state");
            return None;
        },
    };

    match serde_json::from_str(&payload) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!(error = %err, key, "Discarding unreadable persisted state");
            None
        },
    }
}

/// Convenience re-export of the adapter error type
pub type Error = StorageError;
