//! Persisting reducer wrapper
//!
//! [`Persisted`] mirrors the whole state subtree to a [`KeyValueStore`] on
//! every dispatched action and rehydrates it at startup via
//! [`rehydrate`](crate::rehydrate). Writes are best-effort: a failed write is
//! logged and the in-memory state keeps going.

use reflow_core::environment::KeyValueStore;
use reflow_core::{Effect, Reducer, SmallVec};
use serde::Serialize;
use std::sync::Arc;

/// Persistence configuration
///
/// Names the fixed root key the state subtree is stored under.
#[derive(Debug, Clone)]
pub struct PersistConfig {
    /// Root key for the serialized state
    pub key: String,
}

impl PersistConfig {
    /// Create a configuration with the given root key
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Reducer wrapper that mirrors state to storage on every action
///
/// Delegates to the inner reducer, then appends one write effect that
/// serializes the post-transition state and saves it under the configured
/// root key. The inner reducer's behavior is otherwise unchanged.
pub struct Persisted<R> {
    inner: R,
    storage: Arc<dyn KeyValueStore>,
    config: PersistConfig,
}

impl<R> Persisted<R> {
    /// Wrap `inner` so its state is mirrored to `storage`
    #[must_use]
    pub fn new(inner: R, storage: Arc<dyn KeyValueStore>, config: PersistConfig) -> Self {
        Self {
            inner,
            storage,
            config,
        }
    }
}

impl<R> Reducer for Persisted<R>
where
    R: Reducer,
    R::State: Serialize,
{
    type State = R::State;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut effects = self.inner.reduce(state, action, env);

        // The whole subtree is written on every change, not a diff.
        let payload = match serde_json::to_string(&*state) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, key = %self.config.key, "Failed to serialize state");
                return effects;
            },
        };

        let storage = Arc::clone(&self.storage);
        let key = self.config.key.clone();
        effects.push(Effect::future(async move {
            if let Err(err) = storage.save(&key, &payload) {
                tracing::warn!(error = %err, key = %key, "Failed to persist state");
            }
            None
        }));

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, rehydrate};
    use reflow_core::{Deserialize, Serialize};

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    struct TallyState {
        value: i64,
    }

    #[derive(Clone, Debug)]
    enum TallyAction {
        Add(i64),
    }

    struct TallyReducer;

    impl Reducer for TallyReducer {
        type State = TallyState;
        type Action = TallyAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            let TallyAction::Add(amount) = action;
            state.value += amount;
            SmallVec::new()
        }
    }

    fn run_write_effects(effects: SmallVec<[Effect<TallyAction>; 4]>) {
        for effect in effects {
            if let Effect::Future(fut) = effect {
                let produced = tokio_test::block_on(fut);
                assert!(produced.is_none(), "write effect must not feed back");
            }
        }
    }

    #[test]
    fn every_action_mirrors_state() {
        let storage = MemoryStore::new();
        let reducer = Persisted::new(
            TallyReducer,
            Arc::new(storage.clone()),
            PersistConfig::new("root"),
        );

        let mut state = TallyState::default();
        run_write_effects(reducer.reduce(&mut state, TallyAction::Add(3), &()));
        run_write_effects(reducer.reduce(&mut state, TallyAction::Add(4), &()));

        let persisted: Option<TallyState> = rehydrate(&storage, "root");
        assert_eq!(persisted, Some(TallyState { value: 7 }));
    }

    #[test]
    fn write_effect_is_appended_to_inner_effects() {
        let reducer = Persisted::new(
            TallyReducer,
            Arc::new(MemoryStore::new()),
            PersistConfig::new("root"),
        );

        let mut state = TallyState::default();
        let effects = reducer.reduce(&mut state, TallyAction::Add(1), &());

        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::Future(_)));
    }
}
