//! # Reflow Runtime
//!
//! Runtime implementation for the Reflow state container.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: owned state handle that runs the reducer and executes effects
//! - **Effect Executor**: executes effect descriptions and feeds actions back
//! - **Cancellation Registry**: tracks in-flight cancellable and repeating
//!   effects so teardown is deterministic
//!
//! The store serializes reducer runs: one action is reduced at a time, on the
//! calling task, while effects execute asynchronously on the event loop.
//! Repeating timer effects ([`Effect::Every`]) are registered by id and are
//! cancelled either explicitly ([`Effect::Cancel`]) or when the store shuts
//! down - a scheduled repetition is never left dangling.
//!
//! ## Example
//!
//! ```ignore
//! use reflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! let handle = store.send(Action::DoSomething).await?;
//! handle.wait().await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use reflow_core::effect::{Effect, EffectId};
use reflow_core::reducer::Reducer;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast, watch};

pub use error::StoreError;
pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown
        /// initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        ///
        /// Some effects were still running when the timeout elapsed.
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for effects
        ///
        /// Returned by [`EffectHandle::wait_with_timeout`](crate::EffectHandle::wait_with_timeout)
        /// when the timeout expires before the tracked effects complete.
        #[error("Timeout waiting for effects")]
        Timeout,
    }
}

/// Store configuration
///
/// # Example
///
/// ```
/// use reflow_runtime::StoreConfig;
/// use std::time::Duration;
///
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(256)
///     .with_shutdown_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Capacity of the action broadcast channel
    pub broadcast_capacity: usize,
    /// Default timeout for graceful shutdown
    pub default_shutdown_timeout: Duration,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(broadcast_capacity: usize, default_shutdown_timeout: Duration) -> Self {
        Self {
            broadcast_capacity,
            default_shutdown_timeout,
        }
    }

    /// Set the action broadcast channel capacity
    ///
    /// Default capacity is 16. Increase if observers frequently lag.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }

    /// Set the default shutdown timeout
    #[must_use]
    pub const fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.default_shutdown_timeout = timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
            default_shutdown_timeout: Duration::from_secs(30),
        }
    }
}

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`] to allow waiting for the effects spawned by
/// that action. Actions produced by effect feedback are applied to state
/// before the producing effect is considered complete, so state read after
/// [`wait`](EffectHandle::wait) reflects the feedback of the tracked effects.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::Start).await?;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    pending: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            pending: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: tx,
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete
    ///
    /// Useful for initialization in loops where you need a `last_handle`.
    #[must_use]
    pub fn completed() -> Self {
        let (tx, rx) = watch::channel(());
        let _ = tx.send(());

        Self {
            pending: Arc::new(AtomicUsize::new(0)),
            completion: rx,
        }
    }

    /// Wait for all tracked effects to complete
    ///
    /// Blocks until the effect counter reaches zero. Note that a repeating
    /// [`Effect::Every`] only completes once cancelled.
    pub async fn wait(&mut self) {
        while self.pending.load(Ordering::SeqCst) > 0 {
            if self.completion.changed().await.is_err() {
                break;
            }
        }
    }

    /// Wait for all tracked effects to complete, with a timeout
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires before all
    /// tracked effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.pending.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: effect tracking context passed through effect execution
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    /// Increment the effect counter (effect started)
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    /// Decrement the effect counter (effect completed)
    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Counter reached zero, notify waiters
            let _ = self.notifier.send(());
        }
    }
}

impl Clone for EffectTracking {
    fn clone(&self) -> Self {
        Self {
            counter: Arc::clone(&self.counter),
            notifier: self.notifier.clone(),
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop
///
/// Ensures the counter is always decremented, even if the effect panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Guard that decrements an atomic counter on drop (for shutdown tracking)
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Internal: registry of in-flight cancellable effects
///
/// Each registration gets a generation number so a stale effect cleaning up
/// after itself cannot unregister a newer effect that reused its id.
struct CancelRegistry {
    slots: Mutex<HashMap<EffectId, (u64, watch::Sender<bool>)>>,
    next_generation: AtomicU64,
}

impl CancelRegistry {
    fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Register an effect under `id`, cancelling any in-flight effect that
    /// already holds the id.
    fn register(&self, id: &EffectId) -> (u64, watch::Receiver<bool>) {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = watch::channel(false);
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((_, previous)) = slots.insert(id.clone(), (generation, tx)) {
            let _ = previous.send(true);
        }
        (generation, rx)
    }

    /// Signal the effect registered under `id`, if any. Returns whether an
    /// effect was cancelled.
    fn cancel(&self, id: &EffectId) -> bool {
        let removed = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.remove(id)
        };
        match removed {
            Some((_, tx)) => {
                let _ = tx.send(true);
                true
            },
            None => false,
        }
    }

    /// Remove a finished effect's registration, but only if it still owns the
    /// slot.
    fn unregister(&self, id: &EffectId, generation: u64) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if slots.get(id).is_some_and(|(current, _)| *current == generation) {
            slots.remove(id);
        }
    }

    /// Cancel every registered effect (store teardown).
    fn cancel_all(&self) {
        let drained: Vec<_> = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.drain().collect()
        };
        for (id, (_, tx)) in drained {
            tracing::debug!(effect_id = %id, "Cancelling effect on shutdown");
            let _ = tx.send(true);
        }
    }
}

/// Store module - the runtime for reducers
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, CancelRegistry, DecrementGuard, Duration,
        Effect, EffectHandle, EffectId, EffectTracking, Future, Ordering, Reducer, RwLock,
        StoreConfig, StoreError, broadcast, watch,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (transition logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop and cancellation)
    ///
    /// It is the explicitly owned state handle: create one per feature at
    /// construction time, share clones of it, and shut it down when the
    /// owning scope is torn down.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        config: StoreConfig,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        cancellations: Arc<CancelRegistry>,
        /// Action broadcast channel for observing actions produced by effects.
        ///
        /// Initial actions passed to `send` are not broadcast; only feedback
        /// from effects is.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses the default [`StoreConfig`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let config = StoreConfig::default().with_broadcast_capacity(256);
        /// let store = Store::with_config(MyState::default(), MyReducer, env, config);
        /// ```
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                cancellations: Arc::new(CancelRegistry::new()),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Executes returned effects asynchronously
        /// 4. Effects may produce more actions (feedback loop)
        ///
        /// The reducer executes synchronously while holding the write lock,
        /// so concurrent `send` calls serialize at the reducer: one action at
        /// a time, no overlapping invocations.
        ///
        /// # Returns
        ///
        /// An [`EffectHandle`] that can be used to wait for the completion of
        /// the effects this action produced.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is
        /// shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let (handle, tracking) = EffectHandle::new();

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let effects = self
                    .reducer
                    .reduce(&mut state, action, self.environment.as_ref());
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                effects
            };

            for effect in effects {
                self.execute_effect(effect, &tracking);
            }

            Ok(handle)
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released
        /// promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Subscribe to all actions produced by effects
        ///
        /// Returns a receiver that gets a clone of every feedback action.
        /// If the receiver lags it skips old actions and observes
        /// `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Initiate graceful shutdown of the store
        ///
        /// This method:
        /// 1. Sets the shutdown flag (rejecting new actions)
        /// 2. Cancels every registered cancellable/repeating effect
        /// 3. Waits for in-flight effects to complete (with timeout)
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires
        /// before all pending effects complete.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            metrics::counter!("store.shutdown.initiated").increment(1);

            self.shutdown.store(true, Ordering::Release);

            // Repeating effects never complete on their own; tear them down
            // before waiting.
            self.cancellations.cancel_all();

            let start = tokio::time::Instant::now();
            let poll_interval = Duration::from_millis(25);

            loop {
                let pending = self.pending_effects.load(Ordering::Acquire);

                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    metrics::counter!("store.shutdown.completed").increment(1);
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(
                        pending_effects = pending,
                        "Shutdown timeout: {} effects still running",
                        pending
                    );
                    metrics::counter!("store.shutdown.timeout").increment(1);
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Graceful shutdown with the configured default timeout
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if effects outlive the
        /// configured `default_shutdown_timeout`.
        pub async fn shutdown_default(&self) -> Result<(), StoreError> {
            self.shutdown(self.config.default_shutdown_timeout).await
        }

        /// Execute an effect with tracking
        ///
        /// `None` and `Cancel` are handled synchronously on the sending task,
        /// so a cancellation dispatched by the reducer takes hold before any
        /// later tick of the cancelled effect. Everything else is spawned.
        fn execute_effect(&self, effect: Effect<A>, tracking: &EffectTracking) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Cancel(id) => {
                    metrics::counter!("store.effects.executed", "type" => "cancel").increment(1);
                    if self.cancellations.cancel(&id) {
                        tracing::debug!(effect_id = %id, "Cancelled in-flight effect");
                    } else {
                        tracing::trace!(effect_id = %id, "Cancel for unknown effect id (no-op)");
                    }
                },
                Effect::Parallel(effects) => {
                    for effect in effects {
                        self.execute_effect(effect, tracking);
                    }
                },
                Effect::Cancellable { id, effect } => {
                    metrics::counter!("store.effects.executed", "type" => "cancellable")
                        .increment(1);
                    // Register before spawning so a Cancel issued immediately
                    // after this send cannot race the registration.
                    let (generation, cancelled) = self.cancellations.register(&id);
                    let store = self.clone();
                    self.spawn_tracked(tracking, async move {
                        store.run_cancellable(id, generation, cancelled, *effect).await;
                    });
                },
                Effect::Every {
                    id,
                    interval,
                    action,
                } => {
                    metrics::counter!("store.effects.executed", "type" => "every").increment(1);
                    let (generation, cancelled) = self.cancellations.register(&id);
                    let store = self.clone();
                    self.spawn_tracked(tracking, async move {
                        store
                            .run_ticker(id, generation, cancelled, interval, *action)
                            .await;
                    });
                },
                effect @ (Effect::Delay { .. } | Effect::Future(_) | Effect::Sequential(_)) => {
                    let store = self.clone();
                    self.spawn_tracked(tracking, async move {
                        store.run_effect(effect).await;
                    });
                },
            }
        }

        /// Spawn a tracked effect task
        ///
        /// The tracking guard is dropped when the task finishes (or panics),
        /// which decrements both the handle counter and the store-wide
        /// pending counter.
        fn spawn_tracked<F>(&self, tracking: &EffectTracking, fut: F)
        where
            F: Future<Output = ()> + Send + 'static,
        {
            tracking.increment();
            self.pending_effects.fetch_add(1, Ordering::SeqCst);
            let tracking_guard = DecrementGuard(tracking.clone());
            let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

            tokio::spawn(async move {
                let _tracking_guard = tracking_guard;
                let _pending_guard = pending_guard;
                fut.await;
            });
        }

        /// Run an effect tree to completion on the current task
        async fn run_effect(&self, effect: Effect<A>) {
            match effect {
                Effect::None => {},
                Effect::Delay { duration, action } => {
                    metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                    tokio::time::sleep(duration).await;
                    self.feedback(*action).await;
                },
                Effect::Future(fut) => {
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    if let Some(action) = fut.await {
                        self.feedback(action).await;
                    } else {
                        tracing::trace!("Effect future completed without feedback");
                    }
                },
                Effect::Sequential(effects) => {
                    metrics::counter!("store.effects.executed", "type" => "sequential").increment(1);
                    for effect in effects {
                        Box::pin(self.run_effect(effect)).await;
                    }
                },
                Effect::Parallel(effects) => {
                    futures::future::join_all(
                        effects
                            .into_iter()
                            .map(|effect| Box::pin(self.run_effect(effect))),
                    )
                    .await;
                },
                Effect::Cancellable { id, effect } => {
                    let (generation, cancelled) = self.cancellations.register(&id);
                    Box::pin(self.run_cancellable(id, generation, cancelled, *effect)).await;
                },
                Effect::Every {
                    id,
                    interval,
                    action,
                } => {
                    let (generation, cancelled) = self.cancellations.register(&id);
                    self.run_ticker(id, generation, cancelled, interval, *action)
                        .await;
                },
                Effect::Cancel(id) => {
                    self.cancellations.cancel(&id);
                },
            }
        }

        /// Run an effect until it completes or its id is cancelled
        async fn run_cancellable(
            &self,
            id: EffectId,
            generation: u64,
            mut cancelled: watch::Receiver<bool>,
            effect: Effect<A>,
        ) {
            tokio::select! {
                () = Box::pin(self.run_effect(effect)) => {
                    tracing::trace!(effect_id = %id, "Cancellable effect completed");
                },
                () = Self::until_cancelled(&mut cancelled) => {
                    tracing::debug!(effect_id = %id, "Effect cancelled");
                    metrics::counter!("store.effects.cancelled").increment(1);
                },
            }
            self.cancellations.unregister(&id, generation);
        }

        /// Dispatch `action` on every interval tick until cancelled
        ///
        /// Each tick is a discrete, non-overlapping state update: the feedback
        /// send completes before the next tick is awaited.
        async fn run_ticker(
            &self,
            id: EffectId,
            generation: u64,
            mut cancelled: watch::Receiver<bool>,
            interval: Duration,
            action: A,
        ) {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The interval yields immediately once armed; consume that tick so
            // the first dispatched action lands one full interval from now.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if self.shutdown.load(Ordering::Acquire) {
                            break;
                        }
                        metrics::counter!("store.effects.ticks").increment(1);
                        self.feedback(action.clone()).await;
                    },
                    () = Self::until_cancelled(&mut cancelled) => {
                        tracing::debug!(effect_id = %id, "Ticker cancelled");
                        break;
                    },
                }
            }
            self.cancellations.unregister(&id, generation);
        }

        /// Resolve when the cancellation flag is raised
        ///
        /// A dropped sender (the registry replaced or tore down this slot)
        /// counts as cancellation.
        async fn until_cancelled(cancelled: &mut watch::Receiver<bool>) {
            loop {
                if *cancelled.borrow() {
                    return;
                }
                if cancelled.changed().await.is_err() {
                    return;
                }
            }
        }

        /// Feed an effect-produced action back into the store
        ///
        /// The action is broadcast to observers, then reduced. Feedback
        /// arriving during shutdown is dropped.
        async fn feedback(&self, action: A) {
            let _ = self.action_broadcast.send(action.clone());
            match self.send(action).await {
                Ok(_handle) => {},
                Err(err) => {
                    tracing::debug!(error = %err, "Feedback action dropped");
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                config: self.config.clone(),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                cancellations: Arc::clone(&self.cancellations),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field(
                    "pending_effects",
                    &self.pending_effects.load(Ordering::SeqCst),
                )
                .field("shutdown", &self.shutdown.load(Ordering::SeqCst))
                .finish_non_exhaustive()
        }
    }
}
