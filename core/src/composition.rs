//! Reducer composition utilities
//!
//! A feature's transition logic can be split across several reducers that
//! share one state and action type. [`combine_reducers`] runs them in
//! sequence and concatenates their effects.
//!
//! A sub-reducer that does not recognize an action leaves the state untouched
//! and returns no effects - the permissive identity fallback, not an error
//! signal.

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// A boxed reducer usable inside a [`CombinedReducer`]
pub type BoxedReducer<S, A, E> =
    Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and
/// concatenated. This is useful when you want to split transition logic
/// across multiple implementations.
///
/// # Example
///
/// ```
/// use reflow_core::composition::combine_reducers;
/// use reflow_core::{effect::Effect, reducer::Reducer, SmallVec};
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: i64,
///     name: String,
/// }
///
/// #[derive(Clone)]
/// enum AppAction {
///     Increment,
///     SetName(String),
/// }
///
/// struct CounterReducer;
/// struct NameReducer;
///
/// impl Reducer for CounterReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut AppState,
///         action: AppAction,
///         _env: &(),
///     ) -> SmallVec<[Effect<AppAction>; 4]> {
///         if matches!(action, AppAction::Increment) {
///             state.counter += 1;
///         }
///         SmallVec::new()
///     }
/// }
///
/// impl Reducer for NameReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut AppState,
///         action: AppAction,
///         _env: &(),
///     ) -> SmallVec<[Effect<AppAction>; 4]> {
///         if let AppAction::SetName(name) = action {
///             state.name = name;
///         }
///         SmallVec::new()
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);
/// let mut state = AppState::default();
/// combined.reduce(&mut state, AppAction::Increment, &());
/// assert_eq!(state.counter, 1);
/// assert_eq!(state.name, "");
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E> {
    CombinedReducer { reducers }
}

/// Reducer produced by [`combine_reducers`]
pub struct CombinedReducer<S, A, E> {
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    A: Clone,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut effects = SmallVec::new();
        for reducer in &self.reducers {
            effects.extend(reducer.reduce(state, action.clone(), env));
        }
        effects
    }
}
