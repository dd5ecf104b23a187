//! # Fetch Demo
//!
//! A read-only data-fetching widget on the Reflow architecture.
//!
//! `Load` marks the loading flag and fires one best-effort GET. On success
//! the effect feeds back `Loaded` with the response array used verbatim; on
//! failure it feeds back nothing, so the loading flag stays set indefinitely.
//! The failure is traced but not surfaced as state. There is no retry and no
//! timeout policy.

use reflow_core::{Effect, Reducer, SmallVec, smallvec};
use std::sync::Arc;

mod api;

pub use api::{ApiError, ApiFuture, HttpRecipeApi, Recipe, RecipeApi, RecipesResponse};

/// Fetch widget state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchState {
    /// Recipes to display, verbatim from the endpoint
    pub recipes: Vec<Recipe>,
    /// Whether a request is outstanding
    pub loading: bool,
}

/// Fetch widget actions
#[derive(Clone, Debug)]
pub enum FetchAction {
    /// Kick off the GET
    Load,
    /// The GET came back (fed back by the effect)
    Loaded(Vec<Recipe>),
}

/// Environment dependencies for the fetch reducer
#[derive(Clone)]
pub struct FetchEnvironment {
    /// Recipe source
    pub api: Arc<dyn RecipeApi>,
}

impl FetchEnvironment {
    /// Creates a new `FetchEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self { api }
    }
}

/// Fetch widget reducer
#[derive(Clone, Debug, Default)]
pub struct FetchReducer;

impl FetchReducer {
    /// Creates a new `FetchReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for FetchReducer {
    type State = FetchState;
    type Action = FetchAction;
    type Environment = FetchEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FetchAction::Load => {
                state.loading = true;
                let request = env.api.fetch_recipes();
                smallvec![Effect::future(async move {
                    match request.await {
                        Ok(recipes) => Some(FetchAction::Loaded(recipes)),
                        Err(err) => {
                            // No error path in state: the loading flag simply
                            // never clears.
                            tracing::warn!(error = %err, "Recipe fetch failed");
                            None
                        },
                    }
                })]
            },
            FetchAction::Loaded(recipes) => {
                state.recipes = recipes;
                state.loading = false;
                SmallVec::new()
            },
        }
    }
}
