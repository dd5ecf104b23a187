//! Recipe API client
//!
//! Unauthenticated GET against a fixed public demo endpoint returning a JSON
//! array of recipes. No retry, no pagination, no timeout policy.

use reflow_core::{Deserialize, Serialize};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// A recipe as returned by the demo endpoint
///
/// Only the displayed fields are modeled; the response is otherwise used
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier
    pub id: u64,
    /// Recipe name
    pub name: String,
    /// Ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Response envelope of the recipes endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct RecipesResponse {
    /// The recipes array
    pub recipes: Vec<Recipe>,
}

/// Errors from the recipe API
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// API returned an error status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },
}

/// Boxed future returned by [`RecipeApi`] implementations
pub type ApiFuture = Pin<Box<dyn Future<Output = Result<Vec<Recipe>, ApiError>> + Send>>;

/// Source of recipes
///
/// Abstracted so tests can substitute canned responses for the network.
pub trait RecipeApi: Send + Sync {
    /// Fetch the recipe list
    fn fetch_recipes(&self) -> ApiFuture;
}

/// HTTP-backed recipe source
#[derive(Clone)]
pub struct HttpRecipeApi {
    client: Client,
    api_url: String,
}

impl HttpRecipeApi {
    /// Create a client against the default demo endpoint
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url("https://dummyjson.com")
    }

    /// Create a client against an explicit base URL
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: base_url.into(),
        }
    }
}

impl Default for HttpRecipeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeApi for HttpRecipeApi {
    fn fetch_recipes(&self) -> ApiFuture {
        let client = self.client.clone();
        let url = format!("{}/recipes", self.api_url);

        Box::pin(async move {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            match response.status() {
                StatusCode::OK => response
                    .json::<RecipesResponse>()
                    .await
                    .map(|body| body.recipes)
                    .map_err(|e| ApiError::ResponseParseFailed(e.to_string())),
                status => {
                    let body = response.text().await.unwrap_or_default();
                    Err(ApiError::ApiError {
                        status: status.as_u16(),
                        message: body,
                    })
                },
            }
        })
    }
}
