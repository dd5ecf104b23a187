//! Fetch demo binary
//!
//! Fires one GET against the public demo endpoint and prints whatever came
//! back. If the request fails the widget stays in its loading state - that
//! is the whole error story.

use anyhow::Result;
use fetch::{FetchAction, FetchEnvironment, FetchReducer, FetchState, HttpRecipeApi};
use reflow_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch=debug,reflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Recipes: Reflow Architecture ===\n");

    let env = FetchEnvironment::new(Arc::new(HttpRecipeApi::new()));
    let store = Store::new(FetchState::default(), FetchReducer::new(), env);

    println!(">>> Loading recipes...");
    let mut handle = store.send(FetchAction::Load).await?;
    let _ = handle.wait_with_timeout(Duration::from_secs(30)).await;

    let state = store.state(|s| s.clone()).await;
    if state.loading {
        println!("Still loading (the request did not come back).");
    } else {
        println!("Fetched {} recipes:", state.recipes.len());
        for recipe in state.recipes.iter().take(5) {
            println!("  #{} {} ({} ingredients)", recipe.id, recipe.name, recipe.ingredients.len());
        }
    }

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
