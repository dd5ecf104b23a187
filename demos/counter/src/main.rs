//! Persisted counter demo binary
//!
//! The counter value is mirrored to a JSON file on every change and read
//! back on the next run.

use anyhow::Result;
use counter::{CounterAction, persisted_reducer, rehydrate_counter};
use reflow_runtime::Store;
use reflow_storage::JsonFileStore;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,reflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Persisted Counter: Reflow Architecture ===\n");

    let data_dir = std::env::temp_dir().join("reflow-counter");
    let storage = Arc::new(JsonFileStore::new(&data_dir));

    // Stored value if present, else zero
    let initial = rehydrate_counter(storage.as_ref());
    println!("Rehydrated count: {}", initial.value);

    let store = Store::new(initial, persisted_reducer(storage), ());

    println!("\n>>> Sending: Increment");
    let mut handle = store.send(CounterAction::Increment).await?;
    handle.wait().await;
    println!("Count: {}", store.state(|s| s.value).await);

    println!("\n>>> Sending: Increment");
    let mut handle = store.send(CounterAction::Increment).await?;
    handle.wait().await;
    println!("Count: {}", store.state(|s| s.value).await);

    println!("\n>>> Sending: Decrement");
    let mut handle = store.send(CounterAction::Decrement).await?;
    handle.wait().await;
    println!("Count: {}", store.state(|s| s.value).await);

    store.shutdown(Duration::from_secs(5)).await?;

    println!("\nState is mirrored to {}; run again to rehydrate.", data_dir.display());
    Ok(())
}
