//! Stopwatch demo binary
//!
//! Runs the stopwatch for a few seconds of wall-clock time, then stops and
//! resets it.

use anyhow::Result;
use reflow_runtime::Store;
use std::time::Duration;
use stopwatch::{StopwatchAction, StopwatchReducer, StopwatchState, format_elapsed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stopwatch=debug,reflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Stopwatch: Reflow Architecture ===\n");

    let store = Store::new(StopwatchState::default(), StopwatchReducer::new(), ());

    println!(">>> Start");
    store.send(StopwatchAction::Start).await?;

    for _ in 0..3 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let elapsed = store.state(|s| s.elapsed_seconds).await;
        println!("  {}", format_elapsed(elapsed));
    }

    println!(">>> Stop");
    store.send(StopwatchAction::Stop).await?;
    let elapsed = store.state(|s| s.elapsed_seconds).await;
    println!("Stopped at {}", format_elapsed(elapsed));

    println!(">>> Reset");
    store.send(StopwatchAction::Reset).await?;
    let elapsed = store.state(|s| s.elapsed_seconds).await;
    println!("After reset: {}", format_elapsed(elapsed));

    // Teardown cancels any armed ticker
    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
