//! Todo list demo binary

use anyhow::Result;
use reflow_core::environment::SystemClock;
use reflow_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use todo::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,reflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo List: Reflow Architecture ===\n");

    let env = TodoEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(TodoState::new(), TodoReducer::new(), env);

    store
        .send(TodoAction::Add {
            text: "buy milk".to_owned(),
        })
        .await?;
    store
        .send(TodoAction::Add {
            text: "write report".to_owned(),
        })
        .await?;

    let first_id = store.state(|s| s.items[0].id).await;
    store.send(TodoAction::Toggle { id: first_id }).await?;

    let items = store.state(|s| s.items.clone()).await;
    println!("Todos:");
    for item in &items {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{mark}] {} (id {})", item.text, item.id);
    }

    store.send(TodoAction::Delete { id: first_id }).await?;
    println!(
        "\nAfter deleting id {first_id}: {} item(s) left",
        store.state(TodoState::count).await
    );

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
