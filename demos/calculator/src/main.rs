//! Calculator demo binary

use anyhow::Result;
use calculator::{CalculatorAction, calculator_reducer};
use reflow_runtime::Store;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calculator=debug,reflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Calculator: Reflow Architecture ===\n");

    let store = Store::new(
        calculator::CalculatorState::default(),
        calculator_reducer(),
        (),
    );

    println!(">>> operand1 = 6, operand2 = 3, Div");
    store.send(CalculatorAction::SetOperand1("6".into())).await?;
    store.send(CalculatorAction::SetOperand2("3".into())).await?;
    store.send(CalculatorAction::Div).await?;
    println!("Result: {}", store.state(|s| s.result).await);

    println!("\n>>> operand2 = 0, Div");
    store.send(CalculatorAction::SetOperand2("0".into())).await?;
    store.send(CalculatorAction::Div).await?;
    println!("Result: {}", store.state(|s| s.result).await);

    println!("\n>>> Reset");
    store.send(CalculatorAction::Reset).await?;
    println!("Result: {}", store.state(|s| s.result).await);

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
