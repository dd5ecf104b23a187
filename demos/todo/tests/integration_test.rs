//! Integration tests for the todo list with the Store

use chrono::Duration;
use reflow_core::environment::Clock;
use reflow_runtime::Store;
use reflow_testing::{StepClock, test_clock};
use std::sync::Arc;
use todo::{TodoAction, TodoEnvironment, TodoReducer, TodoState};

fn test_env() -> TodoEnvironment {
    TodoEnvironment::new(Arc::new(StepClock::new(
        test_clock().now(),
        Duration::milliseconds(1),
    )))
}

#[tokio::test]
async fn add_toggle_delete_flow() {
    let store = Store::new(TodoState::new(), TodoReducer::new(), test_env());

    store
        .send(TodoAction::Add {
            text: "buy milk".to_owned(),
        })
        .await
        .unwrap();
    store
        .send(TodoAction::Add {
            text: "write report".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(store.state(TodoState::count).await, 2);

    let first_id = store.state(|s| s.items[0].id).await;
    store.send(TodoAction::Toggle { id: first_id }).await.unwrap();
    assert_eq!(store.state(TodoState::completed_count).await, 1);

    store.send(TodoAction::Delete { id: first_id }).await.unwrap();
    let state = store.state(|s| s.clone()).await;
    assert_eq!(state.count(), 1);
    assert_eq!(state.items[0].text, "write report");
    assert!(!state.items[0].completed);
}

#[tokio::test]
async fn blank_add_then_real_add() {
    let store = Store::new(TodoState::new(), TodoReducer::new(), test_env());

    store
        .send(TodoAction::Add {
            text: "  ".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(store.state(TodoState::count).await, 0);

    store
        .send(TodoAction::Add {
            text: "buy milk".to_owned(),
        })
        .await
        .unwrap();
    let state = store.state(|s| s.clone()).await;
    assert_eq!(state.count(), 1);
    assert!(!state.items[0].completed);
}
