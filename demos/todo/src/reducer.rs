//! Reducer logic for the todo list

use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use reflow_core::environment::Clock;
use reflow_core::{Effect, Reducer, SmallVec};
use std::sync::Arc;

/// Environment dependencies for the todo reducer
///
/// The clock is the id source: item ids are creation timestamps. Injecting
/// it keeps the reducer deterministic under test.
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for deriving item ids
    pub clock: Arc<dyn Clock>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Derive the id for a new item
    ///
    /// Ids are creation timestamps in milliseconds. When the clock has not
    /// advanced past the newest live id (same-millisecond adds, fixed test
    /// clocks), fall back to one past it so uniqueness holds unconditionally.
    fn next_id(state: &TodoState, env: &TodoEnvironment) -> TodoId {
        let now = env.clock.now().timestamp_millis();
        let newest = state.items.iter().map(|item| item.id).max();
        match newest {
            Some(last) if now <= last => last + 1,
            _ => now,
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => {
                // Blank text is a no-op, not an error
                if text.trim().is_empty() {
                    return SmallVec::new();
                }
                let id = Self::next_id(state, env);
                state.items.push(TodoItem::new(id, text));
            },
            TodoAction::Delete { id } => {
                state.items.retain(|item| item.id != id);
            },
            TodoAction::Toggle { id } => {
                if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                    item.completed = !item.completed;
                }
            },
            TodoAction::Edit { id, text } => {
                if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                    item.text = text;
                }
            },
        }

        SmallVec::new()
    }
}
