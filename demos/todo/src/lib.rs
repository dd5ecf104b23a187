//! # Todo List Demo
//!
//! An ordered todo list on the Reflow architecture.
//!
//! This demo showcases:
//! - Clock-derived ids (creation timestamps) via environment injection
//! - No-op edge policy: blank adds and absent ids change nothing
//! - Insertion order as the one ordering invariant
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use todo::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use reflow_core::{environment::SystemClock, Reducer};
//!
//! let env = TodoEnvironment::new(Arc::new(SystemClock));
//! let reducer = TodoReducer::new();
//! let mut state = TodoState::new();
//!
//! reducer.reduce(&mut state, TodoAction::Add { text: "buy milk".into() }, &env);
//! assert_eq!(state.count(), 1);
//! ```

mod reducer;
mod types;

pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
