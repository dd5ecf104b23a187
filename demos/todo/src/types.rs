//! Domain types for the todo demo

use reflow_core::{Deserialize, Serialize};

/// Unique identifier for a todo item
///
/// Ids are creation timestamps in milliseconds, which makes them naturally
/// increasing across adds. They are immutable once assigned.
pub type TodoId = i64;

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier (creation timestamp, milliseconds)
    pub id: TodoId,
    /// Text of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-completed todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// State of the todo list
///
/// Items are kept in insertion order. Edit and toggle preserve the order;
/// only delete (removal) and add (append) change it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos, in insertion order
    pub items: Vec<TodoItem>,
}

impl TodoState {
    /// Creates an empty todo list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Look up a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The ids currently present, in insertion order
    #[must_use]
    pub fn ids(&self) -> Vec<TodoId> {
        self.items.iter().map(|item| item.id).collect()
    }
}

/// Actions on the todo list
///
/// Absent ids are no-ops for delete, toggle, and edit - not errors.
#[derive(Clone, Debug)]
pub enum TodoAction {
    /// Append a new todo; text that is empty after trimming is a no-op
    Add {
        /// Text of the new todo
        text: String,
    },
    /// Remove the todo with the given id
    Delete {
        /// Id to remove
        id: TodoId,
    },
    /// Flip the completed flag of the todo with the given id
    Toggle {
        /// Id to toggle
        id: TodoId,
    },
    /// Replace the text of the todo with the given id
    ///
    /// Empty replacement text is accepted as-is.
    Edit {
        /// Id to edit
        id: TodoId,
        /// Replacement text
        text: String,
    },
}
