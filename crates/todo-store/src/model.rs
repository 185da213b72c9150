//! Todo Models
//!
//! Data structures stored under the storage key.

use serde::{Deserialize, Serialize};

/// A single todo entry (current stored format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Timestamp + random suffix, assigned once at creation
    pub id: String,
    /// Trimmed, non-empty, never edited
    pub title: String,
    /// Completion flag, flipped by toggle only
    pub done: bool,
}

impl TodoItem {
    /// Create an open item with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(crate::id::new_id(), title)
    }

    pub fn with_id(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done: false,
        }
    }
}

/// Insertion-ordered todo list
pub type TodoList = Vec<TodoItem>;

/// Summary numbers shown under the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub total: usize,
    pub done: usize,
    pub remaining: usize,
}
