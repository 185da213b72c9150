//! Application Context
//!
//! The todo store shared with all components via Leptos Context API.

use leptos::prelude::*;
use todo_store::{TodoCounts, TodoItem, TodoStore};

use crate::storage::BrowserStorage;

/// Reactive handle on the persisted todo store
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: RwSignal<TodoStore<BrowserStorage>>,
}

impl TodoContext {
    pub fn new(store: TodoStore<BrowserStorage>) -> Self {
        Self {
            store: RwSignal::new(store),
        }
    }

    /// Current items in insertion order (tracked)
    pub fn items(&self) -> Vec<TodoItem> {
        self.store.with(|store| store.items().to_vec())
    }

    pub fn counts(&self) -> TodoCounts {
        self.store.with(|store| store.counts())
    }

    /// Add an item; false when the title was blank
    pub fn add(&self, title: &str) -> bool {
        self.store
            .try_update(|store| store.add(title))
            .flatten()
            .is_some()
    }

    pub fn toggle_done(&self, id: &str) {
        self.store.update(|store| {
            store.toggle_done(id);
        });
    }

    pub fn remove(&self, id: &str) {
        self.store.update(|store| {
            store.remove(id);
        });
    }
}

/// Get the todo context
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}
