//! List Operations
//!
//! Pure functions over a todo list. Each returns the new list; an
//! operation that does not apply returns an equal copy.

use crate::model::{TodoCounts, TodoItem, TodoList};

/// Append an item titled `title` (trimmed); blank titles are ignored
pub fn add(list: &[TodoItem], title: &str) -> TodoList {
    let mut next = list.to_vec();
    let title = title.trim();
    if !title.is_empty() {
        next.push(TodoItem::new(title));
    }
    next
}

/// Flip `done` on the item with `id`
pub fn toggle_done(list: &[TodoItem], id: &str) -> TodoList {
    list.iter()
        .map(|item| {
            if item.id == id {
                TodoItem { done: !item.done, ..item.clone() }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Drop the item with `id`
pub fn remove(list: &[TodoItem], id: &str) -> TodoList {
    list.iter().filter(|item| item.id != id).cloned().collect()
}

pub fn counts(list: &[TodoItem]) -> TodoCounts {
    let done = list.iter().filter(|item| item.done).count();
    TodoCounts {
        total: list.len(),
        done,
        remaining: list.len() - done,
    }
}
