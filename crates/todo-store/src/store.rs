//! Todo Store
//!
//! Owns the current list and mirrors every change to the storage port.

use crate::config::StoreConfig;
use crate::migrate;
use crate::model::{TodoCounts, TodoItem, TodoList};
use crate::ops;
use crate::storage::KeyValueStorage;

/// Todo list backed by a key-value storage port
///
/// Storage problems never surface from here: an unreadable value loads as an
/// empty list and a failed write is logged and skipped, leaving the in-memory
/// list authoritative until the next successful write.
#[derive(Debug)]
pub struct TodoStore<S: KeyValueStorage> {
    storage: S,
    config: StoreConfig,
    items: TodoList,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Read and migrate whatever is stored under the configured key
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let raw = match storage.get(&config.storage_key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "[STORE] Read of '{}' failed, starting empty: {}",
                    config.storage_key,
                    e
                );
                None
            }
        };

        let (format, items) = migrate::decode(raw.as_deref());
        log::info!(
            "[STORE] Loaded {} items from '{}' ({})",
            items.len(),
            config.storage_key,
            format.as_str()
        );

        let store = Self { storage, config, items };
        if format.needs_rewrite() {
            log::info!("[STORE] Rewriting '{}' in current format", store.config.storage_key);
            store.persist();
        }
        store
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn counts(&self) -> TodoCounts {
        ops::counts(&self.items)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a new item; returns its id, or `None` for a blank title
    pub fn add(&mut self, title: &str) -> Option<String> {
        let next = ops::add(&self.items, title);
        if next.len() == self.items.len() {
            log::debug!("[STORE] Ignored blank title");
            return None;
        }
        let id = next.last().map(|item| item.id.clone());
        self.replace(next);
        id
    }

    /// Flip completion of `id`; returns whether an item matched
    pub fn toggle_done(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            log::debug!("[STORE] Toggle of unknown id {}", id);
            return false;
        }
        let next = ops::toggle_done(&self.items, id);
        self.replace(next);
        true
    }

    /// Delete `id`; returns whether an item matched
    pub fn remove(&mut self, id: &str) -> bool {
        let next = ops::remove(&self.items, id);
        if next.len() == self.items.len() {
            log::debug!("[STORE] Remove of unknown id {}", id);
            return false;
        }
        self.replace(next);
        true
    }

    /// Write the whole list under the storage key
    pub fn persist(&self) {
        let json = migrate::serialize(&self.items);
        match self.storage.set(&self.config.storage_key, &json) {
            Ok(()) => log::debug!("[STORE] Saved {} items", self.items.len()),
            Err(e) => log::warn!("[STORE] Save skipped: {}", e),
        }
    }

    fn replace(&mut self, next: TodoList) {
        self.items = next;
        self.persist();
    }
}

impl<S: KeyValueStorage + Default> Default for TodoStore<S> {
    fn default() -> Self {
        Self::open(S::default(), StoreConfig::default())
    }
}
