//! Todo Store
//!
//! Todo list model, storage migration and persistence, independent of the
//! rendering layer and of the concrete key-value backend.

mod config;
mod id;
mod migrate;
mod model;
mod ops;
mod storage;
mod store;

pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use id::{new_id, new_indexed_id};
pub use migrate::{detect, load, serialize, StoredFormat};
pub use model::{TodoCounts, TodoItem, TodoList};
pub use ops::{add, counts, remove, toggle_done};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};
pub use store::TodoStore;
