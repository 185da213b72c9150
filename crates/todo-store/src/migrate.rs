//! Stored Format Migration
//!
//! The list has been persisted in three shapes over time:
//!
//! 1. `["title", ...]` (titles only)
//! 2. `[{"id": "..", "title": ".."}, ...]` (no completion flag)
//! 3. `[{"id": "..", "title": "..", "done": false}, ...]` (current)
//!
//! A leading string selects the title list; otherwise each object is decoded
//! on its own, newest shape first. Entries matching no shape are skipped.
//! Invalid JSON or a non-list value loads as an empty list.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::id::new_indexed_id;
use crate::model::{TodoItem, TodoList};

/// Shape a raw stored value was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredFormat {
    /// Nothing stored under the key
    Absent,
    /// `[{id, title, done}]`
    Current,
    /// `[{id, title}]`, `done` missing or not a boolean, or some entries unreadable
    LegacyObjects,
    /// `["title", ...]`
    LegacyTitles,
    /// Invalid JSON, not a list, or no readable entry
    Unreadable,
}

impl StoredFormat {
    /// Whether the stored value should be rewritten in the current shape
    pub fn needs_rewrite(&self) -> bool {
        matches!(self, StoredFormat::LegacyObjects | StoredFormat::LegacyTitles)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoredFormat::Absent => "absent",
            StoredFormat::Current => "current",
            StoredFormat::LegacyObjects => "legacy-objects",
            StoredFormat::LegacyTitles => "legacy-titles",
            StoredFormat::Unreadable => "unreadable",
        }
    }
}

/// One stored object, newest shape first
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Current(TodoItem),
    Legacy(LegacyTodo),
}

#[derive(Deserialize)]
struct LegacyTodo {
    id: LegacyId,
    title: String,
    #[serde(default)]
    done: Option<Value>,
}

/// Ids have always been written as strings; numeric ones are kept as text
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyId {
    Text(String),
    Number(serde_json::Number),
}

impl LegacyId {
    fn into_string(self) -> String {
        match self {
            LegacyId::Text(id) => id,
            LegacyId::Number(id) => id.to_string(),
        }
    }
}

impl From<LegacyTodo> for TodoItem {
    fn from(legacy: LegacyTodo) -> Self {
        TodoItem {
            id: legacy.id.into_string(),
            title: legacy.title,
            done: matches!(legacy.done, Some(Value::Bool(true))),
        }
    }
}

/// Decode a raw stored value into the current list
pub fn load(raw: Option<&str>) -> TodoList {
    decode(raw).1
}

/// Recognize the shape of a raw stored value without keeping the list
pub fn detect(raw: Option<&str>) -> StoredFormat {
    decode(raw).0
}

/// Current-format JSON for `list`
pub fn serialize(list: &[TodoItem]) -> String {
    // A Vec of plain string/bool structs always serializes
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

pub(crate) fn decode(raw: Option<&str>) -> (StoredFormat, TodoList) {
    let Some(raw) = raw else {
        return (StoredFormat::Absent, Vec::new());
    };

    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            log::debug!("[MIGRATE] Stored value is not a list: {}", other);
            return (StoredFormat::Unreadable, Vec::new());
        }
        Err(e) => {
            log::debug!("[MIGRATE] Stored value is not JSON: {}", e);
            return (StoredFormat::Unreadable, Vec::new());
        }
    };

    if entries.is_empty() {
        return (StoredFormat::Current, Vec::new());
    }
    // The first entry decides between the title list and the object shapes
    if entries[0].is_string() {
        (StoredFormat::LegacyTitles, decode_titles(entries))
    } else {
        decode_objects(entries)
    }
}

fn decode_titles(entries: Vec<Value>) -> TodoList {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::String(title) => Some(TodoItem::with_id(new_indexed_id(index), title)),
            other => {
                log::warn!("[MIGRATE] Skipped non-text entry {} in title list: {}", index, other);
                None
            }
        })
        .collect()
}

/// Entries are read one by one so a single bad entry costs only itself.
/// Any legacy or skipped entry marks the list for a rewrite; a list with
/// nothing readable is reported unreadable and left as stored.
fn decode_objects(entries: Vec<Value>) -> (StoredFormat, TodoList) {
    let mut all_current = true;
    let mut items = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match StoredEntry::deserialize(entry) {
            Ok(StoredEntry::Current(item)) => items.push(item),
            Ok(StoredEntry::Legacy(legacy)) => {
                all_current = false;
                items.push(TodoItem::from(legacy));
            }
            Err(_) => {
                all_current = false;
                log::warn!("[MIGRATE] Skipped unreadable entry {}: {}", index, entry);
            }
        }
    }

    let format = if items.is_empty() {
        StoredFormat::Unreadable
    } else if all_current {
        StoredFormat::Current
    } else {
        StoredFormat::LegacyObjects
    };
    (format, reassign_duplicate_ids(items))
}

/// Give later occurrences of an already-seen id a fresh one
fn reassign_duplicate_ids(mut items: TodoList) -> TodoList {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter_mut().enumerate() {
        if !seen.insert(item.id.clone()) {
            let fresh = new_indexed_id(index);
            log::warn!("[MIGRATE] Duplicate id {} replaced with {}", item.id, fresh);
            item.id = fresh.clone();
            seen.insert(fresh);
        }
    }
    items
}
