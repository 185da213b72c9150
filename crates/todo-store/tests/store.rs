//! TodoStore integration tests over in-memory storage.

use proptest::prelude::*;
use todo_store::{
    add, detect, load, serialize, toggle_done, MemoryStorage, StoreConfig, StoredFormat, TodoItem,
    TodoStore,
};

fn open(storage: MemoryStorage) -> TodoStore<MemoryStorage> {
    TodoStore::open(storage, StoreConfig::default())
}

fn stored(store: &TodoStore<MemoryStorage>) -> Vec<TodoItem> {
    load(store.storage().raw("todos").as_deref())
}

#[test]
fn test_storage_mirrors_every_change() {
    let mut store = open(MemoryStorage::new());

    let milk = store.add("buy milk").unwrap();
    assert_eq!(stored(&store), store.items());

    let bread = store.add("buy bread").unwrap();
    assert_eq!(stored(&store), store.items());

    store.toggle_done(&milk);
    assert_eq!(stored(&store), store.items());

    store.remove(&bread);
    assert_eq!(stored(&store), store.items());
    assert_eq!(store.items().len(), 1);
    assert!(store.items()[0].done);
}

#[test]
fn test_noops_do_not_write() {
    let mut store = open(MemoryStorage::new());
    store.add("x");
    let writes = store.storage().write_count();

    store.add("   ");
    store.toggle_done("missing");
    store.remove("missing");

    assert_eq!(store.storage().write_count(), writes);
}

#[test]
fn test_failed_write_keeps_memory_state() {
    let mut store = open(MemoryStorage::new());
    store.add("saved");
    store.storage().set_fail_writes(true);

    let id = store.add("unsaved").unwrap();
    assert!(store.get(&id).is_some());
    assert_eq!(stored(&store).len(), 1);

    // Next successful write catches storage up with memory
    store.storage().set_fail_writes(false);
    store.toggle_done(&id);
    assert_eq!(stored(&store), store.items());
}

#[test]
fn test_reopen_restores_list() {
    let mut first = open(MemoryStorage::new());
    let id = first.add("persist me").unwrap();
    first.toggle_done(&id);
    let raw = first.storage().raw("todos").unwrap();

    let second = open(MemoryStorage::with_value("todos", &raw));
    assert_eq!(second.items(), first.items());
}

#[test]
fn test_legacy_objects_migrated_on_open() {
    let store = open(MemoryStorage::with_value(
        "todos",
        r#"[{"id":"1","title":"old"},{"id":"2","title":"older"}]"#,
    ));

    let raw = store.storage().raw("todos").unwrap();
    assert_eq!(detect(Some(raw.as_str())), StoredFormat::Current);
    assert_eq!(
        store.items(),
        &[TodoItem::with_id("1", "old"), TodoItem::with_id("2", "older")][..]
    );
}

#[test]
fn test_legacy_titles_keep_ids_after_migration() {
    let store = open(MemoryStorage::with_value("todos", r#"["a","b","c"]"#));
    let ids: Vec<String> = store.items().iter().map(|item| item.id.clone()).collect();

    let reopened = open(MemoryStorage::with_value(
        "todos",
        &store.storage().raw("todos").unwrap(),
    ));
    let reopened_ids: Vec<String> = reopened.items().iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids, reopened_ids);
}

#[test]
fn test_unreadable_entry_survives_next_save() {
    let mut store = open(MemoryStorage::with_value(
        "todos",
        r#"[{"id":"a","title":"keep me","done":true},{"id":"b"}]"#,
    ));
    store.add("new");

    let titles: Vec<String> = stored(&store).into_iter().map(|item| item.title).collect();
    assert_eq!(titles, vec!["keep me".to_string(), "new".to_string()]);
    assert!(stored(&store)[0].done);
}

fn todo_item() -> impl Strategy<Value = TodoItem> {
    ("[a-z0-9-]{1,16}", "\\PC{1,24}", any::<bool>()).prop_map(|(id, title, done)| TodoItem {
        id,
        title,
        done,
    })
}

fn todo_list() -> impl Strategy<Value = Vec<TodoItem>> {
    prop::collection::vec(todo_item(), 0..12).prop_map(|items| {
        // well-formed lists carry unique ids
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| TodoItem {
                id: format!("{}-{}", index, item.id),
                ..item
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_load_serialize_round_trip(list in todo_list()) {
        prop_assert_eq!(load(Some(serialize(&list).as_str())), list);
    }

    #[test]
    fn prop_toggle_twice_is_identity(list in todo_list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!list.is_empty());
        let id = list[pick.index(list.len())].id.clone();
        prop_assert_eq!(toggle_done(&toggle_done(&list, &id), &id), list);
    }

    #[test]
    fn prop_blank_titles_rejected(list in todo_list(), blank in "[ \t\n]{0,6}") {
        prop_assert_eq!(add(&list, &blank), list);
    }
}
