mod common;

use chrono::{Duration, TimeZone, Utc};
use common::temp_dir;
use rtodo::core::TodoStore;
use rtodo::core::store::DEFAULT_STORAGE_KEY;
use rtodo::errors::AppError;
use rtodo::storage::{FileStorage, MemoryStorage, Storage};

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 18, 9, 0, 0).unwrap()
}

fn empty_store() -> TodoStore<MemoryStorage> {
    TodoStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY).unwrap()
}

#[test]
fn test_open_missing_key_is_empty() {
    let store = empty_store();
    assert!(store.todos().is_empty());
    assert_eq!(store.key(), "my-todo-list");
}

#[test]
fn test_add_then_reload_preserves_text_due_and_state() {
    let mut store = empty_store();
    let due = t0() + Duration::days(2);

    let a = store.add("Buy milk", Some(due), t0()).unwrap().unwrap();
    store.add("Call mom", None, t0() + Duration::seconds(1)).unwrap();
    store.toggle(a.id, t0() + Duration::hours(1)).unwrap();

    let reloaded = TodoStore::open(store.storage().clone(), DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(reloaded.todos(), store.todos());

    let first = &reloaded.todos()[0];
    assert_eq!(first.text, "Buy milk");
    assert_eq!(first.due, Some(due));
    assert_eq!(first.completed_at(), Some(t0() + Duration::hours(1)));
    assert!(!reloaded.todos()[1].is_completed());
}

#[test]
fn test_new_items_start_pending_with_timestamp_id() {
    let mut store = empty_store();
    let todo = store.add("Water plants", None, t0()).unwrap().unwrap();

    assert_eq!(todo.id, t0().timestamp_millis());
    assert!(!todo.is_completed());
    assert!(todo.completed_at().is_none());
    assert_eq!(todo.created_at(), Some(t0()));
}

#[test]
fn test_toggle_twice_clears_completed_at() {
    let mut store = empty_store();
    let id = store.add("Read book", None, t0()).unwrap().unwrap().id;

    let done = store.toggle(id, t0() + Duration::minutes(5)).unwrap().unwrap();
    assert!(done.is_completed());
    assert_eq!(done.completed_at(), Some(t0() + Duration::minutes(5)));

    let reopened = store.toggle(id, t0() + Duration::minutes(6)).unwrap().unwrap();
    assert!(!reopened.is_completed());
    assert!(reopened.completed_at().is_none());

    let raw = store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["completed"], false);
    assert!(value[0]["completedAt"].is_null());
}

#[test]
fn test_whitespace_only_text_is_rejected() {
    let mut store = empty_store();

    assert!(store.add("", None, t0()).unwrap().is_none());
    assert!(store.add("   \t\n", None, t0()).unwrap().is_none());

    assert!(store.todos().is_empty());
    assert!(store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn test_text_is_stored_as_entered() {
    let mut store = empty_store();
    let todo = store.add("  spaced out  ", None, t0()).unwrap().unwrap();
    assert_eq!(todo.text, "  spaced out  ");
}

#[test]
fn test_ids_stay_unique_within_the_same_millisecond() {
    let mut store = empty_store();
    let a = store.add("one", None, t0()).unwrap().unwrap();
    let b = store.add("two", None, t0()).unwrap().unwrap();
    let c = store.add("three", None, t0() - Duration::seconds(10)).unwrap().unwrap();

    assert_eq!(b.id, a.id + 1);
    assert_eq!(c.id, b.id + 1);
}

#[test]
fn test_insertion_order_and_duplicates_kept() {
    let mut store = empty_store();
    for (i, text) in ["b", "a", "b"].iter().enumerate() {
        store
            .add(text, None, t0() + Duration::seconds(i as i64))
            .unwrap();
    }

    let texts: Vec<&str> = store.todos().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["b", "a", "b"]);
}

#[test]
fn test_toggle_unknown_id_changes_nothing() {
    let mut store = empty_store();
    store.add("only", None, t0()).unwrap();
    let before = store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap();

    assert!(store.toggle(42, t0()).unwrap().is_none());
    assert_eq!(store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap(), before);
}

#[test]
fn test_malformed_storage_loads_empty_and_is_replaced() {
    let mut storage = MemoryStorage::new();
    storage.set_item(DEFAULT_STORAGE_KEY, "{broken").unwrap();

    let mut store = TodoStore::open(storage, DEFAULT_STORAGE_KEY).unwrap();
    assert!(store.todos().is_empty());

    store.add("fresh start", None, t0()).unwrap();
    let raw = store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));
}

#[test]
fn test_overdue_only_for_pending_items() {
    let mut store = empty_store();
    let due = t0() - Duration::hours(1);
    let id = store.add("late", Some(due), t0() - Duration::days(1)).unwrap().unwrap().id;

    assert!(store.get(id).unwrap().is_overdue(t0()));
    store.toggle(id, t0()).unwrap();
    assert!(!store.get(id).unwrap().is_overdue(t0()));
}

#[test]
fn test_file_storage_round_trip() {
    let dir = temp_dir("file_storage_round_trip");

    let mut storage = FileStorage::new(&dir).unwrap();
    assert!(storage.get_item("notes").unwrap().is_none());

    storage.set_item("notes", "[]").unwrap();
    assert_eq!(storage.get_item("notes").unwrap().as_deref(), Some("[]"));
    assert!(dir.join("notes.json").exists());

    storage.remove_item("notes").unwrap();
    assert!(storage.get_item("notes").unwrap().is_none());
    // removing again is fine
    storage.remove_item("notes").unwrap();
}

#[test]
fn test_file_storage_rejects_path_like_keys() {
    let dir = temp_dir("file_storage_keys");
    let storage = FileStorage::new(&dir).unwrap();

    for key in ["", "../escape", "a/b", ".hidden", "with space"] {
        match storage.get_item(key) {
            Err(AppError::InvalidStorageKey(k)) => assert_eq!(k, key),
            other => panic!("key {key:?} accepted: {other:?}"),
        }
    }
}

#[test]
fn test_store_over_file_storage_survives_reopen() {
    let dir = temp_dir("store_file_reopen");

    {
        let mut store = TodoStore::open(FileStorage::new(&dir).unwrap(), "list").unwrap();
        store.add("persisted", Some(t0()), t0()).unwrap();
    }

    let store = TodoStore::open(FileStorage::new(&dir).unwrap(), "list").unwrap();
    assert_eq!(store.todos().len(), 1);
    assert_eq!(store.todos()[0].text, "persisted");
    assert_eq!(store.todos()[0].due, Some(t0()));
}

#[test]
fn test_huge_float_id_is_skipped_and_add_still_works() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"id": 1e30, "text": "big", "completed": false},
                {"id": 12.5, "text": "fractional", "completed": false},
                {"id": 7, "text": "kept", "completed": false}]"#,
        )
        .unwrap();

    let mut store = TodoStore::open(storage, DEFAULT_STORAGE_KEY).unwrap();
    let texts: Vec<&str> = store.todos().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["kept"]);

    let added = store.add("next", None, t0()).unwrap().unwrap();
    assert_eq!(added.id, t0().timestamp_millis());
}

#[test]
fn test_add_after_max_id_does_not_overflow() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"id": 9223372036854775807, "text": "last", "completed": false}]"#,
        )
        .unwrap();

    let mut store = TodoStore::open(storage, DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(store.todos()[0].id, i64::MAX);

    let a = store.add("after max", None, t0()).unwrap().unwrap();
    assert_eq!(a.id, t0().timestamp_millis());
    let b = store.add("and again", None, t0()).unwrap().unwrap();
    assert_eq!(b.id, a.id + 1);
}

#[test]
fn test_toggle_flips_every_item_sharing_an_id() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"id": 5, "text": "first copy", "completed": false},
                {"id": 6, "text": "other", "completed": false},
                {"id": 5, "text": "second copy", "completed": false}]"#,
        )
        .unwrap();

    let mut store = TodoStore::open(storage, DEFAULT_STORAGE_KEY).unwrap();
    let toggled = store.toggle(5, t0()).unwrap().unwrap();
    assert_eq!(toggled.text, "first copy");

    let done: Vec<bool> = store.todos().iter().map(|t| t.is_completed()).collect();
    assert_eq!(done, [true, false, true]);

    let reloaded = TodoStore::open(store.storage().clone(), DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(reloaded.todos(), store.todos());
}
