//! Conversion between the in-memory list and its persisted JSON text.
//!
//! Decoding never fails: anything that cannot be understood is dropped.

use crate::errors::AppResult;
use crate::models::{Completion, StoredTodo, Todo};
use crate::utils::date::{parse_datetime, to_iso};
use chrono::{DateTime, Utc};
use serde_json::Value;

impl From<&Todo> for StoredTodo {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            text: todo.text.clone(),
            completed: todo.is_completed(),
            due_date: todo.due.as_ref().map(to_iso),
            completed_at: todo.completed_at().as_ref().map(to_iso),
        }
    }
}

impl From<StoredTodo> for Todo {
    fn from(stored: StoredTodo) -> Self {
        let due = parse_optional(stored.due_date.as_deref());
        let mut todo = Todo::new(stored.id, stored.text, due);

        if stored.completed {
            // completedAt missing or unreadable: fall back to the creation time
            let at = parse_optional(stored.completed_at.as_deref())
                .or_else(|| todo.created_at())
                .unwrap_or_default();
            todo.completion = Completion::Done { at };
        }

        todo
    }
}

fn parse_optional(s: Option<&str>) -> Option<DateTime<Utc>> {
    s.and_then(parse_datetime)
}

/// Wire form of the whole list.
pub fn to_stored(todos: &[Todo]) -> Vec<StoredTodo> {
    todos.iter().map(StoredTodo::from).collect()
}

/// Serialize the full list as a JSON array.
pub fn encode(todos: &[Todo]) -> AppResult<String> {
    Ok(serde_json::to_string(&to_stored(todos))?)
}

/// Pretty-printed variant, used for exports.
pub fn encode_pretty(todos: &[Todo]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&to_stored(todos))?)
}

/// Parse persisted text back into a list.
///
/// - not a JSON array → empty list
/// - elements that are not valid items → skipped
/// - unreadable dates → treated as absent
pub fn decode(text: &str) -> Vec<Todo> {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<StoredTodo>(item).ok())
        .map(Todo::from)
        .collect()
}
