//! In-memory task list kept in sync with a `Storage` backend.

use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::models::Todo;
use crate::storage::Storage;
use chrono::{DateTime, Utc};

pub const DEFAULT_STORAGE_KEY: &str = "my-todo-list";

pub struct TodoStore<S: Storage> {
    storage: S,
    key: String,
    todos: Vec<Todo>,
}

impl<S: Storage> TodoStore<S> {
    /// Load the list stored under `key`. A missing or malformed value yields an empty list.
    pub fn open(storage: S, key: impl Into<String>) -> AppResult<Self> {
        let key = key.into();
        let todos = storage
            .get_item(&key)?
            .map(|text| codec::decode(&text))
            .unwrap_or_default();

        Ok(Self {
            storage,
            key,
            todos,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Items in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Append a pending item. Whitespace-only text is ignored and returns `None`.
    pub fn add(
        &mut self,
        text: &str,
        due: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Todo>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let todo = Todo::new(self.next_id(now)?, text, due);
        self.todos.push(todo.clone());
        self.persist()?;

        Ok(Some(todo))
    }

    /// Flip completion of every item with `id` (imported lists may repeat ids)
    /// and return the first one. Unknown ids change nothing and return `None`.
    pub fn toggle(&mut self, id: i64, now: DateTime<Utc>) -> AppResult<Option<Todo>> {
        let mut first = None;
        for todo in self.todos.iter_mut().filter(|t| t.id == id) {
            todo.toggle(now);
            first.get_or_insert_with(|| todo.clone());
        }

        if first.is_some() {
            self.persist()?;
        }

        Ok(first)
    }

    /// Write the full list under the storage key.
    pub fn persist(&mut self) -> AppResult<()> {
        let text = codec::encode(&self.todos)?;
        self.storage.set_item(&self.key, &text)
    }

    /// Creation timestamp in ms, bumped past the last id when the clock has not advanced.
    /// When the last id is `i64::MAX` the first free id from `now` on is used instead.
    fn next_id(&self, now: DateTime<Utc>) -> AppResult<i64> {
        let candidate = now.timestamp_millis();
        match self.todos.iter().map(|t| t.id).max() {
            Some(last) if candidate <= last => match last.checked_add(1) {
                Some(id) => Ok(id),
                None => (candidate..=i64::MAX)
                    .find(|id| self.get(*id).is_none())
                    .ok_or(AppError::IdsExhausted),
            },
            _ => Ok(candidate),
        }
    }
}
