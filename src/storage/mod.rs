//! Key/value persistence, shaped after browser local storage.

pub mod file;
pub mod log;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::AppResult;

/// Synchronous string store addressed by key.
pub trait Storage {
    /// Value stored under `key`, or `None` when the key was never written.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}
