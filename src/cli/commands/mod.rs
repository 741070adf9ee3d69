pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod pages;
pub mod toggle;

use crate::config::Config;
use crate::core::TodoStore;
use crate::errors::AppResult;
use crate::storage::{FileStorage, log::ttlog};
use crate::ui::messages::warning;

/// Open the task list configured in `cfg`.
pub(crate) fn open_store(cfg: &Config) -> AppResult<TodoStore<FileStorage>> {
    let storage = FileStorage::new(cfg.storage_path())?;
    TodoStore::open(storage, cfg.storage_key.clone())
}

/// Write an audit line; a failure is reported but never fails the command.
pub(crate) fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&cfg.storage_path(), operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
