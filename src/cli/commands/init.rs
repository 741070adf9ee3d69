use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{FileStorage, Storage};
use crate::ui::messages::{info, success};

use super::{audit, open_store};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the storage directory
///  - an empty list under the storage key, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.storage.as_deref(), cli.test)?;

    let storage = FileStorage::new(cfg.storage_path())?;
    let path = storage.path_for(&cfg.storage_key)?;
    let existed = storage.get_item(&cfg.storage_key)?.is_some();

    info(format!("Storage dir : {}", cfg.storage_path().display()));
    info(format!("Storage key : {}", cfg.storage_key));

    let mut store = open_store(&cfg)?;
    if existed {
        info(format!(
            "Existing list kept: {} item(s) in {}",
            store.todos().len(),
            path.display()
        ));
    } else {
        store.persist()?;
        success(format!("Empty list created at {}", path.display()));
    }

    audit(
        &cfg,
        "init",
        &cfg.storage_key,
        &format!("Storage initialized at {}", path.display()),
    );

    success("rTodo initialization completed!");
    Ok(())
}
