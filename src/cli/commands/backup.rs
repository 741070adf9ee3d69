use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::storage::FileStorage;
use crate::ui::messages::success;
use crate::utils::path::resolve_output;

use super::audit;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let storage = FileStorage::new(cfg.storage_path())?;
        let src = storage.path_for(&cfg.storage_key)?;
        let dest = resolve_output(file);

        let written = BackupLogic::backup(&src, &dest, *compress, *force)?;

        for p in &written {
            success(format!("Backup created: {}", p.display()));
        }
        audit(
            cfg,
            "backup",
            &dest.display().to_string(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
