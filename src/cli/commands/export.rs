use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::utils::path::resolve_output;

use super::{audit, open_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let path = resolve_output(file);

        ExportLogic::export(store.todos(), *format, &path, *force)?;

        audit(
            cfg,
            "export",
            &path.display().to_string(),
            &format!("{} item(s) as {}", store.todos().len(), format.as_str()),
        );
    }
    Ok(())
}
