use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;

use super::{audit, open_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { id } = cmd {
        let mut store = open_store(cfg)?;

        match store.toggle(*id, date::now())? {
            Some(todo) => match todo.completed_at() {
                Some(at) => {
                    success(format!(
                        "Completed #{}: {} ({})",
                        todo.id,
                        todo.text,
                        date::format_local(&at, &cfg.date_format)
                    ));
                    audit(cfg, "complete", &todo.id.to_string(), &todo.text);
                }
                None => {
                    success(format!("Reopened #{}: {}", todo.id, todo.text));
                    audit(cfg, "reopen", &todo.id.to_string(), &todo.text);
                }
            },
            None => warning(format!("No task with id {id}.")),
        }
    }

    Ok(())
}
