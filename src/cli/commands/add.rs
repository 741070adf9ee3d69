use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;

use super::{audit, open_store};

/// Add a task to the list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { text, due } = cmd {
        let text = text.join(" ");

        let due = due
            .as_deref()
            .map(|s| date::parse_datetime(s).ok_or_else(|| AppError::InvalidDueDate(s.to_string())))
            .transpose()?;

        let mut store = open_store(cfg)?;

        match store.add(&text, due, date::now())? {
            Some(todo) => {
                let due_msg = todo
                    .due
                    .as_ref()
                    .map(|d| format!(" (due {})", date::format_local(d, &cfg.date_format)))
                    .unwrap_or_default();
                success(format!("Added #{}: {}{}", todo.id, todo.text, due_msg));
                audit(cfg, "add", &todo.id.to_string(), &todo.text);
            }
            None => warning("Nothing to add: the task text is empty."),
        }
    }

    Ok(())
}
