use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Todo;
use crate::ui::messages::info;
use crate::ui::pages::{Page, navbar};
use crate::utils::colors::{dim, style_checkbox, style_due, style_text};
use crate::utils::date;
use crate::utils::formatting::wrap;
use crate::utils::table::Table;
use chrono::{DateTime, Utc};

use super::open_store;

/// Show the Home page: navigation bar and the task table.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    println!("{}", navbar(Page::Home));

    if store.todos().is_empty() {
        info("No tasks yet. Add one with: rtodo add <TEXT> [--due <WHEN>]");
        return Ok(());
    }

    print!("{}", render(store.todos(), cfg, date::now()));
    Ok(())
}

/// Task table as printed by `list`.
pub fn render(todos: &[Todo], cfg: &Config, now: DateTime<Utc>) -> String {
    let mut table = Table::new(["#", "ID", "Done", "Text", "Due", "Completed"]);

    for (i, todo) in todos.iter().enumerate() {
        let completed = todo.is_completed();

        // Style each wrapped line separately so escapes never span lines
        let text = wrap(&todo.text, cfg.wrap_width)
            .iter()
            .map(|l| style_text(l, completed))
            .collect::<Vec<_>>()
            .join("\n");

        let due = match &todo.due {
            Some(d) => style_due(
                &date::format_local(d, &cfg.date_format),
                todo.is_overdue(now),
            ),
            None => dim("-"),
        };

        let done_at = match todo.completed_at() {
            Some(at) => date::format_local(&at, &cfg.date_format),
            None => dim("-"),
        };

        table.add_row(vec![
            (i + 1).to_string(),
            todo.id.to_string(),
            style_checkbox(completed),
            text,
            due,
            done_at,
        ]);
    }

    table.render()
}
