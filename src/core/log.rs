use crate::errors::AppResult;
use crate::storage::log::{LogEntry, read_entries};
use crate::ui::messages::info;
use crate::utils::formatting::{pad_right, visible_width};
use ansi_term::Colour;
use std::path::Path;

const MAX_OP_WIDTH: usize = 60;

/// ANSI color per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "complete" => Colour::Cyan,
        "reopen" => Colour::Yellow,
        "export" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

/// `op (target)` with only the operation colored, capped at 60 visible columns.
fn op_target(entry: &LogEntry) -> String {
    let op = color_for_operation(&entry.operation)
        .paint(entry.operation.as_str())
        .to_string();

    if entry.target.is_empty() {
        return op;
    }

    let room = MAX_OP_WIDTH.saturating_sub(entry.operation.chars().count() + 3);
    format!("{op} ({})", truncate(&entry.target, room.max(4)))
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(storage_dir: &Path) -> AppResult<()> {
        let entries = read_entries(storage_dir)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, &str)> = entries
            .iter()
            .map(|e| (display_date(&e.date), op_target(e), e.message.as_str()))
            .collect();

        let date_w = rows.iter().map(|(d, _, _)| visible_width(d)).max().unwrap_or(0);
        let op_w = rows.iter().map(|(_, o, _)| visible_width(o)).max().unwrap_or(0);

        println!("📜 Internal log:\n");
        for (date, op, message) in rows {
            println!(
                "{}  {}  {}",
                pad_right(&date, date_w),
                pad_right(&op, op_w),
                message
            );
        }

        Ok(())
    }
}
