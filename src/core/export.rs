use crate::core::codec;
use crate::errors::AppResult;
use crate::models::Todo;
use crate::ui::messages::{info, success};
use crate::utils::fs::{ensure_parent, ensure_writable};
use clap::ValueEnum;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the list to `path` in the chosen format.
    pub fn export(todos: &[Todo], format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;
        ensure_parent(path)?;

        match format {
            ExportFormat::Json => export_json(todos, path)?,
            ExportFormat::Csv => export_csv(todos, path)?,
        }

        success(format!(
            "{} export completed: {} item(s) → {}",
            format.as_str().to_uppercase(),
            todos.len(),
            path.display()
        ));
        Ok(())
    }
}

/// Same layout as the storage value, pretty-printed.
fn export_json(todos: &[Todo], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = codec::encode_pretty(todos)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Header comes from the serde field names; absent dates are empty cells.
fn export_csv(todos: &[Todo], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    if todos.is_empty() {
        wtr.write_record(["id", "text", "completed", "dueDate", "completedAt"])?;
    }
    for item in codec::to_stored(todos) {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
