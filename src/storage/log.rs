//! Internal audit log: one JSON object per line in `rtodo.log`.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "rtodo.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Path of the audit log inside a storage directory.
pub fn log_path(storage_dir: &Path) -> PathBuf {
    storage_dir.join(LOG_FILE_NAME)
}

/// Append an internal log line.
pub fn ttlog(storage_dir: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = LogEntry {
        // Timestamp locale, ISO 8601
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut line = serde_json::to_string(&entry)?;
    line.push('\n');

    fs::create_dir_all(storage_dir)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(storage_dir))?;
    file.write_all(line.as_bytes())?;

    Ok(())
}

/// Read all log entries. Unreadable lines are skipped; a missing file is empty.
pub fn read_entries(storage_dir: &Path) -> AppResult<Vec<LogEntry>> {
    let content = match fs::read_to_string(log_path(storage_dir)) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}
