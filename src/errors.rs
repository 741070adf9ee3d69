//! Unified application error type.
//! Every layer (storage, core, cli, utils) returns AppError so errors are
//! reported the same way by `main`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid due date: {0}")]
    InvalidDueDate(String),

    // ---------------------------
    // Storage errors
    // ---------------------------
    #[error("Invalid storage key: {0}")]
    InvalidStorageKey(String),

    #[error("Storage file not found: {0}")]
    StorageNotFound(String),

    #[error("No free task id left")]
    IdsExhausted,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export cancelled: {0} not overwritten")]
    ExportCancelled(String),
}

pub type AppResult<T> = Result<T, AppError>;
