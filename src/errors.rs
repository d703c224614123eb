//! Unified application error type.
//! Every module (store, config, cli, export, utils) returns AppError so the
//! error handling stays consistent. The aggregation engine itself is
//! infallible and never produces one.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

    #[error("Invalid cost for location '{0}': {1}")]
    InvalidCost(String, f64),

    #[error("Unknown time zone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Data file errors
    // ---------------------------
    #[error("Unsupported data file format: {0} (use .yaml, .yml or .json)")]
    UnsupportedDataFormat(String),

    #[error("Data file not found: {0}")]
    DataNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
