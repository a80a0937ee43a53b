//! Error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write an output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// JSON serialization failed.
    #[error("failed to write JSON report: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
