//! Error types for trial balance ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trial balance.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Trial balance file not found.
    #[error("trial balance file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}; save the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Malformed delimited text.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Unknown delimiter name.
    #[error("unsupported delimiter '{value}'; expected comma, semicolon or tab")]
    InvalidDelimiter { value: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/tb.csv"),
        };
        assert_eq!(err.to_string(), "trial balance file not found: /path/to/tb.csv");
    }

    #[test]
    fn test_encoding_error_names_encoding() {
        let err = IngestError::UnsupportedEncoding {
            path: PathBuf::from("tb.csv"),
            encoding: "UTF-16 LE",
        };
        assert!(err.to_string().contains("UTF-16 LE"));
    }
}
