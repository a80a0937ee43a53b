//! Error types for mapping operations.

use std::path::PathBuf;

use pbc_model::ModelError;
use thiserror::Error;

/// Errors from dictionary loading and batch configuration.
///
/// Per-row conditions (blank ledger names, unmapped ledgers) are not
/// errors; only setup problems that abort a whole batch are.
#[derive(Debug, Error)]
pub enum MappingError {
    // === Batch Configuration Errors ===
    /// The table has no column that can hold ledger names.
    #[error("no usable ledger name column found in trial balance")]
    NoLedgerColumn,

    /// A caller-supplied column is not in the table.
    #[error("ledger column '{column}' not found in file")]
    ColumnNotFound { column: String },

    /// Invalid classifier option.
    #[error(transparent)]
    Options(#[from] ModelError),

    // === Dictionary Errors ===
    /// Dictionary file does not exist.
    #[error("dictionary file not found: {path}")]
    DictionaryNotFound { path: PathBuf },

    /// Dictionary file could not be read.
    #[error("failed to read dictionary {path}: {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dictionary JSON is malformed.
    #[error("failed to parse dictionary: {source}")]
    DictionaryParse {
        #[source]
        source: serde_json::Error,
    },

    /// A category has a blank name.
    #[error("category at position {index} has an empty name")]
    EmptyCategoryName { index: usize },

    /// Two categories share a name.
    #[error("duplicate category '{name}' in dictionary")]
    DuplicateCategory { name: String },

    /// No keyword or variation of a category survives normalization.
    #[error("category '{name}' has no usable keywords or variations")]
    EmptyCategoryTerms { name: String },

    /// A category is named like the UNMAPPED sentinel.
    #[error("category name '{name}' is reserved for unmapped ledgers")]
    ReservedCategoryName { name: String },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MappingError::ColumnNotFound {
            column: "Ledger".to_string(),
        };
        assert_eq!(err.to_string(), "ledger column 'Ledger' not found in file");
    }

    #[test]
    fn test_error_from_model() {
        let err: MappingError = ModelError::InvalidThreshold { value: 120 }.into();
        assert!(matches!(err, MappingError::Options(_)));
        assert!(err.to_string().contains("120"));
    }
}
