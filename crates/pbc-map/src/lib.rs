//! Trial balance ledger classification.
//!
//! Maps free-text ledger names from a trial balance onto standardized PBC
//! (Provided By Client) categories using a weighted blend of keyword
//! containment and fuzzy similarity, then turns the mapped categories into
//! PBC document requests.
//!
//! # Example
//!
//! ```ignore
//! use pbc_map::LedgerClassifier;
//! use pbc_model::{ClassifierOptions, ColumnSelection, LedgerTable};
//!
//! let table = LedgerTable::from_text_rows(
//!     &["Ledger Name", "Debit", "Credit"],
//!     &[&["Sundry Debtors", "1,20,000", ""], &["GST Payable", "", "18,000"]],
//! );
//! let classifier = LedgerClassifier::new(ClassifierOptions::default());
//! let output = classifier.process(&table, &ColumnSelection::auto())?;
//! let items = pbc_map::build_pbc_items(&output.table);
//! ```

mod batch;
mod builtin;
mod dictionary;
mod engine;
mod error;
mod items;
mod score;
mod utils;

// === Error Types ===
pub use error::{MappingError, Result};

// === Dictionary ===
pub use dictionary::{
    CategoryDictionary, DICTIONARY_ENV_VAR, DictionaryEntry, builtin_dictionary, dictionary_path,
};

// === Scoring ===
pub use engine::{CategoryScore, LedgerClassifier, confidence_level};
pub use score::{fuzzy_score, keyword_score, token_sort_ratio};
pub use utils::normalize_text;

// === Batch Processing ===
pub use batch::{
    BatchOutput, CREDIT_COLUMN_PATTERNS, DEBIT_COLUMN_PATTERNS, DetectedColumns,
    LEDGER_COLUMN_PATTERNS, detect_amount_column, detect_ledger_column,
};

// === PBC Items ===
pub use items::{
    build_pbc_items, determine_priority, major_category, parse_amount, pbc_description,
    why_needed,
};
