//! Trial balance ingestion.
//!
//! Loads delimited text exports of a trial balance (typically saved from a
//! spreadsheet or accounting package) into a [`pbc_model::LedgerTable`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pbc_ingest::{Delimiter, ReadOptions, read_trial_balance_with};
//!
//! let options = ReadOptions::default().with_delimiter(Delimiter::Semicolon);
//! let table = read_trial_balance_with(Path::new("tb_march.csv"), &options)?;
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    Delimiter, MAX_FILE_SIZE, ReadOptions, check_file_size, read_trial_balance,
    read_trial_balance_from_reader, read_trial_balance_with, validate_encoding,
};
