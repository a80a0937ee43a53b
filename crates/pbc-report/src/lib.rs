//! Report generation for trial balance classification runs.
//!
//! - **Mapping CSV**: one row per classified ledger, UNMAPPED rows flagged
//!   for manual review
//! - **PBC items CSV**: one document request per mapped category
//! - **JSON report**: options, summary, items and the review queue

mod csv_export;
mod error;
mod json;
mod outputs;

pub use csv_export::{ITEM_COLUMNS, MAPPING_COLUMNS, write_items_csv, write_mapping_csv};
pub use error::{ReportError, Result};
pub use json::MappingReport;
pub use outputs::{ITEMS_FILE, MAPPING_FILE, OutputPaths, REPORT_FILE, write_outputs};
