//! Data model for trial balance ledger classification.
//!
//! Shared by the mapping engine, the ingestion layer and the report writers.

pub mod category;
pub mod error;
pub mod ledger;
pub mod mapping;
pub mod options;
pub mod pbc;
pub mod summary;

pub use category::CategoryDefinition;
pub use error::{ModelError, Result};
pub use ledger::{LedgerRow, LedgerTable};
pub use mapping::{
    CategoryAssignment, ConfidenceLevel, MappingResult, MappingTable, MatchMethod, Resolution,
    UNMAPPED, UNMAPPED_LABEL, round2,
};
pub use options::{
    AccountingStandard, AuditType, ClassifierOptions, ColumnSelection, ConfidenceThreshold,
    DEFAULT_THRESHOLD, HIGH_CONFIDENCE_SCORE,
};
pub use pbc::{MajorCategory, PbcItem, Priority};
pub use summary::BatchSummary;
