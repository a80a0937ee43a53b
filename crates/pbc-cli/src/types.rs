use std::path::PathBuf;

use pbc_map::DetectedColumns;
use pbc_model::{BatchSummary, MappingTable, PbcItem};
use pbc_report::OutputPaths;

/// Everything produced by one `classify` run.
#[derive(Debug)]
pub struct ClassifyResult {
    pub source: PathBuf,
    pub columns: DetectedColumns,
    pub table: MappingTable,
    pub summary: BatchSummary,
    pub items: Vec<PbcItem>,
    /// Written files, when an output directory was given.
    pub outputs: Option<OutputPaths>,
}
