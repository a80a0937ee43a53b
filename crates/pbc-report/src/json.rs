//! JSON run report.

use std::io::Write;

use chrono::{DateTime, Utc};
use pbc_model::{BatchSummary, ClassifierOptions, MappingResult, MappingTable, PbcItem};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Everything a reviewer needs from one classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingReport {
    pub generated_at: DateTime<Utc>,
    /// Trial balance the run was made from, if read from a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub options: ClassifierOptions,
    pub summary: BatchSummary,
    pub items: Vec<PbcItem>,
    /// UNMAPPED rows awaiting manual review.
    pub review: Vec<MappingResult>,
}

impl MappingReport {
    pub fn new(
        options: ClassifierOptions,
        table: &MappingTable,
        summary: BatchSummary,
        items: Vec<PbcItem>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            source: None,
            options,
            summary,
            items,
            review: table.unmapped().into_iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
