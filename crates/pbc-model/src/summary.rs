//! Summary statistics over a mapping table.

use serde::{Deserialize, Serialize};

use crate::mapping::{ConfidenceLevel, MappingResult, round2};

/// Aggregate statistics of a batch run.
///
/// Always derived from the full result sequence; the zero record
/// (`Default`) describes an empty batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_ledgers: usize,
    pub high_confidence_count: usize,
    pub medium_confidence_count: usize,
    pub low_confidence_count: usize,
    /// Mean confidence score, two decimals.
    pub average_confidence_score: f64,
    /// Percentage of rows whose level is not Low, two decimals.
    pub success_rate: f64,
}

impl BatchSummary {
    /// Single aggregation pass over the results.
    pub fn from_results(results: &[MappingResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }
        let mut summary = Self {
            total_ledgers: results.len(),
            ..Self::default()
        };
        let mut score_sum = 0.0;
        for result in results {
            score_sum += result.confidence_score;
            match result.confidence_level {
                ConfidenceLevel::High => summary.high_confidence_count += 1,
                ConfidenceLevel::Medium => summary.medium_confidence_count += 1,
                ConfidenceLevel::Low => summary.low_confidence_count += 1,
            }
        }
        let total = summary.total_ledgers as f64;
        summary.average_confidence_score = round2(score_sum / total);
        summary.success_rate =
            round2((summary.total_ledgers - summary.low_confidence_count) as f64 / total * 100.0);
        summary
    }

    /// Rows that need review (Low confidence).
    pub fn needs_review(&self) -> usize {
        self.low_confidence_count
    }
}
