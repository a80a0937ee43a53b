//! Ledger-to-category mapping results.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel category for ledgers that did not clear the threshold.
pub const UNMAPPED: &str = "UNMAPPED";

/// Label used for [`UNMAPPED`] rows in exported reports.
pub const UNMAPPED_LABEL: &str = "UNMAPPED - Manual Review Required";

/// Outcome of category resolution for one ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryAssignment {
    /// Resolved to a dictionary category.
    Mapped(String),
    /// No category cleared the confidence threshold.
    Unmapped,
}

impl CategoryAssignment {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mapped(name) => name,
            Self::Unmapped => UNMAPPED,
        }
    }

    /// Category name, `None` for unmapped ledgers.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Mapped(name) => Some(name),
            Self::Unmapped => None,
        }
    }

    pub fn is_unmapped(&self) -> bool {
        matches!(self, Self::Unmapped)
    }

    /// Name as rendered in exported reports.
    pub fn report_label(&self) -> &str {
        match self {
            Self::Mapped(name) => name,
            Self::Unmapped => UNMAPPED_LABEL,
        }
    }
}

impl fmt::Display for CategoryAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CategoryAssignment> for String {
    fn from(value: CategoryAssignment) -> Self {
        match value {
            CategoryAssignment::Mapped(name) => name,
            CategoryAssignment::Unmapped => UNMAPPED.to_string(),
        }
    }
}

impl From<String> for CategoryAssignment {
    fn from(value: String) -> Self {
        if value == UNMAPPED || value == UNMAPPED_LABEL {
            Self::Unmapped
        } else {
            Self::Mapped(value)
        }
    }
}

/// Coarse banding of a confidence score, used to prioritize manual review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// Below the threshold; always the level of an unmapped ledger.
    Low,
    /// At or above the threshold but below the high-confidence score.
    Medium,
    /// At or above the high-confidence score.
    High,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Returns a human-readable description of the confidence level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "high confidence - likely correct",
            Self::Medium => "medium confidence - should review",
            Self::Low => "low confidence - needs manual review",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which scorer contributed the winning sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Keyword,
    Fuzzy,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single ledger name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub category: CategoryAssignment,
    /// Combined score, 0-100, rounded to two decimals.
    pub confidence_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub match_method: MatchMethod,
    /// Fuzzy-matched term; empty when keyword evidence won.
    pub matched_term: String,
}

/// One row of the mapping table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    /// 1-based position of the ledger in the input table.
    pub sequence: usize,
    pub original_ledger_name: String,
    pub category: CategoryAssignment,
    pub confidence_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub match_method: MatchMethod,
    pub matched_term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_amount: Option<String>,
}

impl MappingResult {
    pub fn new(sequence: usize, ledger_name: &str, resolution: Resolution) -> Self {
        Self {
            sequence,
            original_ledger_name: ledger_name.to_string(),
            category: resolution.category,
            confidence_score: resolution.confidence_score,
            confidence_level: resolution.confidence_level,
            match_method: resolution.match_method,
            matched_term: resolution.matched_term,
            debit_amount: None,
            credit_amount: None,
        }
    }

    pub fn is_unmapped(&self) -> bool {
        self.category.is_unmapped()
    }
}

/// Output table of a batch run.
///
/// `has_debit` / `has_credit` record whether the batch carried amount
/// columns at all, so exporters can omit absent columns instead of
/// rendering them as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingTable {
    pub rows: Vec<MappingResult>,
    pub has_debit: bool,
    pub has_credit: bool,
}

impl MappingTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingResult> {
        self.rows.iter()
    }

    /// Rows that need manual review.
    pub fn unmapped(&self) -> Vec<&MappingResult> {
        self.rows.iter().filter(|r| r.is_unmapped()).collect()
    }

    /// Mapped rows grouped by category, in order of first appearance.
    pub fn by_category(&self) -> Vec<(&str, Vec<&MappingResult>)> {
        let mut positions: BTreeMap<&str, usize> = BTreeMap::new();
        let mut groups: Vec<(&str, Vec<&MappingResult>)> = Vec::new();
        for row in &self.rows {
            let Some(name) = row.category.name() else {
                continue;
            };
            match positions.get(name) {
                Some(&idx) => groups[idx].1.push(row),
                None => {
                    positions.insert(name, groups.len());
                    groups.push((name, vec![row]));
                }
            }
        }
        groups
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
