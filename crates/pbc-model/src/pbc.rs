//! PBC (Provided By Client) request items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency of a PBC request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Financial statement grouping of a PBC category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MajorCategory {
    #[serde(rename = "Fixed Assets")]
    FixedAssets,
    Inventories,
    #[serde(rename = "Trade Receivables")]
    TradeReceivables,
    #[serde(rename = "Cash & Bank")]
    CashAndBank,
    #[serde(rename = "Trade Payables")]
    TradePayables,
    Equity,
    Borrowings,
    #[serde(rename = "Statutory Compliance")]
    StatutoryCompliance,
    Revenue,
    Expenses,
    Other,
}

impl MajorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FixedAssets => "Fixed Assets",
            Self::Inventories => "Inventories",
            Self::TradeReceivables => "Trade Receivables",
            Self::CashAndBank => "Cash & Bank",
            Self::TradePayables => "Trade Payables",
            Self::Equity => "Equity",
            Self::Borrowings => "Borrowings",
            Self::StatutoryCompliance => "Statutory Compliance",
            Self::Revenue => "Revenue",
            Self::Expenses => "Expenses",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for MajorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document request generated for one mapped category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PbcItem {
    /// Sequential number starting at 1.
    pub item_number: usize,
    /// Dictionary category the item was generated from.
    pub category: String,
    pub major_category: MajorCategory,
    pub description: String,
    pub why_needed: String,
    pub priority: Priority,
    /// Number of ledgers mapped to the category.
    pub ledger_count: usize,
    pub total_debit: f64,
    pub total_credit: f64,
}
