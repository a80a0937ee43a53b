//! Configuration options for ledger classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default score a ledger must reach to be mapped.
pub const DEFAULT_THRESHOLD: u8 = 60;

/// Score at or above which a match is High confidence.
pub const HIGH_CONFIDENCE_SCORE: u8 = 80;

/// Kind of audit engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuditType {
    #[default]
    #[serde(rename = "Stat")]
    Statutory,
    #[serde(rename = "Tax")]
    Tax,
}

impl AuditType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statutory => "Stat",
            Self::Tax => "Tax",
        }
    }
}

impl fmt::Display for AuditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "stat" | "statutory" | "statutory audit" => Ok(Self::Statutory),
            "tax" | "tax audit" => Ok(Self::Tax),
            _ => Err(ModelError::UnknownAuditType {
                value: s.to_string(),
            }),
        }
    }
}

/// Financial reporting framework of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountingStandard {
    #[default]
    #[serde(rename = "Indian GAAP")]
    IndianGaap,
    #[serde(rename = "Ind AS")]
    IndAs,
}

impl AccountingStandard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndianGaap => "Indian GAAP",
            Self::IndAs => "Ind AS",
        }
    }
}

impl fmt::Display for AccountingStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountingStandard {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match compact.as_str() {
            "indiangaap" | "igaap" | "gaap" => Ok(Self::IndianGaap),
            "indas" => Ok(Self::IndAs),
            _ => Err(ModelError::UnknownAccountingStandard {
                value: s.to_string(),
            }),
        }
    }
}

/// Minimum combined score for a ledger to be mapped, validated to 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ConfidenceThreshold(u8);

impl ConfidenceThreshold {
    pub fn new(value: u32) -> Result<Self> {
        if value > 100 {
            return Err(ModelError::InvalidThreshold { value });
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<u32> for ConfidenceThreshold {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ConfidenceThreshold> for u32 {
    fn from(value: ConfidenceThreshold) -> Self {
        u32::from(value.0)
    }
}

impl fmt::Display for ConfidenceThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options controlling a classifier instance.
///
/// `audit_type` and `accounting_standard` are recorded for reporting but do
/// not change the dictionary or the scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierOptions {
    #[serde(default)]
    pub audit_type: AuditType,
    #[serde(default)]
    pub accounting_standard: AccountingStandard,
    #[serde(default)]
    pub threshold: ConfidenceThreshold,
}

impl ClassifierOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_audit_type(mut self, audit_type: AuditType) -> Self {
        self.audit_type = audit_type;
        self
    }

    #[must_use]
    pub fn with_accounting_standard(mut self, standard: AccountingStandard) -> Self {
        self.accounting_standard = standard;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: ConfidenceThreshold) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Caller-supplied column names; `None` means auto-detect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub ledger: Option<String>,
    pub debit: Option<String>,
    pub credit: Option<String>,
}

impl ColumnSelection {
    pub fn auto() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ledger(mut self, column: &str) -> Self {
        self.ledger = Some(column.to_string());
        self
    }

    #[must_use]
    pub fn with_debit(mut self, column: &str) -> Self {
        self.debit = Some(column.to_string());
        self
    }

    #[must_use]
    pub fn with_credit(mut self, column: &str) -> Self {
        self.credit = Some(column.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_rejects_values_above_100() {
        assert!(ConfidenceThreshold::new(100).is_ok());
        assert_eq!(ConfidenceThreshold::new(0).unwrap().value(), 0);
        assert_eq!(
            ConfidenceThreshold::new(101),
            Err(ModelError::InvalidThreshold { value: 101 })
        );
        assert_eq!(ConfidenceThreshold::default().value(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn audit_type_parses_ui_labels() {
        assert_eq!("Stat".parse::<AuditType>().unwrap(), AuditType::Statutory);
        assert_eq!("Tax Audit".parse::<AuditType>().unwrap(), AuditType::Tax);
        assert!("internal".parse::<AuditType>().is_err());
    }

    #[test]
    fn accounting_standard_ignores_spacing() {
        assert_eq!(
            "Ind AS".parse::<AccountingStandard>().unwrap(),
            AccountingStandard::IndAs
        );
        assert_eq!(
            "ind-as".parse::<AccountingStandard>().unwrap(),
            AccountingStandard::IndAs
        );
        assert_eq!(
            "Indian GAAP".parse::<AccountingStandard>().unwrap(),
            AccountingStandard::IndianGaap
        );
    }
}
