//! Error types for model construction and option parsing.

use thiserror::Error;

/// Errors raised while building model values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Confidence threshold outside the 0-100 range.
    #[error("confidence threshold must be between 0 and 100, got {value}")]
    InvalidThreshold { value: u32 },

    /// Audit type label not recognized.
    #[error("unknown audit type '{value}' (expected Stat or Tax)")]
    UnknownAuditType { value: String },

    /// Accounting standard label not recognized.
    #[error("unknown accounting standard '{value}' (expected Indian GAAP or Ind AS)")]
    UnknownAccountingStandard { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
