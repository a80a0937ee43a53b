//! CLI library components for the ledger classifier.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
