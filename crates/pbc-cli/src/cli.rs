//! CLI argument definitions for the ledger classifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pbc_ingest::Delimiter;
use pbc_model::{AccountingStandard, AuditType};

#[derive(Parser)]
#[command(
    name = "pbc",
    version,
    about = "Classify trial balance ledgers into PBC categories",
    long_about = "Map trial balance ledger names onto standardized PBC (Provided By Client)\n\
                  categories and build the matching document request list.\n\n\
                  Unmapped ledgers are flagged for manual review."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include raw ledger names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify every ledger in a trial balance file.
    Classify(ClassifyArgs),

    /// List the categories of the active dictionary.
    Categories(CategoriesArgs),

    /// Show how a single ledger name scores against each category.
    Explain(ExplainArgs),
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Trial balance file (CSV with a header row).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column holding ledger names (default: detected from headers).
    #[arg(long = "ledger-column", value_name = "NAME")]
    pub ledger_column: Option<String>,

    /// Column holding debit amounts (default: detected from headers).
    #[arg(long = "debit-column", value_name = "NAME")]
    pub debit_column: Option<String>,

    /// Column holding credit amounts (default: detected from headers).
    #[arg(long = "credit-column", value_name = "NAME")]
    pub credit_column: Option<String>,

    /// Minimum confidence score (0-100) for a ledger to be mapped.
    #[arg(
        long = "threshold",
        default_value_t = u32::from(pbc_model::DEFAULT_THRESHOLD),
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    pub threshold: u32,

    /// Audit engagement type.
    #[arg(long = "audit-type", value_enum, default_value = "stat")]
    pub audit_type: AuditTypeArg,

    /// Accounting framework of the client.
    #[arg(long = "accounting-standard", value_enum, default_value = "indian-gaap")]
    pub accounting_standard: AccountingStandardArg,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Directory for mapping.csv, pbc_items.csv and report.json.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Field delimiter of the input file.
    #[arg(long = "delimiter", value_enum, default_value = "comma")]
    pub delimiter: DelimiterArg,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

#[derive(Parser)]
pub struct ExplainArgs {
    /// Ledger name to score.
    #[arg(value_name = "LEDGER_NAME")]
    pub ledger_name: String,

    /// Number of categories to show.
    #[arg(long = "top", default_value_t = 5)]
    pub top: usize,

    /// Minimum confidence score (0-100) used for the final decision.
    #[arg(
        long = "threshold",
        default_value_t = u32::from(pbc_model::DEFAULT_THRESHOLD),
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    pub threshold: u32,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

#[derive(clap::Args)]
pub struct DictionaryArgs {
    /// Category dictionary JSON file (default: $PBC_DICTIONARY or built-in).
    #[arg(long = "dictionary", value_name = "PATH")]
    pub dictionary: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AuditTypeArg {
    Stat,
    Tax,
}

impl From<AuditTypeArg> for AuditType {
    fn from(value: AuditTypeArg) -> Self {
        match value {
            AuditTypeArg::Stat => AuditType::Statutory,
            AuditTypeArg::Tax => AuditType::Tax,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountingStandardArg {
    IndianGaap,
    IndAs,
}

impl From<AccountingStandardArg> for AccountingStandard {
    fn from(value: AccountingStandardArg) -> Self {
        match value {
            AccountingStandardArg::IndianGaap => AccountingStandard::IndianGaap,
            AccountingStandardArg::IndAs => AccountingStandard::IndAs,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Semicolon,
    Tab,
}

impl From<DelimiterArg> for Delimiter {
    fn from(value: DelimiterArg) -> Self {
        match value {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Semicolon => Delimiter::Semicolon,
            DelimiterArg::Tab => Delimiter::Tab,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
