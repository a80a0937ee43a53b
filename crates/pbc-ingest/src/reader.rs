//! Delimited text trial balance reading.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pbc_model::LedgerTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum file size for trial balance loading (100 MB default).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Field separator of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Semicolon => b';',
            Self::Tab => b'\t',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Tab => "tab",
        };
        f.write_str(name)
    }
}

impl FromStr for Delimiter {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "\t" {
            return Ok(Self::Tab);
        }
        match s.trim().to_lowercase().as_str() {
            "," | "comma" => Ok(Self::Comma),
            ";" | "semicolon" => Ok(Self::Semicolon),
            "\\t" | "tab" => Ok(Self::Tab),
            _ => Err(IngestError::InvalidDelimiter {
                value: s.to_string(),
            }),
        }
    }
}

/// Options for reading a trial balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOptions {
    #[serde(default)]
    pub delimiter: Delimiter,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_max_file_size() -> u64 {
    MAX_FILE_SIZE
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 files, which spreadsheet tools emit for "Unicode text".
///
/// A UTF-8 BOM is accepted and stripped while reading headers.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

/// Reads a comma-separated trial balance.
pub fn read_trial_balance(path: &Path) -> Result<LedgerTable> {
    read_trial_balance_with(path, &ReadOptions::default())
}

/// Reads a trial balance file with explicit options.
pub fn read_trial_balance_with(path: &Path, options: &ReadOptions) -> Result<LedgerTable> {
    check_file_size(path, options.max_file_size)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let table = read_table(file, options, path)?;
    debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.len(),
        "loaded trial balance"
    );
    Ok(table)
}

/// Reads a trial balance from any byte source.
pub fn read_trial_balance_from_reader<R: Read>(
    reader: R,
    options: &ReadOptions,
) -> Result<LedgerTable> {
    read_table(reader, options, Path::new("<input>"))
}

fn read_table<R: Read>(source: R, options: &ReadOptions, path: &Path) -> Result<LedgerTable> {
    let parse_error = |source: csv::Error| IngestError::CsvParse {
        path: PathBuf::from(path),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter.as_byte())
        .from_reader(source);

    let columns: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let header = if idx == 0 {
                header.trim_start_matches('\u{feff}')
            } else {
                header
            };
            header.trim().to_string()
        })
        .collect();

    if columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut table = LedgerTable::new(columns);
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        if record.len() > table.columns.len() {
            warn!(
                line = record.position().map(csv::Position::line),
                fields = record.len(),
                columns = table.columns.len(),
                "row has more fields than headers, extra fields ignored"
            );
        }
        let cells = record
            .iter()
            .take(table.columns.len())
            .map(|cell| {
                if cell.trim().is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        table.push_row(cells);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_parsing() {
        assert_eq!("comma".parse::<Delimiter>().unwrap(), Delimiter::Comma);
        assert_eq!(";".parse::<Delimiter>().unwrap(), Delimiter::Semicolon);
        assert_eq!("TAB".parse::<Delimiter>().unwrap(), Delimiter::Tab);
        assert!("|".parse::<Delimiter>().is_err());
    }

    #[test]
    fn test_reader_trims_headers_and_blanks() {
        let input = "\u{feff} Ledger Name ,Debit,Credit\nCash,500,\n,,\n";
        let table =
            read_trial_balance_from_reader(input.as_bytes(), &ReadOptions::default()).unwrap();
        assert_eq!(table.columns, vec!["Ledger Name", "Debit", "Credit"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 0), Some("Cash"));
        assert_eq!(table.cell(0, 1), Some("500"));
        assert_eq!(table.cell(0, 2), None);
        assert_eq!(table.cell(1, 0), None);
    }

    #[test]
    fn test_reader_accepts_ragged_rows() {
        let input = "Ledger;Debit;Credit\nRent;1.200\nSalary;3.000;;extra\n";
        let options = ReadOptions::default().with_delimiter(Delimiter::Semicolon);
        let table = read_trial_balance_from_reader(input.as_bytes(), &options).unwrap();
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(table.cell(1, 1), Some("3.000"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = read_trial_balance_from_reader("".as_bytes(), &ReadOptions::default());
        assert!(matches!(err, Err(IngestError::EmptyCsv { .. })));
    }
}
