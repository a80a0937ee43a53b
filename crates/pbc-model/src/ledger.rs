//! Trial balance input types.

use serde::{Deserialize, Serialize};

/// A trial balance as loaded from a spreadsheet or delimited upload.
///
/// Column names are human-authored and kept as read (trimmed). Each row
/// holds one optional cell per column; short rows are treated as missing
/// trailing cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl LedgerTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    /// Builds a table from string cells, treating blank cells as missing.
    pub fn from_text_rows(columns: &[&str], rows: &[&[&str]]) -> Self {
        let mut table = Self::new(columns.iter().map(|c| (*c).to_string()).collect());
        for row in rows {
            table.push_row(
                row.iter()
                    .map(|cell| {
                        if cell.trim().is_empty() {
                            None
                        } else {
                            Some((*cell).to_string())
                        }
                    })
                    .collect(),
            );
        }
        table
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, matching exactly first and then ignoring case
    /// and surrounding whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        if let Some(idx) = self.columns.iter().position(|c| c == name) {
            return Some(idx);
        }
        let wanted = name.trim();
        self.columns
            .iter()
            .position(|c| c.trim().eq_ignore_ascii_case(wanted))
    }

    /// Cell value at `row`/`column`, `None` when missing.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(Option::as_deref)
    }
}

/// A single ledger line extracted from a trial balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// 1-based position of the row in the source table.
    pub sequence: usize,
    pub ledger_name: Option<String>,
    pub debit_amount: Option<String>,
    pub credit_amount: Option<String>,
}

impl LedgerRow {
    pub fn new(sequence: usize, ledger_name: &str) -> Self {
        Self {
            sequence,
            ledger_name: Some(ledger_name.to_string()),
            debit_amount: None,
            credit_amount: None,
        }
    }

    #[must_use]
    pub fn with_debit(mut self, amount: &str) -> Self {
        self.debit_amount = Some(amount.to_string());
        self
    }

    #[must_use]
    pub fn with_credit(mut self, amount: &str) -> Self {
        self.credit_amount = Some(amount.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_falls_back_to_case_insensitive() {
        let table = LedgerTable::new(vec!["Account Name".to_string(), "Debit".to_string()]);
        assert_eq!(table.column_index("Account Name"), Some(0));
        assert_eq!(table.column_index("debit"), Some(1));
        assert_eq!(table.column_index(" DEBIT "), Some(1));
        assert_eq!(table.column_index("Credit"), None);
    }

    #[test]
    fn short_rows_read_as_missing_cells() {
        let table = LedgerTable::from_text_rows(&["Ledger", "Debit"], &[&["Cash"], &["", "10"]]);
        assert_eq!(table.cell(0, 0), Some("Cash"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 0), None);
        assert_eq!(table.cell(1, 1), Some("10"));
        assert_eq!(table.cell(5, 0), None);
    }
}
