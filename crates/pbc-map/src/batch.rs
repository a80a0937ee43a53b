//! Batch classification of trial balance tables.
//!
//! Column roles are chosen first (caller overrides, then header
//! auto-detection), then every row with a non-blank ledger name is resolved
//! in input order. Rows keep their 1-based input position as `sequence` so
//! results can be traced back to the uploaded sheet.

use pbc_model::{
    BatchSummary, ColumnSelection, LedgerRow, LedgerTable, MappingResult, MappingTable,
};
use serde::Serialize;
use tracing::{debug, info, info_span, trace, warn};

use crate::engine::LedgerClassifier;
use crate::error::{MappingError, Result};
use crate::utils::normalize_text;

/// Header fragments identifying the ledger name column, in priority order.
pub const LEDGER_COLUMN_PATTERNS: &[&str] = &[
    "ledger",
    "ledger name",
    "account",
    "account name",
    "particulars",
    "description",
    "ledger_name",
    "account_name",
    "name",
    "head",
    "account head",
];

/// Header fragments identifying the debit amount column.
pub const DEBIT_COLUMN_PATTERNS: &[&str] = &["debit", "dr", "debit amount", "dr amount"];

/// Header fragments identifying the credit amount column.
pub const CREDIT_COLUMN_PATTERNS: &[&str] = &["credit", "cr", "credit amount", "cr amount"];

/// Column roles resolved for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedColumns {
    pub ledger: String,
    pub debit: Option<String>,
    pub credit: Option<String>,
}

/// Result of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutput {
    pub columns: DetectedColumns,
    pub table: MappingTable,
    pub summary: BatchSummary,
}

/// First column (in column order) whose lowercased header contains any of
/// `patterns`, skipping the positions in `exclude`.
fn find_column(columns: &[String], patterns: &[&str], exclude: &[usize]) -> Option<usize> {
    columns.iter().enumerate().position(|(idx, column)| {
        if exclude.contains(&idx) {
            return false;
        }
        let lower = column.to_lowercase();
        patterns.iter().any(|pattern| lower.contains(pattern))
    })
}

/// Index of the column that holds ledger names, falling back to the first
/// column. `None` only when the table has no columns.
pub fn detect_ledger_column(columns: &[String]) -> Option<usize> {
    if columns.is_empty() {
        return None;
    }
    find_column(columns, LEDGER_COLUMN_PATTERNS, &[]).or(Some(0))
}

/// Index of an amount column matching `patterns`, never one of `exclude`.
pub fn detect_amount_column(
    columns: &[String],
    patterns: &[&str],
    exclude: &[usize],
) -> Option<usize> {
    find_column(columns, patterns, exclude)
}

struct ColumnPlan {
    ledger: usize,
    debit: Option<usize>,
    credit: Option<usize>,
}

fn plan_columns(table: &LedgerTable, selection: &ColumnSelection) -> Result<ColumnPlan> {
    let ledger = match selection.ledger.as_deref() {
        Some(name) => table
            .column_index(name)
            .ok_or_else(|| MappingError::ColumnNotFound {
                column: name.to_string(),
            })?,
        None => detect_ledger_column(&table.columns).ok_or(MappingError::NoLedgerColumn)?,
    };

    let mut taken = vec![ledger];
    let debit = amount_column(table, selection.debit.as_deref(), DEBIT_COLUMN_PATTERNS, &taken);
    taken.extend(debit);
    let credit =
        amount_column(table, selection.credit.as_deref(), CREDIT_COLUMN_PATTERNS, &taken);

    Ok(ColumnPlan {
        ledger,
        debit,
        credit,
    })
}

fn amount_column(
    table: &LedgerTable,
    supplied: Option<&str>,
    patterns: &[&str],
    exclude: &[usize],
) -> Option<usize> {
    match supplied {
        Some(name) => {
            let index = table.column_index(name);
            if index.is_none() {
                warn!(column = name, "amount column not found, amounts omitted");
            }
            index
        }
        None => detect_amount_column(&table.columns, patterns, exclude),
    }
}

impl<'d> LedgerClassifier<'d> {
    /// Classifies every ledger row of a table.
    ///
    /// Fails only on setup problems: a table without columns, or a
    /// requested ledger column that is not present. Blank ledger names are
    /// skipped; missing amount columns leave amounts absent.
    pub fn process(&self, table: &LedgerTable, selection: &ColumnSelection) -> Result<BatchOutput> {
        let span = info_span!("classify_batch", rows = table.len());
        let _guard = span.enter();

        let plan = plan_columns(table, selection)?;
        let columns = DetectedColumns {
            ledger: table.columns[plan.ledger].clone(),
            debit: plan.debit.map(|idx| table.columns[idx].clone()),
            credit: plan.credit.map(|idx| table.columns[idx].clone()),
        };
        debug!(
            ledger = %columns.ledger,
            debit = ?columns.debit,
            credit = ?columns.credit,
            "selected trial balance columns"
        );

        let rows: Vec<LedgerRow> = (0..table.len())
            .map(|row| LedgerRow {
                sequence: row + 1,
                ledger_name: table.cell(row, plan.ledger).map(str::to_string),
                debit_amount: plan
                    .debit
                    .and_then(|col| table.cell(row, col))
                    .map(str::to_string),
                credit_amount: plan
                    .credit
                    .and_then(|col| table.cell(row, col))
                    .map(str::to_string),
            })
            .collect();

        let mut mapping = self.process_rows(&rows);
        mapping.has_debit = plan.debit.is_some();
        mapping.has_credit = plan.credit.is_some();
        let summary = BatchSummary::from_results(&mapping.rows);
        info!(
            ledgers = summary.total_ledgers,
            high = summary.high_confidence_count,
            medium = summary.medium_confidence_count,
            low = summary.low_confidence_count,
            success_rate = summary.success_rate,
            "batch classified"
        );

        Ok(BatchOutput {
            columns,
            table: mapping,
            summary,
        })
    }

    /// Classifies already extracted ledger rows, skipping blank names.
    ///
    /// The returned table marks amount columns present when any row carries
    /// the corresponding amount.
    pub fn process_rows(&self, rows: &[LedgerRow]) -> MappingTable {
        let mut table = MappingTable::default();
        for row in rows {
            let Some(name) = row.ledger_name.as_deref() else {
                trace!(sequence = row.sequence, "skipping row without ledger name");
                continue;
            };
            if normalize_text(name).is_empty() {
                trace!(sequence = row.sequence, "skipping blank ledger name");
                continue;
            }

            let resolution = self.resolve(name);
            if resolution.category.is_unmapped() {
                debug!(
                    sequence = row.sequence,
                    score = resolution.confidence_score,
                    "ledger left unmapped"
                );
            }
            let mut result = MappingResult::new(row.sequence, name, resolution);
            result.debit_amount = row.debit_amount.clone();
            result.credit_amount = row.credit_amount.clone();
            table.has_debit |= result.debit_amount.is_some();
            table.has_credit |= result.credit_amount.is_some();
            table.rows.push(result);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_detect_ledger_column() {
        assert_eq!(detect_ledger_column(&headers(&["Sl", "Ledger Name", "Dr"])), Some(1));
        assert_eq!(detect_ledger_column(&headers(&["PARTICULARS", "Debit"])), Some(0));
        assert_eq!(detect_ledger_column(&headers(&["Code", "Balance"])), Some(0));
        assert_eq!(detect_ledger_column(&[]), None);
    }

    #[test]
    fn test_detect_amount_columns_skip_taken_positions() {
        let columns = headers(&["Account Description", "Debit", "Credit"]);
        assert_eq!(detect_amount_column(&columns, DEBIT_COLUMN_PATTERNS, &[0]), Some(1));
        assert_eq!(detect_amount_column(&columns, CREDIT_COLUMN_PATTERNS, &[0, 1]), Some(2));

        // "Dr/Cr Ledger" would match both amount patterns if not excluded.
        let columns = headers(&["Dr/Cr Ledger", "Amount"]);
        assert_eq!(detect_amount_column(&columns, DEBIT_COLUMN_PATTERNS, &[0]), None);
    }

    #[test]
    fn test_process_rows_skips_blank_names() {
        let classifier = LedgerClassifier::default();
        let rows = vec![
            LedgerRow::new(1, "Cash"),
            LedgerRow::new(2, "   "),
            LedgerRow {
                sequence: 3,
                ..LedgerRow::default()
            },
            LedgerRow::new(4, "GST Payable").with_credit("1,200"),
        ];
        let table = classifier.process_rows(&rows);
        let sequences: Vec<usize> = table.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 4]);
        assert!(!table.has_debit);
        assert!(table.has_credit);
        assert_eq!(table.rows[1].credit_amount.as_deref(), Some("1,200"));
    }
}
