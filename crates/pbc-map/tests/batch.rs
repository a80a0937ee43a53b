//! Batch processing over trial balance tables.

use pbc_map::{LedgerClassifier, MappingError};
use pbc_model::{BatchSummary, ColumnSelection, ConfidenceLevel, LedgerTable};

fn trial_balance() -> LedgerTable {
    LedgerTable::from_text_rows(
        &["S.No", "Particulars", "Debit", "Credit"],
        &[
            &["1", "Bank - SBI Current Account", "1,50,000", ""],
            &["2", "", "", ""],
            &["3", "Sundry Debtors", "42,000", ""],
            &["4", "xyzabc123", "10", ""],
            &["5", "   ", "", ""],
            &["6", "GST Payable", "", "18,000"],
        ],
    )
}

#[test]
fn auto_detects_columns() {
    let output = LedgerClassifier::default()
        .process(&trial_balance(), &ColumnSelection::auto())
        .unwrap();
    assert_eq!(output.columns.ledger, "Particulars");
    assert_eq!(output.columns.debit.as_deref(), Some("Debit"));
    assert_eq!(output.columns.credit.as_deref(), Some("Credit"));
    assert!(output.table.has_debit);
    assert!(output.table.has_credit);
}

#[test]
fn blank_rows_are_skipped_and_sequence_kept() {
    let output = LedgerClassifier::default()
        .process(&trial_balance(), &ColumnSelection::auto())
        .unwrap();
    let sequences: Vec<usize> = output.table.iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![1, 3, 4, 6]);
    assert_eq!(output.summary.total_ledgers, 4);
}

#[test]
fn amounts_are_carried_verbatim() {
    let output = LedgerClassifier::default()
        .process(&trial_balance(), &ColumnSelection::auto())
        .unwrap();
    let bank = &output.table.rows[0];
    assert_eq!(bank.original_ledger_name, "Bank - SBI Current Account");
    assert_eq!(bank.debit_amount.as_deref(), Some("1,50,000"));
    assert_eq!(bank.credit_amount, None);
    let gst = &output.table.rows[3];
    assert_eq!(gst.credit_amount.as_deref(), Some("18,000"));
}

#[test]
fn summary_counts_levels() {
    let output = LedgerClassifier::default()
        .process(&trial_balance(), &ColumnSelection::auto())
        .unwrap();
    let summary = &output.summary;
    assert_eq!(summary.high_confidence_count, 3);
    assert_eq!(summary.medium_confidence_count, 0);
    assert_eq!(summary.low_confidence_count, 1);
    assert_eq!(summary.success_rate, 75.0);
    assert_eq!(output.table.unmapped().len(), 1);
    assert_eq!(output.table.unmapped()[0].sequence, 4);
    assert_eq!(output.table.rows[2].confidence_level, ConfidenceLevel::Low);
}

#[test]
fn missing_amount_columns_are_omitted() {
    let table = LedgerTable::from_text_rows(&["Account Name", "Group"], &[&["Cash", "Assets"]]);
    let output = LedgerClassifier::default()
        .process(&table, &ColumnSelection::auto())
        .unwrap();
    assert_eq!(output.columns.debit, None);
    assert_eq!(output.columns.credit, None);
    assert!(!output.table.has_debit);
    assert!(!output.table.has_credit);
    assert_eq!(output.table.rows[0].debit_amount, None);
}

#[test]
fn supplied_amount_column_that_is_missing_is_ignored() {
    let selection = ColumnSelection::auto().with_debit("Debit Balance");
    let output = LedgerClassifier::default()
        .process(&trial_balance(), &selection)
        .unwrap();
    assert_eq!(output.columns.debit, None);
    assert_eq!(output.columns.credit.as_deref(), Some("Credit"));
}

#[test]
fn supplied_ledger_column_is_used() {
    let table = LedgerTable::from_text_rows(&["Group", "Head"], &[&["Current Assets", "Cash"]]);
    let selection = ColumnSelection::auto().with_ledger("head");
    let output = LedgerClassifier::default().process(&table, &selection).unwrap();
    assert_eq!(output.columns.ledger, "Head");
    assert_eq!(output.table.rows[0].original_ledger_name, "Cash");
}

#[test]
fn falls_back_to_first_column() {
    let table = LedgerTable::from_text_rows(&["Code", "Balance"], &[&["Petty Cash", "500"]]);
    let output = LedgerClassifier::default()
        .process(&table, &ColumnSelection::auto())
        .unwrap();
    assert_eq!(output.columns.ledger, "Code");
    assert_eq!(output.table.len(), 1);
}

#[test]
fn missing_supplied_ledger_column_fails() {
    let err = LedgerClassifier::default()
        .process(&trial_balance(), &ColumnSelection::auto().with_ledger("Ledger"))
        .unwrap_err();
    assert!(matches!(err, MappingError::ColumnNotFound { column } if column == "Ledger"));
}

#[test]
fn table_without_columns_fails() {
    let err = LedgerClassifier::default()
        .process(&LedgerTable::default(), &ColumnSelection::auto())
        .unwrap_err();
    assert!(matches!(err, MappingError::NoLedgerColumn));
}

#[test]
fn empty_table_yields_zero_summary() {
    let table = LedgerTable::new(vec!["Ledger".to_string()]);
    let output = LedgerClassifier::default()
        .process(&table, &ColumnSelection::auto())
        .unwrap();
    assert!(output.table.is_empty());
    assert_eq!(output.summary, BatchSummary::default());
}
