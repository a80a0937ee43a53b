//! PBC item generation from classified trial balances.

use pbc_map::{LedgerClassifier, build_pbc_items};
use pbc_model::{ColumnSelection, LedgerTable, MajorCategory, Priority};

fn classify(rows: &[&[&str]]) -> pbc_model::MappingTable {
    let table = LedgerTable::from_text_rows(&["Ledger Name", "Debit", "Credit"], rows);
    LedgerClassifier::default()
        .process(&table, &ColumnSelection::auto())
        .unwrap()
        .table
}

#[test]
fn one_item_per_mapped_category_in_first_appearance_order() {
    let table = classify(&[
        &["Sundry Debtors", "42,000", ""],
        &["Bank - SBI Current Account", "1,50,000", ""],
        &["xyzabc123", "10", ""],
        &["Debtors", "8,000", ""],
    ]);
    let items = build_pbc_items(&table);

    let categories: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
    assert_eq!(categories, vec!["Trade Receivables - Domestic", "Bank - Current Account"]);
    let numbers: Vec<usize> = items.iter().map(|i| i.item_number).collect();
    assert_eq!(numbers, vec![1, 2]);

    let receivables = &items[0];
    assert_eq!(receivables.ledger_count, 2);
    assert_eq!(receivables.total_debit, 50_000.0);
    assert_eq!(receivables.total_credit, 0.0);
    assert_eq!(receivables.major_category, MajorCategory::TradeReceivables);
    assert_eq!(receivables.priority, Priority::High);
    assert!(receivables.description.contains("Sundry Debtors, Debtors"));
    assert_eq!(items[1].major_category, MajorCategory::CashAndBank);
}

#[test]
fn description_summarizes_long_ledger_lists() {
    let table = classify(&[
        &["Bank - SBI Current Account", "100", ""],
        &["HDFC Current Account", "200", ""],
        &["Current Account - Axis", "300", ""],
        &["Bank - Current Account", "400", ""],
    ]);
    let items = build_pbc_items(&table);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].ledger_count, 4);
    assert_eq!(items[0].total_debit, 1000.0);
    let listed = "Bank - SBI Current Account, HDFC Current Account, \
                  Current Account - Axis and 1 more";
    assert!(items[0].description.contains(listed), "{}", items[0].description);
}

#[test]
fn cash_requests_do_not_list_ledgers() {
    let table = classify(&[
        &["Cash", "100", ""],
        &["Petty Cash", "200", ""],
        &["Cash in Hand", "300", ""],
        &["Cash Balance", "400", ""],
        &["Till", "500", ""],
    ]);
    let items = build_pbc_items(&table);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "Cash on Hand");
    assert_eq!(items[0].ledger_count, 5);
    assert_eq!(items[0].total_debit, 1500.0);
    assert!(!items[0].description.contains("Petty Cash"));
}

#[test]
fn amount_thresholds_raise_priority() {
    let table = classify(&[&["Audit Fees", "2,50,000", ""]]);
    let items = build_pbc_items(&table);
    assert_eq!(items[0].category, "Audit Fees");
    assert_eq!(items[0].priority, Priority::Medium);
    assert_eq!(items[0].major_category, MajorCategory::Other);
}

#[test]
fn unmapped_only_table_has_no_items() {
    let table = classify(&[&["xyzabc123", "", ""], &["qqq", "", ""]]);
    assert!(build_pbc_items(&table).is_empty());
    assert_eq!(table.unmapped().len(), 2);
}
