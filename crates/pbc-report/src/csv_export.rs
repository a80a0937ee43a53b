//! CSV exports of the mapping table and PBC items.

use std::io::Write;

use pbc_model::{MappingTable, PbcItem};

use crate::error::Result;

/// Mapping CSV columns always written.
pub const MAPPING_COLUMNS: &[&str] = &[
    "S.No",
    "Original_Ledger_Name",
    "PBC_Category",
    "Confidence_Score",
    "Confidence_Level",
    "Match_Method",
    "Matched_Keyword",
];

/// PBC item CSV columns.
pub const ITEM_COLUMNS: &[&str] = &[
    "Item_No",
    "PBC_Category",
    "Major_Category",
    "Description",
    "Why_Needed",
    "Priority",
    "Ledger_Count",
    "Total_Debit",
    "Total_Credit",
];

/// Writes the mapping table as CSV.
///
/// `Debit_Amount` / `Credit_Amount` are appended only when the batch
/// carried those columns; amounts are written as read.
pub fn write_mapping_csv<W: Write>(table: &MappingTable, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = MAPPING_COLUMNS.to_vec();
    if table.has_debit {
        header.push("Debit_Amount");
    }
    if table.has_credit {
        header.push("Credit_Amount");
    }
    out.write_record(&header)?;

    for row in table.iter() {
        let mut record = vec![
            row.sequence.to_string(),
            row.original_ledger_name.clone(),
            row.category.report_label().to_string(),
            format!("{:.2}", row.confidence_score),
            row.confidence_level.to_string(),
            row.match_method.to_string(),
            row.matched_term.clone(),
        ];
        if table.has_debit {
            record.push(row.debit_amount.clone().unwrap_or_default());
        }
        if table.has_credit {
            record.push(row.credit_amount.clone().unwrap_or_default());
        }
        out.write_record(&record)?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes PBC items as CSV.
pub fn write_items_csv<W: Write>(items: &[PbcItem], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(ITEM_COLUMNS)?;
    for item in items {
        out.write_record([
            item.item_number.to_string(),
            item.category.clone(),
            item.major_category.to_string(),
            item.description.clone(),
            item.why_needed.clone(),
            item.priority.to_string(),
            item.ledger_count.to_string(),
            format!("{:.2}", item.total_debit),
            format!("{:.2}", item.total_credit),
        ])?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}
