//! PBC request items generated from a mapping table.
//!
//! One item per mapped category, in order of first appearance. UNMAPPED
//! rows never produce an item; they go to the manual review queue instead.

use pbc_model::{MajorCategory, MappingResult, MappingTable, PbcItem, Priority};
use tracing::debug;

/// Combined balance above which any category is High priority.
const HIGH_PRIORITY_AMOUNT: f64 = 1_000_000.0;
/// Combined balance above which a category is at least Medium priority.
const MEDIUM_PRIORITY_AMOUNT: f64 = 100_000.0;

/// Category name fragments that always warrant a High priority request.
const HIGH_PRIORITY_TERMS: &[&str] = &[
    "bank",
    "cash",
    "sales",
    "revenue",
    "receivable",
    "payable",
    "loan",
    "borrowing",
];

/// Ledger names quoted in a description before the rest are summarized.
const LISTED_LEDGERS: usize = 3;

/// Document request wording for a family of categories.
struct RequestTemplate {
    /// Lowercase fragment matched against the category name.
    key: &'static str,
    /// Requested documents; `{ledgers}` is replaced with the ledger list.
    documents: &'static str,
    /// Audit objective served by the documents.
    objective: &'static str,
}

/// Checked in order; the first key contained in the category name wins.
const REQUEST_TEMPLATES: &[RequestTemplate] = &[
    RequestTemplate {
        key: "fixed assets",
        documents: "Fixed asset register covering {ledgers}, with purchase invoices, \
                    the depreciation schedule and disposal records.",
        objective: "To verify existence, ownership, valuation and completeness of fixed \
                    assets under AS-10 / Ind AS 16",
    },
    RequestTemplate {
        key: "bank",
        documents: "Bank statements and bank reconciliations for {ledgers}, with bank \
                    confirmation letters.",
        objective: "To confirm bank balances exist and agree with the books after \
                    reconciliation",
    },
    RequestTemplate {
        key: "cash",
        documents: "Cash book, petty cash records and year-end cash count certificates.",
        objective: "To verify cash on hand exists and that cash handling is controlled",
    },
    RequestTemplate {
        key: "inventories",
        documents: "Stock statement with valuation workings for {ledgers}, with physical \
                    verification reports.",
        objective: "To verify existence, ownership, condition and valuation of inventory \
                    under AS-2 / Ind AS 2",
    },
    RequestTemplate {
        key: "trade receivables",
        documents: "Ageing-wise debtors list for {ledgers}, with balance confirmations and \
                    details of subsequent collections.",
        objective: "To confirm receivables exist, are recoverable and are completely recorded",
    },
    RequestTemplate {
        key: "trade payables",
        documents: "Ageing-wise creditors list for {ledgers}, with balance confirmations and \
                    MSME classification.",
        objective: "To verify liabilities are complete and accurate and that MSME dues are \
                    disclosed",
    },
    RequestTemplate {
        key: "loans",
        documents: "Loan agreements, sanction letters and repayment schedules for {ledgers}.",
        objective: "To verify loan terms, repayment schedules and covenant compliance",
    },
    RequestTemplate {
        key: "gst",
        documents: "GST returns (GSTR-1, GSTR-3B), GST reconciliation and input tax credit \
                    workings.",
        objective: "To verify GST compliance and the reporting of input and output tax",
    },
    RequestTemplate {
        key: "sales",
        documents: "Sales register with invoices and supporting documents, reconciled to \
                    GST returns.",
        objective: "To verify revenue recognition, cut-off and completeness of sales",
    },
    RequestTemplate {
        key: "expenses",
        documents: "Expense vouchers and supporting documents for {ledgers}.",
        objective: "To verify the nature, authorization and accounting of expenses",
    },
    RequestTemplate {
        key: "salary",
        documents: "Salary registers, PF/ESI challans and employee Form 16s.",
        objective: "To verify employee costs and statutory compliance on payroll",
    },
];

fn request_template(category: &str) -> Option<&'static RequestTemplate> {
    let lower = category.to_lowercase();
    REQUEST_TEMPLATES
        .iter()
        .find(|template| lower.contains(template.key))
}

/// Builds PBC items for every mapped category of `table`.
pub fn build_pbc_items(table: &MappingTable) -> Vec<PbcItem> {
    let items: Vec<PbcItem> = table
        .by_category()
        .into_iter()
        .enumerate()
        .map(|(index, (category, rows))| {
            let total_debit = total(&rows, |row| row.debit_amount.as_deref());
            let total_credit = total(&rows, |row| row.credit_amount.as_deref());
            PbcItem {
                item_number: index + 1,
                category: category.to_string(),
                major_category: major_category(category),
                description: pbc_description(category, &rows),
                why_needed: why_needed(category),
                priority: determine_priority(category, total_debit, total_credit),
                ledger_count: rows.len(),
                total_debit,
                total_credit,
            }
        })
        .collect();
    debug!(
        items = items.len(),
        review = table.unmapped().len(),
        "generated PBC items"
    );
    items
}

fn total(rows: &[&MappingResult], amount: impl Fn(&MappingResult) -> Option<&str>) -> f64 {
    rows.iter()
        .filter_map(|row| amount(row))
        .map(parse_amount)
        .sum()
}

/// Parses a trial balance amount as typed by accountants.
///
/// Accepts thousands separators, currency markers (`₹`, `$`, `Rs.`, `INR`),
/// trailing `Dr`/`Cr` and parentheses for negatives. Anything unreadable
/// counts as zero.
pub fn parse_amount(raw: &str) -> f64 {
    let mut text = raw.trim().to_lowercase();
    let negative_parens = text.starts_with('(') && text.ends_with(')');
    if negative_parens {
        text = text[1..text.len() - 1].to_string();
    }
    let mut body = text.trim();
    for prefix in ["inr", "rs.", "rs"] {
        if let Some(rest) = body.strip_prefix(prefix) {
            body = rest;
            break;
        }
    }
    let digits: String = body
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let value = digits.parse::<f64>().unwrap_or(0.0);
    if negative_parens { -value.abs() } else { value }
}

/// Request priority from the category name and its balances.
pub fn determine_priority(category: &str, total_debit: f64, total_credit: f64) -> Priority {
    let lower = category.to_lowercase();
    if HIGH_PRIORITY_TERMS.iter().any(|term| lower.contains(term)) {
        return Priority::High;
    }
    let amount = total_debit.abs().max(total_credit.abs());
    if amount > HIGH_PRIORITY_AMOUNT {
        Priority::High
    } else if amount > MEDIUM_PRIORITY_AMOUNT {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Financial statement grouping of a category name.
pub fn major_category(category: &str) -> MajorCategory {
    let lower = category.to_lowercase();
    let has_any = |terms: &[&str]| terms.iter().any(|term| lower.contains(term));

    if has_any(&["fixed asset", "intangible", "capital wip", "ppe"]) {
        MajorCategory::FixedAssets
    } else if has_any(&["inventor", "raw material", "wip", "finished", "stock"]) {
        MajorCategory::Inventories
    } else if has_any(&["receivable", "debtor"]) {
        MajorCategory::TradeReceivables
    } else if has_any(&["cash", "bank"]) {
        MajorCategory::CashAndBank
    } else if has_any(&["payable", "creditor"]) {
        MajorCategory::TradePayables
    } else if has_any(&["share capital", "equity", "reserve", "retained"]) {
        MajorCategory::Equity
    } else if has_any(&["borrowing", "loan"]) {
        MajorCategory::Borrowings
    } else if has_any(&["gst", "tds", "tax"]) {
        MajorCategory::StatutoryCompliance
    } else if has_any(&["sales", "revenue", "income"]) {
        MajorCategory::Revenue
    } else if has_any(&["expense", "cost", "depreciation"]) {
        MajorCategory::Expenses
    } else {
        MajorCategory::Other
    }
}

/// "A, B, C and N more" over the original ledger names.
fn ledger_list(rows: &[&MappingResult]) -> String {
    let mut list = rows
        .iter()
        .take(LISTED_LEDGERS)
        .map(|row| row.original_ledger_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if rows.len() > LISTED_LEDGERS {
        list.push_str(&format!(" and {} more", rows.len() - LISTED_LEDGERS));
    }
    list
}

/// Documents to request for a category.
pub fn pbc_description(category: &str, rows: &[&MappingResult]) -> String {
    match request_template(category) {
        Some(template) => template.documents.replace("{ledgers}", &ledger_list(rows)),
        None => format!(
            "Supporting schedules for {category}, with ledger extracts and vouchers."
        ),
    }
}

/// Audit objective of a category's request.
pub fn why_needed(category: &str) -> String {
    match request_template(category) {
        Some(template) => template.objective.to_string(),
        None => format!("To verify and validate the accounting treatment of {category}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_formats() {
        assert_eq!(parse_amount("1,25,000.50"), 125_000.5);
        assert_eq!(parse_amount("₹ 2,000"), 2000.0);
        assert_eq!(parse_amount("Rs. 1,000"), 1000.0);
        assert_eq!(parse_amount("(3,500)"), -3500.0);
        assert_eq!(parse_amount("-42"), -42.0);
        assert_eq!(parse_amount("1,000 Dr"), 1000.0);
        assert_eq!(parse_amount("n/a"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_priority_by_name_then_amount() {
        assert_eq!(determine_priority("Bank - Current Account", 0.0, 0.0), Priority::High);
        assert_eq!(determine_priority("Audit Fees", 2_000_000.0, 0.0), Priority::High);
        assert_eq!(determine_priority("Audit Fees", 0.0, -150_000.0), Priority::Medium);
        assert_eq!(determine_priority("Audit Fees", 100_000.0, 0.0), Priority::Low);
    }

    #[test]
    fn test_major_category_rules_in_order() {
        assert_eq!(major_category("Capital WIP"), MajorCategory::FixedAssets);
        assert_eq!(major_category("Inventories - Raw Materials"), MajorCategory::Inventories);
        assert_eq!(major_category("Trade Receivables - Domestic"), MajorCategory::TradeReceivables);
        assert_eq!(major_category("Cash on Hand"), MajorCategory::CashAndBank);
        assert_eq!(major_category("GST Payable"), MajorCategory::TradePayables);
        assert_eq!(major_category("Retained Earnings"), MajorCategory::Equity);
        assert_eq!(major_category("Long-term Borrowings"), MajorCategory::Borrowings);
        assert_eq!(major_category("TDS Receivable"), MajorCategory::TradeReceivables);
        assert_eq!(major_category("Income Tax Provision"), MajorCategory::StatutoryCompliance);
        assert_eq!(major_category("Interest Income"), MajorCategory::Revenue);
        assert_eq!(major_category("Depreciation"), MajorCategory::Expenses);
        assert_eq!(major_category("Miscellaneous"), MajorCategory::Other);
    }

    #[test]
    fn test_why_needed_fallback() {
        assert!(why_needed("Bank - Current Account").contains("bank balances"));
        assert_eq!(
            why_needed("Prepaid Insurance"),
            "To verify and validate the accounting treatment of Prepaid Insurance"
        );
    }
}
