//! Keyword and fuzzy scoring of a ledger name against one category.
//!
//! Both scorers produce integers in 0-100:
//!
//! - **Keyword**: substring containment of normalized keywords (+30 each)
//!   and variations (+20 each), plus +50 when the whole ledger name equals
//!   a keyword. Hits accumulate, capped at 100.
//! - **Fuzzy**: token-sort ratio (tokens sorted, then Indel similarity)
//!   against every keyword and variation; the best candidate wins.

use pbc_model::CategoryDefinition;
use rapidfuzz::distance::indel;

use crate::dictionary::DictionaryEntry;
use crate::utils::{normalize_text, sorted_tokens};

const KEYWORD_POINTS: u32 = 30;
const VARIATION_POINTS: u32 = 20;
const EXACT_KEYWORD_BONUS: u32 = 50;
const MAX_SCORE: u32 = 100;

/// A ledger name prepared once for scoring against many categories.
#[derive(Debug, Clone)]
pub(crate) struct PreparedLedger {
    normalized: String,
    sorted: String,
}

impl PreparedLedger {
    pub(crate) fn new(ledger_name: &str) -> Self {
        let normalized = normalize_text(ledger_name);
        let sorted = sorted_tokens(&normalized);
        Self { normalized, sorted }
    }
}

/// Keyword score of `ledger_name` for `category`.
pub fn keyword_score(ledger_name: &str, category: &CategoryDefinition) -> u8 {
    let entry = DictionaryEntry::new(category.clone());
    score_keywords(&PreparedLedger::new(ledger_name), &entry)
}

/// Best fuzzy score of `ledger_name` over the category's terms, with the
/// original text of the winning term. `(0, "")` when the category has no
/// terms.
pub fn fuzzy_score<'c>(ledger_name: &str, category: &'c CategoryDefinition) -> (u8, &'c str) {
    let entry = DictionaryEntry::new(category.clone());
    match best_fuzzy_candidate(&PreparedLedger::new(ledger_name), &entry) {
        Some((index, score)) => (score, category.terms().nth(index).unwrap_or_default()),
        None => (0, ""),
    }
}

/// Token-order-insensitive similarity of two strings, 0.0-100.0.
///
/// Inputs are split on whitespace, tokens sorted and re-joined, and the
/// results compared with the normalized Indel similarity.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    sorted_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_ratio(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

pub(crate) fn score_keywords(ledger: &PreparedLedger, entry: &DictionaryEntry) -> u8 {
    let name = ledger.normalized.as_str();
    let mut score = 0u32;
    for keyword in entry.normalized_keywords() {
        if !keyword.is_empty() && name.contains(keyword.as_str()) {
            score += KEYWORD_POINTS;
        }
    }
    for variation in entry.normalized_variations() {
        if !variation.is_empty() && name.contains(variation.as_str()) {
            score += VARIATION_POINTS;
        }
    }
    if entry.normalized_keywords().iter().any(|k| k == name) {
        score += EXACT_KEYWORD_BONUS;
    }
    score.min(MAX_SCORE) as u8
}

/// Index and score of the first best-scoring candidate term.
fn best_fuzzy_candidate(ledger: &PreparedLedger, entry: &DictionaryEntry) -> Option<(usize, u8)> {
    let mut best: Option<(usize, u8)> = None;
    for (index, term) in entry.sorted_terms().iter().enumerate() {
        let score = sorted_ratio(&ledger.sorted, term).round().clamp(0.0, 100.0) as u8;
        if best.is_none_or(|(_, current)| score > current) {
            best = Some((index, score));
        }
    }
    best
}

pub(crate) fn score_fuzzy<'e>(
    ledger: &PreparedLedger,
    entry: &'e DictionaryEntry,
) -> (u8, &'e str) {
    match best_fuzzy_candidate(ledger, entry) {
        Some((index, score)) => (score, entry.term(index)),
        None => (0, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receivables() -> CategoryDefinition {
        CategoryDefinition::new(
            "Trade Receivables - Domestic",
            &["debtor", "receivable", "sundry debtor", "trade receivable"],
            &["debtors", "sundry debtors"],
        )
    }

    #[test]
    fn test_keyword_hits_accumulate() {
        let category = receivables();
        assert_eq!(keyword_score("Debtors", &category), 50);
        assert_eq!(keyword_score("Sundry Debtors", &category), 100);
        assert_eq!(keyword_score("Receivable", &category), 80);
        assert_eq!(keyword_score("Loan to staff", &category), 0);
    }

    #[test]
    fn test_keyword_exact_bonus_only_for_keywords() {
        let category = CategoryDefinition::new("Audit Fees", &["audit"], &["audit fees"]);
        assert_eq!(keyword_score("Audit", &category), 80);
        assert_eq!(keyword_score("Audit Fees", &category), 50);
    }

    #[test]
    fn test_keyword_score_capped() {
        let category = CategoryDefinition::new(
            "Cash on Hand",
            &["cash", "petty cash", "cash in hand"],
            &["cash", "petty"],
        );
        assert_eq!(keyword_score("Petty Cash in Hand", &category), 100);
    }

    #[test]
    fn test_fuzzy_is_order_insensitive() {
        let category =
            CategoryDefinition::new("Bank - Current Account", &["current account sbi"], &[]);
        let (score, term) = fuzzy_score("SBI Current Account", &category);
        assert_eq!(score, 100);
        assert_eq!(term, "current account sbi");
    }

    #[test]
    fn test_fuzzy_returns_original_term_text() {
        let category =
            CategoryDefinition::new("GST Payable", &["GST", "GST payable"], &["GST pay"]);
        let (score, term) = fuzzy_score("gst payable", &category);
        assert_eq!(score, 100);
        assert_eq!(term, "GST payable");
    }

    #[test]
    fn test_fuzzy_first_candidate_wins_ties() {
        let category = CategoryDefinition::new("Rent", &["rent", "rent"], &["rent"]);
        let entry = DictionaryEntry::new(category);
        let best = best_fuzzy_candidate(&PreparedLedger::new("rent"), &entry);
        assert_eq!(best, Some((0, 100)));
    }

    #[test]
    fn test_fuzzy_without_terms() {
        let category = CategoryDefinition::new("Empty", &[], &[]);
        assert_eq!(fuzzy_score("cash", &category), (0, ""));
    }

    #[test]
    fn test_token_sort_ratio() {
        assert_eq!(token_sort_ratio("current account sbi", "sbi current account"), 100.0);
        assert_eq!(token_sort_ratio("abcd", "wxyz"), 0.0);
        let partial = token_sort_ratio("sundry debtors", "sundry debtor");
        assert!(partial > 90.0 && partial < 100.0, "got {partial}");
    }
}
