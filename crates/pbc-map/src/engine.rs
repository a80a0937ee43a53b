//! Category resolution for single ledger names.

use std::cmp::Reverse;

use pbc_model::{
    CategoryAssignment, ClassifierOptions, ConfidenceLevel, ConfidenceThreshold,
    HIGH_CONFIDENCE_SCORE, MatchMethod, Resolution, round2,
};
use tracing::trace;

use crate::dictionary::{CategoryDictionary, DictionaryEntry, builtin_dictionary};
use crate::score::{PreparedLedger, score_fuzzy, score_keywords};

/// Weight of the keyword score in the combined score, in tenths.
const KEYWORD_WEIGHT: u32 = 6;
/// Weight of the fuzzy score in the combined score, in tenths.
const FUZZY_WEIGHT: u32 = 4;

/// Scores of one ledger name against one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore<'d> {
    pub category: &'d str,
    pub keyword: u8,
    pub fuzzy: u8,
    /// Best fuzzy candidate, in its original spelling.
    pub fuzzy_term: &'d str,
}

impl<'d> CategoryScore<'d> {
    fn compute(ledger: &PreparedLedger, entry: &'d DictionaryEntry) -> Self {
        let keyword = score_keywords(ledger, entry);
        let (fuzzy, fuzzy_term) = score_fuzzy(ledger, entry);
        Self {
            category: entry.name(),
            keyword,
            fuzzy,
            fuzzy_term,
        }
    }

    /// `0.6 * keyword + 0.4 * fuzzy`, in tenths of a point.
    ///
    /// Both inputs are integers, so the combined score has exactly one
    /// decimal and comparisons against thresholds are exact.
    pub fn combined_tenths(&self) -> u32 {
        KEYWORD_WEIGHT * u32::from(self.keyword) + FUZZY_WEIGHT * u32::from(self.fuzzy)
    }

    /// Combined score on the 0-100 scale.
    pub fn combined(&self) -> f64 {
        f64::from(self.combined_tenths()) / 10.0
    }

    pub fn match_method(&self) -> MatchMethod {
        if self.keyword > self.fuzzy {
            MatchMethod::Keyword
        } else {
            MatchMethod::Fuzzy
        }
    }

    /// The fuzzy term when fuzzy evidence is at least as strong, else empty.
    pub fn matched_term(&self) -> &'d str {
        if self.fuzzy >= self.keyword {
            self.fuzzy_term
        } else {
            ""
        }
    }
}

/// Band a combined score (in tenths) against the threshold.
///
/// High is checked first, so with a threshold above the high-confidence
/// score a ledger can be High while still unmapped.
pub fn confidence_level(combined_tenths: u32, threshold: ConfidenceThreshold) -> ConfidenceLevel {
    if combined_tenths >= u32::from(HIGH_CONFIDENCE_SCORE) * 10 {
        ConfidenceLevel::High
    } else if combined_tenths >= u32::from(threshold.value()) * 10 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Classifier mapping ledger names to dictionary categories.
///
/// Resolution scans every category (no indexing or early exit), keeps the
/// strictly greatest combined score and lets the earliest category win
/// ties. The classifier holds no mutable state; one instance can serve
/// any number of threads.
///
/// # Example
///
/// ```ignore
/// use pbc_map::LedgerClassifier;
/// use pbc_model::ClassifierOptions;
///
/// let classifier = LedgerClassifier::new(ClassifierOptions::default());
/// let resolution = classifier.resolve("Sundry Debtors");
/// assert_eq!(resolution.category.as_str(), "Trade Receivables - Domestic");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LedgerClassifier<'d> {
    dictionary: &'d CategoryDictionary,
    options: ClassifierOptions,
}

impl LedgerClassifier<'static> {
    /// Classifier over the built-in dictionary.
    pub fn new(options: ClassifierOptions) -> Self {
        Self::with_dictionary(builtin_dictionary(), options)
    }
}

impl Default for LedgerClassifier<'static> {
    fn default() -> Self {
        Self::new(ClassifierOptions::default())
    }
}

impl<'d> LedgerClassifier<'d> {
    pub fn with_dictionary(dictionary: &'d CategoryDictionary, options: ClassifierOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    pub fn dictionary(&self) -> &'d CategoryDictionary {
        self.dictionary
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Resolves a ledger name with the configured threshold.
    pub fn resolve(&self, ledger_name: &str) -> Resolution {
        self.resolve_with_threshold(ledger_name, self.options.threshold)
    }

    /// Resolves a ledger name against every category.
    ///
    /// The score is reported even when the ledger ends up unmapped so
    /// callers can inspect near misses.
    pub fn resolve_with_threshold(
        &self,
        ledger_name: &str,
        threshold: ConfidenceThreshold,
    ) -> Resolution {
        let ledger = PreparedLedger::new(ledger_name);
        let mut best: Option<CategoryScore<'d>> = None;
        for entry in self.dictionary.iter() {
            let score = CategoryScore::compute(&ledger, entry);
            if best.is_none_or(|current| score.combined_tenths() > current.combined_tenths()) {
                best = Some(score);
            }
        }

        let Some(best) = best else {
            return Resolution {
                category: CategoryAssignment::Unmapped,
                confidence_score: 0.0,
                confidence_level: ConfidenceLevel::Low,
                match_method: MatchMethod::Fuzzy,
                matched_term: String::new(),
            };
        };

        let tenths = best.combined_tenths();
        let category = if tenths >= u32::from(threshold.value()) * 10 {
            CategoryAssignment::Mapped(best.category.to_string())
        } else {
            CategoryAssignment::Unmapped
        };
        trace!(
            category = best.category,
            keyword = best.keyword,
            fuzzy = best.fuzzy,
            combined = best.combined(),
            mapped = !category.is_unmapped(),
            "resolved ledger"
        );
        Resolution {
            category,
            confidence_score: round2(best.combined()),
            confidence_level: confidence_level(tenths, threshold),
            match_method: best.match_method(),
            matched_term: best.matched_term().to_string(),
        }
    }

    /// Scores of a ledger name against every category, in dictionary order.
    pub fn score_categories(&self, ledger_name: &str) -> Vec<CategoryScore<'d>> {
        let ledger = PreparedLedger::new(ledger_name);
        self.dictionary
            .iter()
            .map(|entry| CategoryScore::compute(&ledger, entry))
            .collect()
    }

    /// The `limit` best-scoring categories, best first. Equal scores keep
    /// dictionary order, so the first entry is always the resolved winner.
    pub fn explain(&self, ledger_name: &str, limit: usize) -> Vec<CategoryScore<'d>> {
        let mut scores = self.score_categories(ledger_name);
        scores.sort_by_key(|score| Reverse(score.combined_tenths()));
        scores.truncate(limit);
        scores
    }
}

#[cfg(test)]
mod tests {
    use pbc_model::CategoryDefinition;

    use super::*;

    fn threshold(value: u32) -> ConfidenceThreshold {
        ConfidenceThreshold::new(value).unwrap()
    }

    #[test]
    fn test_combined_score_is_weighted() {
        let score = CategoryScore {
            category: "Audit Fees",
            keyword: 50,
            fuzzy: 100,
            fuzzy_term: "audit fees",
        };
        assert_eq!(score.combined_tenths(), 700);
        assert_eq!(score.combined(), 70.0);
        assert_eq!(score.match_method(), MatchMethod::Fuzzy);
        assert_eq!(score.matched_term(), "audit fees");
    }

    #[test]
    fn test_keyword_win_clears_matched_term() {
        let score = CategoryScore {
            category: "Bank - Current Account",
            keyword: 100,
            fuzzy: 73,
            fuzzy_term: "current account",
        };
        assert_eq!(score.match_method(), MatchMethod::Keyword);
        assert_eq!(score.matched_term(), "");
    }

    #[test]
    fn test_confidence_banding() {
        let default = threshold(60);
        assert_eq!(confidence_level(800, default), ConfidenceLevel::High);
        assert_eq!(confidence_level(799, default), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(600, default), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(599, default), ConfidenceLevel::Low);
        assert_eq!(confidence_level(0, threshold(0)), ConfidenceLevel::Medium);
    }

    #[test]
    fn test_empty_dictionary_is_unmapped() {
        let dictionary = CategoryDictionary::empty();
        let classifier =
            LedgerClassifier::with_dictionary(&dictionary, ClassifierOptions::default());
        let resolution = classifier.resolve("Cash");
        assert!(resolution.category.is_unmapped());
        assert_eq!(resolution.confidence_score, 0.0);
        assert_eq!(resolution.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn test_ties_keep_first_category() {
        let dictionary = CategoryDictionary::new(vec![
            CategoryDefinition::new("Rental Income", &["rent"], &[]),
            CategoryDefinition::new("Rent Expense", &["rent"], &[]),
        ])
        .unwrap();
        let classifier =
            LedgerClassifier::with_dictionary(&dictionary, ClassifierOptions::default());
        let resolution = classifier.resolve("Rent");
        assert_eq!(resolution.category.as_str(), "Rental Income");

        let explained = classifier.explain("Rent", 5);
        assert_eq!(explained.len(), 2);
        assert_eq!(explained[0].category, "Rental Income");
    }
}
