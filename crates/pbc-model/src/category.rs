//! PBC category definitions.

use serde::{Deserialize, Serialize};

/// A standardized PBC category and the vocabulary that identifies it.
///
/// `keywords` are canonical domain words ("debtor", "receivable"),
/// `variations` are abbreviations and shorthand ("AR", "sundry debtors").
/// Both lists keep their authored order; the fuzzy scorer reports the first
/// best candidate, so order decides which term is shown on ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Unique category name (e.g., "Trade Receivables - Domestic").
    pub name: String,
    /// Canonical terms.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Abbreviations and shorthand.
    #[serde(default)]
    pub variations: Vec<String>,
}

impl CategoryDefinition {
    pub fn new(name: &str, keywords: &[&str], variations: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            variations: variations.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    /// All candidate terms: keywords first, then variations.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .chain(self.variations.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_list_keywords_before_variations() {
        let category = CategoryDefinition::new("Cash on Hand", &["cash", "till"], &["petty"]);
        let terms: Vec<&str> = category.terms().collect();
        assert_eq!(terms, vec!["cash", "till", "petty"]);
    }

    #[test]
    fn empty_vocabulary_has_no_terms() {
        let category = CategoryDefinition::new("Placeholder", &[], &[]);
        assert_eq!(category.terms().count(), 0);
    }
}
