//! PBC category dictionary.
//!
//! The dictionary is an ordered list of [`CategoryDefinition`]s. Order is
//! part of its meaning: when two categories reach the same combined score
//! the one listed first wins.
//!
//! The built-in dictionary is built once per process and shared by
//! reference. A replacement can be loaded from a JSON file holding an array
//! of `{"name", "keywords", "variations"}` objects; loaded dictionaries are
//! validated before use.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use pbc_model::{CategoryDefinition, UNMAPPED, UNMAPPED_LABEL};
use tracing::debug;

use crate::builtin::BUILTIN_CATEGORIES;
use crate::error::{MappingError, Result};
use crate::utils::{normalize_text, sorted_tokens};

/// Environment variable naming a dictionary file to use instead of the
/// built-in one.
pub const DICTIONARY_ENV_VAR: &str = "PBC_DICTIONARY";

/// A category with its terms prepared for matching.
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    definition: CategoryDefinition,
    keywords: Vec<String>,
    variations: Vec<String>,
    /// Token-sorted forms of keywords followed by variations.
    sorted_terms: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(definition: CategoryDefinition) -> Self {
        let keywords: Vec<String> = definition
            .keywords
            .iter()
            .map(|k| normalize_text(k))
            .collect();
        let variations: Vec<String> = definition
            .variations
            .iter()
            .map(|v| normalize_text(v))
            .collect();
        let sorted_terms = keywords
            .iter()
            .chain(variations.iter())
            .map(|t| sorted_tokens(t))
            .collect();
        Self {
            definition,
            keywords,
            variations,
            sorted_terms,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &CategoryDefinition {
        &self.definition
    }

    pub(crate) fn normalized_keywords(&self) -> &[String] {
        &self.keywords
    }

    pub(crate) fn normalized_variations(&self) -> &[String] {
        &self.variations
    }

    pub(crate) fn sorted_terms(&self) -> &[String] {
        &self.sorted_terms
    }

    /// Original text of the candidate at `index` (keywords, then variations).
    pub(crate) fn term(&self, index: usize) -> &str {
        self.definition.terms().nth(index).unwrap_or_default()
    }
}

/// Ordered, read-only collection of PBC categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryDictionary {
    entries: Vec<DictionaryEntry>,
}

impl CategoryDictionary {
    /// Builds a dictionary, rejecting blank or duplicate names and
    /// categories without any terms.
    pub fn new(categories: Vec<CategoryDefinition>) -> Result<Self> {
        validate(&categories)?;
        Ok(Self::from_definitions(categories))
    }

    /// A dictionary with no categories. Every ledger resolves to UNMAPPED.
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_definitions(categories: Vec<CategoryDefinition>) -> Self {
        Self {
            entries: categories.into_iter().map(DictionaryEntry::new).collect(),
        }
    }

    /// Parses a JSON array of category definitions.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let categories: Vec<CategoryDefinition> = serde_json::from_str(json)
            .map_err(|source| MappingError::DictionaryParse { source })?;
        Self::new(categories)
    }

    /// Loads a dictionary file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MappingError::DictionaryNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path).map_err(|source| MappingError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            categories = dictionary.len(),
            "loaded category dictionary"
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.entries.iter().map(DictionaryEntry::definition)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(DictionaryEntry::name)
    }

    pub fn get(&self, name: &str) -> Option<&CategoryDefinition> {
        self.categories().find(|c| c.name == name)
    }
}

fn validate(categories: &[CategoryDefinition]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (index, category) in categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            return Err(MappingError::EmptyCategoryName { index });
        }
        if !seen.insert(category.name.as_str()) {
            return Err(MappingError::DuplicateCategory {
                name: category.name.clone(),
            });
        }
        if is_reserved_name(&category.name) {
            return Err(MappingError::ReservedCategoryName {
                name: category.name.clone(),
            });
        }
        if !category.terms().any(|term| !normalize_text(term).is_empty()) {
            return Err(MappingError::EmptyCategoryTerms {
                name: category.name.clone(),
            });
        }
    }
    Ok(())
}

/// Names that would read back as the UNMAPPED sentinel.
fn is_reserved_name(name: &str) -> bool {
    let name = name.trim();
    name.eq_ignore_ascii_case(UNMAPPED) || name.eq_ignore_ascii_case(UNMAPPED_LABEL)
}

static BUILTIN: OnceLock<CategoryDictionary> = OnceLock::new();

/// Returns the canonical built-in dictionary.
///
/// Built on first access and shared for the rest of the process.
pub fn builtin_dictionary() -> &'static CategoryDictionary {
    BUILTIN.get_or_init(|| {
        CategoryDictionary::from_definitions(
            BUILTIN_CATEGORIES
                .iter()
                .map(|(name, keywords, variations)| {
                    CategoryDefinition::new(name, keywords, variations)
                })
                .collect(),
        )
    })
}

/// Dictionary file to load: the explicit path if given, otherwise the
/// path in [`DICTIONARY_ENV_VAR`], otherwise none (use the built-in).
pub fn dictionary_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(DICTIONARY_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dictionary_is_valid() {
        let builtin = builtin_dictionary();
        assert!(builtin.len() >= 80);
        let rebuilt = CategoryDictionary::new(builtin.categories().cloned().collect());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn builtin_dictionary_is_shared() {
        assert!(std::ptr::eq(builtin_dictionary(), builtin_dictionary()));
    }

    #[test]
    fn entries_prepare_normalized_terms() {
        let entry = DictionaryEntry::new(CategoryDefinition::new(
            "Bank - Current Account",
            &["Current Account", "OD"],
            &["curr a/c"],
        ));
        assert_eq!(entry.normalized_keywords(), ["current account", "od"]);
        assert_eq!(entry.normalized_variations(), ["curr a/c"]);
        assert_eq!(entry.sorted_terms(), ["account current", "od", "a/c curr"]);
        assert_eq!(entry.term(2), "curr a/c");
        assert_eq!(entry.term(9), "");
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = CategoryDictionary::new(vec![
            CategoryDefinition::new("Cash on Hand", &["cash"], &[]),
            CategoryDefinition::new("Cash on Hand", &["till"], &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, MappingError::DuplicateCategory { name } if name == "Cash on Hand"));
    }

    #[test]
    fn rejects_blank_names_and_empty_terms() {
        let err = CategoryDictionary::new(vec![CategoryDefinition::new(" ", &["cash"], &[])])
            .unwrap_err();
        assert!(matches!(err, MappingError::EmptyCategoryName { index: 0 }));

        let err = CategoryDictionary::new(vec![CategoryDefinition::new("Other", &[], &[])])
            .unwrap_err();
        assert!(matches!(err, MappingError::EmptyCategoryTerms { .. }));
    }

    #[test]
    fn rejects_terms_that_normalize_to_nothing() {
        let blank = CategoryDefinition::new("Blank", &["&"], &["..."]);
        let err = CategoryDictionary::new(vec![blank]).unwrap_err();
        assert!(matches!(err, MappingError::EmptyCategoryTerms { name } if name == "Blank"));

        let partial = CategoryDefinition::new("Rent", &["&", "rent"], &[]);
        assert!(CategoryDictionary::new(vec![partial]).is_ok());
    }

    #[test]
    fn rejects_sentinel_category_names() {
        for name in ["UNMAPPED", "unmapped", "UNMAPPED - Manual Review Required"] {
            let category = CategoryDefinition::new(name, &["suspense"], &[]);
            let err = CategoryDictionary::new(vec![category]).unwrap_err();
            assert!(matches!(err, MappingError::ReservedCategoryName { .. }), "{name}");
        }
    }

    #[test]
    fn parses_json_in_order() {
        let dictionary = CategoryDictionary::from_json_str(
            r#"[
                {"name": "Rent Expense", "keywords": ["rent"], "variations": ["office rent"]},
                {"name": "Audit Fees", "keywords": ["audit"]}
            ]"#,
        )
        .unwrap();
        let names: Vec<&str> = dictionary.names().collect();
        assert_eq!(names, vec!["Rent Expense", "Audit Fees"]);
        assert!(dictionary.get("Audit Fees").unwrap().variations.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CategoryDictionary::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, MappingError::DictionaryParse { .. }));
    }

    #[test]
    fn explicit_dictionary_path_wins() {
        let path = dictionary_path(Some(Path::new("custom.json")));
        assert_eq!(path, Some(PathBuf::from("custom.json")));
    }
}
