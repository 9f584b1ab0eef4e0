use crate::config::KeywordMap;
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Lower bound for the compiled pattern size limit
const MIN_PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiled bytes allowed per byte of pattern source; case-insensitive
/// literals expand into character classes
const PATTERN_BYTES_PER_CHAR: usize = 128;

/// Broadens a query token with configured synonyms
#[derive(Debug, Clone, Default)]
pub struct KeywordExpander {
    keywords: KeywordMap,
}

impl KeywordExpander {
    pub fn new(keywords: KeywordMap) -> Self {
        Self { keywords }
    }

    /// Expand a lower-cased token into its deduplicated term set
    pub fn expand(&self, token: &str) -> SearchTerms {
        let mut terms = BTreeSet::new();
        terms.insert(token.to_string());

        if let Some(synonyms) = self.keywords.get(token) {
            terms.extend(synonyms.iter().cloned());
        }

        SearchTerms { terms }
    }
}

/// A set of literal substrings, any of which counts as a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    terms: BTreeSet<String>,
}

impl SearchTerms {
    /// A single term with no synonym expansion
    pub fn single(term: &str) -> Self {
        Self {
            terms: BTreeSet::from([term.to_string()]),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Compile into one case-insensitive alternation of escaped literals.
    ///
    /// The size limit grows with the pattern, so any query that fits in a
    /// request body compiles.
    pub fn pattern(&self) -> Result<Regex> {
        let alternation = self
            .terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .size_limit(
                alternation
                    .len()
                    .saturating_mul(PATTERN_BYTES_PER_CHAR)
                    .max(MIN_PATTERN_SIZE_LIMIT),
            )
            .build()
            .map_err(|e| Error::Internal(format!("Failed to compile search pattern: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_token() {
        let expander = KeywordExpander::default();
        let terms = expander.expand("potato");

        assert_eq!(terms.len(), 3);
        assert!(terms.contains("potato"));
        assert!(terms.contains("aloo"));
        assert!(terms.contains("aloo matter"));
    }

    #[test]
    fn test_expand_unknown_token() {
        let expander = KeywordExpander::default();
        let terms = expander.expand("paneer");

        assert_eq!(terms.iter().collect::<Vec<_>>(), vec!["paneer"]);
    }

    #[test]
    fn test_pattern_treats_terms_literally() {
        let pattern = SearchTerms::single("1/2 cup (chopped)").pattern().unwrap();
        assert!(pattern.is_match("Add 1/2 CUP (CHOPPED) onions"));
        assert!(!pattern.is_match("1/2 cup chopped"));

        let pattern = SearchTerms::single(".*").pattern().unwrap();
        assert!(!pattern.is_match("anything"));
    }

    #[test]
    fn test_pattern_compiles_for_very_long_query() {
        let long_query = "masala ".repeat(75_000);
        assert!(long_query.len() > 500_000);

        let pattern = SearchTerms::single(&long_query).pattern().unwrap();
        assert!(!pattern.is_match("garam masala, salt"));
    }

    #[test]
    fn test_pattern_matches_any_synonym() {
        let pattern = KeywordExpander::default().expand("rice").pattern().unwrap();
        assert!(pattern.is_match("2 cups Basmati"));
        assert!(pattern.is_match("leftover chawal"));
        assert!(!pattern.is_match("wheat flour"));
    }
}
