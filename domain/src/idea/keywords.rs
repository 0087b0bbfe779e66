//! Research keywords derived from an idea.

use super::components::IdeaComponents;
use serde::{Deserialize, Serialize};

/// Upper bound on keywords handed to providers.
pub const MAX_KEYWORDS: usize = 5;

/// Tokens this short or shorter are never keywords.
const MIN_TOKEN_CHARS: usize = 3;

/// Common words dropped by the local extractor.
pub const STOP_WORDS: &[&str] = &[
    "that", "this", "with", "from", "they", "have", "been", "their", "said", "each", "which",
    "will", "would", "could", "should", "into", "than", "them", "then", "there", "these", "what",
    "when", "where", "your", "about", "just", "more", "most", "some", "such", "very", "also",
];

/// Ordered, deduplicated, bounded keyword list.
///
/// Insertion order is extraction order. Never holds more than
/// [`MAX_KEYWORDS`] entries or an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Build from candidates, dropping blanks and duplicates, keeping the first five.
    pub fn from_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
        for candidate in candidates {
            if keywords.len() == MAX_KEYWORDS {
                break;
            }
            let candidate = candidate.as_ref().trim();
            if candidate.is_empty() || keywords.iter().any(|k| k == candidate) {
                continue;
            }
            keywords.push(candidate.to_string());
        }
        Self(keywords)
    }

    /// Deterministic local extraction from problem, solution and market text.
    pub fn extract_local(components: &IdeaComponents) -> Self {
        let text = components.idea_text().to_lowercase();
        let stripped: String = text
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();

        Self::from_candidates(stripped.split_whitespace().filter(|word| {
            word.chars().count() > MIN_TOKEN_CHARS && !STOP_WORDS.contains(word)
        }))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Order-insensitive key: keywords sorted and joined by commas.
    ///
    /// Commas and backslashes inside a keyword are backslash-escaped so
    /// distinct sets never share a key.
    pub fn cache_key(&self) -> String {
        let mut sorted: Vec<&str> = self.0.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
            .iter()
            .map(|k| k.replace('\\', "\\\\").replace(',', "\\,"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::components::NOT_SPECIFIED;

    fn components(problem: &str, solution: &str, market: &str) -> IdeaComponents {
        IdeaComponents {
            problem: problem.to_string(),
            solution: solution.to_string(),
            market: market.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_local_extraction_order_and_filters() {
        let idea = components(
            "Users struggle to track expenses daily",
            "A simple mobile app with OCR receipt scanning",
            "$2 billion personal finance market, growing",
        );
        let keywords = KeywordSet::extract_local(&idea);
        assert_eq!(
            keywords.as_slice(),
            &["users", "struggle", "track", "expenses", "daily"]
        );
    }

    #[test]
    fn test_stop_words_and_duplicates_removed() {
        let idea = components("this tool this tool helps", "tool", "");
        let keywords = KeywordSet::extract_local(&idea);
        assert_eq!(keywords.as_slice(), &["tool", "helps"]);
    }

    #[test]
    fn test_sentinel_fields_contribute_nothing() {
        let idea = components(NOT_SPECIFIED, NOT_SPECIFIED, NOT_SPECIFIED);
        assert!(KeywordSet::extract_local(&idea).is_empty());
    }

    #[test]
    fn test_from_candidates_bounds_and_cleans() {
        let keywords =
            KeywordSet::from_candidates(["a", " ", "b", "a", "c", "d", "e", "f", "g"]);
        assert_eq!(keywords.as_slice(), &["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_cache_key_is_order_insensitive() {
        let a = KeywordSet::from_candidates(["fintech", "budget"]);
        let b = KeywordSet::from_candidates(["budget", "fintech"]);
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), "budget,fintech");
    }

    #[test]
    fn test_cache_key_escapes_separator() {
        let joined = KeywordSet::from_candidates(["a,b"]);
        let split = KeywordSet::from_candidates(["a", "b"]);
        assert_ne!(joined.cache_key(), split.cache_key());
        assert_eq!(joined.cache_key(), r"a\,b");

        let slash = KeywordSet::from_candidates([r"a\", "b"]);
        let comma = KeywordSet::from_candidates([r"a\,b"]);
        assert_ne!(slash.cache_key(), comma.cache_key());
    }
}
