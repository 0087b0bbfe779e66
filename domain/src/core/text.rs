//! Whole-word term matching for text heuristics.
//!
//! Every keyword family in the scoring and classification tables is matched
//! through [`TextScan`]. Text is lowercased and split on any character that
//! is not alphanumeric, so a term only matches complete tokens: `"ai"` hits
//! `"AI-powered"` but not `"daily"`. Multi-word terms (`"machine learning"`,
//! `"per seat"`, `"no-code"`) match consecutive tokens.

/// Lowercased, tokenized view over one or more text fragments.
#[derive(Debug, Clone, Default)]
pub struct TextScan {
    lower: String,
    tokens: Vec<String>,
}

impl TextScan {
    /// Scan a single text fragment.
    pub fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let tokens = tokenize(&lower);
        Self { lower, tokens }
    }

    /// Scan several fragments joined by a space.
    pub fn of(parts: &[&str]) -> Self {
        Self::new(&parts.join(" "))
    }

    /// Whether `term` appears as a whole token or token sequence.
    pub fn contains(&self, term: &str) -> bool {
        let needle = tokenize(&term.to_lowercase());
        if needle.is_empty() || needle.len() > self.tokens.len() {
            return false;
        }
        self.tokens
            .windows(needle.len())
            .any(|window| window == needle.as_slice())
    }

    /// Whether any of `terms` matches.
    pub fn contains_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.contains(t))
    }

    /// Number of distinct entries in `terms` that match.
    pub fn count_matches(&self, terms: &[&str]) -> usize {
        terms.iter().filter(|t| self.contains(t)).count()
    }

    /// Entries of `terms` that match, in table order.
    pub fn matching<'a>(&self, terms: &[&'a str]) -> Vec<&'a str> {
        terms.iter().copied().filter(|t| self.contains(t)).collect()
    }

    /// Number of token occurrences of a single-token term (non-distinct).
    pub fn occurrences(&self, token: &str) -> usize {
        let token = token.to_lowercase();
        self.tokens.iter().filter(|t| **t == token).count()
    }

    /// Whether the raw text contains an ASCII digit.
    pub fn has_digit(&self) -> bool {
        self.lower.chars().any(|c| c.is_ascii_digit())
    }

    /// Whether the raw text contains `c` (used for symbols like `$`).
    pub fn has_char(&self, c: char) -> bool {
        self.lower.contains(c)
    }

    /// Whether the scanned text holds no tokens at all.
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Split lowercase text into alphanumeric tokens.
pub fn tokenize(lower: &str) -> Vec<String> {
    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
