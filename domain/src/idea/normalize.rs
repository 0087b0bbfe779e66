//! Deterministic local extraction of idea components from free text.
//!
//! Used whenever the generative text provider is absent or fails. The
//! description is split into sentences; the problem and solution fields take
//! the first sentence carrying an indicator word (indicators are tried in
//! table order). Everything else defaults to [`NOT_SPECIFIED`].

use super::components::{IdeaComponents, NOT_SPECIFIED, StructuredIdea};
use crate::core::string::char_prefix;
use crate::core::text::TextScan;

/// Words that mark a sentence as describing the problem.
pub const PROBLEM_INDICATORS: &[&str] = &[
    "problem",
    "problems",
    "issue",
    "issues",
    "challenge",
    "challenges",
    "struggle",
    "struggles",
    "difficulty",
    "pain",
];

/// Words that mark a sentence as describing the solution.
pub const SOLUTION_INDICATORS: &[&str] = &[
    "solution", "app", "platform", "build", "create", "develop",
];

/// Characters of the description used as the solution when no indicator hits.
pub const SOLUTION_PREFIX_CHARS: usize = 200;

/// Extract components from a description without any external help.
pub fn extract_components(description: &str) -> IdeaComponents {
    let sentences = split_sentences(description);

    let problem = first_sentence_with(&sentences, PROBLEM_INDICATORS)
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let solution = first_sentence_with(&sentences, SOLUTION_INDICATORS)
        .unwrap_or_else(|| char_prefix(description.trim(), SOLUTION_PREFIX_CHARS));

    IdeaComponents::from_extracted(
        StructuredIdea {
            problem,
            solution,
            market: NOT_SPECIFIED.to_string(),
            competition: NOT_SPECIFIED.to_string(),
            team: NOT_SPECIFIED.to_string(),
        },
        description,
    )
}

fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn first_sentence_with(sentences: &[&str], indicators: &[&str]) -> Option<String> {
    let scans: Vec<TextScan> = sentences.iter().map(|s| TextScan::new(s)).collect();
    indicators.iter().find_map(|indicator| {
        scans
            .iter()
            .position(|scan| scan.contains(indicator))
            .map(|i| sentences[i].to_string())
    })
}
