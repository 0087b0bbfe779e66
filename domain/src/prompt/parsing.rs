//! Parsing of generative text responses.
//!
//! Pure functions: strip Markdown code fences, then decode the JSON shape
//! each generative step asks for.
//!
//! | Function | Expected shape |
//! |----------|----------------|
//! | [`parse_components`] | object with the five idea fields |
//! | [`parse_keywords`] | array of strings |

use crate::idea::{KeywordSet, NOT_SPECIFIED, StructuredIdea};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseParseError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON {expected}")]
    UnexpectedShape { expected: &'static str },
}

/// Remove a surrounding ```json / ``` fence, if present.
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn parse_value(content: &str) -> Result<Value, ResponseParseError> {
    serde_json::from_str(strip_code_fence(content))
        .map_err(|e| ResponseParseError::InvalidJson(e.to_string()))
}

/// Decode extracted components. Missing, empty or non-string fields become
/// [`NOT_SPECIFIED`].
pub fn parse_components(content: &str) -> Result<StructuredIdea, ResponseParseError> {
    let value = parse_value(content)?;
    let object = value
        .as_object()
        .ok_or(ResponseParseError::UnexpectedShape { expected: "object" })?;

    let field = |name: &str| -> String {
        object
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_SPECIFIED)
            .to_string()
    };

    Ok(StructuredIdea {
        problem: field("problem"),
        solution: field("solution"),
        market: field("market"),
        competition: field("competition"),
        team: field("team"),
    })
}

/// Decode ranked keywords: non-empty strings only, at most five.
pub fn parse_keywords(content: &str) -> Result<KeywordSet, ResponseParseError> {
    let value = parse_value(content)?;
    let items = value
        .as_array()
        .ok_or(ResponseParseError::UnexpectedShape { expected: "array" })?;
    Ok(KeywordSet::from_candidates(
        items.iter().filter_map(Value::as_str),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("  [1] "), "[1]");
    }

    #[test]
    fn test_parse_components_fills_missing() {
        let idea = parse_components(
            r#"```json
{"problem": "Receipts get lost", "solution": "Scan app", "market": "", "team": null}
```"#,
        )
        .unwrap();
        assert_eq!(idea.problem, "Receipts get lost");
        assert_eq!(idea.solution, "Scan app");
        assert_eq!(idea.market, NOT_SPECIFIED);
        assert_eq!(idea.competition, NOT_SPECIFIED);
        assert_eq!(idea.team, NOT_SPECIFIED);
    }

    #[test]
    fn test_parse_components_rejects_non_object() {
        assert_eq!(
            parse_components("[1, 2]"),
            Err(ResponseParseError::UnexpectedShape { expected: "object" })
        );
        assert!(matches!(
            parse_components("Sure! Here is the JSON"),
            Err(ResponseParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_keywords_filters_and_bounds() {
        let keywords =
            parse_keywords(r#"["fintech", "", 3, "receipts", "ocr", "budget", "expenses", "tax"]"#)
                .unwrap();
        assert_eq!(
            keywords.as_slice(),
            &["fintech", "receipts", "ocr", "budget", "expenses"]
        );
        assert!(parse_keywords(r#"{"keywords": []}"#).is_err());
    }
}
