//! Competition (higher = less competitive).

use crate::core::text::TextScan;
use serde::{Deserialize, Serialize};

const BASELINE: i32 = 5;
const LOW_COMPETITION_TERMS: &[&str] = &[
    "few",
    "limited",
    "no",
    "minimal",
    "niche",
    "underserved",
    "blue ocean",
];
const HIGH_COMPETITION_TERMS: &[&str] = &[
    "many",
    "numerous",
    "crowded",
    "saturated",
    "competitive",
    "established",
    "dominated",
];
const ADVANTAGE_TERMS: &[&str] = &[
    "advantage",
    "unique",
    "differentiate",
    "differentiated",
    "superior",
];
const LEADER_TERMS: &[&str] = &["leader", "leaders", "dominant", "monopoly"];

/// Step function over a discovered competitor count.
///
/// | count | score |
/// |-------|-------|
/// | 0     | 10    |
/// | 1-2   | 8     |
/// | 3-5   | 6     |
/// | 6-8   | 4     |
/// | 9-12  | 2     |
/// | 13+   | 1     |
pub fn from_count(count: usize) -> i32 {
    match count {
        0 => 10,
        1..=2 => 8,
        3..=5 => 6,
        6..=8 => 4,
        9..=12 => 2,
        _ => 1,
    }
}

/// Heuristic over the stated competition text, clamped to [1,10].
pub fn text_score(competition: &str) -> i32 {
    let scan = TextScan::new(competition);
    let mut score = BASELINE;
    score += 2 * scan.count_matches(LOW_COMPETITION_TERMS) as i32;
    score -= 2 * scan.count_matches(HIGH_COMPETITION_TERMS) as i32;
    if scan.contains_any(ADVANTAGE_TERMS) {
        score += 1;
    }
    if scan.contains_any(LEADER_TERMS) {
        score -= 1;
    }
    score.clamp(1, 10)
}

/// Qualitative reading of the stated competition text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInsights {
    pub level: String,
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
}

impl TextInsights {
    /// `None` text means nothing was stated.
    pub fn read(competition: Option<&str>) -> Self {
        let Some(text) = competition else {
            return Self {
                level: "unknown".to_string(),
                indicators: Vec::new(),
                recommendations: vec!["Conduct thorough competitive analysis".to_string()],
            };
        };

        let scan = TextScan::new(text);
        let mut insights = Self {
            level: "moderate".to_string(),
            indicators: Vec::new(),
            recommendations: Vec::new(),
        };

        if scan.contains_any(&["few", "limited", "niche"]) {
            insights.level = "low".to_string();
            insights.indicators.push("Limited competition mentioned".to_string());
            insights
                .recommendations
                .push("Validate market demand despite low competition".to_string());
        } else if scan.contains_any(&["many", "crowded", "saturated"]) {
            insights.level = "high".to_string();
            insights.indicators.push("Crowded market indicated".to_string());
            insights
                .recommendations
                .push("Focus on strong differentiation strategy".to_string());
        }

        if scan.contains_any(&["advantage", "unique"]) {
            insights
                .indicators
                .push("Competitive advantages identified".to_string());
        } else {
            insights
                .recommendations
                .push("Define clear competitive advantages".to_string());
        }
        insights
    }
}
