//! Time to market (higher = faster).

use crate::core::text::TextScan;
use crate::idea::IdeaComponents;
use serde::{Deserialize, Serialize};

const BASELINE: i32 = 5;
const QUICK_TERMS: &[&str] = &[
    "simple",
    "basic",
    "minimal",
    "mvp",
    "prototype",
    "existing",
    "template",
    "no-code",
    "low-code",
];
const SLOW_TERMS: &[&str] = &[
    "complex",
    "advanced",
    "enterprise",
    "custom",
    "proprietary",
    "research",
    "development",
    "innovation",
];
const READY_TEAM_TERMS: &[&str] = &[
    "experience",
    "experienced",
    "expert",
    "developer",
    "developers",
];
const FORMED_TEAM_TERMS: &[&str] = &["team", "founded", "ready"];
const HEAVY_TECH_TERMS: &[&str] = &["ai", "machine learning", "blockchain"];
const LIGHT_DELIVERY_TERMS: &[&str] = &["mobile", "web", "app"];
const REGULATORY_TERMS: &[&str] = &["regulation", "regulatory", "compliance", "approval"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFactor {
    pub factor: String,
    pub accelerates: bool,
    /// Rough schedule impact in months (negative = sooner).
    pub months: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub score: i32,
    pub factors: Vec<TimeFactor>,
}

impl TimeBreakdown {
    /// Calendar band for the clamped score.
    pub fn estimate(&self) -> &'static str {
        match self.score {
            s if s >= 8 => "2-4 months",
            s if s >= 6 => "4-8 months",
            s if s >= 4 => "8-12 months",
            s if s >= 2 => "12-18 months",
            _ => "18+ months",
        }
    }

    pub fn accelerators(&self) -> impl Iterator<Item = &TimeFactor> {
        self.factors.iter().filter(|f| f.accelerates)
    }

    pub fn delays(&self) -> impl Iterator<Item = &TimeFactor> {
        self.factors.iter().filter(|f| !f.accelerates)
    }
}

pub fn assess(components: &IdeaComponents) -> TimeBreakdown {
    let team = TextScan::new(IdeaComponents::meaningful(&components.team));
    let text = TextScan::of(&[
        IdeaComponents::meaningful(&components.solution),
        IdeaComponents::meaningful(&components.team),
        IdeaComponents::meaningful(&components.problem),
    ]);

    let mut score = BASELINE;
    let mut factors = Vec::new();
    let mut push = |score: &mut i32, factor: &str, delta: i32, months: i32| {
        *score += delta;
        factors.push(TimeFactor {
            factor: factor.to_string(),
            accelerates: delta > 0,
            months,
        });
    };

    for term in text.matching(QUICK_TERMS) {
        push(&mut score, term, 1, -1);
    }
    for term in text.matching(SLOW_TERMS) {
        push(&mut score, term, -1, 2);
    }
    if team.contains_any(READY_TEAM_TERMS) {
        push(&mut score, "experienced team", 2, -2);
    }
    if team.contains_any(FORMED_TEAM_TERMS) {
        push(&mut score, "formed team", 1, -1);
    }
    if text.contains_any(HEAVY_TECH_TERMS) {
        push(&mut score, "AI/ML development", -2, 4);
    }
    if text.contains_any(LIGHT_DELIVERY_TERMS) {
        push(&mut score, "web/mobile delivery", 1, -1);
    }
    if text.contains_any(REGULATORY_TERMS) {
        push(&mut score, "regulatory compliance", -2, 3);
    }

    TimeBreakdown {
        score: score.clamp(1, 10),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_is_fast() {
        let idea = IdeaComponents {
            problem: "Users struggle to track expenses daily".into(),
            solution: "A simple mobile app with OCR receipt scanning".into(),
            team: "two experienced mobile engineers".into(),
            ..Default::default()
        };
        let b = assess(&idea);
        assert_eq!(b.score, 9);
        assert_eq!(b.estimate(), "2-4 months");
        assert_eq!(b.delays().count(), 0);
    }

    #[test]
    fn test_regulated_ai_is_slow() {
        let idea = IdeaComponents {
            solution: "Custom AI diagnostics requiring regulatory approval and research".into(),
            ..Default::default()
        };
        let b = assess(&idea);
        // 5 - custom - research - 2 (ai) - 2 (regulatory) = -1 -> 1
        assert_eq!(b.score, 1);
        assert_eq!(b.estimate(), "18+ months");
        assert_eq!(b.accelerators().count(), 0);
    }

    #[test]
    fn test_baseline_without_text() {
        assert_eq!(assess(&IdeaComponents::default()).score, 5);
    }
}
