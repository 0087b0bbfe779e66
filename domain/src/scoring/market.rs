//! Market potential: stated market text, optionally blended with search trends.

use crate::core::text::TextScan;
use crate::signals::trends::{TrendDirection, TrendsReport};
use serde::{Deserialize, Serialize};

const SIZE_TERMS: &[&str] = &["billion", "billions", "million", "millions"];
const GROWTH_TERMS: &[&str] = &["growing", "grows", "expand", "expanding", "expansion"];
const TARGET_TERMS: &[&str] = &["target", "targets", "segment", "segments"];
const EVIDENCE_TERMS: &[&str] = &["research", "study", "studies", "data", "survey"];
const RIVAL_TERMS: &[&str] = &["competitor", "competitors", "alternative", "alternatives"];

/// Search interest below this is considered low volume.
pub const LOW_SEARCH_VOLUME: u32 = 20;

/// Additive score over the market description, capped at 10.
pub fn text_score(market: &str) -> i32 {
    let scan = TextScan::new(market);
    let mut score = 0;
    if scan.contains_any(SIZE_TERMS) {
        score += 3;
    }
    if scan.contains_any(GROWTH_TERMS) {
        score += 2;
    }
    if scan.contains_any(TARGET_TERMS) {
        score += 2;
    }
    if scan.contains_any(EVIDENCE_TERMS) {
        score += 2;
    }
    if scan.contains_any(RIVAL_TERMS) {
        score += 1;
    }
    score.min(10)
}

/// Blend the text score with a successful trends report.
///
/// A report with no keyword data contributes a trend score of 0. Without a
/// report the text score is used unchanged.
pub fn combined_score(text_score: i32, trends: Option<&TrendsReport>) -> i32 {
    match trends {
        Some(report) => {
            let sum = f64::from(text_score) + f64::from(report.trend_score());
            (sum / 2.0).round() as i32
        }
        None => text_score,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

impl MarketAnalysis {
    pub fn build(text_score: i32, trends: Option<&TrendsReport>) -> Self {
        let mut analysis = Self::default();
        if text_score >= 7 {
            analysis
                .strengths
                .push("Strong market description with clear size indicators".to_string());
        } else if text_score < 4 {
            analysis
                .weaknesses
                .push("Market description lacks quantifiable data".to_string());
            analysis
                .recommendations
                .push("Add specific market size metrics and growth rates".to_string());
        }

        if let Some(report) = trends {
            let rising = report.keywords_trending(TrendDirection::Rising);
            if !rising.is_empty() {
                analysis
                    .strengths
                    .push(format!("Growing market interest in: {}", rising.join(", ")));
            }
            let declining = report.keywords_trending(TrendDirection::Declining);
            if !declining.is_empty() {
                analysis
                    .weaknesses
                    .push(format!("Declining interest in: {}", declining.join(", ")));
            }
            if report.avg_interest < LOW_SEARCH_VOLUME {
                analysis
                    .recommendations
                    .push("Consider market education strategy due to low search volume".to_string());
            }
        }
        analysis
    }
}
