//! Deterministic feedback rules.
//!
//! Per-dimension notes come from score thresholds and from whichever provider
//! signals succeeded. The overall narrative falls back to score banding when
//! no generated narrative is available.

use super::entities::{Feedback, FeedbackSource};
use crate::core::string::humanize_camel;
use crate::provider::ValidationContext;
use crate::scoring::market::LOW_SEARCH_VOLUME;
use crate::scoring::{Dimension, ScoreSheet, Scores};
use crate::signals::competitors::CompetitionLevel;
use crate::signals::trends::TrendDirection;
use std::collections::BTreeMap;

/// Dimensions below this get an improvement suggestion.
pub const SUGGESTION_THRESHOLD: u8 = 6;

/// Overall narrative from the rounded mean.
pub fn overall_band(overall: f64) -> &'static str {
    if overall >= 8.0 {
        "Excellent startup idea with strong fundamentals across all dimensions"
    } else if overall >= 6.0 {
        "Good startup concept with solid foundation and clear opportunities"
    } else if overall >= 4.0 {
        "Average startup idea requiring focused improvements in key areas"
    } else if overall >= 3.0 {
        "Startup concept needs significant development before pursuing"
    } else {
        "Major foundational issues identified that need addressing"
    }
}

/// Build feedback; `narrative` is the generated overall text, if any.
pub fn compose(
    sheet: &ScoreSheet,
    context: &ValidationContext,
    narrative: Option<String>,
) -> Feedback {
    let mut notes = Notes::default();
    threshold_notes(&sheet.scores, &mut notes);
    competition_notes(sheet, context, &mut notes);
    market_notes(sheet, context, &mut notes);
    feasibility_notes(context, &mut notes);

    let narrative = narrative
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    let source = if narrative.is_some() {
        FeedbackSource::Generated
    } else {
        FeedbackSource::RuleBased
    };

    let mut overall =
        vec![narrative.unwrap_or_else(|| overall_band(sheet.scores.overall()).to_string())];
    overall.extend(notes.concerns);

    let mut detailed = notes.detailed;
    for dimension in Dimension::ALL {
        let entry = detailed.entry(dimension).or_default();
        if entry.is_empty() {
            entry.push(format!("{} analysis completed", humanize_camel(dimension.as_str())));
        }
    }

    Feedback {
        overall,
        detailed,
        suggestions: improvement_suggestions(&sheet.scores),
        source,
    }
}

/// One suggestion per dimension below the threshold.
pub fn improvement_suggestions(scores: &Scores) -> Vec<String> {
    let weak = scores.below(SUGGESTION_THRESHOLD);
    if weak.is_empty() {
        return vec!["All areas scoring well - focus on execution and market testing".to_string()];
    }
    weak.into_iter()
        .map(|d| {
            format!(
                "Improve {} by conducting additional research and validation",
                humanize_camel(d.as_str())
            )
        })
        .collect()
}

#[derive(Default)]
struct Notes {
    detailed: BTreeMap<Dimension, Vec<String>>,
    concerns: Vec<String>,
}

impl Notes {
    fn add(&mut self, dimension: Dimension, note: impl Into<String>) {
        self.detailed.entry(dimension).or_default().push(note.into());
    }

    fn concern(&mut self, note: &str) {
        self.concerns.push(note.to_string());
    }
}

/// (dimension, low bound, high bound, low note, high note, middle note, concern)
type Band = (Dimension, u8, u8, &'static str, &'static str, &'static str, &'static str);

const THRESHOLDS: &[Band] = &[
    (
        Dimension::ProblemClarity,
        5,
        8,
        "Problem statement needs more clarity and specificity",
        "Excellent problem definition with clear target audience and pain points",
        "Good problem clarity, consider adding more specific metrics or urgency indicators",
        "Problem statement requires better definition",
    ),
    (
        Dimension::MarketPotential,
        5,
        8,
        "Market potential analysis requires more research and quantifiable data",
        "Strong market potential with clear size indicators and growth prospects",
        "Decent market potential, consider adding competitive landscape details",
        "Market analysis needs strengthening",
    ),
    (
        Dimension::Feasibility,
        5,
        8,
        "Feasibility assessment needs more technical and team details",
        "High feasibility with strong team indicators and clear solution approach",
        "Moderate feasibility, consider strengthening team composition or solution details",
        "Implementation feasibility concerns identified",
    ),
    (
        Dimension::TechnicalComplexity,
        4,
        7,
        "High technical complexity may require significant development resources and expertise",
        "Low to moderate technical complexity enables faster development and lower risk",
        "Moderate technical complexity requires careful planning and skilled team",
        "Complex technical implementation challenges ahead",
    ),
    (
        Dimension::MonetizationViability,
        4,
        7,
        "Monetization model unclear - define specific revenue streams and pricing strategy",
        "Strong monetization potential with clear revenue models identified",
        "Basic monetization approach present, consider diversifying revenue streams",
        "Revenue model needs clarification",
    ),
    (
        Dimension::TimeToMarket,
        4,
        7,
        "Extended development timeline expected due to complexity or resource requirements",
        "Fast time to market potential enables quick validation and iteration",
        "Moderate development timeline - plan for 6-12 month MVP development",
        "Long development cycle may impact market entry",
    ),
];

fn threshold_notes(scores: &Scores, notes: &mut Notes) {
    for (dimension, low, high, low_note, high_note, mid_note, concern) in THRESHOLDS {
        let value = scores.get(*dimension);
        if value < *low {
            notes.add(*dimension, *low_note);
            notes.concern(concern);
        } else if value >= *high {
            notes.add(*dimension, *high_note);
        } else {
            notes.add(*dimension, *mid_note);
        }
    }
}

fn competition_notes(sheet: &ScoreSheet, context: &ValidationContext, notes: &mut Notes) {
    let dimension = Dimension::Competition;
    match context.competitors() {
        Some(report) => {
            let count = report.total_count;
            match report.level() {
                CompetitionLevel::None => {
                    notes.add(
                        dimension,
                        "No direct competitors found - potential blue ocean opportunity or very niche market",
                    );
                    notes.concern("Limited competition detected");
                }
                CompetitionLevel::Low => {
                    notes.add(
                        dimension,
                        format!("Low competition detected with {count} potential competitors identified"),
                    );
                    notes.concern("Favorable competitive landscape");
                }
                CompetitionLevel::Moderate => notes.add(
                    dimension,
                    format!("Moderate competition with {count} competitors - focus on differentiation"),
                ),
                CompetitionLevel::High => {
                    notes.add(
                        dimension,
                        format!("High competition with {count}+ competitors - strong differentiation required"),
                    );
                    notes.concern("Highly competitive market identified");
                }
            }
            let top = report.top_domains(3);
            if !top.is_empty() {
                notes.add(dimension, format!("Key competitors identified: {}", top.join(", ")));
            }
        }
        None => {
            let value = sheet.scores.get(dimension);
            if value < 4 {
                notes.add(dimension, "High competition indicated - conduct thorough competitive analysis");
                notes.concern("Competitive pressure concerns");
            } else if value >= 7 {
                notes.add(dimension, "Low competition environment favorable for market entry");
            } else {
                notes.add(dimension, "Moderate competition level - differentiation strategy needed");
            }
        }
    }
    notes.add(dimension, sheet.competition.combined.overall_assessment.clone());
}

fn market_notes(sheet: &ScoreSheet, context: &ValidationContext, notes: &mut Notes) {
    let dimension = Dimension::MarketPotential;

    if let Some(trends) = context.trends().filter(|t| t.has_data()) {
        let rising = trends.keywords_trending(TrendDirection::Rising);
        if !rising.is_empty() {
            notes.add(
                dimension,
                format!("Positive market trends detected for: {}", rising.join(", ")),
            );
            notes.concern("Market trends are favorable");
        }
        let declining = trends.keywords_trending(TrendDirection::Declining);
        if !declining.is_empty() {
            notes.add(
                dimension,
                format!("Declining interest observed for: {}", declining.join(", ")),
            );
            notes.concern("Some market segments showing decline");
        }
        if trends.avg_interest < LOW_SEARCH_VOLUME {
            notes.add(
                dimension,
                "Low search volume detected - consider market education or niche positioning",
            );
        }
    }

    for recommendation in &sheet.market.analysis.recommendations {
        notes.add(dimension, recommendation.clone());
    }

    if let Some(sentiment) = context.sentiment().filter(|s| s.has_data()) {
        notes.add(
            dimension,
            format!(
                "Community sentiment is {} ({:+.2}) across {} discussions",
                sentiment.overall_sentiment.as_str(),
                sentiment.sentiment_score,
                sentiment.total_posts
            ),
        );
        for insight in &sentiment.market_insights {
            notes.add(dimension, insight.clone());
        }
    }

    if let Some(data) = context.funding().filter(|d| d.has_data()) {
        for insight in &data.market_insights {
            notes.add(dimension, insight.clone());
        }
    }
}

fn feasibility_notes(context: &ValidationContext, notes: &mut Notes) {
    let Some(report) = context.feasibility() else {
        return;
    };
    for strength in &report.implementation.strengths {
        notes.add(Dimension::Feasibility, strength.clone());
    }
    for concern in &report.implementation.concerns {
        notes.add(Dimension::Feasibility, concern.clone());
    }
    notes.add(
        Dimension::TechnicalComplexity,
        report.technical_complexity.analysis.clone(),
    );
    notes.add(
        Dimension::TimeToMarket,
        format!("Estimated time to market: {}", report.time_to_market.estimate),
    );
}
