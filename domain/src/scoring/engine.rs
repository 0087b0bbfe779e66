//! The scoring engine: `IdeaComponents × ValidationContext → Scores`.
//!
//! Pure and total. Every dimension always gets a value: provider-backed
//! dimensions fall back to their text heuristic when the provider did not
//! succeed.

use super::competition::{self, TextInsights};
use super::market::{self, MarketAnalysis};
use super::scores::{Dimension, Scores};
use super::{complexity, feasibility, monetization, problem, time_to_market};
use crate::idea::{BusinessProfile, IdeaComponents};
use crate::provider::ValidationContext;
use crate::signals::competitors::{CombinedAssessment, WebResearchAnalysis, combined_assessment};
use serde::Serialize;

/// Market dimension detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketBreakdown {
    pub text_score: i32,
    /// Present when a trends report with data was available.
    pub trends_score: Option<u8>,
    pub analysis: MarketAnalysis,
}

/// Competition dimension detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionBreakdown {
    pub text_score: i32,
    /// Present when competitor discovery succeeded.
    pub web_score: Option<i32>,
    pub text_insights: TextInsights,
    pub web_research: Option<WebResearchAnalysis>,
    pub combined: CombinedAssessment,
}

/// Scores plus the intermediate results feedback is built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSheet {
    pub scores: Scores,
    pub profile: BusinessProfile,
    pub market: MarketBreakdown,
    pub competition: CompetitionBreakdown,
}

/// Score an idea against whatever signals the context holds.
pub fn score_idea(components: &IdeaComponents, context: &ValidationContext) -> ScoreSheet {
    let profile = BusinessProfile::of_idea(components);

    let market_text = market::text_score(IdeaComponents::meaningful(&components.market));
    let trends = context.trends();
    let market = MarketBreakdown {
        text_score: market_text,
        trends_score: trends.map(|t| t.trend_score()),
        analysis: MarketAnalysis::build(market_text, trends),
    };

    let stated = Some(IdeaComponents::meaningful(&components.competition))
        .filter(|s| !s.trim().is_empty());
    let report = context.competitors();
    let competition = CompetitionBreakdown {
        text_score: competition::text_score(stated.unwrap_or_default()),
        web_score: report.map(|r| competition::from_count(r.total_count)),
        text_insights: TextInsights::read(stated),
        web_research: report.map(|r| r.analysis()),
        combined: combined_assessment(report, stated),
    };

    let complexity = complexity::assess(components, profile);
    let timing = time_to_market::assess(components);

    let scores = Scores::from_fn(|dimension| match dimension {
        Dimension::ProblemClarity => {
            problem::score(IdeaComponents::meaningful(&components.problem))
        }
        Dimension::MarketPotential => market::combined_score(market_text, trends),
        Dimension::Feasibility => feasibility::score(components),
        Dimension::TechnicalComplexity => complexity.score,
        Dimension::MonetizationViability => monetization::score(components, profile),
        Dimension::TimeToMarket => timing.score,
        Dimension::Competition => competition.web_score.unwrap_or(competition.text_score),
    });

    ScoreSheet {
        scores,
        profile,
        market,
        competition,
    }
}
