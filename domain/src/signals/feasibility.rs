//! Implementation feasibility report produced locally from the idea text.
//!
//! Shares its term tables with the scoring formulas so the report always
//! explains the same factors the scores were computed from.

use crate::idea::{BusinessProfile, IdeaComponents};
use crate::scoring::complexity::{self, ComplexityFactor, Impact};
use crate::scoring::time_to_market::{self, TimeFactor};
use crate::scoring::feasibility;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationAnalysis {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    pub level: Impact,
    pub factors: Vec<ComplexityFactor>,
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeToMarketEstimate {
    pub estimate: String,
    pub factors: Vec<TimeFactor>,
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    pub implementation: ImplementationAnalysis,
    pub technical_complexity: ComplexityAssessment,
    pub time_to_market: TimeToMarketEstimate,
}

impl FeasibilityReport {
    pub fn assess(components: &IdeaComponents) -> Self {
        let profile = BusinessProfile::of_idea(components);
        let complexity = complexity::assess(components, profile);
        let timing = time_to_market::assess(components);

        Self {
            implementation: implementation_analysis(components),
            technical_complexity: ComplexityAssessment {
                level: complexity.level(),
                analysis: complexity_analysis(complexity.level(), &complexity.factors),
                factors: complexity.factors,
            },
            time_to_market: TimeToMarketEstimate {
                estimate: timing.estimate().to_string(),
                analysis: time_analysis(&timing),
                factors: timing.factors,
            },
        }
    }
}

fn implementation_analysis(components: &IdeaComponents) -> ImplementationAnalysis {
    let mut analysis = ImplementationAnalysis::default();
    let solution = IdeaComponents::meaningful(&components.solution);
    let team = IdeaComponents::meaningful(&components.team);

    if solution.trim().is_empty() {
        analysis.concerns.push("Solution description missing".to_string());
        analysis
            .recommendations
            .push("Provide detailed solution architecture".to_string());
    }

    if team.trim().is_empty() {
        analysis.concerns.push("Team information not provided".to_string());
        analysis
            .recommendations
            .push("Detail team expertise and experience".to_string());
    } else if feasibility::team_is_experienced(team) {
        analysis.strengths.push("Team appears experienced".to_string());
    }

    if feasibility::score(components) >= 8 {
        analysis
            .strengths
            .push("Clear solution with favorable competitive room".to_string());
    }
    analysis
}

fn complexity_analysis(level: Impact, factors: &[ComplexityFactor]) -> String {
    match level {
        Impact::High => {
            let advanced = factors.iter().filter(|f| f.impact == Impact::High).count();
            format!(
                "High technical complexity detected. {advanced} advanced technology components identified. Consider breaking into phases."
            )
        }
        Impact::Medium => {
            "Moderate technical complexity requiring standard development practices and skilled team."
                .to_string()
        }
        Impact::Low => {
            "Low technical complexity enables rapid development with standard tools and frameworks."
                .to_string()
        }
    }
}

fn time_analysis(timing: &time_to_market::TimeBreakdown) -> String {
    let mut analysis = format!("Development timeline score: {}/10.", timing.score);
    let accelerators: Vec<&str> = timing.accelerators().map(|f| f.factor.as_str()).collect();
    if !accelerators.is_empty() {
        analysis.push_str(&format!(" Accelerating factors: {}.", accelerators.join(", ")));
    }
    let delays: Vec<&str> = timing.delays().map(|f| f.factor.as_str()).collect();
    if !delays.is_empty() {
        analysis.push_str(&format!(" Potential delays from: {}.", delays.join(", ")));
    }
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::NOT_SPECIFIED;

    #[test]
    fn test_scenario_report() {
        let idea = IdeaComponents {
            problem: "Users struggle to track expenses daily".into(),
            solution: "A simple mobile app with OCR receipt scanning".into(),
            market: "$2 billion personal finance market, growing".into(),
            competition: "few direct competitors, we have a unique OCR advantage".into(),
            team: "two experienced mobile engineers".into(),
            ..Default::default()
        };
        let report = FeasibilityReport::assess(&idea);
        assert_eq!(report.time_to_market.estimate, "2-4 months");
        assert_eq!(report.technical_complexity.level, Impact::Low);
        assert!(report
            .implementation
            .strengths
            .contains(&"Team appears experienced".to_string()));
        assert!(report.time_to_market.analysis.contains("experienced team"));
    }

    #[test]
    fn test_missing_team_and_solution() {
        let idea = IdeaComponents {
            problem: "Dogs need walks".into(),
            solution: NOT_SPECIFIED.into(),
            team: NOT_SPECIFIED.into(),
            ..Default::default()
        };
        let report = FeasibilityReport::assess(&idea);
        assert_eq!(report.implementation.concerns.len(), 2);
        assert_eq!(report.implementation.recommendations.len(), 2);
    }
}
