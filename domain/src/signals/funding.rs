//! Startup landscape, funding rounds and investor activity for an industry.
//!
//! Inputs are already-decoded firmographic records; the current year is passed
//! in so that every function here stays deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Neutral market score before any funding signal is applied.
const NEUTRAL_MARKET_SCORE: i32 = 5;
const TOP_BUCKETS: usize = 5;
const ACTIVE_INVESTORS_SHOWN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub founded_year: Option<i32>,
    pub categories: Vec<String>,
    pub location: Option<String>,
    pub total_funding_usd: Option<f64>,
    pub funding_stage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRound {
    pub amount_usd: f64,
    pub year: Option<i32>,
    pub stage: Option<String>,
    pub organization_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub name: String,
    pub organization: Option<String>,
    pub job_title: Option<String>,
    pub investment_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupLandscape {
    pub total_startups: usize,
    pub recent_startups: usize,
    pub funded_startups: usize,
    pub avg_funding: f64,
    pub top_categories: Vec<Bucket>,
    pub locations: Vec<Bucket>,
    pub funding_stages: Vec<Bucket>,
    pub competitive_intensity: Intensity,
}

impl StartupLandscape {
    pub fn analyze(startups: &[Organization], current_year: i32) -> Self {
        let funded: Vec<f64> = startups
            .iter()
            .filter_map(|s| s.total_funding_usd)
            .filter(|f| *f > 0.0)
            .collect();
        let avg_funding = if funded.is_empty() {
            0.0
        } else {
            funded.iter().sum::<f64>() / funded.len() as f64
        };

        let competitive_intensity = match startups.len() {
            n if n > 100 => Intensity::High,
            n if n < 20 => Intensity::Low,
            _ => Intensity::Medium,
        };

        let mut top_categories =
            buckets(startups.iter().flat_map(|s| s.categories.iter().map(String::as_str)));
        top_categories.truncate(TOP_BUCKETS);
        let mut locations = buckets(startups.iter().filter_map(|s| s.location.as_deref()));
        locations.truncate(TOP_BUCKETS);

        Self {
            total_startups: startups.len(),
            recent_startups: startups
                .iter()
                .filter(|s| s.founded_year.is_some_and(|y| y >= current_year - 2))
                .count(),
            funded_startups: funded.len(),
            avg_funding,
            top_categories,
            locations,
            funding_stages: buckets(startups.iter().filter_map(|s| s.funding_stage.as_deref())),
            competitive_intensity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingActivity {
    Increasing,
    Stable,
    Decreasing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub rounds: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingPatterns {
    pub total_rounds: usize,
    pub total_amount: f64,
    pub avg_round_size: f64,
    /// Most recent year first.
    pub yearly_trends: Vec<YearTotal>,
    pub stage_distribution: Vec<Bucket>,
    pub recent_activity: FundingActivity,
}

impl FundingPatterns {
    /// Analyze rounds with a positive amount; others are ignored.
    pub fn analyze(rounds: &[FundingRound], current_year: i32) -> Self {
        let rounds: Vec<&FundingRound> = rounds.iter().filter(|r| r.amount_usd > 0.0).collect();
        let total_amount: f64 = rounds.iter().map(|r| r.amount_usd).sum();

        let mut by_year: BTreeMap<i32, (u32, f64)> = BTreeMap::new();
        for round in &rounds {
            if let Some(year) = round.year {
                let entry = by_year.entry(year).or_default();
                entry.0 += 1;
                entry.1 += round.amount_usd;
            }
        }
        let yearly_trends: Vec<YearTotal> = by_year
            .iter()
            .rev()
            .map(|(year, (count, amount))| YearTotal {
                year: *year,
                rounds: *count,
                amount: *amount,
            })
            .collect();

        let recent_activity = match (by_year.get(&current_year), by_year.get(&(current_year - 1))) {
            (Some((_, this_year)), Some((_, last_year))) if *last_year > 0.0 => {
                let growth = (this_year - last_year) / last_year * 100.0;
                if growth > 20.0 {
                    FundingActivity::Increasing
                } else if growth < -20.0 {
                    FundingActivity::Decreasing
                } else {
                    FundingActivity::Stable
                }
            }
            _ => FundingActivity::Stable,
        };

        Self {
            total_rounds: rounds.len(),
            total_amount,
            avg_round_size: if rounds.is_empty() {
                0.0
            } else {
                total_amount / rounds.len() as f64
            },
            yearly_trends,
            stage_distribution: buckets(rounds.iter().filter_map(|r| r.stage.as_deref())),
            recent_activity,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentActivity {
    pub high_activity: usize,
    pub medium_activity: usize,
    pub low_activity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorEcosystem {
    pub total_investors: usize,
    pub active_investors: Vec<Investor>,
    pub investment_activity: InvestmentActivity,
}

impl InvestorEcosystem {
    pub fn from_investors(investors: Vec<Investor>) -> Self {
        let counts = investors.iter().map(|i| i.investment_count.unwrap_or(0));
        let investment_activity = InvestmentActivity {
            high_activity: counts.clone().filter(|c| *c > 10).count(),
            medium_activity: counts.clone().filter(|c| (6..=10).contains(c)).count(),
            low_activity: counts.filter(|c| *c <= 5).count(),
        };
        Self {
            total_investors: investors.len(),
            active_investors: investors.into_iter().take(ACTIVE_INVESTORS_SHOWN).collect(),
            investment_activity,
        }
    }
}

/// Aggregated firmographic market view. Any section may be missing when its
/// lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub keywords: Vec<String>,
    pub industry: String,
    pub market_score: u8,
    pub startup_landscape: Option<StartupLandscape>,
    pub funding_trends: Option<FundingPatterns>,
    pub investor_ecosystem: Option<InvestorEcosystem>,
    pub market_insights: Vec<String>,
    pub recommendations: Vec<String>,
}

impl MarketData {
    pub fn aggregate(
        keywords: Vec<String>,
        industry: &str,
        landscape: Option<StartupLandscape>,
        funding: Option<FundingPatterns>,
        investors: Option<InvestorEcosystem>,
    ) -> Self {
        let mut insights = Vec::new();
        let mut score = NEUTRAL_MARKET_SCORE;

        if let Some(l) = &landscape {
            match l.competitive_intensity {
                Intensity::High => {
                    insights.push("Highly competitive market with many established players");
                    score -= 1;
                }
                Intensity::Low => {
                    insights.push("Limited competition - potential opportunity or small market");
                    score += 1;
                }
                Intensity::Medium => {}
            }
            if l.recent_startups as f64 > l.total_startups as f64 * 0.3 {
                insights.push("High recent startup activity indicates hot market");
                score += 1;
            }
            if l.avg_funding > 1_000_000.0 {
                insights.push("Strong average funding suggests investor confidence");
                score += 1;
            }
        }

        if let Some(f) = &funding {
            match f.recent_activity {
                FundingActivity::Increasing => {
                    insights.push("Growing investor interest with increasing funding activity");
                    score += 2;
                }
                FundingActivity::Decreasing => {
                    insights.push("Declining funding activity may indicate market challenges");
                    score -= 1;
                }
                FundingActivity::Stable => {}
            }
            if f.avg_round_size > 5_000_000.0 {
                insights.push("Large average round sizes indicate mature market");
            }
        }

        if let Some(i) = &investors
            && i.investment_activity.high_activity > 5
        {
            insights.push("Active investor ecosystem with engaged participants");
            score += 1;
        }

        let recommendations = recommendations(landscape.as_ref(), funding.as_ref());
        Self {
            keywords,
            industry: industry.to_string(),
            market_score: score.clamp(1, 10) as u8,
            startup_landscape: landscape,
            funding_trends: funding,
            investor_ecosystem: investors,
            market_insights: insights.into_iter().map(str::to_string).collect(),
            recommendations,
        }
    }

    /// Whether any section carries data.
    pub fn has_data(&self) -> bool {
        self.startup_landscape.is_some()
            || self.funding_trends.is_some()
            || self.investor_ecosystem.is_some()
    }
}

fn recommendations(
    landscape: Option<&StartupLandscape>,
    funding: Option<&FundingPatterns>,
) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(l) = landscape
        && l.competitive_intensity == Intensity::High
    {
        out.push("Focus on strong differentiation due to high competition");
        out.push("Consider niche market positioning");
    }
    if funding.is_some_and(|f| f.recent_activity == FundingActivity::Increasing) {
        out.push("Good timing for fundraising given increasing activity");
    }
    if let Some(l) = landscape
        && l.avg_funding > 0.0
    {
        if l.avg_funding < 500_000.0 {
            out.push("Consider bootstrapping or angel funding approach");
        } else if l.avg_funding > 5_000_000.0 {
            out.push("Prepare for significant funding requirements");
        }
    }
    if out.is_empty() {
        out.push("Conduct additional market research for strategic positioning");
    }
    out.into_iter().map(str::to_string).collect()
}

/// Count labels, most frequent first; ties alphabetical.
fn buckets<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<Bucket> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut out: Vec<Bucket> = counts
        .into_iter()
        .map(|(label, count)| Bucket {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(founded: i32, funding: f64, category: &str) -> Organization {
        Organization {
            name: "Acme".to_string(),
            founded_year: Some(founded),
            categories: vec![category.to_string()],
            location: Some("Berlin".to_string()),
            total_funding_usd: Some(funding),
            funding_stage: Some("seed".to_string()),
        }
    }

    fn round(amount: f64, year: i32) -> FundingRound {
        FundingRound {
            amount_usd: amount,
            year: Some(year),
            stage: Some("seed".to_string()),
            organization_name: None,
        }
    }

    #[test]
    fn test_landscape() {
        let startups = vec![
            org(2026, 2_000_000.0, "fintech"),
            org(2015, 0.0, "fintech"),
            org(2025, 1_000_000.0, "payments"),
        ];
        let landscape = StartupLandscape::analyze(&startups, 2026);
        assert_eq!(landscape.total_startups, 3);
        assert_eq!(landscape.recent_startups, 2);
        assert_eq!(landscape.funded_startups, 2);
        assert_eq!(landscape.avg_funding, 1_500_000.0);
        assert_eq!(landscape.top_categories[0], Bucket { label: "fintech".into(), count: 2 });
        assert_eq!(landscape.competitive_intensity, Intensity::Low);
    }

    #[test]
    fn test_funding_patterns_activity() {
        let patterns = FundingPatterns::analyze(
            &[round(300.0, 2026), round(100.0, 2025), round(0.0, 2026)],
            2026,
        );
        assert_eq!(patterns.total_rounds, 2);
        assert_eq!(patterns.yearly_trends[0].year, 2026);
        assert_eq!(patterns.recent_activity, FundingActivity::Increasing);

        let flat = FundingPatterns::analyze(&[round(100.0, 2026), round(110.0, 2025)], 2026);
        assert_eq!(flat.recent_activity, FundingActivity::Stable);

        let only_one_year = FundingPatterns::analyze(&[round(100.0, 2026)], 2026);
        assert_eq!(only_one_year.recent_activity, FundingActivity::Stable);
    }

    #[test]
    fn test_investor_buckets() {
        let investors: Vec<Investor> = [12u32, 7, 2]
            .iter()
            .map(|c| Investor {
                name: "vc".to_string(),
                investment_count: Some(*c),
                ..Default::default()
            })
            .collect();
        let eco = InvestorEcosystem::from_investors(investors);
        assert_eq!(eco.investment_activity, InvestmentActivity {
            high_activity: 1,
            medium_activity: 1,
            low_activity: 1,
        });
    }

    #[test]
    fn test_market_score_neutral_without_sections() {
        let data = MarketData::aggregate(vec![], "software", None, None, None);
        assert_eq!(data.market_score, 5);
        assert!(!data.has_data());
        assert_eq!(data.recommendations.len(), 1);
    }

    #[test]
    fn test_market_score_signals() {
        let landscape = StartupLandscape::analyze(&[org(2026, 2_000_000.0, "fintech")], 2026);
        let funding = FundingPatterns::analyze(&[round(300.0, 2026), round(100.0, 2025)], 2026);
        // 5 + 1 (low intensity) + 1 (recent) + 1 (avg funding) + 2 (increasing)
        let data = MarketData::aggregate(vec![], "fintech", Some(landscape), Some(funding), None);
        assert_eq!(data.market_score, 10);
        assert!(data.recommendations.iter().any(|r| r.contains("fundraising")));
    }
}
