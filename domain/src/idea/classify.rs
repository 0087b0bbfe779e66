//! Business-model classification and industry inference.
//!
//! These are keyword policy tables, not ground truth. They branch the
//! technical-complexity and monetization formulas and tag funding lookups.

use super::components::IdeaComponents;
use crate::core::text::TextScan;
use serde::{Deserialize, Serialize};

pub const B2B_TERMS: &[&str] = &[
    "b2b",
    "enterprise",
    "business",
    "businesses",
    "company",
    "companies",
    "organization",
    "corporate",
    "saas",
    "dashboard",
    "analytics",
    "crm",
    "erp",
    "workflow",
    "automation",
    "integration",
    "api",
    "developer",
    "developers",
    "collaboration",
    "productivity",
];

pub const PLATFORM_TERMS: &[&str] = &[
    "platform",
    "marketplace",
    "network",
    "ecosystem",
    "connect",
    "match",
    "two-sided",
    "multi-sided",
    "sellers",
    "buyers",
    "vendors",
    "providers",
    "community",
    "exchange",
    "aggregator",
    "intermediary",
];

pub const AI_TERMS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "ml",
    "deep learning",
    "nlp",
    "natural language",
    "computer vision",
    "neural network",
    "algorithm",
    "predictive",
    "recommendation",
    "automation",
    "intelligent",
    "smart",
    "chatbot",
    "voice",
    "image recognition",
    "text analysis",
    "data science",
];

/// Industry tags, checked in order; the first family that matches wins.
const INDUSTRY_TABLE: &[(&str, &[&str])] = &[
    ("food-and-beverages", &["restaurant", "restaurants", "food"]),
    ("health-care", &["healthcare", "medical", "health"]),
    ("education", &["education", "learning", "students"]),
    ("financial-services", &["finance", "payment", "payments", "fintech"]),
    ("retail", &["retail", "ecommerce", "e-commerce"]),
    ("developer-tools", &["developer", "developers", "api", "sdk"]),
    ("enterprise-software", &["enterprise", "b2b", "saas"]),
    ("artificial-intelligence", &["ai", "machine learning", "data"]),
    ("platform", &["platform", "marketplace"]),
];

/// Industry used when nothing in the table matches.
pub const DEFAULT_INDUSTRY: &str = "software";

/// Which business-model families an idea's text falls into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub b2b: bool,
    pub platform: bool,
    pub ai_powered: bool,
}

impl BusinessProfile {
    pub fn detect(scan: &TextScan) -> Self {
        Self {
            b2b: scan.contains_any(B2B_TERMS),
            platform: scan.contains_any(PLATFORM_TERMS),
            ai_powered: scan.contains_any(AI_TERMS),
        }
    }

    /// Classify over problem, solution and market.
    pub fn of_idea(components: &IdeaComponents) -> Self {
        Self::detect(&TextScan::new(&components.idea_text()))
    }

    /// B2B or platform: technical depth counts as a moat.
    pub fn values_depth(&self) -> bool {
        self.b2b || self.platform
    }
}

/// Infer an industry tag from the problem and solution text.
pub fn infer_industry(components: &IdeaComponents) -> &'static str {
    let scan = TextScan::of(&[
        IdeaComponents::meaningful(&components.problem),
        IdeaComponents::meaningful(&components.solution),
    ]);
    INDUSTRY_TABLE
        .iter()
        .find(|(_, terms)| scan.contains_any(terms))
        .map(|(industry, _)| *industry)
        .unwrap_or(DEFAULT_INDUSTRY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(problem: &str, solution: &str, market: &str) -> IdeaComponents {
        IdeaComponents {
            problem: problem.to_string(),
            solution: solution.to_string(),
            market: market.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_consumer_app_is_neither_b2b_nor_platform() {
        let profile = BusinessProfile::of_idea(&idea(
            "Users struggle to track expenses daily",
            "A simple mobile app with OCR receipt scanning",
            "$2 billion personal finance market, growing",
        ));
        assert_eq!(profile, BusinessProfile::default());
        assert!(!profile.values_depth());
    }

    #[test]
    fn test_b2b_and_ai_detection() {
        let profile = BusinessProfile::of_idea(&idea(
            "Enterprise teams lose hours on reporting",
            "An AI-powered SaaS dashboard",
            "",
        ));
        assert!(profile.b2b);
        assert!(profile.ai_powered);
        assert!(!profile.platform);
        assert!(profile.values_depth());
    }

    #[test]
    fn test_platform_detection() {
        let profile = BusinessProfile::of_idea(&idea("", "A marketplace for local sellers", ""));
        assert!(profile.platform);
    }

    #[test]
    fn test_ai_not_matched_inside_words() {
        let profile = BusinessProfile::of_idea(&idea("Retailers email daily", "", ""));
        assert!(!profile.ai_powered);
    }

    #[test]
    fn test_industry_inference_order_and_default() {
        assert_eq!(
            infer_industry(&idea("Restaurants waste food", "A payment app", "")),
            "food-and-beverages"
        );
        assert_eq!(
            infer_industry(&idea("", "A fintech budgeting tool", "")),
            "financial-services"
        );
        assert_eq!(infer_industry(&idea("Dogs need walks", "", "")), DEFAULT_INDUSTRY);
    }
}
