//! Monetization viability: revenue-model wording, market size and pricing.

use crate::core::text::TextScan;
use crate::idea::{BusinessProfile, IdeaComponents};

const SAAS_MODELS: &[&str] = &["subscription", "saas", "monthly", "annual", "recurring"];
const B2B_MODELS: &[&str] = &[
    "enterprise",
    "per seat",
    "per user",
    "volume",
    "tiered pricing",
    "freemium",
];
const PLATFORM_MODELS: &[&str] = &[
    "commission",
    "transaction",
    "marketplace",
    "revenue share",
    "take rate",
];
const USAGE_MODELS: &[&str] = &["pay per use", "consumption", "api calls", "credits", "metered"];
const AI_MODELS: &[&str] = &["inference", "model training", "compute", "tokens", "requests"];
const PRICING_TERMS: &[&str] = &["price", "pricing", "cost", "costs"];

/// Additive score over solution and market text, capped at 10.
pub fn score(components: &IdeaComponents, profile: BusinessProfile) -> i32 {
    let scan = TextScan::of(&[
        IdeaComponents::meaningful(&components.solution),
        IdeaComponents::meaningful(&components.market),
    ]);

    let mut score = 0;
    score += 3 * scan.count_matches(SAAS_MODELS) as i32;
    score += 2 * scan.count_matches(B2B_MODELS) as i32;
    score += 3 * scan.count_matches(PLATFORM_MODELS) as i32;
    score += 2 * scan.count_matches(USAGE_MODELS) as i32;
    if profile.ai_powered {
        score += 2 * scan.count_matches(AI_MODELS) as i32 + 1;
    }

    if scan.contains("billion") {
        score += 3;
    }
    if scan.contains("million") {
        score += 2;
    }
    if scan.contains("thousand") {
        score += 1;
    }
    if scan.has_char('$') || scan.contains_any(PRICING_TERMS) {
        score += 1;
    }

    if profile.b2b {
        score += 2;
    }
    if profile.platform {
        score += 2;
    }
    score.min(10)
}
