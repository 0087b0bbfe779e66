//! Technical complexity (higher = simpler for consumer ideas).
//!
//! For B2B and platform ideas the relationship inverts: technical depth is
//! scored as a moat.

use crate::core::text::TextScan;
use crate::idea::{BusinessProfile, IdeaComponents};
use serde::{Deserialize, Serialize};

const HIGH_TERMS: &[&str] = &[
    "ai",
    "machine learning",
    "blockchain",
    "quantum",
    "neural network",
    "deep learning",
    "computer vision",
    "nlp",
    "artificial intelligence",
    "ocr",
];
const MEDIUM_TERMS: &[&str] = &[
    "api",
    "database",
    "cloud",
    "backend",
    "frontend",
    "algorithm",
    "integration",
    "automation",
    "analytics",
    "microservices",
    "kubernetes",
    "docker",
];
const LOW_TERMS: &[&str] = &[
    "website",
    "simple",
    "basic",
    "template",
    "wordpress",
    "landing page",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityFactor {
    pub term: String,
    pub impact: Impact,
}

/// Matched terms and the resulting score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityBreakdown {
    pub points: i32,
    pub factors: Vec<ComplexityFactor>,
    pub values_depth: bool,
    pub score: i32,
}

impl ComplexityBreakdown {
    /// Overall complexity band for reporting.
    pub fn level(&self) -> Impact {
        match self.points {
            p if p >= 6 => Impact::High,
            p if p >= 3 => Impact::Medium,
            _ => Impact::Low,
        }
    }
}

pub fn assess(components: &IdeaComponents, profile: BusinessProfile) -> ComplexityBreakdown {
    let scan = TextScan::of(&[
        IdeaComponents::meaningful(&components.solution),
        IdeaComponents::meaningful(&components.problem),
        IdeaComponents::meaningful(&components.market),
    ]);

    let mut factors = Vec::new();
    let mut points: i32 = 0;
    for (terms, impact, weight) in [
        (HIGH_TERMS, Impact::High, 3),
        (MEDIUM_TERMS, Impact::Medium, 2),
        (LOW_TERMS, Impact::Low, -1),
    ] {
        for term in scan.matching(terms) {
            points += weight;
            factors.push(ComplexityFactor {
                term: term.to_string(),
                impact,
            });
        }
    }

    let values_depth = profile.values_depth();
    let score = if values_depth {
        (5 + points.div_euclid(2)).clamp(3, 10)
    } else {
        (10 - points.div_euclid(2)).clamp(1, 10)
    };

    ComplexityBreakdown {
        points,
        factors,
        values_depth,
        score,
    }
}
