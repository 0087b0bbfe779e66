//! Analysis provider identities.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of analysis providers known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Search-interest trends per keyword
    Trends,
    /// Competitor discovery via web search
    Competitors,
    /// Community discussion sentiment
    Sentiment,
    /// Firmographic and funding data
    Funding,
    /// Local implementation-feasibility heuristics
    Feasibility,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::Trends,
        ProviderKind::Competitors,
        ProviderKind::Sentiment,
        ProviderKind::Funding,
        ProviderKind::Feasibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Trends => "trends",
            ProviderKind::Competitors => "competitors",
            ProviderKind::Sentiment => "sentiment",
            ProviderKind::Funding => "funding",
            ProviderKind::Feasibility => "feasibility",
        }
    }

    /// Whether calls leave the process.
    pub fn is_remote(&self) -> bool {
        !matches!(self, ProviderKind::Feasibility)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trends" => Ok(ProviderKind::Trends),
            "competitors" | "competition" => Ok(ProviderKind::Competitors),
            "sentiment" | "reddit" => Ok(ProviderKind::Sentiment),
            "funding" | "crunchbase" => Ok(ProviderKind::Funding),
            "feasibility" => Ok(ProviderKind::Feasibility),
            _ => Err(DomainError::InvalidProvider(s.to_string())),
        }
    }
}
