//! Per-provider outcomes.

use super::kind::ProviderKind;
use crate::signals::competitors::CompetitorReport;
use crate::signals::feasibility::FeasibilityReport;
use crate::signals::funding::MarketData;
use crate::signals::sentiment::SentimentReport;
use crate::signals::trends::TrendsReport;
use serde::Serialize;

/// Provider-specific success payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderPayload {
    Trends(TrendsReport),
    Competitors(CompetitorReport),
    Sentiment(SentimentReport),
    Funding(MarketData),
    Feasibility(FeasibilityReport),
}

impl ProviderPayload {
    /// The provider that produces this payload shape.
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderPayload::Trends(_) => ProviderKind::Trends,
            ProviderPayload::Competitors(_) => ProviderKind::Competitors,
            ProviderPayload::Sentiment(_) => ProviderKind::Sentiment,
            ProviderPayload::Funding(_) => ProviderKind::Funding,
            ProviderPayload::Feasibility(_) => ProviderKind::Feasibility,
        }
    }
}

/// Exactly one outcome per provider per request.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResult {
    Success(ProviderPayload),
    Failure(String),
    Disabled,
    NotConfigured,
}

impl ProviderResult {
    pub fn payload(&self) -> Option<&ProviderPayload> {
        match self {
            ProviderResult::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn status(&self) -> ProviderStatus {
        match self {
            ProviderResult::Success(_) => ProviderStatus::Success,
            ProviderResult::Failure(_) => ProviderStatus::Failure,
            ProviderResult::Disabled => ProviderStatus::Disabled,
            ProviderResult::NotConfigured => ProviderStatus::NotConfigured,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderResult::Success(_))
    }

    /// Failure reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ProviderResult::Failure(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Outcome tag without payload, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderStatus {
    Success,
    Failure,
    Disabled,
    NotConfigured,
}

impl ProviderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderStatus::Success => "success",
            ProviderStatus::Failure => "failure",
            ProviderStatus::Disabled => "disabled",
            ProviderStatus::NotConfigured => "not_configured",
        }
    }
}
