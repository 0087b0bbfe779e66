//! The per-request collection of provider outcomes.

use super::kind::ProviderKind;
use super::result::{ProviderPayload, ProviderResult, ProviderStatus};
use crate::signals::competitors::CompetitorReport;
use crate::signals::feasibility::FeasibilityReport;
use crate::signals::funding::MarketData;
use crate::signals::sentiment::SentimentReport;
use crate::signals::trends::TrendsReport;
use std::collections::BTreeMap;

/// Provider name to outcome. Built once per request and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationContext {
    results: BTreeMap<ProviderKind, ProviderResult>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every provider recorded as `Disabled`.
    pub fn all_disabled() -> Self {
        ProviderKind::ALL
            .into_iter()
            .map(|kind| (kind, ProviderResult::Disabled))
            .collect()
    }

    pub fn insert(&mut self, kind: ProviderKind, result: ProviderResult) {
        self.results.insert(kind, result);
    }

    pub fn get(&self, kind: ProviderKind) -> Option<&ProviderResult> {
        self.results.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProviderKind, &ProviderResult)> {
        self.results.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Outcome tags for every recorded provider.
    pub fn statuses(&self) -> BTreeMap<ProviderKind, ProviderStatus> {
        self.iter().map(|(k, v)| (k, v.status())).collect()
    }

    fn payload(&self, kind: ProviderKind) -> Option<&ProviderPayload> {
        self.results.get(&kind).and_then(ProviderResult::payload)
    }

    pub fn trends(&self) -> Option<&TrendsReport> {
        match self.payload(ProviderKind::Trends)? {
            ProviderPayload::Trends(report) => Some(report),
            _ => None,
        }
    }

    pub fn competitors(&self) -> Option<&CompetitorReport> {
        match self.payload(ProviderKind::Competitors)? {
            ProviderPayload::Competitors(report) => Some(report),
            _ => None,
        }
    }

    pub fn sentiment(&self) -> Option<&SentimentReport> {
        match self.payload(ProviderKind::Sentiment)? {
            ProviderPayload::Sentiment(report) => Some(report),
            _ => None,
        }
    }

    pub fn funding(&self) -> Option<&MarketData> {
        match self.payload(ProviderKind::Funding)? {
            ProviderPayload::Funding(data) => Some(data),
            _ => None,
        }
    }

    pub fn feasibility(&self) -> Option<&FeasibilityReport> {
        match self.payload(ProviderKind::Feasibility)? {
            ProviderPayload::Feasibility(report) => Some(report),
            _ => None,
        }
    }
}

impl FromIterator<(ProviderKind, ProviderResult)> for ValidationContext {
    fn from_iter<I: IntoIterator<Item = (ProviderKind, ProviderResult)>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
