//! Implementation feasibility from local keyword heuristics. No network.

use async_trait::async_trait;
use ideascore_application::{AnalysisProvider, ProviderError, RateLimiter};
use ideascore_domain::{AnalysisRequest, FeasibilityReport, ProviderKind, ProviderPayload};

#[derive(Debug, Default)]
pub struct HeuristicFeasibilityProvider;

impl HeuristicFeasibilityProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalysisProvider for HeuristicFeasibilityProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Feasibility
    }

    /// The assessment reads the components, not the keywords.
    fn cache_key(&self, request: &AnalysisRequest) -> String {
        let c = &request.components;
        [&c.problem, &c.solution, &c.market, &c.competition, &c.team]
            .iter()
            .map(|field| field.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join("|")
    }

    async fn fetch(
        &self,
        request: &AnalysisRequest,
        _pacer: &RateLimiter,
    ) -> Result<ProviderPayload, ProviderError> {
        Ok(ProviderPayload::Feasibility(FeasibilityReport::assess(
            &request.components,
        )))
    }
}
