//! Signal provider adapters
//!
//! One adapter per [`ProviderKind`]. Remote adapters share a single
//! [`reqwest::Client`]; the feasibility adapter never touches the network.

pub mod competitors;
pub mod feasibility;
pub mod funding;
pub mod sentiment;
pub mod trends;

pub use competitors::WebSearchCompetitorProvider;
pub use feasibility::HeuristicFeasibilityProvider;
pub use funding::CrunchbaseFundingProvider;
pub use sentiment::RedditSentimentProvider;
pub use trends::GoogleTrendsProvider;

use crate::config::FileConfig;
use ideascore_application::{AnalysisProvider, ProviderRegistry};
use ideascore_domain::ProviderKind;
use std::sync::Arc;

/// Build the adapter for one provider kind from file configuration.
pub fn build_provider(
    kind: ProviderKind,
    config: &FileConfig,
    client: &reqwest::Client,
) -> Arc<dyn AnalysisProvider> {
    let section = config.providers.get(kind);
    match kind {
        ProviderKind::Trends => Arc::new(GoogleTrendsProvider::new(
            client.clone(),
            section.base_url_or(trends::DEFAULT_BASE_URL),
        )),
        ProviderKind::Competitors => Arc::new(WebSearchCompetitorProvider::new(
            client.clone(),
            section.base_url_or(competitors::DEFAULT_BASE_URL),
        )),
        ProviderKind::Sentiment => Arc::new(RedditSentimentProvider::new(
            client.clone(),
            section.base_url_or(sentiment::DEFAULT_BASE_URL),
        )),
        ProviderKind::Funding => Arc::new(CrunchbaseFundingProvider::new(
            client.clone(),
            section.base_url_or(funding::DEFAULT_BASE_URL),
            section.resolve_api_key(funding::DEFAULT_API_KEY_ENV),
        )),
        ProviderKind::Feasibility => Arc::new(HeuristicFeasibilityProvider::new()),
    }
}

/// Registry with every known provider, each under its configured settings.
pub fn build_registry(config: &FileConfig, client: &reqwest::Client) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new(config.timeout());
    for kind in ProviderKind::ALL {
        registry.register(
            build_provider(kind, config, client),
            &config.provider_settings(kind),
        );
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_kind() {
        let registry = build_registry(&FileConfig::default(), &reqwest::Client::new());
        assert_eq!(registry.len(), ProviderKind::ALL.len());
        for kind in ProviderKind::ALL {
            assert_eq!(registry.get(kind).map(|slot| slot.kind()), Some(kind));
        }
    }

    #[test]
    fn test_default_availability() {
        let mut config = FileConfig::default();
        config.providers.funding.api_key_env = Some("IDEASCORE_TEST_UNSET_KEY_VAR".to_string());
        let registry = build_registry(&config, &reqwest::Client::new());

        let availability = registry.availability();
        let find = |kind: ProviderKind| {
            availability
                .iter()
                .find(|a| a.kind == kind)
                .copied()
                .unwrap()
        };
        assert!(find(ProviderKind::Trends).enabled);
        assert!(!find(ProviderKind::Sentiment).enabled);
        assert!(!find(ProviderKind::Funding).configured);
        assert!(find(ProviderKind::Feasibility).configured);
    }
}
