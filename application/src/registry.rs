//! Provider registry
//!
//! Holds one [`ProviderSlot`] per registered provider for the lifetime of the
//! process.

use crate::caching::ProviderSlot;
use crate::config::ProviderSettings;
use crate::ports::analysis_provider::AnalysisProvider;
use ideascore_domain::ProviderKind;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Enabled/configured flags for one provider, for status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderAvailability {
    pub kind: ProviderKind,
    pub enabled: bool,
    pub configured: bool,
}

/// The fixed set of providers consulted for every validation.
pub struct ProviderRegistry {
    slots: Vec<Arc<ProviderSlot>>,
    timeout: Duration,
}

impl ProviderRegistry {
    /// Empty registry whose providers share `timeout` as their deadline.
    pub fn new(timeout: Duration) -> Self {
        Self {
            slots: Vec::new(),
            timeout,
        }
    }

    /// Register a provider, replacing any previous one of the same kind.
    pub fn register(
        &mut self,
        provider: Arc<dyn AnalysisProvider>,
        settings: &ProviderSettings,
    ) -> &mut Self {
        let kind = provider.kind();
        self.slots.retain(|slot| slot.kind() != kind);
        self.slots
            .push(Arc::new(ProviderSlot::new(provider, settings, self.timeout)));
        self.slots.sort_by_key(|slot| slot.kind());
        self
    }

    pub fn with(
        mut self,
        provider: Arc<dyn AnalysisProvider>,
        settings: &ProviderSettings,
    ) -> Self {
        self.register(provider, settings);
        self
    }

    pub fn slots(&self) -> &[Arc<ProviderSlot>] {
        &self.slots
    }

    pub fn get(&self, kind: ProviderKind) -> Option<&Arc<ProviderSlot>> {
        self.slots.iter().find(|slot| slot.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn availability(&self) -> Vec<ProviderAvailability> {
        self.slots
            .iter()
            .map(|slot| ProviderAvailability {
                kind: slot.kind(),
                enabled: slot.is_enabled(),
                configured: slot.is_configured(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::RateLimiter;
    use crate::ports::analysis_provider::ProviderError;
    use async_trait::async_trait;
    use ideascore_domain::{AnalysisRequest, FeasibilityReport, ProviderPayload};

    struct StubProvider(ProviderKind, bool);

    #[async_trait]
    impl AnalysisProvider for StubProvider {
        fn kind(&self) -> ProviderKind {
            self.0
        }

        fn is_configured(&self) -> bool {
            self.1
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

    #[test]
    fn test_register_orders_and_replaces() {
        let registry = ProviderRegistry::new(Duration::from_secs(30))
            .with(
                Arc::new(StubProvider(ProviderKind::Funding, false)),
                &ProviderSettings::defaults_for(ProviderKind::Funding),
            )
            .with(
                Arc::new(StubProvider(ProviderKind::Trends, true)),
                &ProviderSettings::defaults_for(ProviderKind::Trends),
            )
            .with(
                Arc::new(StubProvider(ProviderKind::Funding, true)),
                &ProviderSettings::defaults_for(ProviderKind::Funding).with_enabled(true),
            );

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.availability(),
            vec![
                ProviderAvailability {
                    kind: ProviderKind::Trends,
                    enabled: true,
                    configured: true,
                },
                ProviderAvailability {
                    kind: ProviderKind::Funding,
                    enabled: true,
                    configured: true,
                },
            ]
        );
        assert!(registry.get(ProviderKind::Sentiment).is_none());
    }
}
