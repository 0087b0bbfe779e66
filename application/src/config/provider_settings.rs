//! Per-provider runtime settings.

use ideascore_domain::ProviderKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings for one registered provider.
///
/// | Provider | Enabled | Cache TTL | Min interval |
/// |----------|---------|-----------|--------------|
/// | trends | yes | 15 min | 1 s |
/// | competitors | yes | 1 h | 2 s |
/// | sentiment | no | 30 min | 2 s |
/// | funding | no | 1 h | 1 s |
/// | feasibility | yes | 1 h | none |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub enabled: bool,
    pub cache_ttl: Duration,
    pub min_interval: Duration,
}

impl ProviderSettings {
    pub fn defaults_for(kind: ProviderKind) -> Self {
        let (enabled, ttl_secs, interval_ms) = match kind {
            ProviderKind::Trends => (true, 15 * 60, 1000),
            ProviderKind::Competitors => (true, 60 * 60, 2000),
            ProviderKind::Sentiment => (false, 30 * 60, 2000),
            ProviderKind::Funding => (false, 60 * 60, 1000),
            ProviderKind::Feasibility => (true, 60 * 60, 0),
        };
        Self {
            enabled,
            cache_ttl: Duration::from_secs(ttl_secs),
            min_interval: Duration::from_millis(interval_ms),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        self
    }
}
