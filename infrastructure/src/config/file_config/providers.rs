//! Provider configuration from TOML (`[providers]` section)

use ideascore_application::ProviderSettings;
use ideascore_domain::ProviderKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One `[providers.<name>]` table. Unset fields fall back to the provider's
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub enabled: Option<bool>,
    /// Base URL of the upstream API.
    pub base_url: Option<String>,
    pub cache_ttl_seconds: Option<u64>,
    /// Minimum delay between outbound requests.
    pub min_interval_ms: Option<u64>,
    /// Environment variable holding the API key.
    pub api_key_env: Option<String>,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
}

impl FileProviderConfig {
    /// Resolve against the defaults for `kind`.
    pub fn settings(&self, kind: ProviderKind) -> ProviderSettings {
        let mut settings = ProviderSettings::defaults_for(kind);
        if let Some(enabled) = self.enabled {
            settings = settings.with_enabled(enabled);
        }
        if let Some(secs) = self.cache_ttl_seconds {
            settings = settings.with_cache_ttl(Duration::from_secs(secs));
        }
        if let Some(ms) = self.min_interval_ms {
            settings = settings.with_min_interval(Duration::from_millis(ms));
        }
        settings
    }

    pub fn base_url_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(default)
    }

    /// Inline key first, then the named environment variable.
    pub fn resolve_api_key(&self, default_env: &str) -> Option<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            return Some(key.clone());
        }
        let env = self.api_key_env.as_deref().unwrap_or(default_env);
        std::env::var(env).ok().filter(|k| !k.trim().is_empty())
    }
}

/// `[providers]` section: one table per provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub trends: FileProviderConfig,
    pub competitors: FileProviderConfig,
    pub sentiment: FileProviderConfig,
    pub funding: FileProviderConfig,
    pub feasibility: FileProviderConfig,
}

impl FileProvidersConfig {
    pub fn get(&self, kind: ProviderKind) -> &FileProviderConfig {
        match kind {
            ProviderKind::Trends => &self.trends,
            ProviderKind::Competitors => &self.competitors,
            ProviderKind::Sentiment => &self.sentiment,
            ProviderKind::Funding => &self.funding,
            ProviderKind::Feasibility => &self.feasibility,
        }
    }

    pub fn get_mut(&mut self, kind: ProviderKind) -> &mut FileProviderConfig {
        match kind {
            ProviderKind::Trends => &mut self.trends,
            ProviderKind::Competitors => &mut self.competitors,
            ProviderKind::Sentiment => &mut self.sentiment,
            ProviderKind::Funding => &mut self.funding,
            ProviderKind::Feasibility => &mut self.feasibility,
        }
    }

    /// Force a provider off (CLI `--disable` / `--offline`).
    pub fn disable(&mut self, kind: ProviderKind) {
        self.get_mut(kind).enabled = Some(false);
    }
}
