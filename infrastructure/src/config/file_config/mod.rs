//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod behavior;
mod generator;
mod output;
mod providers;

pub use behavior::FileBehaviorConfig;
pub use generator::FileGeneratorConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::{FileProviderConfig, FileProvidersConfig};

use ideascore_application::{ProviderSettings, ValidationParams};
use ideascore_domain::ProviderKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("generator.model cannot be empty")]
    EmptyModelName,

    #[error("generator.temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub behavior: FileBehaviorConfig,
    pub providers: FileProvidersConfig,
    pub generator: FileGeneratorConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.behavior.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.generator.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if !(0.0..=2.0).contains(&self.generator.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(
                self.generator.temperature.to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.behavior.timeout_seconds)
    }

    pub fn validation_params(&self) -> ValidationParams {
        ValidationParams::default()
            .with_provider_timeout(self.timeout())
            .with_generator_timeout(self.timeout())
    }

    pub fn provider_settings(&self, kind: ProviderKind) -> ProviderSettings {
        self.providers.get(kind).settings(kind)
    }

    /// Disable every network provider and the generator.
    pub fn go_offline(&mut self) {
        for kind in ProviderKind::ALL.into_iter().filter(ProviderKind::is_remote) {
            self.providers.disable(kind);
        }
        self.generator.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[behavior]
timeout_seconds = 10

[providers.sentiment]
enabled = true
min_interval_ms = 500

[providers.funding]
api_key_env = "MY_CB_KEY"

[generator]
model = "gpt-4o"
temperature = 0.7

[output]
format = "pretty"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        let sentiment = config.provider_settings(ProviderKind::Sentiment);
        assert!(sentiment.enabled);
        assert_eq!(sentiment.min_interval, Duration::from_millis(500));
        assert_eq!(sentiment.cache_ttl, Duration::from_secs(1800));
        assert_eq!(
            config.providers.funding.api_key_env.as_deref(),
            Some("MY_CB_KEY")
        );
        assert_eq!(config.generator.model, "gpt-4o");
        assert_eq!(config.generator.max_tokens, 1500);
        assert_eq!(config.output.format, Some(FileOutputFormat::Pretty));
        assert!(!config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.provider_settings(ProviderKind::Trends).enabled);
        assert!(!config.provider_settings(ProviderKind::Sentiment).enabled);
        assert!(config.generator.enabled);
        assert_eq!(
            config.validation_params().provider_timeout,
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[behavior]\ntimeout_seconds = 0\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let config: FileConfig = toml::from_str("[generator]\nmodel = \"  \"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_go_offline_keeps_local_provider() {
        let mut config = FileConfig::default();
        config.go_offline();
        for kind in ProviderKind::ALL {
            assert_eq!(config.provider_settings(kind).enabled, !kind.is_remote());
        }
        assert!(!config.generator.enabled);
    }
}
