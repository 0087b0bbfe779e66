//! Generative text adapters.

mod openai;

pub use openai::OpenAiTextGenerator;

use crate::config::FileConfig;
use ideascore_application::TextGenerator;
use std::sync::Arc;

/// The configured generator, or `None` when `[generator] enabled = false`.
///
/// A generator without an API key is still returned so status output can
/// report it as unconfigured; the use cases skip it.
pub fn build_generator(
    config: &FileConfig,
    client: &reqwest::Client,
) -> Option<Arc<dyn TextGenerator>> {
    let section = &config.generator;
    if !section.enabled {
        return None;
    }
    Some(Arc::new(
        OpenAiTextGenerator::new(
            client.clone(),
            section.base_url.as_str(),
            section.resolve_api_key(),
            section.model.as_str(),
        )
        .with_temperature(section.temperature)
        .with_max_tokens(section.max_tokens),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_generator_is_none() {
        let mut config = FileConfig::default();
        config.generator.enabled = false;
        assert!(build_generator(&config, &reqwest::Client::new()).is_none());
    }

    #[test]
    fn test_generator_uses_configured_model() {
        let mut config = FileConfig::default();
        config.generator.model = "gpt-4o".to_string();
        config.generator.api_key = Some("sk-test".to_string());
        let generator = build_generator(&config, &reqwest::Client::new()).unwrap();
        assert_eq!(generator.model_name(), "gpt-4o");
        assert!(generator.is_configured());
    }
}
