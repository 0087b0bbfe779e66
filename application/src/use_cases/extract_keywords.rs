//! Extract keywords use case
//!
//! Ranks research keywords with the text generator when available, otherwise
//! extracts them locally. The result may be empty but is always bounded.

use crate::ports::text_generator::{GenerationError, TextGenerator};
use ideascore_domain::prompt::parse_keywords;
use ideascore_domain::{IdeaComponents, KeywordSet, PromptTemplate};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct ExtractKeywordsUseCase {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl ExtractKeywordsUseCase {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub async fn execute(&self, components: &IdeaComponents) -> KeywordSet {
        if let Some(keywords) = self.rank_with_generator(components).await {
            return keywords;
        }
        let keywords = KeywordSet::extract_local(components);
        debug!(keywords = ?keywords.as_slice(), "Extracted keywords locally");
        keywords
    }

    async fn rank_with_generator(&self, components: &IdeaComponents) -> Option<KeywordSet> {
        let generator = self.generator.as_ref().filter(|g| g.is_configured())?;

        let prompt = PromptTemplate::keywords_prompt(&components.idea_text());
        let response = tokio::time::timeout(
            self.timeout,
            generator.complete(PromptTemplate::keywords_system(), &prompt),
        )
        .await
        .unwrap_or(Err(GenerationError::Timeout));

        let parsed = response
            .and_then(|content| {
                parse_keywords(&content).map_err(|e| GenerationError::Malformed(e.to_string()))
            })
            .and_then(|keywords| {
                if keywords.is_empty() {
                    Err(GenerationError::Malformed("no keywords".to_string()))
                } else {
                    Ok(keywords)
                }
            });

        match parsed {
            Ok(keywords) => Some(keywords),
            Err(e) => {
                warn!(error = %e, "Keyword ranking failed, falling back to local extraction");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedGenerator;

    fn components() -> IdeaComponents {
        IdeaComponents {
            problem: "Freelancers constantly misplace paper receipts".to_string(),
            solution: "Mobile scanning application".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generator_keywords_bounded() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(
            r#"["receipts", "freelancers", "expense tracking", "ocr", "fintech", "tax"]"#
                .to_string(),
        )]));
        let use_case = ExtractKeywordsUseCase::new(Some(generator), Duration::from_secs(5));

        let keywords = use_case.execute(&components()).await;
        assert_eq!(keywords.len(), 5);
        assert_eq!(keywords.as_slice()[2], "expense tracking");
    }

    #[tokio::test]
    async fn test_empty_array_falls_back_to_local() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok("[]".to_string())]));
        let use_case = ExtractKeywordsUseCase::new(Some(generator), Duration::from_secs(5));

        let keywords = use_case.execute(&components()).await;
        assert_eq!(keywords, KeywordSet::extract_local(&components()));
        assert!(!keywords.is_empty());
    }

    #[tokio::test]
    async fn test_generator_error_falls_back_to_local() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Err(GenerationError::Request(
            "HTTP 500".to_string(),
        ))]));
        let use_case = ExtractKeywordsUseCase::new(Some(generator), Duration::from_secs(5));

        let keywords = use_case.execute(&components()).await;
        assert_eq!(keywords, KeywordSet::extract_local(&components()));
    }
}
