//! Normalize idea use case
//!
//! Turns validated raw input into canonical [`IdeaComponents`]. Free text is
//! sent to the text generator when one is available and falls back to the
//! local extractor on any failure.

use crate::ports::text_generator::{GenerationError, TextGenerator};
use ideascore_domain::idea::normalize::extract_components;
use ideascore_domain::prompt::parse_components;
use ideascore_domain::{IdeaComponents, IdeaInput, PromptTemplate};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct NormalizeIdeaUseCase {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl NormalizeIdeaUseCase {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Never fails: extraction problems degrade to the local extractor.
    pub async fn execute(&self, input: IdeaInput) -> IdeaComponents {
        match input {
            IdeaInput::Structured(idea) => IdeaComponents::from_structured(idea),
            IdeaInput::Description(description) => {
                match self.extract_with_generator(&description).await {
                    Some(components) => components,
                    None => {
                        debug!("Using local component extraction");
                        extract_components(&description)
                    }
                }
            }
        }
    }

    async fn extract_with_generator(&self, description: &str) -> Option<IdeaComponents> {
        let generator = self.generator.as_ref().filter(|g| g.is_configured())?;

        let prompt = PromptTemplate::extraction_prompt(description);
        let response = tokio::time::timeout(
            self.timeout,
            generator.complete(PromptTemplate::extraction_system(), &prompt),
        )
        .await
        .unwrap_or(Err(GenerationError::Timeout));

        let parsed = response.and_then(|content| {
            parse_components(&content).map_err(|e| GenerationError::Malformed(e.to_string()))
        });

        match parsed {
            Ok(idea) => Some(IdeaComponents::from_extracted(idea, description)),
            Err(e) => {
                warn!(error = %e, "Component extraction failed, falling back to local extractor");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedGenerator;
    use ideascore_domain::{NOT_SPECIFIED, StructuredIdea};

    const DESCRIPTION: &str = "The problem is that freelancers lose receipts. \
        Our solution is a mobile app that scans them.";

    #[tokio::test]
    async fn test_structured_input_copied_through() {
        let use_case = NormalizeIdeaUseCase::new(None, Duration::from_secs(5));
        let components = use_case
            .execute(IdeaInput::Structured(StructuredIdea {
                problem: "Receipts get lost".to_string(),
                ..Default::default()
            }))
            .await;
        assert_eq!(components.problem, "Receipts get lost");
        assert_eq!(components.solution, "");
        assert!(!components.extracted_from_text);
    }

    #[tokio::test]
    async fn test_generator_extraction_used() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(
            r#"```json
{"problem": "Freelancers lose receipts", "solution": "Receipt scanning app", "market": "Freelancers"}
```"#
                .to_string(),
        )]));
        let use_case = NormalizeIdeaUseCase::new(Some(generator.clone()), Duration::from_secs(5));

        let components = use_case
            .execute(IdeaInput::Description(DESCRIPTION.to_string()))
            .await;
        assert_eq!(components.problem, "Freelancers lose receipts");
        assert_eq!(components.team, NOT_SPECIFIED);
        assert!(components.extracted_from_text);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_response_falls_back() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(
            "I think this is a great idea!".to_string(),
        )]));
        let use_case = NormalizeIdeaUseCase::new(Some(generator), Duration::from_secs(5));

        let components = use_case
            .execute(IdeaInput::Description(DESCRIPTION.to_string()))
            .await;
        assert_eq!(components, extract_components(DESCRIPTION));
    }

    #[tokio::test]
    async fn test_unconfigured_generator_not_called() {
        let generator = Arc::new(ScriptedGenerator::unconfigured());
        let use_case = NormalizeIdeaUseCase::new(Some(generator.clone()), Duration::from_secs(5));

        use_case
            .execute(IdeaInput::Description(DESCRIPTION.to_string()))
            .await;
        assert_eq!(generator.calls(), 0);
    }
}
