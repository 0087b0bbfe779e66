//! Synthesize feedback use case
//!
//! Asks the text generator for an overall narrative and composes it with the
//! rule-based notes. Generator failure only changes the narrative source.

use crate::ports::text_generator::{GenerationError, TextGenerator};
use ideascore_domain::feedback::compose;
use ideascore_domain::{Feedback, PromptTemplate, ScoreSheet, ValidationContext};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct SynthesizeFeedbackUseCase {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl SynthesizeFeedbackUseCase {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub async fn execute(&self, sheet: &ScoreSheet, context: &ValidationContext) -> Feedback {
        let narrative = self.narrative(sheet, context).await;
        compose(sheet, context, narrative)
    }

    async fn narrative(&self, sheet: &ScoreSheet, context: &ValidationContext) -> Option<String> {
        let Some(generator) = self.generator.as_ref().filter(|g| g.is_configured()) else {
            debug!("No text generator, using rule-based feedback");
            return None;
        };

        let prompt = PromptTemplate::synthesis_prompt(&sheet.scores, context);
        let response = tokio::time::timeout(
            self.timeout,
            generator.complete(PromptTemplate::synthesis_system(), &prompt),
        )
        .await
        .unwrap_or(Err(GenerationError::Timeout));

        match response {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                warn!("Feedback synthesis returned empty text, using rule-based feedback");
                None
            }
            Err(e) => {
                warn!(error = %e, "Feedback synthesis failed, using rule-based feedback");
                None
            }
        }
    }
}
