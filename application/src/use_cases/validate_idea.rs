//! Validate idea use case
//!
//! The entry point: normalize, extract keywords, gather signals, score and
//! synthesize feedback for one request.

use super::extract_keywords::ExtractKeywordsUseCase;
use super::gather_signals::GatherSignalsUseCase;
use super::normalize_idea::NormalizeIdeaUseCase;
use super::synthesize_feedback::SynthesizeFeedbackUseCase;
use crate::config::ValidationParams;
use crate::ports::progress::{NoProgress, Stage, ValidationProgress};
use crate::ports::text_generator::TextGenerator;
use crate::registry::ProviderRegistry;
use ideascore_domain::scoring::engine::{CompetitionBreakdown, MarketBreakdown};
use ideascore_domain::{
    AnalysisRequest, BusinessProfile, CompetitorReport, DomainError, FeasibilityReport, Feedback,
    IdeaComponents, KeywordSet, MarketData, ProviderKind, ProviderStatus, Rating, ScoreSheet,
    SentimentReport, Scores, TrendsReport, ValidationContext, ValidationRequest, score_idea,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// The only failure surfaced to callers: unusable input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateIdeaError {
    #[error(transparent)]
    Input(#[from] DomainError),
}

/// Everything produced for one validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub scores: Scores,
    pub rating: Rating,
    pub feedback: Feedback,
    pub extracted_from_text: bool,
    /// The components derived from a free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_components: Option<IdeaComponents>,
    pub keywords: KeywordSet,
    pub industry: String,
    pub business_profile: BusinessProfile,
    pub market_breakdown: MarketBreakdown,
    pub competition_breakdown: CompetitionBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends_analysis: Option<TrendsReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_analysis: Option<CompetitorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis: Option<SentimentReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_data: Option<MarketData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feasibility: Option<FeasibilityReport>,
    /// Outcome status of every registered provider.
    pub providers: BTreeMap<ProviderKind, ProviderStatus>,
}

impl ValidationReport {
    fn compile(
        components: IdeaComponents,
        request: AnalysisRequest,
        sheet: ScoreSheet,
        feedback: Feedback,
        context: &ValidationContext,
    ) -> Self {
        let extracted_from_text = components.extracted_from_text;
        Self {
            rating: sheet.scores.rating(),
            scores: sheet.scores,
            feedback,
            extracted_from_text,
            extracted_components: extracted_from_text.then_some(components),
            keywords: request.keywords,
            industry: request.industry,
            business_profile: sheet.profile,
            market_breakdown: sheet.market,
            competition_breakdown: sheet.competition,
            trends_analysis: context.trends().cloned(),
            competitor_analysis: context.competitors().cloned(),
            sentiment_analysis: context.sentiment().cloned(),
            market_data: context.funding().cloned(),
            feasibility: context.feasibility().cloned(),
            providers: context.statuses(),
        }
    }
}

/// Use case for validating one idea end to end
pub struct ValidateIdeaUseCase {
    normalize: NormalizeIdeaUseCase,
    keywords: ExtractKeywordsUseCase,
    signals: GatherSignalsUseCase,
    feedback: SynthesizeFeedbackUseCase,
}

impl ValidateIdeaUseCase {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        generator: Option<Arc<dyn TextGenerator>>,
        params: &ValidationParams,
    ) -> Self {
        let timeout = params.generator_timeout;
        Self {
            normalize: NormalizeIdeaUseCase::new(generator.clone(), timeout),
            keywords: ExtractKeywordsUseCase::new(generator.clone(), timeout),
            signals: GatherSignalsUseCase::new(registry),
            feedback: SynthesizeFeedbackUseCase::new(generator, timeout),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: ValidationRequest,
    ) -> Result<ValidationReport, ValidateIdeaError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: ValidationRequest,
        progress: &dyn ValidationProgress,
    ) -> Result<ValidationReport, ValidateIdeaError> {
        let input = request.into_input()?;

        progress.on_stage_start(Stage::Normalize, 1);
        let components = self.normalize.execute(input).await;
        progress.on_stage_complete(Stage::Normalize);

        progress.on_stage_start(Stage::Keywords, 1);
        let keywords = self.keywords.execute(&components).await;
        progress.on_stage_complete(Stage::Keywords);
        info!(
            keywords = ?keywords.as_slice(),
            extracted_from_text = components.extracted_from_text,
            "Idea normalized"
        );

        let request = AnalysisRequest::new(components.clone(), keywords);
        let context = self
            .signals
            .execute_with_progress(request.clone(), progress)
            .await;

        progress.on_stage_start(Stage::Scoring, 1);
        let sheet = score_idea(&components, &context);
        progress.on_stage_complete(Stage::Scoring);
        info!(
            overall = sheet.scores.overall(),
            rating = sheet.scores.rating().as_str(),
            "Idea scored"
        );

        progress.on_stage_start(Stage::Feedback, 1);
        let feedback = self.feedback.execute(&sheet, &context).await;
        progress.on_stage_complete(Stage::Feedback);

        Ok(ValidationReport::compile(
            components, request, sheet, feedback, &context,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::RateLimiter;
    use crate::config::ProviderSettings;
    use crate::ports::analysis_provider::{AnalysisProvider, ProviderError};
    use async_trait::async_trait;
    use ideascore_domain::{Dimension, FeedbackSource, ProviderPayload};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Competitor discovery that always finds nobody
    struct EmptyMarketProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AnalysisProvider for EmptyMarketProvider {
        fn kind(&self) -> ProviderKind {
            ProviderKind::Competitors
        }

        async fn fetch(
            &self,
            request: &AnalysisRequest,
            _pacer: &RateLimiter,
        ) -> Result<ProviderPayload, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ProviderPayload::Competitors(CompetitorReport::new(
                request.keywords.as_slice().to_vec(),
                Vec::new(),
            )))
        }
    }

    fn scenario() -> ValidationRequest {
        ValidationRequest {
            problem: Some("Users struggle to track expenses daily".to_string()),
            solution: Some("A simple mobile app with OCR receipt scanning".to_string()),
            market: Some("$2 billion personal finance market, growing".to_string()),
            competition: Some(
                "few direct competitors, we have a unique OCR advantage".to_string(),
            ),
            team: Some("two experienced mobile engineers".to_string()),
            ..Default::default()
        }
    }

    fn offline() -> ValidateIdeaUseCase {
        ValidateIdeaUseCase::new(
            Arc::new(ProviderRegistry::new(Duration::from_secs(30))),
            None,
            &ValidationParams::default(),
        )
    }

    #[tokio::test]
    async fn test_blank_input_rejected() {
        let result = offline()
            .execute(ValidationRequest::description("   "))
            .await;
        assert_eq!(
            result,
            Err(ValidateIdeaError::Input(DomainError::ValidationInput))
        );
    }

    #[tokio::test]
    async fn test_offline_scenario_is_deterministic() {
        let use_case = offline();
        let first = use_case.execute(scenario()).await.unwrap();
        let second = use_case.execute(scenario()).await.unwrap();

        assert_eq!(first.scores, second.scores);
        assert_eq!(first.scores.overall(), 7.57);
        assert_eq!(first.rating, Rating::Good);
        assert_eq!(first.feedback.source, FeedbackSource::RuleBased);
        assert!(!first.extracted_from_text);
        assert!(first.extracted_components.is_none());
        assert!(first.providers.is_empty());
    }

    #[tokio::test]
    async fn test_zero_competitors_and_cached_second_run() {
        let provider = Arc::new(EmptyMarketProvider {
            calls: AtomicUsize::new(0),
        });
        let registry = ProviderRegistry::new(Duration::from_secs(30)).with(
            provider.clone(),
            &ProviderSettings::defaults_for(ProviderKind::Competitors)
                .with_min_interval(Duration::ZERO),
        );
        let use_case =
            ValidateIdeaUseCase::new(Arc::new(registry), None, &ValidationParams::default());

        let first = use_case.execute(scenario()).await.unwrap();
        let second = use_case.execute(scenario()).await.unwrap();

        assert_eq!(first.scores.get(Dimension::Competition), 10);
        assert_eq!(first.scores, second.scores);
        assert_eq!(first.competitor_analysis, second.competitor_analysis);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            first.providers.get(&ProviderKind::Competitors),
            Some(&ProviderStatus::Success)
        );
    }

    #[tokio::test]
    async fn test_description_marks_extraction() {
        let report = offline()
            .execute(ValidationRequest::description(
                "The problem is that small cafes waste food every day. \
                 Our solution is a platform that sells surplus meals.",
            ))
            .await
            .unwrap();
        assert!(report.extracted_from_text);
        assert!(report.extracted_components.is_some());
        for dimension in Dimension::ALL {
            assert!(!report.feedback.notes(dimension).is_empty());
        }
    }
}
