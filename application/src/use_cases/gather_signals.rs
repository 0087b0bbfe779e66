//! Gather signals use case
//!
//! The orchestrator: fans one request out to every registered provider and
//! waits for all of them to settle.

use crate::ports::progress::{NoProgress, Stage, ValidationProgress};
use crate::registry::ProviderRegistry;
use ideascore_domain::{AnalysisRequest, ProviderKind, ProviderResult, ValidationContext};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

pub struct GatherSignalsUseCase {
    registry: Arc<ProviderRegistry>,
}

impl GatherSignalsUseCase {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, request: AnalysisRequest) -> ValidationContext {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Every registered provider ends up with exactly one outcome.
    ///
    /// Disabled and unconfigured providers are answered without a task. The
    /// rest run concurrently; none is cancelled when another settles.
    pub async fn execute_with_progress(
        &self,
        request: AnalysisRequest,
        progress: &dyn ValidationProgress,
    ) -> ValidationContext {
        let request = Arc::new(request);
        let mut context = ValidationContext::new();
        let mut join_set = JoinSet::new();
        let mut spawned: Vec<ProviderKind> = Vec::new();

        progress.on_stage_start(Stage::Signals, self.registry.len());

        for slot in self.registry.slots() {
            let kind = slot.kind();
            if let Some(outcome) = slot.unavailable() {
                debug!(provider = %kind, status = outcome.status().as_str(), "Provider skipped");
                progress.on_provider_complete(kind, outcome.status());
                context.insert(kind, outcome);
                continue;
            }

            let slot = Arc::clone(slot);
            let request = Arc::clone(&request);
            spawned.push(kind);
            join_set.spawn(async move { (kind, slot.evaluate(request).await) });
        }

        info!(providers = spawned.len(), "Gathering signals");

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((kind, outcome)) => {
                    progress.on_provider_complete(kind, outcome.status());
                    context.insert(kind, outcome);
                }
                Err(e) => {
                    warn!("Provider task join error: {}", e);
                }
            }
        }

        for kind in spawned {
            if context.get(kind).is_none() {
                let outcome = ProviderResult::Failure("provider task aborted".to_string());
                progress.on_provider_complete(kind, outcome.status());
                context.insert(kind, outcome);
            }
        }

        progress.on_stage_complete(Stage::Signals);
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::RateLimiter;
    use crate::config::ProviderSettings;
    use crate::ports::analysis_provider::{AnalysisProvider, ProviderError};
    use async_trait::async_trait;
    use ideascore_domain::signals::competitors::CompetitorReport;
    use ideascore_domain::{
        IdeaComponents, KeywordSet, ProviderPayload, ProviderStatus, TrendsReport,
    };
    use std::sync::Mutex;
    use std::time::Duration;

    enum Behavior {
        Succeed(Duration),
        Fail,
        Panic,
    }

    struct MockProvider {
        kind: ProviderKind,
        configured: bool,
        behavior: Behavior,
    }

    impl MockProvider {
        fn new(kind: ProviderKind, behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                kind,
                configured: true,
                behavior,
            })
        }
    }

    #[async_trait]
    impl AnalysisProvider for MockProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn fetch(
            &self,
            request: &AnalysisRequest,
            _pacer: &RateLimiter,
        ) -> Result<ProviderPayload, ProviderError> {
            match self.behavior {
                Behavior::Succeed(delay) => {
                    tokio::time::sleep(delay).await;
                    Ok(match self.kind {
                        ProviderKind::Trends => ProviderPayload::Trends(TrendsReport::new(
                            request.keywords.as_slice().to_vec(),
                            Vec::new(),
                        )),
                        _ => ProviderPayload::Competitors(CompetitorReport::default()),
                    })
                }
                Behavior::Fail => Err(ProviderError::Network("connection refused".to_string())),
                Behavior::Panic => panic!("provider bug"),
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        completed: Mutex<Vec<(ProviderKind, ProviderStatus)>>,
    }

    impl ValidationProgress for RecordingProgress {
        fn on_stage_start(&self, _stage: Stage, _total_tasks: usize) {}

        fn on_provider_complete(&self, kind: ProviderKind, status: ProviderStatus) {
            self.completed.lock().unwrap().push((kind, status));
        }

        fn on_stage_complete(&self, _stage: Stage) {}
    }

    fn enabled(kind: ProviderKind) -> ProviderSettings {
        ProviderSettings::defaults_for(kind)
            .with_enabled(true)
            .with_min_interval(Duration::ZERO)
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest::new(
            IdeaComponents::default(),
            KeywordSet::from_candidates(["fintech"]),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_isolated_from_other_providers() {
        let registry = ProviderRegistry::new(Duration::from_secs(30))
            .with(
                MockProvider::new(ProviderKind::Trends, Behavior::Succeed(Duration::from_secs(3))),
                &enabled(ProviderKind::Trends),
            )
            .with(
                MockProvider::new(ProviderKind::Competitors, Behavior::Fail),
                &enabled(ProviderKind::Competitors),
            );
        let use_case = GatherSignalsUseCase::new(Arc::new(registry));

        let context = use_case.execute(request()).await;
        assert_eq!(context.len(), 2);
        assert!(context.trends().is_some());
        assert_eq!(
            context.get(ProviderKind::Competitors),
            Some(&ProviderResult::Failure(
                "Network error: connection refused".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_unavailable_providers_reported_without_tasks() {
        let unconfigured = MockProvider {
            kind: ProviderKind::Funding,
            configured: false,
            behavior: Behavior::Panic,
        };

        let registry = ProviderRegistry::new(Duration::from_secs(30))
            .with(
                MockProvider::new(ProviderKind::Sentiment, Behavior::Panic),
                &enabled(ProviderKind::Sentiment).with_enabled(false),
            )
            .with(Arc::new(unconfigured), &enabled(ProviderKind::Funding));
        let use_case = GatherSignalsUseCase::new(Arc::new(registry));
        let progress = RecordingProgress::default();

        let context = use_case.execute_with_progress(request(), &progress).await;
        assert_eq!(context.get(ProviderKind::Sentiment), Some(&ProviderResult::Disabled));
        assert_eq!(
            context.get(ProviderKind::Funding),
            Some(&ProviderResult::NotConfigured)
        );
        assert_eq!(progress.completed.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_panicking_provider_becomes_failure() {
        let registry = ProviderRegistry::new(Duration::from_secs(30)).with(
            MockProvider::new(ProviderKind::Trends, Behavior::Panic),
            &enabled(ProviderKind::Trends),
        );
        let use_case = GatherSignalsUseCase::new(Arc::new(registry));

        let context = use_case.execute(request()).await;
        assert_eq!(
            context.get(ProviderKind::Trends),
            Some(&ProviderResult::Failure("provider panicked".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_providers_run_concurrently() {
        let registry = ProviderRegistry::new(Duration::from_secs(30))
            .with(
                MockProvider::new(ProviderKind::Trends, Behavior::Succeed(Duration::from_secs(4))),
                &enabled(ProviderKind::Trends),
            )
            .with(
                MockProvider::new(
                    ProviderKind::Competitors,
                    Behavior::Succeed(Duration::from_secs(4)),
                ),
                &enabled(ProviderKind::Competitors),
            );
        let use_case = GatherSignalsUseCase::new(Arc::new(registry));

        let start = tokio::time::Instant::now();
        let context = use_case.execute(request()).await;
        assert_eq!(start.elapsed(), Duration::from_secs(4));
        assert!(context.iter().all(|(_, outcome)| outcome.is_success()));
    }
}
