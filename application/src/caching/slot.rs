//! One registered provider with its cache, pacing, deadline and in-flight
//! coalescing.

use super::{RateLimiter, TtlCache};
use crate::config::ProviderSettings;
use crate::ports::analysis_provider::{AnalysisProvider, ProviderError};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use ideascore_domain::{AnalysisRequest, ProviderKind, ProviderPayload, ProviderResult};
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

type FetchOutcome = Result<ProviderPayload, ProviderError>;
type SharedFetch = Shared<BoxFuture<'static, FetchOutcome>>;

enum Lookup {
    Cached(ProviderPayload),
    Fetch(SharedFetch),
}

/// A provider wrapped with everything that is shared across requests.
///
/// Lookup order for one evaluation:
///
/// 1. disabled or unconfigured: answered locally
/// 2. fresh cache entry: returned without touching the limiter
/// 3. a fetch for the same key already running: joined
/// 4. otherwise a new fetch under the deadline; successes are cached
pub struct ProviderSlot {
    provider: Arc<dyn AnalysisProvider>,
    enabled: bool,
    cache: Arc<TtlCache<ProviderPayload>>,
    limiter: Arc<RateLimiter>,
    inflight: Mutex<HashMap<String, SharedFetch>>,
    timeout: Duration,
}

impl ProviderSlot {
    pub fn new(
        provider: Arc<dyn AnalysisProvider>,
        settings: &ProviderSettings,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            enabled: settings.enabled,
            cache: Arc::new(TtlCache::new(settings.cache_ttl)),
            limiter: Arc::new(RateLimiter::new(settings.min_interval)),
            inflight: Mutex::new(HashMap::new()),
            timeout,
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    /// Outcome that needs no task: `Disabled` or `NotConfigured`.
    pub fn unavailable(&self) -> Option<ProviderResult> {
        if !self.enabled {
            Some(ProviderResult::Disabled)
        } else if !self.provider.is_configured() {
            Some(ProviderResult::NotConfigured)
        } else {
            None
        }
    }

    /// Evaluate the provider for one request. Never fails outward.
    pub async fn evaluate(&self, request: Arc<AnalysisRequest>) -> ProviderResult {
        if let Some(outcome) = self.unavailable() {
            return outcome;
        }

        let key = self.provider.cache_key(&request);
        let fetch = match self.lookup(&key, request) {
            Lookup::Cached(payload) => {
                debug!(provider = %self.kind(), key = %key, "Cache hit");
                return ProviderResult::Success(payload);
            }
            Lookup::Fetch(fetch) => fetch,
        };

        let outcome = fetch.clone().await;
        self.release(&key, &fetch);

        match outcome {
            Ok(payload) => ProviderResult::Success(payload),
            Err(e) => {
                warn!(provider = %self.kind(), error = %e, "Provider failed");
                ProviderResult::Failure(e.to_string())
            }
        }
    }

    fn lookup(&self, key: &str, request: Arc<AnalysisRequest>) -> Lookup {
        let mut inflight = self.inflight.lock().unwrap_or_else(|e| e.into_inner());

        // Checked under the in-flight lock so a fetch that just settled is
        // seen either here or in the map.
        if let Some(payload) = self.cache.get(key) {
            return Lookup::Cached(payload);
        }
        if let Some(fetch) = inflight.get(key) {
            debug!(provider = %self.kind(), key = %key, "Joining in-flight fetch");
            return Lookup::Fetch(fetch.clone());
        }

        let fetch = self.start_fetch(key.to_string(), request);
        inflight.insert(key.to_string(), fetch.clone());
        Lookup::Fetch(fetch)
    }

    fn start_fetch(&self, key: String, request: Arc<AnalysisRequest>) -> SharedFetch {
        let provider = Arc::clone(&self.provider);
        let limiter = Arc::clone(&self.limiter);
        let cache = Arc::clone(&self.cache);
        let timeout = self.timeout;

        async move {
            let kind = provider.kind();
            let started = Instant::now();
            debug!(provider = %kind, key = %key, "Cache miss, fetching");

            // Panics settle the shared future like any other failure.
            let fetch = AssertUnwindSafe(provider.fetch(&request, &limiter)).catch_unwind();
            let outcome = match tokio::time::timeout(timeout, fetch).await {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(_)) => {
                    warn!(provider = %kind, key = %key, "Provider panicked");
                    Err(ProviderError::Other("provider panicked".to_string()))
                }
                Err(_) => Err(ProviderError::Timeout(timeout)),
            };

            if let Ok(payload) = &outcome {
                cache.insert(key.clone(), payload.clone());
            }
            debug!(
                provider = %kind,
                key = %key,
                elapsed_ms = started.elapsed().as_millis() as u64,
                success = outcome.is_ok(),
                "Fetch settled"
            );
            outcome
        }
        .boxed()
        .shared()
    }

    fn release(&self, key: &str, fetch: &SharedFetch) {
        let mut inflight = self.inflight.lock().unwrap_or_else(|e| e.into_inner());
        if inflight
            .get(key)
            .is_some_and(|current| Shared::ptr_eq(current, fetch))
        {
            inflight.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ideascore_domain::{IdeaComponents, KeywordSet, TrendsReport};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Mock provider that counts fetches and can be slowed or failed
    struct CountingProvider {
        calls: AtomicUsize,
        delay: Duration,
        fail: bool,
        configured: bool,
        panic_next: AtomicBool,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay: Duration::ZERO,
                fail: false,
                configured: true,
                panic_next: AtomicBool::new(false),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }

        fn panicking_once(self) -> Self {
            self.panic_next.store(true, Ordering::SeqCst);
            self
        }

        fn unconfigured(mut self) -> Self {
            self.configured = false;
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalysisProvider for CountingProvider {
        fn kind(&self) -> ProviderKind {
            ProviderKind::Trends
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn fetch(
            &self,
            request: &AnalysisRequest,
            pacer: &RateLimiter,
        ) -> Result<ProviderPayload, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.panic_next.swap(false, Ordering::SeqCst) {
                panic!("provider bug");
            }
            pacer.wait().await;
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(ProviderError::Http { status: 503 });
            }
            Ok(ProviderPayload::Trends(TrendsReport::new(
                request.keywords.as_slice().to_vec(),
                Vec::new(),
            )))
        }
    }

    fn request(keywords: &[&str]) -> Arc<AnalysisRequest> {
        Arc::new(AnalysisRequest::new(
            IdeaComponents::default(),
            KeywordSet::from_candidates(keywords.iter().copied()),
        ))
    }

    fn settings() -> ProviderSettings {
        ProviderSettings::defaults_for(ProviderKind::Trends)
            .with_cache_ttl(Duration::from_secs(60))
            .with_min_interval(Duration::ZERO)
    }

    fn slot(provider: &Arc<CountingProvider>, settings: &ProviderSettings) -> ProviderSlot {
        let provider: Arc<dyn AnalysisProvider> = provider.clone();
        ProviderSlot::new(provider, settings, Duration::from_secs(30))
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_hit_skips_fetch() {
        let provider = Arc::new(CountingProvider::new());
        let slot = slot(&provider, &settings());

        assert!(slot.evaluate(request(&["fintech"])).await.is_success());
        assert!(slot.evaluate(request(&["fintech"])).await.is_success());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_key_ignores_keyword_order() {
        let provider = Arc::new(CountingProvider::new());
        let slot = slot(&provider, &settings());

        slot.evaluate(request(&["receipts", "fintech"])).await;
        slot.evaluate(request(&["fintech", "receipts"])).await;
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetch_after_ttl() {
        let provider = Arc::new(CountingProvider::new());
        let slot = slot(&provider, &settings());

        slot.evaluate(request(&["fintech"])).await;
        tokio::time::advance(Duration::from_secs(61)).await;
        slot.evaluate(request(&["fintech"])).await;
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_identical_requests_coalesce() {
        let provider = Arc::new(CountingProvider::new().with_delay(Duration::from_secs(5)));
        let slot = slot(&provider, &settings());

        let (a, b, c) = tokio::join!(
            slot.evaluate(request(&["fintech"])),
            slot.evaluate(request(&["fintech"])),
            slot.evaluate(request(&["fintech"])),
        );
        assert!(a.is_success() && b.is_success() && c.is_success());
        assert_eq!(a, b);
        assert_eq!(provider.calls(), 1);
        assert!(slot.inflight.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_not_cached() {
        let provider = Arc::new(CountingProvider::new().failing());
        let slot = slot(&provider, &settings());

        let outcome = slot.evaluate(request(&["fintech"])).await;
        assert_eq!(outcome, ProviderResult::Failure("HTTP 503".to_string()));

        slot.evaluate(request(&["fintech"])).await;
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panic_becomes_failure_and_key_recovers() {
        let provider = Arc::new(CountingProvider::new().panicking_once());
        let slot = slot(&provider, &settings());

        let outcome = slot.evaluate(request(&["fintech"])).await;
        assert_eq!(outcome, ProviderResult::Failure("provider panicked".to_string()));
        assert!(slot.inflight.lock().unwrap().is_empty());

        assert!(slot.evaluate(request(&["fintech"])).await.is_success());
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_becomes_failure() {
        let provider = Arc::new(CountingProvider::new().with_delay(Duration::from_secs(60)));
        let slot = slot(&provider, &settings());

        let outcome = slot.evaluate(request(&["fintech"])).await;
        assert_eq!(outcome, ProviderResult::Failure("Timed out after 30s".to_string()));
        assert!(slot.cache.is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_short_circuits() {
        let provider = Arc::new(CountingProvider::new());
        let disabled = slot(&provider, &settings().with_enabled(false));
        assert_eq!(
            disabled.evaluate(request(&["fintech"])).await,
            ProviderResult::Disabled
        );

        let unconfigured = Arc::new(CountingProvider::new().unconfigured());
        let slot = slot(&unconfigured, &settings());
        assert_eq!(
            slot.evaluate(request(&["fintech"])).await,
            ProviderResult::NotConfigured
        );
        assert_eq!(provider.calls() + unconfigured.calls(), 0);
    }
}
