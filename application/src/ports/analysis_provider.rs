//! Analysis provider port
//!
//! Defines the interface every signal source implements, local or remote.

use crate::caching::RateLimiter;
use async_trait::async_trait;
use ideascore_domain::{AnalysisRequest, ProviderKind, ProviderPayload};
use std::time::Duration;
use thiserror::Error;

/// Errors a provider may report while fetching.
///
/// `Clone` so one outcome can be shared by every caller coalesced onto the
/// same in-flight fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider is not configured")]
    NotConfigured,

    #[error("No keywords to search for")]
    EmptyQuery,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Other(String),
}

/// A pluggable analysis source.
///
/// Implementations live in the infrastructure layer. Caching, the deadline
/// and in-flight coalescing are applied around [`fetch`](Self::fetch) by
/// [`ProviderSlot`](crate::caching::ProviderSlot); implementations only
/// perform the lookup itself.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether the credentials this provider needs are present.
    fn is_configured(&self) -> bool {
        true
    }

    /// Normalized cache key for a request.
    fn cache_key(&self, request: &AnalysisRequest) -> String {
        request.keywords.cache_key()
    }

    /// Perform the lookup. Call `pacer.wait()` before every outbound request.
    async fn fetch(
        &self,
        request: &AnalysisRequest,
        pacer: &RateLimiter,
    ) -> Result<ProviderPayload, ProviderError>;
}
