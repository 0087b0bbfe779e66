//! Application layer for ideascore
//!
//! This crate contains use cases, port definitions, the provider registry and
//! the per-provider caching that is shared across requests.
//! It depends only on the domain layer.

pub mod caching;
pub mod config;
pub mod ports;
pub mod registry;
pub mod use_cases;

// Re-export commonly used types
pub use caching::{ProviderSlot, RateLimiter, TtlCache};
pub use config::{ProviderSettings, ValidationParams};
pub use ports::{
    analysis_provider::{AnalysisProvider, ProviderError},
    progress::{NoProgress, Stage, ValidationProgress},
    text_generator::{GenerationError, TextGenerator},
};
pub use registry::{ProviderAvailability, ProviderRegistry};
pub use use_cases::extract_keywords::ExtractKeywordsUseCase;
pub use use_cases::gather_signals::GatherSignalsUseCase;
pub use use_cases::normalize_idea::NormalizeIdeaUseCase;
pub use use_cases::synthesize_feedback::SynthesizeFeedbackUseCase;
pub use use_cases::validate_idea::{ValidateIdeaError, ValidateIdeaUseCase, ValidationReport};
