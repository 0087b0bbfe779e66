//! Infrastructure layer for ideascore
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP signal providers, the text generator
//! and configuration file loading.

pub mod config;
pub mod generator;
pub mod http;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileGeneratorConfig,
    FileOutputConfig, FileOutputFormat, FileProviderConfig, FileProvidersConfig,
};
pub use generator::{OpenAiTextGenerator, build_generator};
pub use http::build_client;
pub use providers::{
    CrunchbaseFundingProvider, GoogleTrendsProvider, HeuristicFeasibilityProvider,
    RedditSentimentProvider, WebSearchCompetitorProvider, build_provider, build_registry,
};
