//! Text generator port
//!
//! Defines the interface for the optional generative text provider used for
//! component extraction, keyword ranking and feedback narrative.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Text generator is not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Timeout")]
    Timeout,
}

/// Generative text completion.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier, for status output.
    fn model_name(&self) -> &str;

    fn is_configured(&self) -> bool;

    /// Complete a single system + user prompt pair.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GenerationError>;
}
