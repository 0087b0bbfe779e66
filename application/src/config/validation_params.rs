//! Validation parameters: use case deadlines.
//!
//! [`ValidationParams`] groups the static parameters that bound how long a
//! validation may wait on its collaborators. These are application-layer
//! concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationParams {
    /// Deadline for one provider fetch, rate-limit waits included.
    pub provider_timeout: Duration,
    /// Deadline for one generative text completion.
    pub generator_timeout: Duration,
}

impl Default for ValidationParams {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(30),
            generator_timeout: Duration::from_secs(30),
        }
    }
}

impl ValidationParams {
    // ==================== Builder Methods ====================

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    pub fn with_generator_timeout(mut self, timeout: Duration) -> Self {
        self.generator_timeout = timeout;
        self
    }
}
