//! Feedback returned alongside the scores.

use crate::scoring::Dimension;
use serde::Serialize;
use std::collections::BTreeMap;

/// Where the overall narrative came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSource {
    /// Generative text provider.
    Generated,
    /// Deterministic score banding.
    RuleBased,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    /// Narrative first, then cross-cutting concerns.
    pub overall: Vec<String>,
    /// At least one note for every dimension.
    pub detailed: BTreeMap<Dimension, Vec<String>>,
    pub suggestions: Vec<String>,
    pub source: FeedbackSource,
}

impl Feedback {
    pub fn notes(&self, dimension: Dimension) -> &[String] {
        self.detailed
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
