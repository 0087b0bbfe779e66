//! Progress notification port
//!
//! Defines the interface for reporting progress during a validation.

use ideascore_domain::{ProviderKind, ProviderStatus};

/// Validation pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Normalize,
    Keywords,
    Signals,
    Scoring,
    Feedback,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Normalize => "Normalizing idea",
            Stage::Keywords => "Extracting keywords",
            Stage::Signals => "Gathering signals",
            Stage::Scoring => "Scoring",
            Stage::Feedback => "Synthesizing feedback",
        }
    }
}

/// Callback for progress updates during a validation
///
/// Implementations live in the presentation layer.
pub trait ValidationProgress: Send + Sync {
    /// Called when a stage starts. `total_tasks` is the number of providers
    /// for [`Stage::Signals`] and 1 otherwise.
    fn on_stage_start(&self, stage: Stage, total_tasks: usize);

    /// Called when one provider settles.
    fn on_provider_complete(&self, _kind: ProviderKind, _status: ProviderStatus) {}

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ValidationProgress for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total_tasks: usize) {}
    fn on_stage_complete(&self, _stage: Stage) {}
}
