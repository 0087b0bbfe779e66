//! Human-readable feedback synthesized from scores and provider signals.

pub mod entities;
pub mod rules;

pub use entities::{Feedback, FeedbackSource};
pub use rules::{compose, improvement_suggestions, overall_band};
