//! Domain layer for ideascore
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Idea
//!
//! A business idea arrives either as free text or as five structured fields
//! (problem, solution, market, competition, team) and is normalized into
//! [`IdeaComponents`] plus a bounded [`KeywordSet`].
//!
//! ## Signals
//!
//! Providers observe the idea from different angles (search trends, competitor
//! discovery, community sentiment, funding landscape, implementation
//! feasibility). Each outcome is a [`ProviderResult`]; together they form the
//! [`ValidationContext`].
//!
//! ## Scoring
//!
//! [`score_idea`] turns components and context into seven bounded
//! [`Scores`], an overall value and a [`Rating`]. Scoring is deterministic.

pub mod core;
pub mod feedback;
pub mod idea;
pub mod prompt;
pub mod provider;
pub mod scoring;
pub mod signals;

// Re-export commonly used types
pub use core::{error::DomainError, string::truncate, text::TextScan};
pub use feedback::{Feedback, FeedbackSource};
pub use idea::{
    BusinessProfile, IdeaComponents, IdeaInput, KeywordSet, NOT_SPECIFIED, StructuredIdea,
    ValidationRequest, infer_industry,
};
pub use prompt::{PromptTemplate, ResponseParseError};
pub use provider::{
    AnalysisRequest, ProviderKind, ProviderPayload, ProviderResult, ProviderStatus,
    ValidationContext,
};
pub use scoring::{Dimension, Rating, ScoreSheet, Scores, score_idea};
pub use signals::{
    CompetitorReport, FeasibilityReport, MarketData, SentimentReport, TrendsReport,
};
