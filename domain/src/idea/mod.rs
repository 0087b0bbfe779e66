//! The business idea being validated.
//!
//! - [`components::IdeaComponents`]: canonical five-field representation
//! - [`components::ValidationRequest`] / [`components::IdeaInput`]: raw caller input
//! - [`normalize`]: deterministic local component extraction from free text
//! - [`keywords::KeywordSet`]: bounded, ordered research keywords
//! - [`classify`]: B2B / platform / AI classification and industry inference

pub mod classify;
pub mod components;
pub mod keywords;
pub mod normalize;

pub use classify::{BusinessProfile, infer_industry};
pub use components::{IdeaComponents, IdeaInput, NOT_SPECIFIED, StructuredIdea, ValidationRequest};
pub use keywords::{KeywordSet, MAX_KEYWORDS};
