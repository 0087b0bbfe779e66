//! Prompt domain
//!
//! Templates for each generative step and parsing of their responses.

pub mod parsing;
mod template;

pub use parsing::{ResponseParseError, parse_components, parse_keywords, strip_code_fence};
pub use template::PromptTemplate;
