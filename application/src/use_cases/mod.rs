//! Use cases (application services)

pub mod extract_keywords;
pub mod gather_signals;
pub mod normalize_idea;
pub mod synthesize_feedback;
pub mod validate_idea;

#[cfg(test)]
pub(crate) mod test_support;
