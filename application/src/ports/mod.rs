//! Port definitions (interfaces) for external dependencies
//!
//! Ports define the boundaries between the application layer and
//! infrastructure/presentation. Adapters implement these interfaces.

pub mod analysis_provider;
pub mod progress;
pub mod text_generator;
