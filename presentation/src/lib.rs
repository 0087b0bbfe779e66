//! Presentation layer for ideascore
//!
//! This crate contains CLI definitions, output formatters and progress
//! reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, ValidateArgs};
pub use output::console::ConsoleFormatter;
pub use output::envelope::Envelope;
pub use output::set_color_enabled;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
