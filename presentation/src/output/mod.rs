//! Report output formatting

pub mod console;
pub mod envelope;

/// Force colored output on or off for the whole process.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
