//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Either \"description\" (plain text) or \"problem\" (structured data) is required")]
    ValidationInput,

    #[error("Unknown provider: {0}")]
    InvalidProvider(String),
}

impl DomainError {
    /// Check if this error was caused by malformed caller input
    pub fn is_input_error(&self) -> bool {
        matches!(self, DomainError::ValidationInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_input_display() {
        let error = DomainError::ValidationInput;
        assert!(error.to_string().contains("description"));
        assert!(error.to_string().contains("problem"));
    }

    #[test]
    fn test_is_input_error_check() {
        assert!(DomainError::ValidationInput.is_input_error());
        assert!(!DomainError::InvalidProvider("x".to_string()).is_input_error());
    }
}
