//! Error types and result aliases for underbar operations.
//!
//! The helpers themselves define no failure modes of their own; the variants
//! here cover input validation on the dynamically-typed surfaces, the missing
//! scheduler for deferred calls, and configuration loading.

use thiserror::Error;

/// Unified error type for all underbar operations
#[derive(Error, Debug)]
pub enum UnderbarError {
    // Merge errors
    #[error("Argument {position} must be a mapping, found {found}")]
    NotAMapping { position: usize, found: &'static str },

    // Scheduling errors
    #[error("No async runtime available to schedule a deferred call")]
    NoRuntime,

    // Config errors
    #[error("Failed to parse underbar.toml: {message}")]
    ConfigParse { message: String },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for underbar operations
pub type UnderbarResult<T> = Result<T, UnderbarError>;

impl UnderbarError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a validation error for a configuration field
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UnderbarError::Io { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            UnderbarError::NotAMapping { .. } => {
                Some("Pass JSON objects as the target and every source")
            },
            UnderbarError::NoRuntime => {
                Some("Call delay from inside a tokio runtime or use delay_on with a runtime handle")
            },
            UnderbarError::ConfigParse { .. } => {
                Some("Check the [underbar] table in underbar.toml for syntax errors")
            },
            UnderbarError::ConfigValidation { .. } => {
                Some("Fix or unset the offending UNDERBAR_* environment variable")
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UnderbarError::NotAMapping {
            position: 2,
            found: "array",
        };
        assert_eq!(err.to_string(), "Argument 2 must be a mapping, found array");

        let err = UnderbarError::invalid_field("shuffle_seed", "not a number");
        assert_eq!(
            err.to_string(),
            "Configuration field 'shuffle_seed' is invalid: not a number"
        );
    }

    #[test]
    fn test_recoverable() {
        let io = UnderbarError::io(
            "Failed to read underbar.toml".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(io.is_recoverable());
        assert!(!UnderbarError::NoRuntime.is_recoverable());
    }

    #[test]
    fn test_suggestions() {
        assert!(UnderbarError::NoRuntime.suggestion().is_some());
        let io = UnderbarError::io(
            "boom".to_string(),
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert!(io.suggestion().is_none());
    }
}
