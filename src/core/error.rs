//! Error handling logic

/// Result type for fallible `collapse` operations.
pub type Result<T> = std::result::Result<T, CollapseError>;

/// Errors surfaced by the helpers around the histogram core.
///
/// Canonicalization and rendering are total and never produce these. They
/// arise from configuration, producer-side parsing, file output, and the
/// post-hoc invariant checks in `collapse::validation`.
#[derive(Debug, thiserror::Error)]
pub enum CollapseError {
    /// A render configuration or report format that cannot be used.
    #[error("Invalid Configuration: {message}")]
    InvalidConfig {
        /// InvalidConfig failure message
        message: String,
    },

    /// Producer output that could not be turned into outcomes.
    #[error("Invalid Input: {message}")]
    InvalidInput {
        /// InvalidInput failure message
        message: String,
    },

    /// A rendered report whose rows break a counting or ordering rule.
    #[error("Invariant Violation: {message}")]
    InvariantViolation {
        /// InvariantViolation failure message
        message: String,
    },

    /// Structured report (de)serialization failed.
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing a report to its destination failed.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl CollapseError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        CollapseError::InvalidConfig { message: message.into() }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        CollapseError::InvalidInput { message: message.into() }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        CollapseError::InvariantViolation { message: message.into() }
    }
}
