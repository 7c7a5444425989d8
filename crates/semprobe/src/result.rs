//! Result and error types for Semprobe.

use thiserror::Error;

/// Result type for Semprobe operations
pub type SemprobeResult<T> = Result<T, SemprobeError>;

/// Errors that can occur while resolving or asserting on semantics nodes
#[derive(Debug, Error)]
pub enum SemprobeError {
    /// A predicate on a node did not hold
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Diagnostic describing what was expected and what was found
        message: String,
    },

    /// The node lacks a property the check depends on
    #[error("Illegal state: {message}")]
    IllegalState {
        /// Error message
        message: String,
    },

    /// Malformed input handed to an assertion or builder
    #[error("Illegal argument: {message}")]
    IllegalArgument {
        /// Error message
        message: String,
    },

    /// The host never reached an idle state
    #[error("Host did not become idle within {ms}ms ({passes} recomposition passes)")]
    IdleTimeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Recomposition passes run before giving up
        passes: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SemprobeError {
    /// Build an [`SemprobeError::AssertionFailed`]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Build an [`SemprobeError::IllegalState`]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    /// Build an [`SemprobeError::IllegalArgument`]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
        }
    }

    /// Whether this is a predicate mismatch
    #[must_use]
    pub const fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }

    /// Whether the node was missing a required property
    #[must_use]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }

    /// Whether the caller passed malformed input
    #[must_use]
    pub const fn is_illegal_argument(&self) -> bool {
        matches!(self, Self::IllegalArgument { .. })
    }

    /// Prefix the diagnostic of an assertion failure.
    ///
    /// Other variants pass through unchanged.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> Self {
        match self {
            Self::AssertionFailed { message } => Self::AssertionFailed {
                message: format!("{prefix}\n{message}"),
            },
            other => other,
        }
    }
}
