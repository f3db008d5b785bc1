//! Error types for spamfold operations.
//!
//! Provides rich error context for library consumers.

use thiserror::Error;

/// Main error type for spamfold operations.
///
/// # Examples
///
/// ```
/// use spamfold::error::SpamfoldError;
///
/// let err = SpamfoldError::index_out_of_bounds(12, 10);
/// assert!(err.to_string().contains("index 12"));
/// ```
#[derive(Debug, Error)]
pub enum SpamfoldError {
    /// Sparse vector access outside `[0, len)`.
    #[error("index {index} out of bounds (len={len})")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Logical length of the container
        len: usize,
    },

    /// Invalid configuration value (fold count, vocabulary cap, ...).
    #[error("Invalid configuration: {param} = {value}, expected {constraint}")]
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Two inputs that must be aligned have different sizes.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An explicit vocabulary listed the same token twice.
    #[error("duplicate vocabulary token: {0:?}")]
    DuplicateToken(String),

    /// Failure reported by a classifier during fit/score.
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with string message.
    #[error("{0}")]
    Other(String),
}

impl SpamfoldError {
    /// Create an index out of bounds error
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Returns true for configuration errors.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

impl From<&str> for SpamfoldError {
    fn from(msg: &str) -> Self {
        SpamfoldError::Other(msg.to_string())
    }
}

impl From<String> for SpamfoldError {
    fn from(msg: String) -> Self {
        SpamfoldError::Other(msg)
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for SpamfoldError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SpamfoldError>;
