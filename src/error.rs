//! Error types for split-time analysis.
//!
//! All failures raised by the engine are synchronous validation errors. They
//! fall into two groups that callers (and tests) can tell apart:
//!
//! - **Invalid data**: the input itself is malformed or self-contradictory,
//!   e.g. an empty list of split times or classes with different control counts.
//! - **Usage errors**: the caller broke the API contract, e.g. asking for chart
//!   data without any reference times.
//!
//! Configuration loading adds a third, `Config`, wrapping the YAML error.
//!
//! ```rust
//! use splitscope::SplitsError;
//!
//! let error = SplitsError::invalid_data("cumulative times must start with zero");
//! assert!(error.is_invalid_data());
//! assert!(!error.is_usage_error());
//! ```

use thiserror::Error;

/// Result type alias for split-time operations.
pub type Result<T, E = SplitsError> = std::result::Result<T, E>;

/// Main error type for split-time operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SplitsError {
    #[error("Invalid data: {reason}")]
    InvalidData { reason: String },

    #[error("Invalid usage: {reason}")]
    Usage { reason: String },

    #[error("Configuration error: {details}")]
    Config {
        details: String,
        #[source]
        source: Option<serde_yaml_ng::Error>,
    },
}

impl SplitsError {
    /// Helper constructor for malformed input data.
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        SplitsError::InvalidData { reason: reason.into() }
    }

    /// Helper constructor for API contract violations.
    pub fn usage(reason: impl Into<String>) -> Self {
        SplitsError::Usage { reason: reason.into() }
    }

    /// Helper constructor for configuration errors.
    pub fn config(details: impl Into<String>) -> Self {
        SplitsError::Config { details: details.into(), source: None }
    }

    /// Returns whether this error was caused by bad input data.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, SplitsError::InvalidData { .. })
    }

    /// Returns whether this error was caused by calling the API incorrectly.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, SplitsError::Usage { .. })
    }
}

impl From<serde_yaml_ng::Error> for SplitsError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        SplitsError::Config { details: err.to_string(), source: Some(err) }
    }
}
