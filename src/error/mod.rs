//! Error definitions
//!
//! Matchers report failures as data through
//! [`MatchResult`](crate::MatchResult); this error type only appears at the
//! assertion entry points in [`crate::assertions`].

use thiserror::Error;

/// Main error type for testkit-match
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Assertion failed
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),
}

impl Error {
    /// Create an assertion failure error.
    #[must_use]
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }

    /// The explanation carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::AssertionFailed(message) => message,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
