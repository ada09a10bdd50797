//! Error types for matcher construction.

use thiserror::Error;

/// Error returned when a matcher cannot be built from its inputs.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// The supplied regular expression did not compile.
    #[error("invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
