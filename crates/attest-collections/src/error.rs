//! Error types for list operations.

use thiserror::Error;

/// Error returned by [`GrowableList`](crate::GrowableList) operations.
///
/// Every variant is local, synchronous and deterministic; nothing here is
/// retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index outside `[0, len)` was passed to an indexed read.
    #[error("index {index} is out of bounds for a list of length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// The operation is not part of the list's contract.
    #[error("operation `{0}` is not supported by GrowableList")]
    Unsupported(&'static str),
}
