use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure of a path lookup.
///
/// Every error stops the lookup; a broadcast over a collection fails as a
/// whole when any element fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    #[error("malformed index key in segment `{segment}`")]
    MalformedIndex { segment: String },

    #[error("invalid index key usage: `{segment}` does not hold a sequence")]
    InvalidIndexUsage { segment: String },

    #[error("index {index} is out of range for `{segment}` of length {len}")]
    IndexOutOfRange {
        segment: String,
        index: usize,
        len: usize,
    },

    #[error("unable to find the key `{key}`")]
    KeyNotFound { key: String },

    #[error("lookup nested deeper than the limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}
