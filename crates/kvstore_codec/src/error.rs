//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a transport buffer.
///
/// Encoding only fails with [`CodecError::SizeLimitExceeded`], when a string
/// or count does not fit its length prefix. Every other variant describes a
/// malformed or truncated input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended before the record was complete.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A string payload was not valid UTF-8.
    #[error("invalid UTF-8 string")]
    InvalidUtf8,

    /// A length prefix was negative but not the null sentinel.
    #[error("invalid length prefix: {length}")]
    InvalidLength {
        /// The length read from the buffer.
        length: i32,
    },

    /// A length or count is larger than its limit, either when writing it or
    /// when a decoded prefix claims it.
    #[error("size limit exceeded: claimed {claimed}, max allowed {max_allowed}")]
    SizeLimitExceeded {
        /// The offending size.
        claimed: u64,
        /// The largest size allowed.
        max_allowed: u64,
    },

    /// A field that must be present was encoded as null.
    #[error("unexpected null for required field `{field}`")]
    UnexpectedNull {
        /// Name of the required field.
        field: &'static str,
    },

    /// Bytes remained after a complete record was decoded.
    #[error("{remaining} trailing bytes after record")]
    TrailingBytes {
        /// Number of unread bytes.
        remaining: usize,
    },
}

impl CodecError {
    /// Create an unexpected null error.
    pub fn unexpected_null(field: &'static str) -> Self {
        Self::UnexpectedNull { field }
    }
}
