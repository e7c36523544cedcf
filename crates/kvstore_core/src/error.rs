//! Error types for kvstore core.

use std::io;
use thiserror::Error;

/// Result type for core operations.
pub type KvsResult<T> = Result<T, KvsError>;

/// Errors that can occur in kvstore core operations.
///
/// Accessor failures come in two tiers: [`KvsError::TypeMismatch`] means the
/// wrong accessor was used for an entry's declared type, while
/// [`KvsError::ParseFailed`] and [`KvsError::MalformedJson`] mean the type
/// matched but the stored value could not be decoded.
#[derive(Debug, Error)]
pub enum KvsError {
    /// Transport codec error.
    #[error("codec error: {0}")]
    Codec(#[from] kvstore_codec::CodecError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Structurally invalid input to a constructor or resolver.
    #[error("validation failed: {message}")]
    Validation {
        /// Description of the invalid input.
        message: String,
    },

    /// The entry's declared type does not match the accessor.
    #[error("type mismatch for key {key:?}: declared {declared:?}, expected {expected}")]
    TypeMismatch {
        /// Key of the offending entry.
        key: Option<String>,
        /// Type tag stored on the entry.
        declared: Option<String>,
        /// Type tag(s) the accessor accepts.
        expected: &'static str,
    },

    /// The entry's value could not be parsed into the target type.
    #[error("cannot parse value {value:?} of key {key:?} as {target}")]
    ParseFailed {
        /// Key of the offending entry.
        key: Option<String>,
        /// The stored value.
        value: Option<String>,
        /// Name of the target type.
        target: &'static str,
    },

    /// The entry's value is not a JSON array of the requested element type.
    #[error("malformed JSON array for key {key:?}: {source}")]
    MalformedJson {
        /// Key of the offending entry.
        key: Option<String>,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl KvsError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by an accessor/type-tag mismatch.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns true for errors caused by an undecodable value.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseFailed { .. } | Self::MalformedJson { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_disjoint() {
        let mismatch = KvsError::TypeMismatch {
            key: Some("key".into()),
            declared: Some("integer".into()),
            expected: "number",
        };
        assert!(mismatch.is_type_mismatch());
        assert!(!mismatch.is_parse_error());

        let parse = KvsError::ParseFailed {
            key: Some("key".into()),
            value: Some("x".into()),
            target: "number",
        };
        assert!(parse.is_parse_error());
        assert!(!parse.is_type_mismatch());

        let json = KvsError::MalformedJson {
            key: None,
            source: serde_json::from_str::<Vec<String>>("nope").unwrap_err(),
        };
        assert!(json.is_parse_error());
        assert!(!json.is_type_mismatch());
    }

    #[test]
    fn type_mismatch_message_names_key() {
        let err = KvsError::TypeMismatch {
            key: Some("displayName".into()),
            declared: Some("string".into()),
            expected: "array",
        };
        let message = err.to_string();
        assert!(message.contains("displayName"));
        assert!(message.contains("string"));
        assert!(message.contains("array"));
    }

    #[test]
    fn validation_helper() {
        let err = KvsError::validation("app name is empty");
        assert!(matches!(err, KvsError::Validation { .. }));
        assert_eq!(err.to_string(), "validation failed: app name is empty");
    }
}
