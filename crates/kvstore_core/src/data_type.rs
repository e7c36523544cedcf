//! Element data types used as entry type tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of value types an entry can declare.
///
/// The lowercase [`name`](ElementDataType::name) of each variant is the tag
/// stored in [`KeyValueStoreEntry::entry_type`](crate::KeyValueStoreEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementDataType {
    /// Floating-point number.
    Number,
    /// Whole number.
    Integer,
    /// Boolean, stored as `1`/`0` or `true`/`false`.
    Bool,
    /// Plain string.
    String,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
}

impl ElementDataType {
    /// Every variant, in declaration order.
    pub const ALL: [ElementDataType; 6] = [
        Self::Number,
        Self::Integer,
        Self::Bool,
        Self::String,
        Self::Array,
        Self::Object,
    ];

    /// Returns the canonical tag for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ElementDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a known type tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element data type: {0:?}")]
pub struct UnknownDataType(pub String);

impl FromStr for ElementDataType {
    type Err = UnknownDataType;

    /// Parses a tag. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownDataType(s.to_string()))
    }
}
