//! Cross-language test vectors for the transport encoding.
//!
//! Any implementation of the encoding must decode `encoded_hex` to the
//! same record and re-encode it to the same bytes, or fail with
//! `expected_error`.

use serde::{Deserialize, Serialize};

/// Which record type a vector holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorKind {
    /// A single `KeyValueStoreEntry`.
    Entry,
    /// A `TableMetaDataEntries` collection.
    Collection,
}

/// A test vector that can be shared across languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Record type encoded in `encoded_hex`.
    pub kind: VectorKind,
    /// Encoded record (hex).
    pub encoded_hex: String,
    /// Expected decode error message (if this should fail).
    pub expected_error: Option<String>,
}

const ALL_NULL_ENTRY: &str = "ffffffffffffffffffffffffffffffffffffffffffffffff";
const ALL_EMPTY_ENTRY: &str = "000000000000000000000000000000000000000000000000";
const BOOL_ENTRY: &str = "010000007401000000700100000061010000006b04000000626f6f6c0100000031";

fn vector(id: &str, description: &str, kind: VectorKind, hex: String) -> TestVector {
    TestVector {
        id: id.into(),
        description: description.into(),
        kind,
        encoded_hex: hex,
        expected_error: None,
    }
}

fn failing(id: &str, description: &str, kind: VectorKind, hex: &str, error: &str) -> TestVector {
    TestVector {
        expected_error: Some(error.into()),
        ..vector(id, description, kind, hex.into())
    }
}

/// Entry encoding vectors.
pub fn entry_vectors() -> Vec<TestVector> {
    vec![
        vector(
            "entry_all_null",
            "Entry with every field unset",
            VectorKind::Entry,
            ALL_NULL_ENTRY.into(),
        ),
        vector(
            "entry_all_empty",
            "Entry with every field set to the empty string",
            VectorKind::Entry,
            ALL_EMPTY_ENTRY.into(),
        ),
        vector(
            "entry_bool",
            "Entry t/p/a/k of type bool with value 1",
            VectorKind::Entry,
            BOOL_ENTRY.into(),
        ),
        failing(
            "entry_bad_length",
            "Negative length other than the null sentinel",
            VectorKind::Entry,
            "feffffff",
            "invalid length prefix: -2",
        ),
        failing(
            "entry_truncated",
            "String payload shorter than its length prefix",
            VectorKind::Entry,
            "050000006162",
            "unexpected end of input",
        ),
        failing(
            "entry_bad_utf8",
            "String payload that is not UTF-8",
            VectorKind::Entry,
            "02000000fffe",
            "invalid UTF-8 string",
        ),
    ]
}

/// Collection encoding vectors.
pub fn collection_vectors() -> Vec<TestVector> {
    vec![
        vector(
            "collection_empty",
            "Table t at revision r with no entries",
            VectorKind::Collection,
            "01000000740100000072 00000000".replace(' ', ""),
        ),
        vector(
            "collection_two_entries",
            "Bool entry followed by an all-null entry, in append order",
            VectorKind::Collection,
            format!("0100000074010000007202000000{BOOL_ENTRY}{ALL_NULL_ENTRY}"),
        ),
        failing(
            "collection_null_rev",
            "Revision token encoded as null",
            VectorKind::Collection,
            "0100000074ffffffff00000000",
            "unexpected null for required field `revId`",
        ),
        failing(
            "collection_negative_count",
            "Negative entry count",
            VectorKind::Collection,
            "01000000740100000072ffffffff",
            "invalid length prefix: -1",
        ),
        failing(
            "collection_trailing",
            "Extra bytes after the last entry",
            VectorKind::Collection,
            "0100000074010000007200000000ff",
            "1 trailing bytes after record",
        ),
    ]
}

/// Generate all test vectors as JSON for cross-language use.
pub fn all_vectors_json() -> serde_json::Result<String> {
    let vectors = AllTestVectors {
        entry: entry_vectors(),
        collection: collection_vectors(),
    };
    serde_json::to_string_pretty(&vectors)
}

#[derive(Debug, Serialize, Deserialize)]
struct AllTestVectors {
    entry: Vec<TestVector>,
    collection: Vec<TestVector>,
}

/// Encodes bytes as lowercase hexadecimal.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decodes hexadecimal string to bytes.
///
/// # Panics
///
/// Panics on malformed hex; vectors are fixed test data.
pub fn hex_decode(hex: &str) -> Vec<u8> {
    let hex = hex.replace([' ', '\n', '\r'], "");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("Invalid hex"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = entry_vectors()
            .into_iter()
            .chain(collection_vectors())
            .map(|v| v.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn hex_roundtrip() {
        let bytes = vec![0x00, 0x7f, 0xff];
        assert_eq!(hex_encode(&bytes), "007fff");
        assert_eq!(hex_decode("00 7f ff"), bytes);
    }

    #[test]
    fn test_all_vectors_json() {
        let json = all_vectors_json().unwrap();
        assert!(json.contains("entry_all_null"));
        assert!(json.contains("collection_two_entries"));
        assert!(json.contains("\"kind\": \"collection\""));
    }
}
