//! Test fixtures.
//!
//! Provides sample entries and collections shared by tests across the
//! workspace.

use kvstore_codec::{from_transport_bytes, to_transport_bytes, Decode, Encode};
use kvstore_core::{build_entry, ElementDataType, KeyValueStoreEntry, TableMetaDataEntries};

/// Table used by the sample fixtures.
pub const TABLE_ID: &str = "testTable";
/// Revision used by the sample fixtures.
pub const REV_ID: &str = "revId";
/// Application name used by the sample fixtures.
pub const APP_NAME: &str = "testAppName";

/// Builds a `number` entry in [`TABLE_ID`] from string parts.
pub fn sample_entry(partition: &str, aspect: &str, key: &str, value: &str) -> KeyValueStoreEntry {
    build_entry(
        TABLE_ID,
        partition,
        aspect,
        key,
        ElementDataType::Number,
        Some(value.to_string()),
    )
}

/// The first sample entry: `partition1/aspect1/key1 = value1`.
pub fn sample_entry_1() -> KeyValueStoreEntry {
    sample_entry("partition1", "aspect1", "key1", "value1")
}

/// The second sample entry: `partition2/aspect2/key2 = value2`.
///
/// Sorts after [`sample_entry_1`] on every ordering component.
pub fn sample_entry_2() -> KeyValueStoreEntry {
    sample_entry("partition2", "aspect2", "key2", "value2")
}

/// An entry of `data_type` with key `"key"` and every other scope unset.
pub fn typed_entry(data_type: ElementDataType, value: Option<&str>) -> KeyValueStoreEntry {
    KeyValueStoreEntry {
        key: Some("key".to_string()),
        entry_type: Some(data_type.name().to_string()),
        value: value.map(str::to_string),
        ..KeyValueStoreEntry::new()
    }
}

/// A realistic table's metadata: display settings and column properties.
pub fn sample_collection() -> TableMetaDataEntries {
    let mut entries = TableMetaDataEntries::new(TABLE_ID, REV_ID);
    entries.extend([
        build_entry(
            TABLE_ID,
            "Table",
            "default",
            "displayName",
            ElementDataType::Object,
            Some(r#"{"text":"Visits"}"#.to_string()),
        ),
        build_entry(
            TABLE_ID,
            "Table",
            "default",
            "defaultViewType",
            ElementDataType::String,
            Some("SPREADSHEET".to_string()),
        ),
        build_entry(
            TABLE_ID,
            "Table",
            "default",
            "colOrder",
            ElementDataType::Array,
            Some(r#"["name","age","visited"]"#.to_string()),
        ),
        build_entry(
            TABLE_ID,
            "Column",
            "age",
            "displayVisible",
            ElementDataType::Bool,
            Some("1".to_string()),
        ),
        build_entry(
            TABLE_ID,
            "Column",
            "age",
            "width",
            ElementDataType::Integer,
            Some("120".to_string()),
        ),
    ]);
    entries
}

/// Encodes `value` and decodes it again.
///
/// # Panics
///
/// Panics if either direction fails.
pub fn transport_roundtrip<T: Encode + Decode>(value: &T) -> T {
    let bytes = to_transport_bytes(value).expect("Failed to encode");
    from_transport_bytes(&bytes).expect("Failed to decode")
}
