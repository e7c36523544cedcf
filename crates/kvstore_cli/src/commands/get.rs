//! Get command implementation.

use super::read_collection;
use kvstore_core::{
    get_array, get_boolean, get_integer, get_number, get_object, get_string, ElementDataType,
    KeyValueStoreEntry, KvsResult,
};
use std::path::Path;
use tracing::debug;

/// Reads `entry` through the accessor matching its declared type.
///
/// Returns the decoded value rendered as text, or `None` when the value is
/// unset.
pub fn typed_value(app_name: &str, entry: &KeyValueStoreEntry) -> KvsResult<Option<String>> {
    let declared = entry
        .entry_type
        .as_deref()
        .and_then(|tag| tag.parse::<ElementDataType>().ok());
    let entry = Some(entry);
    match declared {
        Some(ElementDataType::Number) => Ok(get_number(entry)?.map(|v| v.to_string())),
        Some(ElementDataType::Integer) => Ok(get_integer(entry)?.map(|v| v.to_string())),
        Some(ElementDataType::Bool) => Ok(get_boolean(entry)?.map(|v| v.to_string())),
        Some(ElementDataType::String) | None => get_string(entry),
        Some(ElementDataType::Array) => {
            let items = get_array::<serde_json::Value>(app_name, entry)?;
            Ok(items.map(|v| serde_json::Value::Array(v).to_string()))
        }
        Some(ElementDataType::Object) => get_object(app_name, entry),
    }
}

/// Runs the get command.
pub fn run(
    path: &Path,
    app_name: &str,
    partition: &str,
    aspect: &str,
    key: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let collection = read_collection(path)?;
    let entry = collection
        .find(partition, aspect, key)
        .ok_or_else(|| format!("No entry {}/{}/{} in {:?}", partition, aspect, key, path))?;
    debug!(partition, aspect, key, "found entry");

    match typed_value(app_name, entry)? {
        Some(value) => println!("{value}"),
        None => println!("null"),
    }
    Ok(())
}
