//! Typed access to entry values.
//!
//! Each accessor checks the entry's declared type tag before looking at the
//! value, so calling the wrong accessor is always a
//! [`KvsError::TypeMismatch`], even when the value would parse. A missing
//! entry (`None`) is never an error.

use crate::data_type::ElementDataType;
use crate::entry::KeyValueStoreEntry;
use crate::error::{KvsError, KvsResult};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Builds an entry, stamping the type tag from `data_type`.
pub fn build_entry(
    table_id: impl Into<String>,
    partition: impl Into<String>,
    aspect: impl Into<String>,
    key: impl Into<String>,
    data_type: ElementDataType,
    value: Option<String>,
) -> KeyValueStoreEntry {
    KeyValueStoreEntry {
        table_id: Some(table_id.into()),
        partition: Some(partition.into()),
        aspect: Some(aspect.into()),
        key: Some(key.into()),
        entry_type: Some(data_type.name().to_string()),
        value,
    }
}

fn declared_type(entry: &KeyValueStoreEntry) -> Option<ElementDataType> {
    entry.entry_type.as_deref().and_then(|t| t.parse().ok())
}

fn mismatch(entry: &KeyValueStoreEntry, expected: &'static str) -> KvsError {
    KvsError::TypeMismatch {
        key: entry.key.clone(),
        declared: entry.entry_type.clone(),
        expected,
    }
}

fn parse_failed(entry: &KeyValueStoreEntry, target: &'static str) -> KvsError {
    KvsError::ParseFailed {
        key: entry.key.clone(),
        value: entry.value.clone(),
        target,
    }
}

/// Fails unless the entry is tagged exactly `expected`.
fn require(entry: &KeyValueStoreEntry, expected: ElementDataType) -> KvsResult<()> {
    if declared_type(entry) == Some(expected) {
        Ok(())
    } else {
        Err(mismatch(entry, expected.name()))
    }
}

/// Reads a `number` entry as an `f64`.
///
/// Only finite values are numbers; `NaN` and infinities fail to parse.
pub fn get_number(entry: Option<&KeyValueStoreEntry>) -> KvsResult<Option<f64>> {
    let Some(entry) = entry else {
        return Ok(None);
    };
    require(entry, ElementDataType::Number)?;
    entry
        .value
        .as_deref()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| parse_failed(entry, "number"))
}

/// Reads an `integer` entry as an `i32`.
pub fn get_integer(entry: Option<&KeyValueStoreEntry>) -> KvsResult<Option<i32>> {
    let Some(entry) = entry else {
        return Ok(None);
    };
    require(entry, ElementDataType::Integer)?;
    entry
        .value
        .as_deref()
        .and_then(|v| v.parse::<i32>().ok())
        .map(Some)
        .ok_or_else(|| parse_failed(entry, "integer"))
}

/// Reads a `bool` entry.
///
/// `"1"` and `"true"` are true, `"0"` and `"false"` are false, ignoring
/// case. An unset value reads as `None`.
pub fn get_boolean(entry: Option<&KeyValueStoreEntry>) -> KvsResult<Option<bool>> {
    let Some(entry) = entry else {
        return Ok(None);
    };
    require(entry, ElementDataType::Bool)?;
    let Some(value) = entry.value.as_deref() else {
        return Ok(None);
    };
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Ok(Some(true))
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Ok(Some(false))
    } else {
        Err(parse_failed(entry, "bool"))
    }
}

/// Reads a `string` entry.
pub fn get_string(entry: Option<&KeyValueStoreEntry>) -> KvsResult<Option<String>> {
    let Some(entry) = entry else {
        return Ok(None);
    };
    require(entry, ElementDataType::String)?;
    Ok(entry.value.clone())
}

/// Reads an `array` entry as a list of `T`.
///
/// An unset or empty value reads as `None`. `app_name` is only used for
/// logging.
pub fn get_array<T: DeserializeOwned>(
    app_name: &str,
    entry: Option<&KeyValueStoreEntry>,
) -> KvsResult<Option<Vec<T>>> {
    let Some(entry) = entry else {
        return Ok(None);
    };
    require(entry, ElementDataType::Array)?;
    let value = match entry.value.as_deref() {
        None | Some("") => return Ok(None),
        Some(v) => v,
    };
    serde_json::from_str(value).map(Some).map_err(|source| {
        warn!(
            app_name,
            key = entry.key.as_deref().unwrap_or_default(),
            error = %source,
            "unable to deserialize array value"
        );
        KvsError::MalformedJson {
            key: entry.key.clone(),
            source,
        }
    })
}

/// Reads an `object` or `array` entry as raw JSON text.
///
/// The value is returned as stored, without parsing. `app_name` is only
/// used for logging.
pub fn get_object(
    app_name: &str,
    entry: Option<&KeyValueStoreEntry>,
) -> KvsResult<Option<String>> {
    let Some(entry) = entry else {
        return Ok(None);
    };
    match declared_type(entry) {
        Some(ElementDataType::Object | ElementDataType::Array) => Ok(entry.value.clone()),
        Some(
            ElementDataType::Number
            | ElementDataType::Integer
            | ElementDataType::Bool
            | ElementDataType::String,
        )
        | None => {
            warn!(
                app_name,
                key = entry.key.as_deref().unwrap_or_default(),
                declared = entry.entry_type.as_deref().unwrap_or_default(),
                "object requested from non-JSON entry"
            );
            Err(mismatch(entry, "object or array"))
        }
    }
}
