//! CLI command implementations.

pub mod get;
pub mod inspect;
pub mod pack;
pub mod resolve;

use kvstore_codec::from_transport_bytes;
use kvstore_core::TableMetaDataEntries;
use std::path::Path;

/// Reads and decodes a transport file.
pub fn read_collection(path: &Path) -> Result<TableMetaDataEntries, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("No transport file found at {:?}", path).into());
    }
    let bytes = std::fs::read(path)?;
    Ok(from_transport_bytes(&bytes)?)
}
