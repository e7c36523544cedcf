//! Pack command implementation.

use kvstore_codec::to_transport_bytes;
use kvstore_core::{KeyValueStoreEntry, TableMetaDataEntries};
use std::path::Path;
use tracing::info;

/// Builds a collection from a JSON array of entries.
///
/// Entries keep the order they have in the input.
pub fn build(
    json: &str,
    table_id: &str,
    rev_id: &str,
) -> Result<TableMetaDataEntries, Box<dyn std::error::Error>> {
    let items: Vec<KeyValueStoreEntry> = serde_json::from_str(json)?;
    let mut entries = TableMetaDataEntries::new(table_id, rev_id);
    for item in items {
        entries.add_entry(item);
    }
    Ok(entries)
}

/// Runs the pack command.
pub fn run(
    input: &Path,
    output: &Path,
    table_id: &str,
    rev_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(input)?;
    let entries = build(&json, table_id, rev_id)?;
    let bytes = to_transport_bytes(&entries)?;
    std::fs::write(output, &bytes)?;

    info!(
        table_id,
        entries = entries.len(),
        bytes = bytes.len(),
        "packed {}",
        output.display()
    );
    println!(
        "Packed {} entries ({} bytes) into {}",
        entries.len(),
        bytes.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::read_collection;

    const INPUT: &str = r#"[
        {"tableId":"t","partition":"Column","aspect":"age","key":"width","type":"integer","value":"120"},
        {"tableId":"t","partition":"Table","aspect":"default","key":"colOrder","type":"array","value":null}
    ]"#;

    #[test]
    fn build_keeps_input_order() {
        let entries = build(INPUT, "t", "r").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.entries()[0].key.as_deref(), Some("width"));
        assert_eq!(entries.entries()[1].value, None);
    }

    #[test]
    fn build_rejects_non_array() {
        assert!(build(r#"{"key":"k"}"#, "t", "r").is_err());
    }

    #[test]
    fn run_writes_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("entries.json");
        let output = dir.path().join("entries.kvs");
        std::fs::write(&input, INPUT).unwrap();

        run(&input, &output, "t", "r").unwrap();

        let decoded = read_collection(&output).unwrap();
        assert_eq!(decoded, build(INPUT, "t", "r").unwrap());
    }
}
