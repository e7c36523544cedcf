//! Inspect command implementation.

use super::read_collection;
use kvstore_core::{sort_entries, KeyValueStoreEntry, TableMetaDataEntries};
use serde::Serialize;
use std::path::Path;

/// Transport file inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// File path.
    pub path: String,
    /// File size in bytes.
    pub size: u64,
    /// Table the collection describes.
    pub table_id: String,
    /// Revision token of the collection.
    pub rev_id: String,
    /// Number of entries.
    pub entry_count: usize,
    /// Entries, in file order unless sorted.
    pub entries: Vec<KeyValueStoreEntry>,
}

impl InspectResult {
    fn new(path: &Path, size: u64, collection: TableMetaDataEntries, sorted: bool) -> Self {
        let table_id = collection.table_id().to_string();
        let rev_id = collection.rev_id().to_string();
        let mut entries = collection.into_entries();
        if sorted {
            sort_entries(&mut entries);
        }
        Self {
            path: path.display().to_string(),
            size,
            table_id,
            rev_id,
            entry_count: entries.len(),
            entries,
        }
    }
}

/// Runs the inspect command.
pub fn run(path: &Path, sorted: bool, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let collection = read_collection(path)?;
    let size = std::fs::metadata(path)?.len();
    let result = InspectResult::new(path, size, collection, sorted);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

fn print_text_output(result: &InspectResult) {
    println!("Table Metadata Inspection");
    println!("=========================");
    println!();
    println!("Path:     {}", result.path);
    println!("Size:     {} bytes", result.size);
    println!("Table:    {}", result.table_id);
    println!("Revision: {}", result.rev_id);
    println!();
    println!("Entries ({}):", result.entry_count);
    for entry in &result.entries {
        println!("  {entry}");
    }
}
