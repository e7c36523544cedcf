//! Per-table collections of metadata entries.

use crate::entry::KeyValueStoreEntry;
use kvstore_codec::{CodecResult, Decode, Encode, TransportReader, TransportWriter};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The metadata entries of one table at one revision.
///
/// Entries are kept in the order they were added, not in
/// [`KeyValueStoreEntry::compare`] order. Nothing checks that an added
/// entry's `table_id` matches the collection's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetaDataEntries {
    table_id: String,
    rev_id: String,
    entries: Vec<KeyValueStoreEntry>,
}

impl TableMetaDataEntries {
    /// Creates an empty collection for `table_id` at revision `rev_id`.
    pub fn new(table_id: impl Into<String>, rev_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            rev_id: rev_id.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the owning table.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Returns the revision token.
    pub fn rev_id(&self) -> &str {
        &self.rev_id
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: KeyValueStoreEntry) {
        trace!(
            table_id = %self.table_id,
            key = entry.key.as_deref().unwrap_or_default(),
            "adding metadata entry"
        );
        self.entries.push(entry);
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[KeyValueStoreEntry] {
        &self.entries
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyValueStoreEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first entry, in insertion order, with the given
    /// partition, aspect and key.
    pub fn find(&self, partition: &str, aspect: &str, key: &str) -> Option<&KeyValueStoreEntry> {
        self.entries.iter().find(|e| {
            e.partition.as_deref() == Some(partition)
                && e.aspect.as_deref() == Some(aspect)
                && e.key.as_deref() == Some(key)
        })
    }

    /// Consumes the collection and returns its entries.
    pub fn into_entries(self) -> Vec<KeyValueStoreEntry> {
        self.entries
    }
}

impl Extend<KeyValueStoreEntry> for TableMetaDataEntries {
    fn extend<I: IntoIterator<Item = KeyValueStoreEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.add_entry(entry);
        }
    }
}

impl<'a> IntoIterator for &'a TableMetaDataEntries {
    type Item = &'a KeyValueStoreEntry;
    type IntoIter = std::slice::Iter<'a, KeyValueStoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Encode for TableMetaDataEntries {
    fn encode_to(&self, writer: &mut TransportWriter) -> CodecResult<()> {
        writer.write_str(&self.table_id)?;
        writer.write_str(&self.rev_id)?;
        writer.write_count(self.entries.len())?;
        for entry in &self.entries {
            entry.encode_to(writer)?;
        }
        Ok(())
    }
}

impl Decode for TableMetaDataEntries {
    fn decode_from(reader: &mut TransportReader<'_>) -> CodecResult<Self> {
        let table_id = reader.read_required_string("tableId")?;
        let rev_id = reader.read_required_string("revId")?;
        let count = reader.read_count()?;
        debug!(%table_id, %rev_id, count, "decoding table metadata entries");

        // Each entry is at least six length prefixes; don't trust `count`
        // for the allocation.
        let mut entries = Vec::with_capacity(count.min(reader.remaining().len() / 24));
        for _ in 0..count {
            entries.push(KeyValueStoreEntry::decode_from(reader)?);
        }
        Ok(Self {
            table_id,
            rev_id,
            entries,
        })
    }
}
