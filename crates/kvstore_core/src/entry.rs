//! Key-value store entries.

use kvstore_codec::{CodecResult, Decode, Encode, TransportReader, TransportWriter};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single typed key-value fact scoped to a table, partition and aspect.
///
/// Every field is optional; `None` means the field was never set, which is
/// distinct from an empty string.
///
/// # Ordering and equality
///
/// [`compare`](Self::compare) orders entries by `(partition, aspect, key)`
/// only, while `==` compares all six fields. Two entries can therefore
/// compare as `Equal` and still be unequal, so this type deliberately does
/// not implement `Ord`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueStoreEntry {
    /// Owning table.
    pub table_id: Option<String>,
    /// Grouping within the table, e.g. a column name or `"Table"`.
    pub partition: Option<String>,
    /// Grouping within the partition, e.g. `"default"` or a locale.
    pub aspect: Option<String>,
    /// Property name, unique within `(table_id, partition, aspect)`.
    pub key: Option<String>,
    /// Type tag, one of the [`ElementDataType`](crate::ElementDataType) names.
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    /// Property value; arrays and objects are JSON text.
    pub value: Option<String>,
}

impl KeyValueStoreEntry {
    /// Creates an entry with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders entries by partition, then aspect, then key.
    ///
    /// Unset components sort before set ones.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.partition
            .cmp(&other.partition)
            .then_with(|| self.aspect.cmp(&other.aspect))
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// Sorts entries by [`KeyValueStoreEntry::compare`]. The sort is stable.
pub fn sort_entries(entries: &mut [KeyValueStoreEntry]) {
    entries.sort_by(KeyValueStoreEntry::compare);
}

struct Field<'a>(&'a Option<String>);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(s) => f.write_str(s),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for KeyValueStoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[tableId={}, partition={}, aspect={}, key={}, type={}, value={}]",
            Field(&self.table_id),
            Field(&self.partition),
            Field(&self.aspect),
            Field(&self.key),
            Field(&self.entry_type),
            Field(&self.value),
        )
    }
}

impl Encode for KeyValueStoreEntry {
    fn encode_to(&self, writer: &mut TransportWriter) -> CodecResult<()> {
        writer.write_string(self.table_id.as_deref())?;
        writer.write_string(self.partition.as_deref())?;
        writer.write_string(self.aspect.as_deref())?;
        writer.write_string(self.key.as_deref())?;
        writer.write_string(self.entry_type.as_deref())?;
        writer.write_string(self.value.as_deref())
    }
}

impl Decode for KeyValueStoreEntry {
    fn decode_from(reader: &mut TransportReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            table_id: reader.read_string()?,
            partition: reader.read_string()?,
            aspect: reader.read_string()?,
            key: reader.read_string()?,
            entry_type: reader.read_string()?,
            value: reader.read_string()?,
        })
    }
}
