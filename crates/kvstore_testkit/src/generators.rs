//! Property-based test generators using proptest.
//!
//! Provides strategies for generating entries and collections, including
//! unset fields and non-ASCII text.

use kvstore_core::{ElementDataType, KeyValueStoreEntry, TableMetaDataEntries};
use proptest::prelude::*;

/// Strategy for a single optional field.
///
/// Draws from a small alphabet so that equal components are common.
pub fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(
        0.85,
        prop::string::string_regex("[a-c]{0,3}|[ä-é ]{1,4}").expect("Invalid regex"),
    )
}

/// Strategy for type tags, mostly valid with some unknown ones.
pub fn type_tag_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        8 => prop::sample::select(ElementDataType::ALL.to_vec())
            .prop_map(|t| Some(t.name().to_string())),
        1 => Just(None),
        1 => "[A-Za-z]{1,8}".prop_map(Some),
    ]
}

/// Strategy for entries with every field independently set or unset.
pub fn entry_strategy() -> impl Strategy<Value = KeyValueStoreEntry> {
    (
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
        type_tag_strategy(),
        prop::option::of(any::<String>()),
    )
        .prop_map(
            |(table_id, partition, aspect, key, entry_type, value)| KeyValueStoreEntry {
                table_id,
                partition,
                aspect,
                key,
                entry_type,
                value,
            },
        )
}

/// Strategy for table and revision identifiers.
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,15}").expect("Invalid regex")
}

/// Strategy for collections of up to `max_entries` entries.
pub fn collection_strategy(max_entries: usize) -> impl Strategy<Value = TableMetaDataEntries> {
    (
        identifier_strategy(),
        identifier_strategy(),
        prop::collection::vec(entry_strategy(), 0..=max_entries),
    )
        .prop_map(|(table_id, rev_id, items)| {
            let mut entries = TableMetaDataEntries::new(table_id, rev_id);
            entries.extend(items);
            entries
        })
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn identifiers_start_with_letter(name in identifier_strategy()) {
            let first = name.chars().next();
            prop_assert!(first.map_or(false, |c| c.is_ascii_alphabetic()));
        }

        #[test]
        fn collections_respect_bound(entries in collection_strategy(5)) {
            prop_assert!(entries.len() <= 5);
        }
    }
}
