//! # kvstore Core
//!
//! Typed key-value metadata attached to tables.
//!
//! This crate provides:
//! - [`KeyValueStoreEntry`], a typed property scoped to table, partition,
//!   aspect and key
//! - [`TableMetaDataEntries`], the ordered entries of one table revision
//! - Typed accessors ([`get_number`], [`get_array`], ...) that check the
//!   declared [`ElementDataType`] before decoding a value
//! - [`FileLayout`], resolving paths in the application folder layout
//!
//! ## Usage
//!
//! ```
//! use kvstore_core::{build_entry, get_integer, ElementDataType, TableMetaDataEntries};
//! use kvstore_codec::{from_transport_bytes, to_transport_bytes};
//!
//! let mut entries = TableMetaDataEntries::new("visits", "rev-1");
//! entries.add_entry(build_entry(
//!     "visits",
//!     "Table",
//!     "default",
//!     "pageSize",
//!     ElementDataType::Integer,
//!     Some("25".to_string()),
//! ));
//!
//! let bytes = to_transport_bytes(&entries).unwrap();
//! let received: TableMetaDataEntries = from_transport_bytes(&bytes).unwrap();
//! let page_size = get_integer(received.find("Table", "default", "pageSize")).unwrap();
//! assert_eq!(page_size, Some(25));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod accessor;
mod config;
mod data_type;
mod entries;
mod entry;
mod error;
pub mod paths;

pub use accessor::{
    build_entry, get_array, get_boolean, get_integer, get_number, get_object, get_string,
};
pub use config::{Config, DEFAULT_EXTERNAL_ROOT, DEFAULT_ODK_FOLDER_NAME};
pub use data_type::{ElementDataType, UnknownDataType};
pub use entries::TableMetaDataEntries;
pub use entry::{sort_entries, KeyValueStoreEntry};
pub use error::{KvsError, KvsResult};
pub use paths::FileLayout;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
