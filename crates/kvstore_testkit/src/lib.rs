//! # kvstore Testkit
//!
//! Test utilities for kvstore.
//!
//! This crate provides:
//! - Sample entries and collections
//! - Property-based test generators using proptest
//! - Cross-language transport encoding vectors
//!
//! ## Usage
//!
//! ```rust
//! use kvstore_testkit::prelude::*;
//!
//! let entries = sample_collection();
//! assert_eq!(transport_roundtrip(&entries), entries);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use vectors::*;
