//! # kvstore Codec
//!
//! Transport encoding for kvstore metadata records.
//!
//! Records are flat sequences of fields written and read back in a fixed
//! order, with no field names or tags on the wire:
//!
//! - `i32` values are little-endian
//! - strings are an `i32` byte length followed by UTF-8 bytes
//! - a null string is the length `-1` with no payload
//!
//! ## Usage
//!
//! ```
//! use kvstore_codec::{TransportReader, TransportWriter};
//!
//! let mut writer = TransportWriter::new();
//! writer.write_str("tableId").unwrap();
//! writer.write_string(None).unwrap();
//! let bytes = writer.into_bytes();
//!
//! let mut reader = TransportReader::new(&bytes);
//! assert_eq!(reader.read_string().unwrap().as_deref(), Some("tableId"));
//! assert_eq!(reader.read_string().unwrap(), None);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;

pub use decoder::TransportReader;
pub use encoder::{TransportWriter, MAX_STRING_LENGTH, NULL_LENGTH};
pub use error::{CodecError, CodecResult};

/// Value reported by [`Encode::describe_contents`] when a record carries no
/// out-of-band content.
pub const NO_EXTRA_CONTENTS: i32 = 0;

/// Trait for types that can be written to a transport buffer.
pub trait Encode {
    /// Append this value's fields to `writer`.
    fn encode_to(&self, writer: &mut TransportWriter) -> CodecResult<()>;

    /// Flags describing out-of-band content carried alongside the encoding.
    fn describe_contents(&self) -> i32 {
        NO_EXTRA_CONTENTS
    }
}

/// Trait for types that can be read back from a transport buffer.
pub trait Decode: Sized {
    /// Read this value's fields from `reader`.
    fn decode_from(reader: &mut TransportReader<'_>) -> CodecResult<Self>;
}

/// Encode a value into a fresh buffer.
pub fn to_transport_bytes<T: Encode + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    let mut writer = TransportWriter::new();
    value.encode_to(&mut writer)?;
    Ok(writer.into_bytes())
}

/// Decode a value that must occupy the whole buffer.
pub fn from_transport_bytes<T: Decode>(bytes: &[u8]) -> CodecResult<T> {
    let mut reader = TransportReader::new(bytes);
    let value = T::decode_from(&mut reader)?;
    reader.finish()?;
    Ok(value)
}
