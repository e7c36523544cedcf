//! Transport decoder.

use crate::encoder::{MAX_STRING_LENGTH, NULL_LENGTH};
use crate::error::{CodecError, CodecResult};

/// Maximum element count accepted for a single record.
/// 16 million entries is far beyond any table's metadata.
const MAX_RECORD_COUNT: u64 = 16 * 1024 * 1024;

/// Reads fixed-order transport records written by
/// [`TransportWriter`](crate::TransportWriter).
///
/// The reader borrows the buffer; fields must be read back in exactly the
/// order they were written.
pub struct TransportReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TransportReader<'a> {
    /// Create a new reader over the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read a signed 32-bit integer.
    pub fn read_i32(&mut self) -> CodecResult<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read an element count written by `write_count`.
    pub fn read_count(&mut self) -> CodecResult<usize> {
        let count = self.read_i32()?;
        if count < 0 {
            return Err(CodecError::InvalidLength { length: count });
        }
        let count = u64::from(count.unsigned_abs());
        if count > MAX_RECORD_COUNT {
            return Err(CodecError::SizeLimitExceeded {
                claimed: count,
                max_allowed: MAX_RECORD_COUNT,
            });
        }
        Ok(count as usize)
    }

    /// Read a nullable string.
    pub fn read_string(&mut self) -> CodecResult<Option<String>> {
        let length = self.read_i32()?;
        if length == NULL_LENGTH {
            return Ok(None);
        }
        if length < 0 {
            return Err(CodecError::InvalidLength { length });
        }
        let len = u64::from(length.unsigned_abs());
        if len > MAX_STRING_LENGTH {
            return Err(CodecError::SizeLimitExceeded {
                claimed: len,
                max_allowed: MAX_STRING_LENGTH,
            });
        }
        let bytes = self.read_bytes(len as usize)?;
        let text = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
        Ok(Some(text.to_string()))
    }

    /// Read a string that must be present.
    ///
    /// `field` names the value in the `UnexpectedNull` error.
    pub fn read_required_string(&mut self, field: &'static str) -> CodecResult<String> {
        self.read_string()?
            .ok_or_else(|| CodecError::unexpected_null(field))
    }

    /// Check if all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Get remaining bytes.
    pub fn remaining(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    /// Fail if any bytes are left unread.
    pub fn finish(&self) -> CodecResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CodecError::TrailingBytes {
                remaining: self.data.len() - self.pos,
            })
        }
    }

    #[inline]
    fn read_bytes(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        if len > self.data.len() - self.pos {
            return Err(CodecError::UnexpectedEof);
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_null_string() {
        let mut reader = TransportReader::new(&[0xff, 0xff, 0xff, 0xff]);
        assert_eq!(reader.read_string().unwrap(), None);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_empty_string_is_not_null() {
        let mut reader = TransportReader::new(&[0, 0, 0, 0]);
        assert_eq!(reader.read_string().unwrap(), Some(String::new()));
    }

    #[test]
    fn read_string() {
        let mut reader = TransportReader::new(&[5, 0, 0, 0, b'h', b'e', b'l', b'l', b'o']);
        assert_eq!(reader.read_string().unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn read_required_string_rejects_null() {
        let mut reader = TransportReader::new(&[0xff, 0xff, 0xff, 0xff]);
        assert_eq!(
            reader.read_required_string("revId"),
            Err(CodecError::UnexpectedNull { field: "revId" })
        );
    }

    #[test]
    fn reject_negative_length_other_than_sentinel() {
        // -2
        let mut reader = TransportReader::new(&[0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(
            reader.read_string(),
            Err(CodecError::InvalidLength { length: -2 })
        );
    }

    #[test]
    fn reject_negative_count() {
        let mut reader = TransportReader::new(&[0xff, 0xff, 0xff, 0xff]);
        assert_eq!(
            reader.read_count(),
            Err(CodecError::InvalidLength { length: -1 })
        );
    }

    #[test]
    fn reject_oversized_count() {
        let bytes = i32::MAX.to_le_bytes();
        let mut reader = TransportReader::new(&bytes);
        assert!(matches!(
            reader.read_count(),
            Err(CodecError::SizeLimitExceeded { .. })
        ));
    }

    #[test]
    fn reject_oversized_string_before_allocating() {
        let bytes = i32::MAX.to_le_bytes();
        let mut reader = TransportReader::new(&bytes);
        assert!(matches!(
            reader.read_string(),
            Err(CodecError::SizeLimitExceeded { .. })
        ));
    }

    #[test]
    fn unexpected_eof() {
        assert!(matches!(
            TransportReader::new(&[]).read_i32(),
            Err(CodecError::UnexpectedEof)
        ));
        assert!(matches!(
            TransportReader::new(&[1, 0]).read_i32(),
            Err(CodecError::UnexpectedEof)
        ));
        // length says 4, only 2 bytes follow
        assert!(matches!(
            TransportReader::new(&[4, 0, 0, 0, b'a', b'b']).read_string(),
            Err(CodecError::UnexpectedEof)
        ));
    }

    #[test]
    fn invalid_utf8_rejected() {
        assert!(matches!(
            TransportReader::new(&[2, 0, 0, 0, 0xff, 0xfe]).read_string(),
            Err(CodecError::InvalidUtf8)
        ));
    }

    #[test]
    fn finish_reports_trailing_bytes() {
        let data = [1, 0, 0, 0, b'a', 9, 9];
        let mut reader = TransportReader::new(&data);
        reader.read_string().unwrap();
        assert_eq!(reader.remaining(), &[9, 9]);
        assert_eq!(
            reader.finish(),
            Err(CodecError::TrailingBytes { remaining: 2 })
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::TransportWriter;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn strings_survive_the_wire(values in prop::collection::vec(prop::option::of(any::<String>()), 0..8)) {
            let mut writer = TransportWriter::new();
            for value in &values {
                writer.write_string(value.as_deref()).unwrap();
            }
            let bytes = writer.into_bytes();
            let mut reader = TransportReader::new(&bytes);
            for value in &values {
                prop_assert_eq!(&reader.read_string().unwrap(), value);
            }
            prop_assert!(reader.finish().is_ok());
        }

        #[test]
        fn arbitrary_input_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
            let mut reader = TransportReader::new(&data);
            while !reader.is_empty() {
                if reader.read_string().is_err() {
                    break;
                }
            }
        }
    }
}
