//! Transport encoder.

use crate::error::{CodecError, CodecResult};
use bytes::{BufMut, BytesMut};

/// Length prefix written in place of a null string.
pub const NULL_LENGTH: i32 = -1;

/// Maximum allowed string length in bytes, on both sides of the transport.
pub const MAX_STRING_LENGTH: u64 = 256 * 1024 * 1024;

/// Writes fixed-order transport records.
///
/// Strings are written as an `i32` little-endian byte length followed by
/// the UTF-8 bytes. `None` is written as the [`NULL_LENGTH`] sentinel with
/// no payload.
pub struct TransportWriter {
    buffer: BytesMut,
}

impl TransportWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::new(),
        }
    }

    /// Create a new writer with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Write a signed 32-bit integer.
    pub fn write_i32(&mut self, value: i32) {
        self.buffer.put_i32_le(value);
    }

    /// Write an element count as an `i32`.
    ///
    /// # Errors
    ///
    /// Returns `SizeLimitExceeded` if `count` does not fit in an `i32`.
    pub fn write_count(&mut self, count: usize) -> CodecResult<()> {
        let value = i32::try_from(count).map_err(|_| CodecError::SizeLimitExceeded {
            claimed: count as u64,
            max_allowed: i32::MAX as u64,
        })?;
        self.write_i32(value);
        Ok(())
    }

    /// Write a nullable string.
    ///
    /// # Errors
    ///
    /// Returns `SizeLimitExceeded` if the string is longer than
    /// [`MAX_STRING_LENGTH`] bytes. Nothing is written in that case.
    pub fn write_string(&mut self, value: Option<&str>) -> CodecResult<()> {
        match value {
            None => self.write_i32(NULL_LENGTH),
            Some(s) => {
                let len = s.len() as u64;
                if len > MAX_STRING_LENGTH {
                    return Err(CodecError::SizeLimitExceeded {
                        claimed: len,
                        max_allowed: MAX_STRING_LENGTH,
                    });
                }
                #[allow(clippy::cast_possible_truncation)]
                self.write_i32(len as i32);
                self.buffer.put_slice(s.as_bytes());
            }
        }
        Ok(())
    }

    /// Write a string that is always present.
    pub fn write_str(&mut self, value: &str) -> CodecResult<()> {
        self.write_string(Some(value))
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get a reference to the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume this writer and return the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.to_vec()
    }
}

impl Default for TransportWriter {
    fn default() -> Self {
        Self::new()
    }
}
