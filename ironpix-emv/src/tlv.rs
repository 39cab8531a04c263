/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! TLV field encoder for EMV merchant-presented payloads.
//!
//! This module provides an encoder for building payloads in the standard
//! `tag + length + value` text format: a 2-character tag, a zero-padded
//! 2-digit decimal character count, and the value. Template fields carry a
//! fully encoded inner TLV string as their value.

use crate::crc::{calculate_crc, format_crc};
use ironpix_core::error::EncodeError;
use ironpix_core::field::{EmvTag, tags};

/// Maximum value length representable by the 2-digit length prefix.
pub const MAX_VALUE_LEN: usize = 99;

/// EMV TLV payload encoder.
///
/// The encoder appends fields in tag+length+value format and finalizes the
/// payload by appending the CRC field. Values longer than [`MAX_VALUE_LEN`]
/// characters are rejected with [`EncodeError::FieldTooLong`]; a silently
/// mis-encoded length prefix would produce a token that scans but pays the
/// wrong party.
#[derive(Debug, Default)]
pub struct TlvEncoder {
    /// Buffer for the payload (everything preceding the CRC field).
    buf: String,
}

impl TlvEncoder {
    /// Creates a new empty encoder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(256),
        }
    }

    /// Creates a new encoder with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Appends a field with a string value.
    ///
    /// # Arguments
    /// * `tag` - The field tag
    /// * `value` - The field value
    ///
    /// # Errors
    /// Returns [`EncodeError::FieldTooLong`] if the value exceeds 99
    /// characters.
    pub fn put(&mut self, tag: EmvTag, value: &str) -> Result<(), EncodeError> {
        let length = value.chars().count();
        if length > MAX_VALUE_LEN {
            return Err(EncodeError::FieldTooLong {
                tag,
                length,
                max_length: MAX_VALUE_LEN,
            });
        }

        self.buf.push_str(tag.as_str());
        self.buf.push((b'0' + (length / 10) as u8) as char);
        self.buf.push((b'0' + (length % 10) as u8) as char);
        self.buf.push_str(value);
        Ok(())
    }

    /// Appends a template field wrapping a fully encoded inner payload.
    ///
    /// # Arguments
    /// * `tag` - The template tag (e.g. 26 or 62)
    /// * `inner` - Encoder holding the nested fields
    ///
    /// # Errors
    /// Returns [`EncodeError::FieldTooLong`] if the encoded inner payload
    /// exceeds 99 characters.
    pub fn put_template(&mut self, tag: EmvTag, inner: &TlvEncoder) -> Result<(), EncodeError> {
        self.put(tag, inner.as_str())
    }

    /// Returns the payload assembled so far.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the current payload length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been encoded yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears the encoder for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Finalizes the payload and returns the complete encoded string.
    ///
    /// This method appends the literal `6304` checksum header, computes the
    /// CRC-16/CCITT-FALSE over everything assembled so far including that
    /// header, and appends the 4-hex-digit result.
    ///
    /// # Returns
    /// The complete payload string.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.buf.push_str(tags::CRC.as_str());
        self.buf.push_str("04");

        let crc = calculate_crc(self.buf.as_bytes());
        for b in format_crc(crc) {
            self.buf.push(b as char);
        }

        self.buf
    }
}
