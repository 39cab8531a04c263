/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! EMV tag types for merchant-presented payload fields.
//!
//! This module provides:
//! - [`EmvTag`]: Type-safe wrapper for two-digit EMV field tags
//! - [`tags`]: Constants for every tag emitted by the payload builder
//!
//! EMV merchant-presented fields are TLV units: a 2-character tag, a
//! zero-padded 2-digit decimal length, and the value. Template fields (26 and
//! 62) carry a fully encoded inner TLV string as their value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-character EMV field tag.
///
/// Tags are pairs of ASCII digits (`"00"` through `"99"`). Top-level tags are
/// assigned by the EMVCo merchant-presented convention; tags inside a template
/// field are scoped to that template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EmvTag([u8; 2]);

impl EmvTag {
    /// Creates a new tag from two ASCII digit bytes.
    ///
    /// # Arguments
    /// * `tag` - The tag bytes, e.g. `*b"26"`
    #[inline]
    #[must_use]
    pub const fn new(tag: [u8; 2]) -> Self {
        Self(tag)
    }

    /// Returns the raw tag bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(self) -> [u8; 2] {
        self.0
    }

    /// Returns the tag as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Tags are constructed from ASCII digit literals only.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for EmvTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Well-known EMV tags used by the Pix payload builder.
pub mod tags {
    use super::EmvTag;

    /// Payload format indicator (always `"01"`).
    pub const PAYLOAD_FORMAT: EmvTag = EmvTag::new(*b"00");
    /// Point of initiation method (`"12"` dynamic, `"11"` static).
    pub const POI_METHOD: EmvTag = EmvTag::new(*b"01");
    /// Merchant account information template.
    pub const MERCHANT_ACCOUNT_INFO: EmvTag = EmvTag::new(*b"26");
    /// Merchant category code.
    pub const MERCHANT_CATEGORY: EmvTag = EmvTag::new(*b"52");
    /// Transaction currency (ISO 4217 numeric).
    pub const CURRENCY: EmvTag = EmvTag::new(*b"53");
    /// Transaction amount.
    pub const AMOUNT: EmvTag = EmvTag::new(*b"54");
    /// Country code.
    pub const COUNTRY: EmvTag = EmvTag::new(*b"58");
    /// Merchant display name.
    pub const MERCHANT_NAME: EmvTag = EmvTag::new(*b"59");
    /// Merchant city.
    pub const MERCHANT_CITY: EmvTag = EmvTag::new(*b"60");
    /// Additional data field template.
    pub const ADDITIONAL_DATA: EmvTag = EmvTag::new(*b"62");
    /// CRC-16 checksum field.
    pub const CRC: EmvTag = EmvTag::new(*b"63");

    /// Globally unique identifier, nested inside tag 26.
    pub const GUI: EmvTag = EmvTag::new(*b"00");
    /// Pix key, nested inside tag 26.
    pub const PIX_KEY: EmvTag = EmvTag::new(*b"01");
    /// Transaction reference label, nested inside tag 62.
    pub const TXID: EmvTag = EmvTag::new(*b"05");
}
