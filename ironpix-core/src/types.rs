/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! Request types for Pix charge encoding.
//!
//! This module provides:
//! - [`TxId`]: Bounded transaction reference label (tag 62-05)
//! - [`ChargeRequest`]: The full set of inputs consumed by the payload codec
//!
//! A [`ChargeRequest`] is a plain value: building one performs no validation
//! beyond the bounds on [`TxId`]. Amount positivity and field-length limits
//! are checked by the codec at encode time.

use arrayvec::ArrayString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for a transaction reference label in characters.
pub const TXID_MAX_LEN: usize = 25;

/// Placeholder reference emitted when the caller supplies no transaction id.
pub const TXID_PLACEHOLDER: &str = "***";

/// Transaction reference label for the additional-data template.
///
/// References are short opaque strings, at most 25 characters per the EMV
/// additional-data convention. An absent or empty reference falls back to the
/// fixed `"***"` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct TxId(ArrayString<TXID_MAX_LEN>);

impl TxId {
    /// Creates a new transaction reference from a string slice.
    ///
    /// # Arguments
    /// * `s` - The reference string
    ///
    /// # Returns
    /// `Some(TxId)` if the string is non-empty and fits within the maximum
    /// length, `None` otherwise.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        ArrayString::from(s).ok().map(Self)
    }

    /// Returns the fixed placeholder reference (`"***"`).
    #[must_use]
    pub fn placeholder() -> Self {
        let mut s = ArrayString::new();
        let _ = s.try_push_str(TXID_PLACEHOLDER);
        Self(s)
    }

    /// Returns the reference as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the length of the reference in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the reference is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for TxId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TxId {
    type Err = arrayvec::CapacityError<()>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| arrayvec::CapacityError::new(()))
    }
}

/// Inputs for one Pix charge payload.
///
/// The `key` is an opaque payee identifier (email, phone, random key, or
/// registry id) and is embedded in the payload verbatim. `merchant_name` and
/// `merchant_city` are display strings; the codec strips diacritics and
/// truncates them to their EMV caps before encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Payee Pix key, opaque to the codec.
    pub key: String,
    /// Merchant display name (truncated to 25 characters at encode time).
    pub merchant_name: String,
    /// Merchant city (truncated to 15 characters at encode time).
    pub merchant_city: String,
    /// Transaction amount in currency units. Must be strictly positive.
    pub amount: Decimal,
    /// Optional transaction reference; `None` encodes the placeholder.
    pub txid: Option<TxId>,
}

impl ChargeRequest {
    /// Creates a new charge request without a transaction reference.
    ///
    /// # Arguments
    /// * `key` - The payee Pix key
    /// * `merchant_name` - Merchant display name
    /// * `merchant_city` - Merchant city
    /// * `amount` - Transaction amount in currency units
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            key: key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
            amount,
            txid: None,
        }
    }

    /// Sets the transaction reference.
    #[must_use]
    pub fn with_txid(mut self, txid: TxId) -> Self {
        self.txid = Some(txid);
        self
    }

    /// Returns the effective transaction reference, falling back to the
    /// placeholder when none was supplied.
    #[must_use]
    pub fn txid_or_placeholder(&self) -> TxId {
        self.txid.clone().unwrap_or_else(TxId::placeholder)
    }
}
