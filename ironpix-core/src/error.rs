/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! Error types for the IronPix payment-code engine.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all IronPix operations. Every error here is a
//! deterministic, locally recoverable condition: callers surface them as form
//! validation messages, nothing is transient and nothing is worth retrying.

use crate::field::EmvTag;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using [`PixError`] as the error type.
pub type Result<T> = std::result::Result<T, PixError>;

/// Top-level error type for all IronPix operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PixError {
    /// Error during payload encoding.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Error during CPF validation.
    #[error("cpf error: {0}")]
    Cpf(#[from] CpfError),
}

/// Errors that occur while encoding an EMV merchant-presented payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Transaction amount is not strictly positive.
    ///
    /// Raised before any field is encoded; a non-positive amount must never
    /// reach the payload as malformed text.
    #[error("invalid amount: {value} is not strictly positive")]
    InvalidAmount {
        /// The rejected amount.
        value: Decimal,
    },

    /// Field value exceeds the 2-digit length capacity of a TLV field.
    #[error("field value too long for tag {tag}: {length} exceeds max {max_length}")]
    FieldTooLong {
        /// The tag of the offending field.
        tag: EmvTag,
        /// Actual length of the value in characters.
        length: usize,
        /// Maximum allowed length (99).
        max_length: usize,
    },
}

/// Errors that occur while validating a CPF identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CpfError {
    /// Input does not normalize to a checkable 11-digit sequence.
    #[error("invalid cpf format: {reason}")]
    InvalidFormat {
        /// Description of the format violation.
        reason: String,
    },

    /// A computed check digit disagrees with the supplied one.
    #[error("check digit mismatch at position {position}: computed {computed}, found {found}")]
    InvalidChecksum {
        /// 1-based position of the failing check digit (10 or 11).
        position: u8,
        /// The check digit derived from the leading digits.
        computed: u8,
        /// The digit actually present in the input.
        found: u8,
    },
}
