/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! # IronPix EMV
//!
//! EMV merchant-presented TLV encoding for the IronPix engine.
//!
//! This crate builds the checksum-protected "BR Code" text token scanned at
//! checkout, following the EMVCo merchant-presented-QR field convention used
//! by the Brazilian instant payment scheme.
//!
//! ## Features
//!
//! - **TLV encoding**: `tag + 2-digit length + value` fields, with template
//!   nesting for merchant-account and additional-data fields
//! - **CRC-16/CCITT-FALSE**: standard checksum over the assembled payload
//! - **Text normalization**: diacritic stripping for merchant name and city

pub mod crc;
pub mod normalize;
pub mod payload;
pub mod tlv;

pub use crc::calculate_crc;
pub use payload::encode_payload;
pub use tlv::TlvEncoder;
