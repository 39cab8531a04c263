/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! # IronPix
//!
//! A Pix payment-code engine for Rust.
//!
//! IronPix builds the machine-readable, checksum-protected "BR Code" text
//! token presented at checkout (EMVCo merchant-presented-QR convention) and
//! validates customer-entered CPF taxpayer identifiers. Both units are pure
//! and stateless: no I/O, no clocks, no shared state, safe for concurrent use
//! from any number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use ironpix::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let request = ChargeRequest::new(
//!     "pix@example.com",
//!     "Loja Exemplo",
//!     "Sao Paulo",
//!     Decimal::new(14990, 2),
//! );
//! let payload = encode_payload(&request).unwrap();
//! assert!(payload.starts_with("000201"));
//!
//! assert!(is_valid("111.444.777-35"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Request types, EMV tags, and error definitions
//! - [`emv`]: TLV encoding, CRC-16, text normalization, payload builder
//! - [`cpf`]: CPF check-digit validation

pub mod core {
    //! Request types, EMV tags, and error definitions.
    pub use ironpix_core::*;
}

pub mod emv {
    //! TLV encoding, CRC-16, text normalization, and the payload builder.
    pub use ironpix_emv::*;
}

pub mod cpf {
    //! CPF check-digit validation.
    pub use ironpix_cpf::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use ironpix_core::{
        ChargeRequest, CpfError, EmvTag, EncodeError, PixError, Result, TxId, tags,
    };

    // EMV encoding
    pub use ironpix_emv::{
        TlvEncoder, calculate_crc, encode_payload,
        payload::{format_amount, verify_crc},
    };

    // CPF validation
    pub use ironpix_cpf::{Cpf, is_valid, validate};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_prelude_imports() {
        let request = ChargeRequest::new("a@b.c", "Loja", "Recife", Decimal::ONE)
            .with_txid(TxId::new("42").unwrap());
        let payload = encode_payload(&request).unwrap();
        assert!(verify_crc(&payload));
    }

    #[test]
    fn test_checkout_round() {
        // The two units the checkout flow touches, end to end.
        assert!(is_valid("529.982.247-25"));
        let cpf: Cpf = "52998224725".parse().unwrap();
        assert_eq!(cpf.to_string(), "529.982.247-25");

        let request = ChargeRequest::new(
            "fulano2019@example.com",
            "Loja Exemplo",
            "Sao Paulo",
            Decimal::new(14990, 2),
        )
        .with_txid(TxId::new("123456").unwrap());
        let payload = encode_payload(&request).unwrap();
        assert!(payload.ends_with("6304AA11"));
    }
}
