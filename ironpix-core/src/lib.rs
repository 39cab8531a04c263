/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! # IronPix Core
//!
//! Core types, traits, and error definitions for the IronPix Pix payment-code
//! engine.
//!
//! This crate provides the fundamental building blocks used across all IronPix
//! crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: [`EmvTag`] and the well-known EMV tag constants
//! - **Request types**: [`ChargeRequest`] and the bounded [`TxId`] reference
//!
//! ## Purity
//!
//! Everything in this workspace is synchronous and side-effect-free: no I/O,
//! no shared mutable state, no clocks. Values may be built and encoded
//! concurrently from any number of threads without coordination.

pub mod error;
pub mod field;
pub mod types;

pub use error::{CpfError, EncodeError, PixError, Result};
pub use field::{EmvTag, tags};
pub use types::{ChargeRequest, TxId};
