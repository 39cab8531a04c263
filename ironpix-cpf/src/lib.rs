/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! # IronPix CPF
//!
//! CPF check-digit validation for the IronPix engine.
//!
//! The CPF is the Brazilian individual taxpayer registry number: 11 digits,
//! the last two of which are arithmetic check digits over the preceding ones.
//! Validation here is purely self-contained arithmetic; no registry lookup is
//! performed or implied.
//!
//! ```
//! use ironpix_cpf::is_valid;
//!
//! assert!(is_valid("111.444.777-35"));
//! assert!(!is_valid("111.111.111-11"));
//! ```

pub mod validator;

pub use validator::{Cpf, is_valid, validate};
