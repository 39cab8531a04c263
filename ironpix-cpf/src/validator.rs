/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! CPF check-digit arithmetic and the validated [`Cpf`] value type.
//!
//! A CPF input may arrive punctuated (`111.444.777-35`) or bare
//! (`11144477735`); every non-digit character is stripped before checking.
//! The normalized string must be exactly 11 digits, must not be one digit
//! repeated 11 times, and both trailing check digits must match the weighted
//! sums over the leading digits.

use ironpix_core::error::CpfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Strips every non-digit character and returns the digit values.
fn clean_digits(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

/// Computes one check digit over a digit prefix.
///
/// Weights descend from `digits.len() + 1` down to 2; the result is
/// `(sum * 10) mod 11`, with remainders 10 and 11 mapped to 0.
fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (digits.len() + 1 - i) as u32)
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder >= 10 { 0 } else { remainder as u8 }
}

/// Validates a CPF string.
///
/// # Arguments
/// * `input` - The identifier, with or without punctuation
///
/// # Errors
/// Returns [`CpfError::InvalidFormat`] if the normalized input is not
/// exactly 11 digits or is a repeated-digit sequence, and
/// [`CpfError::InvalidChecksum`] if either check digit disagrees with the
/// computed value.
pub fn validate(input: &str) -> Result<(), CpfError> {
    let digits = clean_digits(input);
    if digits.len() != CPF_LEN {
        return Err(CpfError::InvalidFormat {
            reason: format!("expected 11 digits, found {}", digits.len()),
        });
    }

    // Sequences like 111.111.111-11 satisfy the arithmetic but are
    // known-invalid registry numbers.
    if digits.iter().all(|&d| d == digits[0]) {
        return Err(CpfError::InvalidFormat {
            reason: "repeated digit sequence".to_string(),
        });
    }

    for position in [10u8, 11u8] {
        let prefix = &digits[..position as usize - 1];
        let computed = check_digit(prefix);
        let found = digits[position as usize - 1];
        if computed != found {
            return Err(CpfError::InvalidChecksum {
                position,
                computed,
                found,
            });
        }
    }

    Ok(())
}

/// Returns true if the input is a valid CPF.
///
/// # Arguments
/// * `input` - The identifier, with or without punctuation
#[inline]
#[must_use]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// A validated CPF.
///
/// Construction goes through [`Cpf::parse`], so a held value always carries
/// 11 digits with matching check digits. `Display` renders the canonical
/// `XXX.XXX.XXX-XX` mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Parses and validates a CPF string.
    ///
    /// # Arguments
    /// * `input` - The identifier, with or without punctuation
    ///
    /// # Errors
    /// Same conditions as [`validate`].
    pub fn parse(input: &str) -> Result<Self, CpfError> {
        validate(input)?;
        let mut digits = [0u8; CPF_LEN];
        for (slot, d) in digits.iter_mut().zip(clean_digits(input)) {
            *slot = d;
        }
        Ok(Self(digits))
    }

    /// Returns the digit values.
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(
            f,
            "{}{}{}.{}{}{}.{}{}{}-{}{}",
            d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7], d[8], d[9], d[10]
        )
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
