/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! Text normalization for merchant display fields.
//!
//! Merchant name and city typically carry Portuguese diacritics that payment
//! scanners mishandle. Normalization is canonical decomposition (NFD)
//! followed by removal of combining marks; base letters, case, and
//! punctuation are left untouched. Casing is deliberately preserved: the
//! payload convention tolerates mixed case and forcing uppercase would be an
//! observable behavior change for existing scanners.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strips combining diacritical marks from a string.
///
/// # Arguments
/// * `text` - The text to normalize
///
/// # Returns
/// The text with diacritics removed (`"São João"` becomes `"Sao Joao"`).
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Returns a prefix of at most `max_chars` characters.
///
/// Truncation counts characters, not bytes, so multi-byte characters are
/// never split.
///
/// # Arguments
/// * `text` - The text to truncate
/// * `max_chars` - Maximum number of characters to keep
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics_portuguese() {
        assert_eq!(strip_diacritics("São Paulo"), "Sao Paulo");
        assert_eq!(strip_diacritics("Confecções"), "Confeccoes");
        assert_eq!(strip_diacritics("açaí"), "acai");
    }

    #[test]
    fn test_strip_diacritics_preserves_case_and_punctuation() {
        assert_eq!(strip_diacritics("João & Cia."), "Joao & Cia.");
        assert_eq!(strip_diacritics("LOJA ÁGUA"), "LOJA AGUA");
    }

    #[test]
    fn test_strip_diacritics_ascii_passthrough() {
        assert_eq!(strip_diacritics("plain ascii 123"), "plain ascii 123");
        assert_eq!(strip_diacritics(""), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        // Counts characters, never splits a multi-byte sequence.
        assert_eq!(truncate_chars("ééééé", 3), "ééé");
    }

    #[test]
    fn test_normalize_then_truncate_merchant_name() {
        let name = "João da Silva Confecções Comércio";
        let normalized = strip_diacritics(name);
        let truncated = truncate_chars(&normalized, 25);
        assert_eq!(truncated, "Joao da Silva Confeccoes ");
        assert_eq!(truncated.chars().count(), 25);
        assert!(truncated.is_ascii());
    }
}
