/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! CRC-16 checksum calculation for EMV payloads.
//!
//! The payload checksum is CRC-16/CCITT-FALSE: polynomial `0x1021`, initial
//! register `0xFFFF`, MSB-first with no bit reflection and no final XOR. The
//! checksummed span is everything preceding the checksum value, including the
//! checksum field's own `6304` tag+length header.

/// Calculates the CRC-16/CCITT-FALSE checksum for the given data.
///
/// # Arguments
/// * `data` - The payload bytes to checksum (including the 6304 header,
///   excluding the 4 hex digits that follow it)
///
/// # Returns
/// The 16-bit checksum value.
///
/// # Example
/// ```
/// use ironpix_emv::calculate_crc;
///
/// assert_eq!(calculate_crc(b"123456789"), 0x29B1);
/// ```
#[inline]
#[must_use]
pub fn calculate_crc(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Formats a checksum value as 4 uppercase hexadecimal digits.
///
/// # Arguments
/// * `crc` - The checksum value
///
/// # Returns
/// A 4-character uppercase hex representation (e.g., `29B1`, `0042`).
#[inline]
#[must_use]
pub fn format_crc(crc: u16) -> [u8; 4] {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    [
        HEX[(crc >> 12) as usize & 0xF],
        HEX[(crc >> 8) as usize & 0xF],
        HEX[(crc >> 4) as usize & 0xF],
        HEX[crc as usize & 0xF],
    ]
}

/// Parses a 4-digit hexadecimal checksum string to a u16 value.
///
/// Both uppercase and lowercase hex digits are accepted.
///
/// # Arguments
/// * `bytes` - The 4-byte checksum string
///
/// # Returns
/// `Some(crc)` if valid, `None` otherwise.
#[inline]
#[must_use]
pub fn parse_crc(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }

    let mut crc: u16 = 0;
    for &b in bytes {
        let digit = (b as char).to_digit(16)?;
        crc = (crc << 4) | digit as u16;
    }
    Some(crc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_crc_empty() {
        // Empty input leaves the register at its initial value.
        assert_eq!(calculate_crc(b""), 0xFFFF);
    }

    #[test]
    fn test_calculate_crc_check_vector() {
        // Standard CRC-16/CCITT-FALSE check value.
        assert_eq!(calculate_crc(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_calculate_crc_single_byte() {
        assert_eq!(calculate_crc(b"A"), 0xB915);
    }

    #[test]
    fn test_format_crc() {
        assert_eq!(format_crc(0x29B1), *b"29B1");
        assert_eq!(format_crc(0x0000), *b"0000");
        assert_eq!(format_crc(0x00FF), *b"00FF");
        assert_eq!(format_crc(0xFFFF), *b"FFFF");
    }

    #[test]
    fn test_parse_crc() {
        assert_eq!(parse_crc(b"29B1"), Some(0x29B1));
        assert_eq!(parse_crc(b"29b1"), Some(0x29B1));
        assert_eq!(parse_crc(b"0000"), Some(0));
        assert_eq!(parse_crc(b"FFFF"), Some(0xFFFF));
    }

    #[test]
    fn test_parse_crc_invalid() {
        assert_eq!(parse_crc(b""), None);
        assert_eq!(parse_crc(b"29B"), None);
        assert_eq!(parse_crc(b"29B11"), None);
        assert_eq!(parse_crc(b"29BX"), None);
    }

    #[test]
    fn test_roundtrip() {
        for crc in [0u16, 1, 0x29B1, 0x8000, 0xFFFF] {
            let formatted = format_crc(crc);
            assert_eq!(parse_crc(&formatted), Some(crc));
        }
    }
}
