/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/2/26
******************************************************************************/

//! Pix payload builder.
//!
//! Assembles the complete merchant-presented payload from a
//! [`ChargeRequest`]: the fixed format and initiation fields, the
//! merchant-account template carrying the Pix key, the merchant display
//! fields, the additional-data template carrying the transaction reference,
//! and the trailing CRC field. The output is a pure deterministic function of
//! the request; callers render it as a QR image or copyable text.

use crate::crc::{calculate_crc, parse_crc};
use crate::normalize::{strip_diacritics, truncate_chars};
use crate::tlv::TlvEncoder;
use ironpix_core::error::EncodeError;
use ironpix_core::field::tags;
use ironpix_core::types::ChargeRequest;
use rust_decimal::{Decimal, RoundingStrategy};

/// Payload format indicator value (tag 00).
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Point-of-initiation method for dynamic, one-time codes (tag 01).
pub const POI_METHOD_DYNAMIC: &str = "12";

/// Point-of-initiation method for static, reusable codes.
///
/// Not emitted by [`encode_payload`]; every generated code is dynamic.
pub const POI_METHOD_STATIC: &str = "11";

/// Globally unique identifier of the Pix arrangement (tag 26-00).
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// Generic merchant category code (tag 52).
pub const MERCHANT_CATEGORY_GENERIC: &str = "0000";

/// ISO 4217 numeric code for the Brazilian real (tag 53).
pub const CURRENCY_BRL: &str = "986";

/// Country code (tag 58).
pub const COUNTRY_BR: &str = "BR";

/// Maximum merchant name length in characters (tag 59).
pub const MERCHANT_NAME_MAX: usize = 25;

/// Maximum merchant city length in characters (tag 60).
pub const MERCHANT_CITY_MAX: usize = 15;

/// Formats a transaction amount as fixed two-decimal text.
///
/// The output uses a `.` separator with no thousands grouping or currency
/// symbol (`149.9` becomes `"149.90"`). Fractions beyond two decimals round
/// half away from zero.
///
/// # Arguments
/// * `amount` - The transaction amount in currency units
///
/// # Errors
/// Returns [`EncodeError::InvalidAmount`] if the amount is not strictly
/// positive.
pub fn format_amount(amount: Decimal) -> Result<String, EncodeError> {
    if amount <= Decimal::ZERO {
        return Err(EncodeError::InvalidAmount { value: amount });
    }

    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    Ok(rounded.to_string())
}

/// Encodes a charge request into a complete Pix payload string.
///
/// Field order is fixed: 00, 01, 26 (template: GUI + key), 52, 53, 54, 58,
/// 59, 60, 62 (template: transaction reference), 63 (CRC). Merchant name and
/// city are diacritic-stripped and truncated to their caps; the Pix key is
/// embedded verbatim.
///
/// # Arguments
/// * `request` - The charge request to encode
///
/// # Errors
/// Returns [`EncodeError::InvalidAmount`] for a non-positive amount, or
/// [`EncodeError::FieldTooLong`] when a value (notably an unbounded key)
/// exceeds the 2-digit length capacity of its field.
///
/// # Example
/// ```
/// use ironpix_core::ChargeRequest;
/// use ironpix_emv::encode_payload;
/// use rust_decimal::Decimal;
///
/// let request = ChargeRequest::new(
///     "pix@example.com",
///     "Loja Exemplo",
///     "Sao Paulo",
///     Decimal::new(14990, 2),
/// );
/// let payload = encode_payload(&request).unwrap();
/// assert!(payload.starts_with("000201"));
/// ```
pub fn encode_payload(request: &ChargeRequest) -> Result<String, EncodeError> {
    let amount = format_amount(request.amount)?;

    let name = strip_diacritics(&request.merchant_name);
    let name = truncate_chars(&name, MERCHANT_NAME_MAX);
    let city = strip_diacritics(&request.merchant_city);
    let city = truncate_chars(&city, MERCHANT_CITY_MAX);

    let mut account = TlvEncoder::new();
    account.put(tags::GUI, PIX_GUI)?;
    account.put(tags::PIX_KEY, &request.key)?;

    let mut additional = TlvEncoder::new();
    additional.put(tags::TXID, request.txid_or_placeholder().as_str())?;

    let mut payload = TlvEncoder::with_capacity(192);
    payload.put(tags::PAYLOAD_FORMAT, PAYLOAD_FORMAT_INDICATOR)?;
    payload.put(tags::POI_METHOD, POI_METHOD_DYNAMIC)?;
    payload.put_template(tags::MERCHANT_ACCOUNT_INFO, &account)?;
    payload.put(tags::MERCHANT_CATEGORY, MERCHANT_CATEGORY_GENERIC)?;
    payload.put(tags::CURRENCY, CURRENCY_BRL)?;
    payload.put(tags::AMOUNT, &amount)?;
    payload.put(tags::COUNTRY, COUNTRY_BR)?;
    payload.put(tags::MERCHANT_NAME, name)?;
    payload.put(tags::MERCHANT_CITY, city)?;
    payload.put_template(tags::ADDITIONAL_DATA, &additional)?;

    Ok(payload.finish())
}

/// Checks that a payload's trailing CRC matches its contents.
///
/// The checksummed span is everything up to and including the `6304` header.
/// This does not decode or validate any other field.
///
/// # Arguments
/// * `payload` - The complete payload string
#[must_use]
pub fn verify_crc(payload: &str) -> bool {
    if payload.len() < 8 || !payload.is_char_boundary(payload.len() - 4) {
        return false;
    }
    let (body, crc_hex) = payload.split_at(payload.len() - 4);
    match parse_crc(crc_hex.as_bytes()) {
        Some(declared) => calculate_crc(body.as_bytes()) == declared,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironpix_core::types::TxId;
    use std::str::FromStr;

    fn sample_request() -> ChargeRequest {
        ChargeRequest::new(
            "fulano2019@example.com",
            "Loja Exemplo",
            "Sao Paulo",
            Decimal::new(14990, 2),
        )
        .with_txid(TxId::new("123456").unwrap())
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(Decimal::from_str("149.9").unwrap()).unwrap(), "149.90");
        assert_eq!(format_amount(Decimal::from(150)).unwrap(), "150.00");
        assert_eq!(format_amount(Decimal::from_str("0.01").unwrap()).unwrap(), "0.01");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::from_str("1.005").unwrap()).unwrap(), "1.01");
        assert_eq!(format_amount(Decimal::from_str("1.004").unwrap()).unwrap(), "1.00");
    }

    #[test]
    fn test_format_amount_rejects_non_positive() {
        assert_eq!(
            format_amount(Decimal::ZERO).unwrap_err(),
            EncodeError::InvalidAmount {
                value: Decimal::ZERO,
            }
        );
        assert!(matches!(
            format_amount(Decimal::from(-10)),
            Err(EncodeError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_encode_known_payload_with_txid() {
        let payload = encode_payload(&sample_request()).unwrap();
        assert_eq!(
            payload,
            "00020101021226440014BR.GOV.BCB.PIX0122fulano2019@example.com\
             5204000053039865406149.905802BR5912Loja Exemplo6009Sao Paulo\
             621005061234566304AA11"
        );
    }

    #[test]
    fn test_encode_known_payload_accented_no_txid() {
        let request = ChargeRequest::new(
            "+5511999998888",
            "João da Silva Confecções Comércio",
            "São Paulo",
            Decimal::from(10),
        );
        let payload = encode_payload(&request).unwrap();
        assert_eq!(
            payload,
            "00020101021226360014BR.GOV.BCB.PIX0114+5511999998888\
             520400005303986540510.005802BR5925Joao da Silva Confeccoes \
             6009Sao Paulo62070503***63047CCC"
        );
    }

    #[test]
    fn test_encode_truncates_normalized_name_to_25_chars() {
        let request = ChargeRequest::new(
            "chave@pix.dev",
            "João da Silva Confecções Comércio",
            "Recife",
            Decimal::from(5),
        );
        let payload = encode_payload(&request).unwrap();
        assert!(payload.contains("5925Joao da Silva Confeccoes "));
    }

    #[test]
    fn test_encode_truncates_city_to_15_chars() {
        let request = ChargeRequest::new(
            "chave@pix.dev",
            "Loja",
            "Sao Jose dos Campos Interior",
            Decimal::from(5),
        );
        let payload = encode_payload(&request).unwrap();
        assert!(payload.contains("6015Sao Jose dos Ca"));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let request = sample_request();
        assert_eq!(
            encode_payload(&request).unwrap(),
            encode_payload(&request).unwrap()
        );
    }

    #[test]
    fn test_encode_crc_is_self_consistent() {
        for request in [
            sample_request(),
            ChargeRequest::new("a@b.c", "X", "Y", Decimal::ONE),
            ChargeRequest::new(
                "00000000-0000-0000-0000-000000000000",
                "Açougue São Jorge",
                "Belém",
                Decimal::from_str("1234.56").unwrap(),
            ),
        ] {
            let payload = encode_payload(&request).unwrap();
            assert!(verify_crc(&payload), "payload failed self-check: {payload}");
        }
    }

    #[test]
    fn test_encode_rejects_over_long_key() {
        let request = ChargeRequest::new("k".repeat(98), "Loja", "Recife", Decimal::ONE);
        let err = encode_payload(&request).unwrap_err();
        assert!(matches!(err, EncodeError::FieldTooLong { .. }));
    }

    #[test]
    fn test_encode_rejects_key_overflowing_template() {
        // Fits its own field but pushes the tag 26 template past 99 chars.
        let request = ChargeRequest::new("k".repeat(80), "Loja", "Recife", Decimal::ONE);
        let err = encode_payload(&request).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::FieldTooLong {
                tag: tags::MERCHANT_ACCOUNT_INFO,
                ..
            }
        ));
    }

    #[test]
    fn test_encode_key_is_verbatim() {
        // Keys are never normalized or truncated.
        let request = ChargeRequest::new("chavé@pix.dev", "Loja", "Recife", Decimal::ONE);
        let payload = encode_payload(&request).unwrap();
        assert!(payload.contains("chavé@pix.dev"));
    }

    #[test]
    fn test_verify_crc_rejects_tampering() {
        let payload = encode_payload(&sample_request()).unwrap();
        assert!(verify_crc(&payload));

        let tampered = payload.replacen("149.90", "149.91", 1);
        assert!(!verify_crc(&tampered));
        assert!(!verify_crc(""));
        assert!(!verify_crc("6304ZZZZ"));
    }
}
