//! Checkout flow example: validate a customer CPF, build a charge, and print
//! the copy-paste Pix code.
//!
//! Merchant settings can be overridden through `PIX_KEY`, `PIX_NAME`, and
//! `PIX_CITY` environment variables.
use ironpix::prelude::*;
use rust_decimal::Decimal;
use std::env;
use tracing::{info, warn};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    // Shipping-data capture: accept or reject the customer tax id.
    let customer_cpf = "111.444.777-35";
    match validate(customer_cpf) {
        Ok(()) => info!("customer cpf accepted"),
        Err(e) => {
            warn!("customer cpf rejected: {}", e);
            return Err(e.into());
        }
    }

    let key = env::var("PIX_KEY").unwrap_or_else(|_| "fulano2019@example.com".to_string());
    let name = env::var("PIX_NAME").unwrap_or_else(|_| "Loja Exemplo".to_string());
    let city = env::var("PIX_CITY").unwrap_or_else(|_| "São Paulo".to_string());

    let request = ChargeRequest::new(key, name, city, Decimal::new(14990, 2))
        .with_txid(TxId::new("123456").expect("static txid fits"));

    let payload = encode_payload(&request)?;
    info!("payload length: {} chars", payload.len());
    info!("crc self-check: {}", verify_crc(&payload));

    // The caller renders this as a QR image; here we just print it.
    println!("{payload}");
    Ok(())
}
