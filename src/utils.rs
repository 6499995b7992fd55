//! Helpers for the `X-PAYMENT` header.
//!
//! The x402 flow carries the claimed payment as Base64-encoded JSON in the
//! `X-PAYMENT` request header. These functions are the boundary glue a
//! payment-gated server needs; the decision logic never sees the encoding.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::errors::{Result, X402Error};
use crate::types::Payment;

/// Encodes a payment claim as Base64 JSON for the `X-PAYMENT` header.
///
/// # Examples
///
/// ```
/// use x402_stacks::{encode_payment_header, Payment};
///
/// let payment = Payment {
///     tx_id: "0xabc".to_string(),
///     network: "stacks:1".to_string(),
///     token: "native".to_string(),
///     amount: "1000".to_string(),
///     recipient: "SP2ZNGJ85ENDY6QRHQ5P2D4FXKGZWCKTB2T0Z55KS".to_string(),
/// };
///
/// let encoded = encode_payment_header(&payment).unwrap();
/// assert!(!encoded.is_empty());
/// ```
pub fn encode_payment_header(payment: &Payment) -> Result<String> {
    let json = serde_json::to_string(payment)?;
    Ok(BASE64.encode(json.as_bytes()))
}

/// Decodes a Base64 JSON payment claim from the `X-PAYMENT` header.
pub fn decode_payment_header(encoded: &str) -> Result<Payment> {
    let decoded = BASE64.decode(encoded.as_bytes())?;
    let json = String::from_utf8(decoded)
        .map_err(|e| X402Error::InvalidPayload(format!("Invalid UTF-8: {e}")))?;
    let payment: Payment = serde_json::from_str(&json)?;
    Ok(payment)
}
