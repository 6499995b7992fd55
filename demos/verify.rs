//! Example one-shot payment verification from the command line.
//!
//! Fetches the transaction and prints the verification outcome.
//!
//! Run with:
//! ```bash
//! cargo run --example verify -- <tx_id>
//! ```
//!
//! Environment variables:
//! - PAY_TO: expected recipient address
//! - TOKEN: token identifier (default: native)
//! - AMOUNT: minimum amount in smallest units (default: 1)
//! - HIRO_API: indexer base URL (default: https://api.hiro.so)

use x402_stacks::{Payment, StacksFacilitator, STACKS_MAINNET};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let tx_id = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: verify <tx_id>"))?;

    let recipient = std::env::var("PAY_TO")
        .unwrap_or_else(|_| "SP2ZNGJ85ENDY6QRHQ5P2D4FXKGZWCKTB2T0Z55KS".to_string());
    let token = std::env::var("TOKEN").unwrap_or_else(|_| "native".to_string());
    let amount = std::env::var("AMOUNT").unwrap_or_else(|_| "1".to_string());

    let facilitator = match std::env::var("HIRO_API") {
        Ok(base_url) => StacksFacilitator::with_base_url(base_url)?,
        Err(_) => StacksFacilitator::new(),
    };

    let payment = Payment {
        tx_id,
        network: STACKS_MAINNET.to_string(),
        token,
        amount,
        recipient,
    };

    println!("Verifying {} ...", payment.tx_id);
    let result = facilitator.verify(&payment).await;

    if result.valid {
        println!("✅ valid: {}", result.tx_id.unwrap_or_default());
    } else {
        println!("❌ invalid: {}", result.error.unwrap_or_default());
    }

    Ok(())
}
