//! # x402-stacks
//!
//! Stacks blockchain support for the x402 micropayment protocol: verify sBTC,
//! STX, and USDCx payments over HTTP 402 flows, drop-in compatible with the
//! x402 facilitator interface.
//!
//! The x402 protocol revitalizes the HTTP 402 "Payment Required" status code
//! to enable instant payments for web resources like APIs, content, or files.
//! On Stacks there is no separate settlement step: once a transaction is
//! confirmed it is final, so this crate verifies already-broadcast
//! transactions against an expected payment and treats that verification as
//! settlement.
//!
//! ## Features
//!
//! - **Verification**: fetch a transaction from the Hiro indexing API,
//!   classify it (native STX transfer vs SIP-010 `transfer` call), and match
//!   recipient, token, and minimum amount with integer-exact arithmetic
//! - **Requirements**: build x402 `PaymentRequirements` for 402 challenges
//! - **Amount codec**: convert between decimal strings and smallest units
//!   per token precision, round-trip exact
//! - **Facilitator surface**: supported networks, supported tokens,
//!   `verify`, `settle`, and per-network token listings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use x402_stacks::{Payment, StacksFacilitator};
//!
//! # async fn example() {
//! let facilitator = StacksFacilitator::new();
//!
//! let result = facilitator
//!     .verify(&Payment {
//!         tx_id: "0x1234...".to_string(),
//!         network: "stacks:1".to_string(),
//!         token: "native".to_string(),
//!         amount: "1000000".to_string(),
//!         recipient: "SP2ZNGJ85ENDY6QRHQ5P2D4FXKGZWCKTB2T0Z55KS".to_string(),
//!     })
//!     .await;
//!
//! if result.valid {
//!     println!("paid by {:?}", result.tx_id);
//! }
//! # }
//! ```
//!
//! ## Protocol Overview
//!
//! 1. **Client requests resource**: standard HTTP request
//! 2. **Server responds with 402**: carries `PaymentRequirements` naming
//!    recipient, token, and minimum amount
//! 3. **Client pays on Stacks**: broadcasts the transfer with its own wallet
//!    (this crate never constructs or signs transactions)
//! 4. **Client retries with payment**: `X-PAYMENT` header carrying the
//!    transaction id and claim, Base64 JSON
//! 5. **Server verifies**: the claim is resolved against the confirmed
//!    on-chain record; a valid outcome unlocks the resource
//!
//! ## Supported Tokens
//!
//! | Token | Identifier | Decimals |
//! |-------|------------|----------|
//! | sBTC  | `SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9.token-sbtc` | 8 |
//! | STX   | `native` | 6 |
//! | USDCx | `SP3Y2ZSH8P7D50B0VBTSX11S7XSG24M1VB9YFQA4K.token-susdc` | 6 |
//!
//! Networks: `stacks:1` (mainnet), `stacks:2147483648` (testnet).
//!
//! ## References
//!
//! - [x402 Specification](https://github.com/coinbase/x402)
//! - [Hiro Transactions API](https://docs.hiro.so/api)
//! - [SIP-010 Fungible Token Standard](https://github.com/stacksgov/sips/blob/main/sips/sip-010/sip-010-fungible-token-standard.md)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod amount;
pub mod errors;
pub mod facilitator;
pub mod hiro;
pub mod matcher;
pub mod requirements;
pub mod tokens;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use amount::{format_amount, parse_amount};
pub use errors::{Rejection, Result, X402Error};
pub use facilitator::{settle, verify, StacksFacilitator};
pub use hiro::{HiroClient, TransactionKind, TransactionRecord};
pub use requirements::{create_payment_requirements, AmountArg};
pub use tokens::{
    get_token_by_address, TokenInfo, TokenSymbol, NATIVE_TOKEN, STACKS_MAINNET, STACKS_TESTNET,
    SUPPORTED_NETWORKS,
};
pub use types::{Payment, PaymentRequirements, SettleResult, TokenListing, TokenMetadata, VerifyResult};
pub use utils::{decode_payment_header, encode_payment_header};
