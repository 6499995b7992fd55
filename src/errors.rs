//! Error types for the x402-stacks library.
//!
//! Two kinds of failure exist in this crate. [`X402Error`] covers API-level
//! faults returned by the codec, builder, and transport helpers. [`Rejection`]
//! is the verification taxonomy: every way a claimed payment can fail to match
//! the on-chain record. Rejections never escape [`StacksFacilitator::verify`]
//! as errors; they are folded into a non-valid [`VerifyResult`] whose `error`
//! string is the rejection's display form.
//!
//! [`StacksFacilitator::verify`]: crate::StacksFacilitator::verify
//! [`VerifyResult`]: crate::VerifyResult

use thiserror::Error;

/// Main error type for x402-stacks operations.
#[derive(Error, Debug)]
pub enum X402Error {
    /// Error during HTTP request/response handling
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during Base64 encoding/decoding
    #[error("Base64 error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    /// Invalid payment payload
    #[error("Invalid payment payload: {0}")]
    InvalidPayload(String),

    /// Token symbol or identifier not present in the registry
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Amount string that is not a non-negative decimal number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Error parsing URL
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
}

/// Result type alias for x402-stacks operations.
pub type Result<T> = std::result::Result<T, X402Error>;

/// Reasons a claimed payment fails verification against the ledger.
///
/// Each variant renders to a distinct human-readable message so a client can
/// decide whether to retry with a corrected payment or give up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The transaction id did not resolve on the indexer.
    #[error("Transaction not found: {0}")]
    NotFound(String),

    /// The transaction exists but did not succeed on-chain.
    #[error("Transaction not successful: {0}")]
    NotSuccessful(String),

    /// A native STX claim matched against something other than a plain
    /// `token_transfer` transaction.
    #[error("Not a token transfer")]
    NotTokenTransfer,

    /// A SIP-010 claim matched against something other than a contract call.
    #[error("Not a contract call")]
    NotContractCall,

    /// The invoked contract function is not the SIP-010 `transfer` entry point.
    #[error("Not a transfer function: {0}")]
    NotTransferFunction(String),

    /// The invoked contract is not the token the claim names.
    #[error("Token mismatch: expected {expected}, got {got}")]
    TokenMismatch {
        /// Contract id the claim names
        expected: String,
        /// Contract id the transaction actually invoked
        got: String,
    },

    /// The on-chain recipient is not the claimed recipient.
    #[error("Recipient mismatch: expected {expected}, got {got}")]
    RecipientMismatch {
        /// Address the claim names
        expected: String,
        /// Address the transfer actually paid
        got: String,
    },

    /// The transferred amount is below the required minimum.
    #[error("Amount insufficient: got {got}, need {need}")]
    AmountInsufficient {
        /// Amount observed on-chain, in smallest units
        got: String,
        /// Minimum the claim requires, in smallest units
        need: String,
    },

    /// The `transfer` call carried too few or unparseable arguments.
    #[error("Invalid transfer arguments")]
    InvalidTransferArguments,

    /// Network, decode, or claim-parse failure that prevented verification.
    #[error("{0}")]
    Other(String),
}

impl From<X402Error> for Rejection {
    fn from(err: X402Error) -> Self {
        Rejection::Other(err.to_string())
    }
}
