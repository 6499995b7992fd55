//! Client for the Hiro Stacks indexing API.
//!
//! One endpoint matters to this crate: `GET /extended/v1/tx/{tx_id}`, which
//! returns the confirmed view of a transaction. The record is modeled as a
//! tagged variant over the transaction kinds the verifier understands, with
//! everything else collapsing into [`TransactionKind::Other`].
//!
//! Each verification performs exactly one fetch here and suspends only at
//! that boundary. The client carries an explicit per-request deadline so an
//! unresponsive indexer cannot stall a verification indefinitely; there are
//! no retries (callers needing resilience retry the whole verification).

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::errors::Result;

/// Base URL of the public Hiro API.
pub const DEFAULT_HIRO_API: &str = "https://api.hiro.so";

/// Deadline applied to each transaction fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Confirmed transaction record, as reported by the indexer.
#[derive(Deserialize, Debug, Clone)]
pub struct TransactionRecord {
    /// Transaction id
    pub tx_id: String,

    /// On-chain status; anything but `success` means the transaction must
    /// not be treated as a payment
    pub tx_status: String,

    /// Kind-specific payload
    #[serde(flatten)]
    pub kind: TransactionKind,
}

/// The transaction shapes the verifier can classify.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "tx_type")]
pub enum TransactionKind {
    /// A plain transfer of the native asset (STX)
    #[serde(rename = "token_transfer")]
    TokenTransfer {
        /// Transfer payload
        token_transfer: TokenTransferPayload,
    },

    /// A smart-contract invocation, e.g. a SIP-010 `transfer` call
    #[serde(rename = "contract_call")]
    ContractCall {
        /// Call payload
        contract_call: ContractCallPayload,
    },

    /// Any other transaction kind (coinbase, contract deploy, ...)
    #[serde(other)]
    Other,
}

/// Payload of a native STX transfer.
#[derive(Deserialize, Debug, Clone)]
pub struct TokenTransferPayload {
    /// Receiving address
    pub recipient_address: String,

    /// Transferred amount in micro-STX, as a decimal string
    pub amount: String,
}

/// Payload of a contract call.
#[derive(Deserialize, Debug, Clone)]
pub struct ContractCallPayload {
    /// Principal of the invoked contract
    pub contract_id: String,

    /// Name of the invoked function
    pub function_name: String,

    /// Ordered arguments; for SIP-010 `transfer`:
    /// `(amount uint) (sender principal) (recipient principal) (memo (optional ...))`
    #[serde(default)]
    pub function_args: Vec<FunctionArg>,
}

/// One function argument in its textual Clarity representation,
/// e.g. `u10000` for a uint or `'SP2ZNG...` for a principal.
#[derive(Deserialize, Debug, Clone)]
pub struct FunctionArg {
    /// Clarity source representation of the value
    pub repr: String,
}

/// HTTP client for the transaction endpoint.
#[derive(Debug, Clone)]
pub struct HiroClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HiroClient {
    /// Creates a client against the public Hiro mainnet API.
    pub fn new() -> Self {
        let base_url = Url::parse(DEFAULT_HIRO_API).expect("default API URL is well-formed");
        Self::with_base_url(base_url)
    }

    /// Creates a client against a custom indexer, e.g. a testnet instance or
    /// a self-hosted node.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches a confirmed transaction by id.
    ///
    /// Returns `Ok(None)` when the indexer answers with a non-2xx status
    /// (unknown or not-yet-indexed transaction). Transport and decode
    /// failures are returned as errors.
    pub async fn get_transaction(&self, tx_id: &str) -> Result<Option<TransactionRecord>> {
        let url = self.base_url.join(&format!("extended/v1/tx/{tx_id}"))?;

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(tx_id, status = %response.status(), "transaction lookup unresolved");
            return Ok(None);
        }

        let record = response.json::<TransactionRecord>().await?;
        tracing::debug!(tx_id, status = %record.tx_status, "fetched transaction record");
        Ok(Some(record))
    }
}

impl Default for HiroClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_token_transfer_record() {
        let json = r#"{
            "tx_id": "0xabc",
            "tx_status": "success",
            "tx_type": "token_transfer",
            "token_transfer": {
                "recipient_address": "SP2ZNGJ85ENDY6QRHQ5P2D4FXKGZWCKTB2T0Z55KS",
                "amount": "1000000",
                "memo": "0x"
            }
        }"#;

        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tx_status, "success");
        match record.kind {
            TransactionKind::TokenTransfer { token_transfer } => {
                assert_eq!(token_transfer.amount, "1000000");
            }
            _ => panic!("expected a token transfer"),
        }
    }

    #[test]
    fn test_decodes_contract_call_record() {
        let json = r#"{
            "tx_id": "0xdef",
            "tx_status": "success",
            "tx_type": "contract_call",
            "contract_call": {
                "contract_id": "SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9.token-sbtc",
                "function_name": "transfer",
                "function_args": [
                    {"repr": "u10000"},
                    {"repr": "'SP1SENDER"},
                    {"repr": "'SP2RECIPIENT"},
                    {"repr": "none"}
                ]
            }
        }"#;

        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        match record.kind {
            TransactionKind::ContractCall { contract_call } => {
                assert_eq!(contract_call.function_name, "transfer");
                assert_eq!(contract_call.function_args.len(), 4);
                assert_eq!(contract_call.function_args[0].repr, "u10000");
            }
            _ => panic!("expected a contract call"),
        }
    }

    #[test]
    fn test_unknown_tx_type_collapses_to_other() {
        let json = r#"{
            "tx_id": "0x123",
            "tx_status": "success",
            "tx_type": "coinbase"
        }"#;

        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(record.kind, TransactionKind::Other));
    }

    #[test]
    fn test_contract_call_without_args_decodes_empty() {
        let json = r#"{
            "tx_id": "0x456",
            "tx_status": "success",
            "tx_type": "contract_call",
            "contract_call": {
                "contract_id": "SP1.thing",
                "function_name": "transfer"
            }
        }"#;

        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        match record.kind {
            TransactionKind::ContractCall { contract_call } => {
                assert!(contract_call.function_args.is_empty());
            }
            _ => panic!("expected a contract call"),
        }
    }
}
