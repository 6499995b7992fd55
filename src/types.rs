//! Core type definitions for the x402 Stacks adapter.
//!
//! This module contains the data structures exchanged over the protocol:
//! payment requirements, the claimed payment, and the verification and
//! settlement outcomes. All of them are created per call and never mutated
//! after construction.

use serde::{Deserialize, Serialize};

/// Describes how to pay for a resource on Stacks.
///
/// Returned inside a 402 response so the client knows which token, amount,
/// and recipient would satisfy the request. Immutable once built; see
/// [`create_payment_requirements`](crate::create_payment_requirements).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequirements {
    /// Network identifier (e.g. `stacks:1` for mainnet)
    pub network: String,

    /// Token identifier: a SIP-010 contract principal, or `native` for STX
    pub token: String,

    /// Minimum required amount in smallest units, as a decimal string
    pub amount: String,

    /// Stacks address to receive the payment
    pub recipient: String,

    /// Display metadata for client convenience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<TokenMetadata>,
}

/// Display metadata attached to [`PaymentRequirements`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Token display symbol (e.g. `sBTC`)
    pub name: String,

    /// Token decimal precision
    pub decimals: u32,
}

/// A claimed payment, supplied by the caller.
///
/// Nothing in here is trusted until [`verify`](crate::verify) resolves the
/// transaction id against the ledger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Id of the already-broadcast Stacks transaction
    #[serde(rename = "txId")]
    pub tx_id: String,

    /// Network identifier the payment claims to be on
    pub network: String,

    /// Token identifier: contract principal or `native`
    pub token: String,

    /// Minimum expected amount in smallest units, as a decimal string
    pub amount: String,

    /// Expected recipient address
    pub recipient: String,
}

/// Outcome of verifying a [`Payment`] against the ledger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerifyResult {
    /// Whether the on-chain transaction satisfies the claim
    pub valid: bool,

    /// Echoed transaction id on success
    #[serde(rename = "txId", skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,

    /// Reason the claim was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyResult {
    /// A valid outcome echoing the transaction id.
    pub fn ok(tx_id: impl Into<String>) -> Self {
        Self {
            valid: true,
            tx_id: Some(tx_id.into()),
            error: None,
        }
    }

    /// An invalid outcome carrying the rejection reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            tx_id: None,
            error: Some(reason.into()),
        }
    }
}

/// Outcome of settling a [`Payment`].
///
/// On Stacks, confirmation is final and irrevocable, so settlement is derived
/// deterministically from verification. Same fields, protocol-mandated names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SettleResult {
    /// Whether the payment is settled
    pub success: bool,

    /// Echoed transaction id on success
    #[serde(rename = "txId", skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,

    /// Reason settlement failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<VerifyResult> for SettleResult {
    fn from(result: VerifyResult) -> Self {
        Self {
            success: result.valid,
            tx_id: result.tx_id,
            error: result.error,
        }
    }
}

/// One entry of a [`get_tokens`](crate::StacksFacilitator::get_tokens) listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenListing {
    /// Token display symbol
    pub symbol: String,

    /// On-chain identifier
    pub address: String,

    /// Decimal precision
    pub decimals: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_serialization_uses_protocol_names() {
        let payment = Payment {
            tx_id: "0xdeadbeef".to_string(),
            network: "stacks:1".to_string(),
            token: "native".to_string(),
            amount: "1000".to_string(),
            recipient: "SP2ZNGJ85ENDY6QRHQ5P2D4FXKGZWCKTB2T0Z55KS".to_string(),
        };

        let json = serde_json::to_string(&payment).unwrap();
        assert!(json.contains("\"txId\":\"0xdeadbeef\""));

        let back: Payment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payment);
    }

    #[test]
    fn test_verify_result_constructors() {
        let ok = VerifyResult::ok("0xabc");
        assert!(ok.valid);
        assert_eq!(ok.tx_id.as_deref(), Some("0xabc"));
        assert!(ok.error.is_none());

        let invalid = VerifyResult::invalid("Transaction not found: 0xabc");
        assert!(!invalid.valid);
        assert!(invalid.tx_id.is_none());
        assert_eq!(invalid.error.as_deref(), Some("Transaction not found: 0xabc"));
    }

    #[test]
    fn test_settle_result_mirrors_verify_result() {
        let settle: SettleResult = VerifyResult::ok("0xabc").into();
        assert!(settle.success);
        assert_eq!(settle.tx_id.as_deref(), Some("0xabc"));

        let settle: SettleResult = VerifyResult::invalid("Not a contract call").into();
        assert!(!settle.success);
        assert_eq!(settle.error.as_deref(), Some("Not a contract call"));
    }

    #[test]
    fn test_requirements_omit_empty_extra() {
        let requirements = PaymentRequirements {
            network: "stacks:1".to_string(),
            token: "native".to_string(),
            amount: "1000000".to_string(),
            recipient: "SP2ZNGJ85ENDY6QRHQ5P2D4FXKGZWCKTB2T0Z55KS".to_string(),
            extra: None,
        };

        let json = serde_json::to_string(&requirements).unwrap();
        assert!(!json.contains("extra"));
    }
}
