//! Facilitator façade for the x402 Stacks adapter.
//!
//! [`StacksFacilitator`] bundles the indexer client with the classifier and
//! registry behind the surface the surrounding protocol tooling expects:
//! supported networks and tokens, `verify`, `settle`, and per-network token
//! listings. Module-level [`verify`] and [`settle`] helpers run against a
//! shared default instance pointed at the public Hiro mainnet API.
//!
//! Settlement on Stacks is verification: a confirmed transaction is final,
//! so `settle` re-verifies and relabels the outcome.

use once_cell::sync::Lazy;
use url::Url;

use crate::errors::{Rejection, Result};
use crate::hiro::HiroClient;
use crate::matcher::match_payment;
use crate::tokens::{TokenSymbol, SUPPORTED_NETWORKS};
use crate::types::{Payment, SettleResult, TokenListing, VerifyResult};

static DEFAULT_FACILITATOR: Lazy<StacksFacilitator> = Lazy::new(StacksFacilitator::new);

/// Verifies and settles x402 payments on Stacks.
#[derive(Debug, Clone, Default)]
pub struct StacksFacilitator {
    hiro: HiroClient,
}

impl StacksFacilitator {
    /// Creates a facilitator against the public Hiro mainnet API.
    pub fn new() -> Self {
        Self {
            hiro: HiroClient::new(),
        }
    }

    /// Creates a facilitator against a custom indexer URL.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            hiro: HiroClient::with_base_url(base_url),
        })
    }

    /// Creates a facilitator over an already configured client.
    pub fn with_client(hiro: HiroClient) -> Self {
        Self { hiro }
    }

    /// Network identifiers this facilitator accepts.
    pub fn supported_networks(&self) -> &'static [&'static str] {
        &SUPPORTED_NETWORKS
    }

    /// On-chain identifiers of every token in the registry.
    pub fn supported_tokens(&self) -> Vec<&'static str> {
        TokenSymbol::ALL
            .into_iter()
            .map(|token| token.info().address)
            .collect()
    }

    /// Lists the registry for a network.
    ///
    /// A recognized network returns the full token set; an unrecognized one
    /// returns an empty listing. This is a discovery query, not a validation
    /// gate, so it never errors.
    pub fn get_tokens(&self, network: &str) -> Vec<TokenListing> {
        if !SUPPORTED_NETWORKS.contains(&network) {
            return Vec::new();
        }
        TokenSymbol::ALL
            .into_iter()
            .map(|token| {
                let info = token.info();
                TokenListing {
                    symbol: info.symbol.to_string(),
                    address: info.address.to_string(),
                    decimals: info.decimals,
                }
            })
            .collect()
    }

    /// Verifies a claimed payment against the ledger.
    ///
    /// Performs a single transaction fetch and evaluates the match policy.
    /// Every failure path, including transport faults, is reported as a
    /// non-valid outcome; this method does not fail past its boundary.
    pub async fn verify(&self, payment: &Payment) -> VerifyResult {
        match self.verify_inner(payment).await {
            Ok(()) => {
                tracing::debug!(tx_id = %payment.tx_id, "payment verified");
                VerifyResult::ok(payment.tx_id.clone())
            }
            Err(rejection) => {
                tracing::debug!(tx_id = %payment.tx_id, %rejection, "payment rejected");
                VerifyResult::invalid(rejection.to_string())
            }
        }
    }

    async fn verify_inner(&self, payment: &Payment) -> std::result::Result<(), Rejection> {
        let record = self
            .hiro
            .get_transaction(&payment.tx_id)
            .await
            .map_err(Rejection::from)?
            .ok_or_else(|| Rejection::NotFound(payment.tx_id.clone()))?;

        match_payment(&record, payment)
    }

    /// Settles a claimed payment.
    ///
    /// Ledger confirmation is already irrevocable on Stacks, so this
    /// delegates to [`verify`](Self::verify) and relabels the outcome.
    pub async fn settle(&self, payment: &Payment) -> SettleResult {
        self.verify(payment).await.into()
    }
}

/// Verifies a payment with the shared default facilitator.
pub async fn verify(payment: &Payment) -> VerifyResult {
    DEFAULT_FACILITATOR.verify(payment).await
}

/// Settles a payment with the shared default facilitator.
pub async fn settle(payment: &Payment) -> SettleResult {
    DEFAULT_FACILITATOR.settle(payment).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{STACKS_MAINNET, STACKS_TESTNET};

    #[test]
    fn test_supported_networks() {
        let facilitator = StacksFacilitator::new();
        assert_eq!(
            facilitator.supported_networks(),
            &[STACKS_MAINNET, STACKS_TESTNET]
        );
    }

    #[test]
    fn test_supported_tokens_cover_registry() {
        let facilitator = StacksFacilitator::new();
        let tokens = facilitator.supported_tokens();
        assert_eq!(tokens.len(), TokenSymbol::ALL.len());
        assert!(tokens.contains(&TokenSymbol::Sbtc.info().address));
        assert!(tokens.contains(&"native"));
    }

    #[test]
    fn test_get_tokens_for_recognized_networks() {
        let facilitator = StacksFacilitator::new();
        for network in [STACKS_MAINNET, STACKS_TESTNET] {
            let listing = facilitator.get_tokens(network);
            assert_eq!(listing.len(), TokenSymbol::ALL.len());
            assert!(listing.iter().any(|token| token.symbol == "sBTC"));
        }
    }

    #[test]
    fn test_get_tokens_for_unknown_network_is_empty() {
        let facilitator = StacksFacilitator::new();
        assert!(facilitator.get_tokens("unknown:1").is_empty());
        assert!(facilitator.get_tokens("").is_empty());
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        assert!(StacksFacilitator::with_base_url("not a url").is_err());
        assert!(StacksFacilitator::with_base_url("http://localhost:3999").is_ok());
    }
}
