//! Building x402 payment requirements for Stacks.

use alloy_primitives::U256;

use crate::tokens::{TokenSymbol, STACKS_MAINNET};
use crate::types::{PaymentRequirements, TokenMetadata};

/// Amount accepted by [`create_payment_requirements`]: either an already
/// stringified smallest-unit value or a [`U256`].
#[derive(Debug, Clone)]
pub enum AmountArg {
    /// Decimal string, kept verbatim
    Text(String),
    /// Smallest-unit value, stringified on build
    Units(U256),
}

impl From<&str> for AmountArg {
    fn from(value: &str) -> Self {
        AmountArg::Text(value.to_string())
    }
}

impl From<String> for AmountArg {
    fn from(value: String) -> Self {
        AmountArg::Text(value)
    }
}

impl From<U256> for AmountArg {
    fn from(value: U256) -> Self {
        AmountArg::Units(value)
    }
}

impl From<u64> for AmountArg {
    fn from(value: u64) -> Self {
        AmountArg::Units(U256::from(value))
    }
}

/// Creates x402 [`PaymentRequirements`] for a Stacks payment.
///
/// Stamps the mainnet network identifier, resolves the token's on-chain
/// identifier from the registry, and attaches display metadata (symbol and
/// decimals) for client convenience. Pure; no I/O.
///
/// # Examples
///
/// ```
/// use x402_stacks::{create_payment_requirements, TokenSymbol, STACKS_MAINNET};
///
/// let requirements = create_payment_requirements(
///     "SP2ZNGJ85ENDY6QRHQ5P2D4FXKGZWCKTB2T0Z55KS",
///     "10000",
///     TokenSymbol::Sbtc,
/// );
/// assert_eq!(requirements.network, STACKS_MAINNET);
/// assert_eq!(requirements.amount, "10000");
/// ```
pub fn create_payment_requirements(
    recipient: impl Into<String>,
    amount: impl Into<AmountArg>,
    token: TokenSymbol,
) -> PaymentRequirements {
    let info = token.info();
    let amount = match amount.into() {
        AmountArg::Text(text) => text,
        AmountArg::Units(units) => units.to_string(),
    };

    PaymentRequirements {
        network: STACKS_MAINNET.to_string(),
        token: info.address.to_string(),
        amount,
        recipient: recipient.into(),
        extra: Some(TokenMetadata {
            name: info.symbol.to_string(),
            decimals: info.decimals,
        }),
    }
}
