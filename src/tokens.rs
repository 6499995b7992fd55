//! Token registry and network constants for Stacks.
//!
//! The registry is a closed, process-wide immutable set: sBTC and USDCx as
//! SIP-010 contracts, STX as the chain's native asset under the `native`
//! sentinel identifier. Lookups are pure reads over static configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::X402Error;

/// CAIP-2 style identifier for Stacks mainnet.
pub const STACKS_MAINNET: &str = "stacks:1";

/// CAIP-2 style identifier for Stacks testnet.
pub const STACKS_TESTNET: &str = "stacks:2147483648";

/// Sentinel token identifier for the chain's native asset (STX).
pub const NATIVE_TOKEN: &str = "native";

/// Network identifiers this adapter recognizes.
pub const SUPPORTED_NETWORKS: [&str; 2] = [STACKS_MAINNET, STACKS_TESTNET];

/// Static description of a supported token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    /// On-chain identifier: a contract principal, or [`NATIVE_TOKEN`] for STX
    pub address: &'static str,
    /// Decimal precision of the smallest unit
    pub decimals: u32,
    /// Display symbol
    pub symbol: &'static str,
}

const SBTC: TokenInfo = TokenInfo {
    address: "SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9.token-sbtc",
    decimals: 8,
    symbol: "sBTC",
};

const STX: TokenInfo = TokenInfo {
    address: NATIVE_TOKEN,
    decimals: 6,
    symbol: "STX",
};

const USDCX: TokenInfo = TokenInfo {
    address: "SP3Y2ZSH8P7D50B0VBTSX11S7XSG24M1VB9YFQA4K.token-susdc",
    decimals: 6,
    symbol: "USDCx",
};

/// A token in the registry.
///
/// The set is closed: this adapter verifies payments only in the assets it
/// knows the on-chain shape of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSymbol {
    /// sBTC, the SIP-010 wrapped-bitcoin contract (8 decimals)
    #[serde(rename = "sBTC")]
    Sbtc,
    /// STX, the native Stacks asset (6 decimals)
    #[serde(rename = "STX")]
    Stx,
    /// USDCx, a SIP-010 stablecoin contract (6 decimals)
    #[serde(rename = "USDCx")]
    Usdcx,
}

impl TokenSymbol {
    /// Every token in the registry.
    pub const ALL: [TokenSymbol; 3] = [TokenSymbol::Sbtc, TokenSymbol::Stx, TokenSymbol::Usdcx];

    /// Registry entry for this token.
    pub const fn info(self) -> &'static TokenInfo {
        match self {
            TokenSymbol::Sbtc => &SBTC,
            TokenSymbol::Stx => &STX,
            TokenSymbol::Usdcx => &USDCX,
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().symbol)
    }
}

impl FromStr for TokenSymbol {
    type Err = X402Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenSymbol::ALL
            .into_iter()
            .find(|token| token.info().symbol.eq_ignore_ascii_case(s))
            .ok_or_else(|| X402Error::UnknownToken(s.to_string()))
    }
}

/// Looks up a token by its on-chain identifier, case-insensitively.
///
/// The `native` sentinel resolves to STX. Returns `None` for identifiers
/// outside the registry.
pub fn get_token_by_address(address: &str) -> Option<TokenSymbol> {
    TokenSymbol::ALL
        .into_iter()
        .find(|token| token.info().address.eq_ignore_ascii_case(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_entries() {
        assert_eq!(TokenSymbol::Sbtc.info().decimals, 8);
        assert_eq!(TokenSymbol::Stx.info().decimals, 6);
        assert_eq!(TokenSymbol::Usdcx.info().decimals, 6);
        assert_eq!(TokenSymbol::Stx.info().address, NATIVE_TOKEN);
    }

    #[test]
    fn test_lookup_by_symbol() {
        assert_eq!("sBTC".parse::<TokenSymbol>().unwrap(), TokenSymbol::Sbtc);
        assert_eq!("STX".parse::<TokenSymbol>().unwrap(), TokenSymbol::Stx);
        assert_eq!("usdcx".parse::<TokenSymbol>().unwrap(), TokenSymbol::Usdcx);
        assert!(matches!(
            "DOGE".parse::<TokenSymbol>(),
            Err(X402Error::UnknownToken(_))
        ));
    }

    #[test]
    fn test_lookup_by_address() {
        assert_eq!(
            get_token_by_address(TokenSymbol::Sbtc.info().address),
            Some(TokenSymbol::Sbtc)
        );
        assert_eq!(get_token_by_address("native"), Some(TokenSymbol::Stx));
        assert_eq!(get_token_by_address("SP123.unknown-token"), None);
    }

    #[test]
    fn test_lookup_by_address_is_case_insensitive() {
        let upper = TokenSymbol::Sbtc.info().address.to_uppercase();
        assert_eq!(get_token_by_address(&upper), Some(TokenSymbol::Sbtc));
        assert_eq!(get_token_by_address("NATIVE"), Some(TokenSymbol::Stx));
    }

    #[test]
    fn test_symbol_serde_round_trip() {
        let json = serde_json::to_string(&TokenSymbol::Sbtc).unwrap();
        assert_eq!(json, "\"sBTC\"");
        let back: TokenSymbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TokenSymbol::Sbtc);
    }
}
