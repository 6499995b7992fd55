//! Fixed-point conversion between decimal amount strings and smallest units.
//!
//! Amounts denominate currency, so every conversion here is integer-exact:
//! [`U256`] arithmetic end to end, no floating point anywhere. The central
//! property is that `parse_amount(&format_amount(x, t), t) == x` for every
//! value in a token's precision domain.

use alloy_primitives::U256;

use crate::errors::{Result, X402Error};
use crate::tokens::TokenSymbol;

/// Parses a human-readable decimal amount into smallest units.
///
/// The fractional part is right-padded with zeros to the token's precision.
/// Digits beyond the precision are truncated, not rounded: `parse_amount`
/// of `"0.000000015"` for an 8-decimal token yields `1`, silently dropping
/// the ninth digit. Whole-number input without a separator is accepted.
///
/// # Examples
///
/// ```
/// use x402_stacks::{parse_amount, TokenSymbol};
/// use alloy_primitives::U256;
///
/// assert_eq!(parse_amount("1.5", TokenSymbol::Sbtc).unwrap(), U256::from(150_000_000u64));
/// assert_eq!(parse_amount("42", TokenSymbol::Stx).unwrap(), U256::from(42_000_000u64));
/// ```
pub fn parse_amount(amount: &str, token: TokenSymbol) -> Result<U256> {
    let decimals = token.info().decimals as usize;

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(X402Error::InvalidAmount(amount.to_string()));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(X402Error::InvalidAmount(amount.to_string()));
    }

    // Truncation, not rounding: excess precision is dropped.
    let fraction = &fraction[..fraction.len().min(decimals)];

    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    digits.push_str(fraction);
    for _ in fraction.len()..decimals {
        digits.push('0');
    }

    U256::from_str_radix(&digits, 10).map_err(|_| X402Error::InvalidAmount(amount.to_string()))
}

/// Formats a smallest-unit amount as a human-readable decimal string.
///
/// Trailing fractional zeros are stripped; the decimal point is omitted when
/// nothing remains behind it.
///
/// # Examples
///
/// ```
/// use x402_stacks::{format_amount, TokenSymbol};
/// use alloy_primitives::U256;
///
/// assert_eq!(format_amount(U256::from(150_000_000u64), TokenSymbol::Sbtc), "1.5");
/// assert_eq!(format_amount(U256::from(1u64), TokenSymbol::Sbtc), "0.00000001");
/// ```
pub fn format_amount(amount: U256, token: TokenSymbol) -> String {
    let decimals = token.info().decimals as usize;

    let digits = amount.to_string();
    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let boundary = padded.len() - decimals;

    let whole = &padded[..boundary];
    let fraction = padded[boundary..].trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sbtc_amounts() {
        assert_eq!(
            parse_amount("1", TokenSymbol::Sbtc).unwrap(),
            U256::from(100_000_000u64)
        );
        assert_eq!(
            parse_amount("0.1", TokenSymbol::Sbtc).unwrap(),
            U256::from(10_000_000u64)
        );
        assert_eq!(
            parse_amount("0.00000001", TokenSymbol::Sbtc).unwrap(),
            U256::from(1u64)
        );
        assert_eq!(
            parse_amount("1.5", TokenSymbol::Sbtc).unwrap(),
            U256::from(150_000_000u64)
        );
    }

    #[test]
    fn test_parse_stx_amounts() {
        assert_eq!(
            parse_amount("1", TokenSymbol::Stx).unwrap(),
            U256::from(1_000_000u64)
        );
        assert_eq!(
            parse_amount("0.1", TokenSymbol::Stx).unwrap(),
            U256::from(100_000u64)
        );
        assert_eq!(
            parse_amount("0.000001", TokenSymbol::Stx).unwrap(),
            U256::from(1u64)
        );
    }

    #[test]
    fn test_parse_amount_truncates_excess_precision() {
        // Ninth fractional digit on an 8-decimal token is dropped, not rounded.
        assert_eq!(
            parse_amount("0.000000019", TokenSymbol::Sbtc).unwrap(),
            U256::from(1u64)
        );
        assert_eq!(
            parse_amount("1.999999999", TokenSymbol::Sbtc).unwrap(),
            U256::from(199_999_999u64)
        );
    }

    #[test]
    fn test_parse_amount_edge_shapes() {
        // Trailing separator and bare fraction are both fine.
        assert_eq!(
            parse_amount("1.", TokenSymbol::Stx).unwrap(),
            U256::from(1_000_000u64)
        );
        assert_eq!(
            parse_amount(".5", TokenSymbol::Stx).unwrap(),
            U256::from(500_000u64)
        );
        assert_eq!(parse_amount("0", TokenSymbol::Sbtc).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("", TokenSymbol::Sbtc).is_err());
        assert!(parse_amount(".", TokenSymbol::Sbtc).is_err());
        assert!(parse_amount("-1", TokenSymbol::Sbtc).is_err());
        assert!(parse_amount("1,5", TokenSymbol::Sbtc).is_err());
        assert!(parse_amount("1.2.3", TokenSymbol::Sbtc).is_err());
        assert!(parse_amount("abc", TokenSymbol::Sbtc).is_err());
    }

    #[test]
    fn test_format_sbtc_amounts() {
        assert_eq!(format_amount(U256::from(100_000_000u64), TokenSymbol::Sbtc), "1");
        assert_eq!(format_amount(U256::from(10_000_000u64), TokenSymbol::Sbtc), "0.1");
        assert_eq!(format_amount(U256::from(1u64), TokenSymbol::Sbtc), "0.00000001");
        assert_eq!(format_amount(U256::from(150_000_000u64), TokenSymbol::Sbtc), "1.5");
    }

    #[test]
    fn test_format_stx_amounts() {
        assert_eq!(format_amount(U256::from(1_000_000u64), TokenSymbol::Stx), "1");
        assert_eq!(format_amount(U256::from(100_000u64), TokenSymbol::Stx), "0.1");
    }

    #[test]
    fn test_format_zero_has_no_fraction() {
        for token in TokenSymbol::ALL {
            assert_eq!(format_amount(U256::ZERO, token), "0");
        }
    }

    #[test]
    fn test_round_trip() {
        let values = [
            0u64,
            1,
            7,
            99,
            100_000_000,
            150_000_000,
            123_456_789,
            999_999_999_999,
            u64::MAX,
        ];
        for token in TokenSymbol::ALL {
            for value in values {
                let value = U256::from(value);
                let text = format_amount(value, token);
                assert_eq!(
                    parse_amount(&text, token).unwrap(),
                    value,
                    "round trip failed for {value} as {token}"
                );
            }
        }
    }
}
