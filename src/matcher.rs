//! Transaction classification and payment matching.
//!
//! [`match_payment`] is the decision core of the crate: given a fetched
//! transaction record and a claimed payment, it normalizes the record's two
//! transfer encodings (native STX transfer, SIP-010 `transfer` contract call)
//! into one comparison path and applies the match policy. It performs no I/O,
//! which keeps every branch unit-testable without an indexer.
//!
//! Policy: status must be `success`, transfer kind must agree with the
//! claimed token, token and recipient must match exactly, and the observed
//! amount must be at least the required amount (overpayment is accepted).

use alloy_primitives::U256;

use crate::errors::Rejection;
use crate::hiro::{ContractCallPayload, TokenTransferPayload, TransactionKind, TransactionRecord};
use crate::tokens::NATIVE_TOKEN;
use crate::types::Payment;

/// SIP-010 fungible-token transfer entry point.
const TRANSFER_FUNCTION: &str = "transfer";

/// Index of the `amount` argument in a SIP-010 `transfer` call.
const ARG_AMOUNT: usize = 0;

/// Index of the `recipient` argument in a SIP-010 `transfer` call.
const ARG_RECIPIENT: usize = 2;

/// Decides whether an on-chain record satisfies a claimed payment.
///
/// Returns `Ok(())` when every check passes, or the first [`Rejection`]
/// encountered. Callers that have already fetched a record can use this to
/// re-evaluate a claim without touching the network.
pub fn match_payment(record: &TransactionRecord, payment: &Payment) -> Result<(), Rejection> {
    if record.tx_status != "success" {
        return Err(Rejection::NotSuccessful(record.tx_status.clone()));
    }

    let required = parse_units(&payment.amount)
        .ok_or_else(|| Rejection::Other(format!("Invalid amount: {}", payment.amount)))?;

    let (recipient, amount) = if payment.token == NATIVE_TOKEN {
        extract_native(record)?
    } else {
        extract_contract_call(record, &payment.token)?
    };

    if recipient != payment.recipient {
        return Err(Rejection::RecipientMismatch {
            expected: payment.recipient.clone(),
            got: recipient,
        });
    }

    if amount < required {
        return Err(Rejection::AmountInsufficient {
            got: amount.to_string(),
            need: required.to_string(),
        });
    }

    Ok(())
}

/// Recipient and amount of a native STX transfer.
fn extract_native(record: &TransactionRecord) -> Result<(String, U256), Rejection> {
    let TransactionKind::TokenTransfer {
        token_transfer: TokenTransferPayload {
            recipient_address,
            amount,
        },
    } = &record.kind
    else {
        return Err(Rejection::NotTokenTransfer);
    };

    let amount = parse_units(amount)
        .ok_or_else(|| Rejection::Other(format!("Invalid amount: {amount}")))?;
    Ok((recipient_address.clone(), amount))
}

/// Recipient and amount of a SIP-010 `transfer` call against `expected_token`.
fn extract_contract_call(
    record: &TransactionRecord,
    expected_token: &str,
) -> Result<(String, U256), Rejection> {
    let TransactionKind::ContractCall {
        contract_call:
            ContractCallPayload {
                contract_id,
                function_name,
                function_args,
            },
    } = &record.kind
    else {
        return Err(Rejection::NotContractCall);
    };

    if function_name != TRANSFER_FUNCTION {
        return Err(Rejection::NotTransferFunction(function_name.clone()));
    }

    // Contract principals compare case-insensitively.
    if contract_id.to_lowercase() != expected_token.to_lowercase() {
        return Err(Rejection::TokenMismatch {
            expected: expected_token.to_string(),
            got: contract_id.clone(),
        });
    }

    if function_args.len() <= ARG_RECIPIENT {
        return Err(Rejection::InvalidTransferArguments);
    }

    let amount = clarity_uint(&function_args[ARG_AMOUNT].repr)
        .ok_or(Rejection::InvalidTransferArguments)?;
    let recipient = clarity_principal(&function_args[ARG_RECIPIENT].repr);

    Ok((recipient, amount))
}

/// Parses a decimal smallest-unit amount string.
fn parse_units(s: &str) -> Option<U256> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(s, 10).ok()
}

/// Parses a Clarity uint literal, e.g. `u10000`.
fn clarity_uint(repr: &str) -> Option<U256> {
    parse_units(repr.strip_prefix('u').unwrap_or(repr))
}

/// Strips the quoting from a Clarity principal literal, e.g. `'SP2ZNG...`.
fn clarity_principal(repr: &str) -> String {
    repr.replace('\'', "")
}
