//! JSON document handling for the ledger mapping
//!
//! The persisted layout is a single object keyed by account identifier:
//!
//! ```json
//! {"1234567891234567": {"name": "Alice", "balance": 120.5}}
//! ```
//!
//! No schema version, no checksums. All functions are pure (no I/O).

use crate::types::AccountMap;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Serialize the mapping into its JSON document
pub fn encode_ledger(accounts: &AccountMap) -> Result<String, serde_json::Error> {
    serde_json::to_string(accounts)
}

/// Parse a JSON document into the mapping
///
/// Fails on malformed JSON, missing fields, non-numeric balances, and
/// keys that are not valid account identifiers.
pub fn decode_ledger(document: &str) -> Result<AccountMap, serde_json::Error> {
    serde_json::from_str(document)
}

/// Whether `balance` survives being written as a JSON number and read back
///
/// Balances are stored as f64, whose range is wider than `Decimal`'s. Values
/// at the edge of the `Decimal` range round to an f64 that no longer parses.
pub fn is_storable_balance(balance: Decimal) -> bool {
    balance
        .to_f64()
        .filter(|value| value.is_finite())
        .is_some_and(|value| Decimal::from_str(&value.to_string()).is_ok())
}
