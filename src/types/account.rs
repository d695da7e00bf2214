//! Account-related types for the bank ledger
//!
//! This module defines the Account record stored in the ledger and the
//! AccountId newtype used as its key.

use super::error::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Number of digits in an account identifier
pub const ACCOUNT_ID_LEN: usize = 16;

/// Account identifier
///
/// Exactly 16 decimal digits, each drawn from 1-9 (never 0). Identifiers
/// read from storage are validated on load, so a mapping never holds a
/// malformed key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Parse and validate an account identifier
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidAccountId` if the input is not exactly
    /// 16 characters of digits 1-9.
    pub fn parse(input: &str) -> Result<Self, LedgerError> {
        if Self::is_valid(input) {
            Ok(AccountId(input.to_string()))
        } else {
            Err(LedgerError::invalid_account_id(input))
        }
    }

    /// Whether `input` has the shape of an account identifier
    pub fn is_valid(input: &str) -> bool {
        input.len() == ACCOUNT_ID_LEN && input.bytes().all(|b| (b'1'..=b'9').contains(&b))
    }

    /// Wrap digits produced by the identifier generator
    pub(crate) fn from_generated(digits: String) -> Self {
        debug_assert!(Self::is_valid(&digits));
        AccountId(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(AccountId(value))
        } else {
            Err(LedgerError::invalid_account_id(&value))
        }
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

// Lets the ledger mapping be queried with a plain &str
impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single account record
///
/// Serialized as `{"name": "...", "balance": <number>}`. The balance is kept
/// as a `Decimal` in memory and written as a plain JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Display name of the account holder
    pub name: String,

    /// Current balance
    ///
    /// Not constrained to be non-negative: credits accept any amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(name: impl Into<String>) -> Self {
        Account {
            name: name.into(),
            balance: Decimal::ZERO,
        }
    }
}
