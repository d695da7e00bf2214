//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records and identifiers
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{Account, AccountId, ACCOUNT_ID_LEN};
pub use error::LedgerError;

use std::collections::BTreeMap;

/// The full ledger mapping, from account identifier to account record
///
/// Ordered by identifier so serialization is deterministic.
pub type AccountMap = BTreeMap<AccountId, Account>;
