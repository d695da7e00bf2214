//! Core business logic module
//!
//! - `identifier` - Account identifier generation
//! - `ledger` - The ledger store and all account-level operations

pub mod identifier;
pub mod ledger;

pub use identifier::{generate_identifier, DEFAULT_MAX_ID_ATTEMPTS};
pub use ledger::{LedgerConfig, LedgerStore, TransferReceipt};
