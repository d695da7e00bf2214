//! Storage module
//!
//! Handles whole-document persistence of the ledger mapping.
//!
//! # Components
//!
//! - `json_format` - JSON document handling (encode/decode of the mapping)
//! - `json_file` - The on-disk backing store
//! - `memory` - An in-memory backing store holding the same JSON document

pub mod json_file;
pub mod json_format;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use json_format::{decode_ledger, encode_ledger, is_storable_balance};
pub use memory::MemoryStorage;

use crate::types::{AccountMap, LedgerError};

/// Backing store for the ledger mapping
///
/// Every load reads the whole mapping and every save replaces it. There is
/// no incremental update, locking, or partial-write protection.
pub trait Storage {
    /// Load the full mapping
    ///
    /// Returns an empty mapping if nothing has been written yet.
    ///
    /// # Errors
    ///
    /// `LedgerError::StorageRead` if the store exists but cannot be read or parsed.
    fn load(&self) -> Result<AccountMap, LedgerError>;

    /// Replace the stored document with `accounts`
    ///
    /// # Errors
    ///
    /// `LedgerError::StorageWrite` on I/O failure.
    fn save(&mut self, accounts: &AccountMap) -> Result<(), LedgerError>;
}
