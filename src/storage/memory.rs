//! In-memory backing store
//!
//! Holds the serialized JSON document instead of a file, so loads and saves
//! go through exactly the same encoding as the on-disk store. Counts saves so
//! callers can verify that an operation did not write.

use crate::storage::json_format::{decode_ledger, encode_ledger};
use crate::storage::Storage;
use crate::types::{AccountMap, LedgerError};
use std::path::Path;

const MEMORY_PATH: &str = "<memory>";

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    document: Option<String>,
    saves: usize,
}

impl MemoryStorage {
    /// Create an empty store (nothing written yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `document`
    pub fn with_document(document: impl Into<String>) -> Self {
        MemoryStorage {
            document: Some(document.into()),
            saves: 0,
        }
    }

    /// The current stored document, if any
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<AccountMap, LedgerError> {
        match &self.document {
            None => Ok(AccountMap::new()),
            Some(document) => decode_ledger(document)
                .map_err(|e| LedgerError::storage_read(Path::new(MEMORY_PATH), e)),
        }
    }

    fn save(&mut self, accounts: &AccountMap) -> Result<(), LedgerError> {
        let document = encode_ledger(accounts)
            .map_err(|e| LedgerError::storage_write(Path::new(MEMORY_PATH), e))?;
        self.document = Some(document);
        self.saves += 1;
        Ok(())
    }
}
