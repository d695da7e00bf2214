//! On-disk backing store
//!
//! Reads and rewrites a single JSON document. A missing file is treated as an
//! empty ledger and the file is created implicitly on the first save.
//!
//! # Limitations
//!
//! - Saves truncate and rewrite the file in place; a failure mid-write can
//!   leave it corrupted.
//! - The file is not locked. Concurrent processes sharing the same file race
//!   and the last writer wins.

use crate::storage::json_format::{decode_ledger, encode_ledger};
use crate::storage::Storage;
use crate::types::{AccountMap, LedgerError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Default file name of the backing store
pub const DEFAULT_LEDGER_FILE: &str = "banking_system.json";

/// JSON file backing store
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage handle for `path`
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<AccountMap, LedgerError> {
        let document = match fs::read_to_string(&self.path) {
            Ok(document) => document,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file absent, starting empty");
                return Ok(AccountMap::new());
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to read ledger file");
                return Err(LedgerError::storage_read(&self.path, e));
            }
        };

        let accounts = decode_ledger(&document).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to parse ledger file");
            LedgerError::storage_read(&self.path, e)
        })?;

        debug!(path = %self.path.display(), accounts = accounts.len(), "ledger loaded");
        Ok(accounts)
    }

    fn save(&mut self, accounts: &AccountMap) -> Result<(), LedgerError> {
        let document =
            encode_ledger(accounts).map_err(|e| LedgerError::storage_write(&self.path, e))?;

        fs::write(&self.path, document).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to write ledger file");
            LedgerError::storage_write(&self.path, e)
        })?;

        debug!(path = %self.path.display(), accounts = accounts.len(), "ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Account, AccountId};
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn sample_accounts() -> AccountMap {
        let mut accounts = AccountMap::new();
        accounts.insert(
            AccountId::parse("1234567891234567").unwrap(),
            Account {
                name: "Alice".to_string(),
                balance: Decimal::new(1205, 1),
            },
        );
        accounts
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("absent.json"));

        let accounts = storage.load().unwrap();

        assert!(accounts.is_empty());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_save_creates_file_and_load_reads_it_back() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("bank.json"));

        storage.save(&sample_accounts()).unwrap();

        assert!(storage.path().exists());
        assert_eq!(storage.load().unwrap(), sample_accounts());
    }

    #[test]
    fn test_load_corrupt_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(&path, "{ not json").unwrap();

        let result = JsonFileStorage::new(&path).load();

        assert!(matches!(result, Err(LedgerError::StorageRead { .. })));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = TempDir::new().unwrap();

        let result = JsonFileStorage::new(dir.path()).load();

        assert!(matches!(result, Err(LedgerError::StorageRead { .. })));
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("missing").join("bank.json"));

        let result = storage.save(&sample_accounts());

        assert!(matches!(result, Err(LedgerError::StorageWrite { .. })));
    }

    #[test]
    fn test_save_replaces_whole_document() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("bank.json"));

        storage.save(&sample_accounts()).unwrap();
        storage.save(&AccountMap::new()).unwrap();

        assert_eq!(fs::read_to_string(storage.path()).unwrap(), "{}");
    }
}
