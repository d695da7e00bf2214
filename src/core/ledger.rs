//! Ledger store
//!
//! This module provides `LedgerStore`, which owns the backing store handle and
//! implements every account-level operation on top of it.
//!
//! Each operation is a full load, mutate-in-memory, full save cycle. No state
//! is cached between calls: the mapping is loaded fresh every time and
//! discarded afterwards, so a failed operation never leaves a half-updated
//! mapping behind. Operations that end in a user outcome (`AccountNotFound`,
//! `InsufficientFunds`) return before saving.

use crate::core::identifier::{generate_identifier, DEFAULT_MAX_ID_ATTEMPTS};
use crate::storage::{is_storable_balance, Storage};
use crate::types::{Account, AccountId, AccountMap, LedgerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Configuration for the ledger store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Maximum number of identifier candidates drawn before giving up
    pub max_id_attempts: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }
}

impl LedgerConfig {
    /// Create a LedgerConfig with custom values
    ///
    /// A zero `max_id_attempts` falls back to the default.
    pub fn new(max_id_attempts: usize) -> Self {
        let default = Self::default();

        let max_id_attempts = if max_id_attempts == 0 {
            warn!(
                max_id_attempts,
                default = default.max_id_attempts,
                "invalid max_id_attempts, using default"
            );
            default.max_id_attempts
        } else {
            max_id_attempts
        };

        Self { max_id_attempts }
    }
}

/// Result of a successful transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    /// Name on the sending account
    pub from_name: String,
    /// Name on the receiving account
    pub to_name: String,
    /// Amount moved
    pub amount: Decimal,
}

/// Durable account mapping and all account-level operations
///
/// Generic over the backing store so the same operations run against a JSON
/// file or an in-memory document, and over the random source used for
/// identifier generation.
pub struct LedgerStore<S: Storage, R: Rng = StdRng> {
    storage: S,
    config: LedgerConfig,
    rng: R,
}

impl<S: Storage> LedgerStore<S> {
    /// Create a LedgerStore over `storage` with an entropy-seeded generator
    pub fn new(storage: S, config: LedgerConfig) -> Self {
        Self::with_rng(storage, config, StdRng::from_entropy())
    }
}

impl<S: Storage, R: Rng> LedgerStore<S, R> {
    /// Create a LedgerStore with an explicit random source
    pub fn with_rng(storage: S, config: LedgerConfig, rng: R) -> Self {
        LedgerStore {
            storage,
            config,
            rng,
        }
    }

    /// The backing store handle
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Load the full mapping from the backing store
    ///
    /// # Errors
    ///
    /// `LedgerError::StorageRead` if the store exists but cannot be read or parsed.
    pub fn load(&self) -> Result<AccountMap, LedgerError> {
        self.storage.load()
    }

    /// Overwrite the backing store with `accounts`
    ///
    /// # Errors
    ///
    /// `LedgerError::StorageWrite` on I/O failure.
    pub fn save(&mut self, accounts: &AccountMap) -> Result<(), LedgerError> {
        self.storage.save(accounts)
    }

    /// Create an account with a zero balance
    ///
    /// # Returns
    ///
    /// The freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Storage faults, or `IdentifierSpaceExhausted` if every candidate collided.
    pub fn create_account(&mut self, name: &str) -> Result<AccountId, LedgerError> {
        let mut accounts = self.load()?;

        let id = generate_identifier(&accounts, &mut self.rng, self.config.max_id_attempts)?;
        accounts.insert(id.clone(), Account::new(name));

        self.save(&accounts)?;
        info!(id = %id, name, "account created");
        Ok(id)
    }

    /// Delete an account
    ///
    /// # Returns
    ///
    /// The removed account record.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` (nothing written) or storage faults.
    pub fn delete_account(&mut self, id: &str) -> Result<Account, LedgerError> {
        let mut accounts = self.load()?;

        let Some(account) = accounts.remove(id) else {
            info!(id, "delete requested for unknown account");
            return Err(LedgerError::account_not_found(id));
        };

        self.save(&accounts)?;
        info!(id, "account deleted");
        Ok(account)
    }

    /// Look up a full account record. Read-only.
    pub fn get_account(&self, id: &str) -> Result<Account, LedgerError> {
        let mut accounts = self.load()?;
        accounts.remove(id).ok_or_else(|| {
            debug!(id, "lookup of unknown account");
            LedgerError::account_not_found(id)
        })
    }

    /// Current balance of an account. Read-only.
    pub fn get_balance(&self, id: &str) -> Result<Decimal, LedgerError> {
        self.get_account(id).map(|account| account.balance)
    }

    /// Add `amount` to an account's balance
    ///
    /// The amount is not validated: negative amounts are applied as-is. A
    /// result that could not be read back from the store is rejected as
    /// `ArithmeticOverflow`.
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` (nothing written), `ArithmeticOverflow`, or storage faults.
    pub fn credit(&mut self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        let mut accounts = self.load()?;

        let Some(account) = accounts.get_mut(id) else {
            info!(id, "credit requested for unknown account");
            return Err(LedgerError::account_not_found(id));
        };

        let new_balance = account
            .balance
            .checked_add(amount)
            .filter(|balance| is_storable_balance(*balance))
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", id))?;
        account.balance = new_balance;

        self.save(&accounts)?;
        info!(id, %amount, balance = %new_balance, "account credited");
        Ok(new_balance)
    }

    /// Move `amount` from one account to another
    ///
    /// Checks, in order: the sender exists, the receiver exists, the sender's
    /// balance covers `amount`. Any failed check returns without writing.
    /// On success both balances are updated and the store is saved once.
    ///
    /// A transfer from an account to itself leaves the balance unchanged but
    /// still rewrites the store.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`, `InsufficientFunds`, `ArithmeticOverflow`, or storage faults.
    pub fn transfer(
        &mut self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<TransferReceipt, LedgerError> {
        let mut accounts = self.load()?;

        let from_balance = match accounts.get(from_id) {
            Some(account) => account.balance,
            None => {
                info!(from_id, "transfer from unknown account");
                return Err(LedgerError::account_not_found(from_id));
            }
        };
        if !accounts.contains_key(to_id) {
            info!(to_id, "transfer to unknown account");
            return Err(LedgerError::account_not_found(to_id));
        }
        if from_balance < amount {
            info!(from_id, balance = %from_balance, %amount, "transfer rejected, insufficient funds");
            return Err(LedgerError::insufficient_funds(from_id, from_balance, amount));
        }

        let from_name = apply_delta(&mut accounts, from_id, amount, Decimal::checked_sub)?;
        let to_name = apply_delta(&mut accounts, to_id, amount, Decimal::checked_add)?;

        self.save(&accounts)?;
        info!(from_id, to_id, %amount, "transfer completed");
        Ok(TransferReceipt {
            from_name,
            to_name,
            amount,
        })
    }

    /// All accounts ordered by balance, highest first
    ///
    /// Ties keep ascending identifier order.
    pub fn list_by_balance_descending(&self) -> Result<Vec<(AccountId, Account)>, LedgerError> {
        let mut entries: Vec<(AccountId, Account)> = self.load()?.into_iter().collect();
        entries.sort_by(|(_, a), (_, b)| b.balance.cmp(&a.balance));
        Ok(entries)
    }
}

// Updates one balance in place and returns the account name
fn apply_delta(
    accounts: &mut AccountMap,
    id: &str,
    amount: Decimal,
    op: fn(Decimal, Decimal) -> Option<Decimal>,
) -> Result<String, LedgerError> {
    let account = accounts
        .get_mut(id)
        .ok_or_else(|| LedgerError::account_not_found(id))?;

    account.balance = op(account.balance, amount)
        .filter(|balance| is_storable_balance(*balance))
        .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", id))?;
    Ok(account.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use rstest::rstest;

    const ALICE: &str = "1111111111111111";
    const BOB: &str = "2222222222222222";
    const UNKNOWN: &str = "9999999999999999";

    fn seeded_store(document: &str) -> LedgerStore<MemoryStorage, StdRng> {
        LedgerStore::with_rng(
            MemoryStorage::with_document(document),
            LedgerConfig::default(),
            StdRng::seed_from_u64(11),
        )
    }

    fn two_accounts(alice: i64, bob: i64) -> LedgerStore<MemoryStorage, StdRng> {
        seeded_store(&format!(
            r#"{{"{ALICE}":{{"name":"Alice","balance":{alice}}},"{BOB}":{{"name":"Bob","balance":{bob}}}}}"#
        ))
    }

    fn empty_store() -> LedgerStore<MemoryStorage, StdRng> {
        LedgerStore::with_rng(
            MemoryStorage::new(),
            LedgerConfig::default(),
            StdRng::seed_from_u64(5),
        )
    }

    #[test]
    fn test_config_zero_attempts_falls_back_to_default() {
        assert_eq!(LedgerConfig::new(0), LedgerConfig::default());
        assert_eq!(LedgerConfig::new(7).max_id_attempts, 7);
    }

    #[test]
    fn test_create_account_starts_at_zero() {
        let mut store = empty_store();

        let id = store.create_account("X").unwrap();

        assert_eq!(store.get_balance(id.as_str()).unwrap(), Decimal::ZERO);
        assert_eq!(store.get_account(id.as_str()).unwrap().name, "X");
        assert_eq!(store.storage().save_count(), 1);
    }

    #[test]
    fn test_create_many_accounts_unique_ids() {
        let mut store = empty_store();

        let ids: Vec<AccountId> = (0..50)
            .map(|i| store.create_account(&format!("user {i}")).unwrap())
            .collect();

        let accounts = store.load().unwrap();
        assert_eq!(accounts.len(), 50);
        for id in &ids {
            assert!(AccountId::is_valid(id.as_str()));
            assert!(accounts.contains_key(id));
        }
    }

    #[test]
    fn test_create_account_preserves_existing_accounts() {
        let mut store = two_accounts(100, 0);

        store.create_account("Carol").unwrap();

        let accounts = store.load().unwrap();
        assert_eq!(accounts.len(), 3);
        assert_eq!(store.get_balance(ALICE).unwrap(), Decimal::from(100));
    }

    #[test]
    fn test_delete_account_removes_it() {
        let mut store = two_accounts(100, 0);

        let removed = store.delete_account(ALICE).unwrap();

        assert_eq!(removed.name, "Alice");
        assert_eq!(
            store.get_balance(ALICE),
            Err(LedgerError::account_not_found(ALICE))
        );
        assert_eq!(store.get_balance(BOB).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_delete_unknown_account_does_not_write() {
        let mut store = two_accounts(100, 0);
        let before = store.storage().document().map(str::to_string);

        let result = store.delete_account(UNKNOWN);

        assert_eq!(result, Err(LedgerError::account_not_found(UNKNOWN)));
        assert_eq!(store.storage().save_count(), 0);
        assert_eq!(store.storage().document().map(str::to_string), before);
    }

    #[test]
    fn test_credit_positive_then_negative() {
        let mut store = empty_store();
        let id = store.create_account("X").unwrap();

        assert_eq!(store.credit(id.as_str(), Decimal::from(50)).unwrap(), Decimal::from(50));
        assert_eq!(store.credit(id.as_str(), Decimal::from(-20)).unwrap(), Decimal::from(30));
        assert_eq!(store.get_balance(id.as_str()).unwrap(), Decimal::from(30));
    }

    #[test]
    fn test_credit_unknown_account_does_not_write() {
        let mut store = empty_store();

        let result = store.credit(UNKNOWN, Decimal::from(5));

        assert_eq!(result, Err(LedgerError::account_not_found(UNKNOWN)));
        assert_eq!(store.storage().save_count(), 0);
    }

    #[test]
    fn test_credit_overflow_does_not_write() {
        let mut store = two_accounts(1, 0);

        let result = store.credit(ALICE, Decimal::MAX);

        assert!(matches!(result, Err(LedgerError::ArithmeticOverflow { .. })));
        assert_eq!(store.storage().save_count(), 0);
        assert_eq!(store.get_balance(ALICE).unwrap(), Decimal::ONE);
    }

    #[rstest]
    #[case::max(Decimal::MAX)]
    #[case::min(Decimal::MIN)]
    fn test_credit_to_unstorable_balance_does_not_write(#[case] amount: Decimal) {
        let mut store = two_accounts(0, 0);

        let result = store.credit(ALICE, amount);

        assert_eq!(result, Err(LedgerError::arithmetic_overflow("credit", ALICE)));
        assert_eq!(store.storage().save_count(), 0);
        assert_eq!(store.get_balance(ALICE).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_transfer_to_unstorable_balance_does_not_write() {
        let mut store = two_accounts(0, 0);

        // 0 >= -MAX passes the funds check; the sender would end at MAX
        let result = store.transfer(ALICE, BOB, -Decimal::MAX);

        assert_eq!(result, Err(LedgerError::arithmetic_overflow("transfer", ALICE)));
        assert_eq!(store.storage().save_count(), 0);
        assert!(store.load().is_ok());
    }

    #[test]
    fn test_transfer_moves_funds() {
        let mut store = two_accounts(100, 0);

        let receipt = store.transfer(ALICE, BOB, Decimal::from(40)).unwrap();

        assert_eq!(
            receipt,
            TransferReceipt {
                from_name: "Alice".to_string(),
                to_name: "Bob".to_string(),
                amount: Decimal::from(40),
            }
        );
        assert_eq!(store.get_balance(ALICE).unwrap(), Decimal::from(60));
        assert_eq!(store.get_balance(BOB).unwrap(), Decimal::from(40));
        assert_eq!(store.storage().save_count(), 1);
    }

    #[test]
    fn test_transfer_exact_balance_allowed() {
        let mut store = two_accounts(40, 0);

        store.transfer(ALICE, BOB, Decimal::from(40)).unwrap();

        assert_eq!(store.get_balance(ALICE).unwrap(), Decimal::ZERO);
        assert_eq!(store.get_balance(BOB).unwrap(), Decimal::from(40));
    }

    #[test]
    fn test_transfer_insufficient_funds_leaves_balances() {
        let mut store = two_accounts(10, 0);

        let result = store.transfer(ALICE, BOB, Decimal::from(40));

        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(
                ALICE,
                Decimal::from(10),
                Decimal::from(40)
            ))
        );
        assert_eq!(store.get_balance(ALICE).unwrap(), Decimal::from(10));
        assert_eq!(store.get_balance(BOB).unwrap(), Decimal::ZERO);
        assert_eq!(store.storage().save_count(), 0);
    }

    #[rstest]
    #[case::unknown_sender(UNKNOWN, BOB, UNKNOWN)]
    #[case::unknown_receiver(ALICE, UNKNOWN, UNKNOWN)]
    #[case::sender_checked_first("8888888888888888", UNKNOWN, "8888888888888888")]
    fn test_transfer_unknown_account(
        #[case] from: &str,
        #[case] to: &str,
        #[case] reported: &str,
    ) {
        let mut store = two_accounts(100, 0);

        let result = store.transfer(from, to, Decimal::ONE);

        assert_eq!(result, Err(LedgerError::account_not_found(reported)));
        assert_eq!(store.storage().save_count(), 0);
        assert_eq!(store.get_balance(ALICE).unwrap(), Decimal::from(100));
    }

    #[test]
    fn test_transfer_not_found_checked_before_funds() {
        let mut store = two_accounts(0, 0);

        let result = store.transfer(ALICE, UNKNOWN, Decimal::from(1000));

        assert_eq!(result, Err(LedgerError::account_not_found(UNKNOWN)));
    }

    #[test]
    fn test_self_transfer_keeps_balance_but_saves() {
        let mut store = two_accounts(100, 0);

        let receipt = store.transfer(ALICE, ALICE, Decimal::from(30)).unwrap();

        assert_eq!(receipt.from_name, "Alice");
        assert_eq!(receipt.to_name, "Alice");
        assert_eq!(store.get_balance(ALICE).unwrap(), Decimal::from(100));
        assert_eq!(store.storage().save_count(), 1);
    }

    #[test]
    fn test_list_by_balance_descending() {
        let mut store = empty_store();
        for (name, balance) in [("ten", 10), ("fifty", 50), ("thirty", 30)] {
            let id = store.create_account(name).unwrap();
            store.credit(id.as_str(), Decimal::from(balance)).unwrap();
        }

        let balances: Vec<Decimal> = store
            .list_by_balance_descending()
            .unwrap()
            .into_iter()
            .map(|(_, account)| account.balance)
            .collect();

        assert_eq!(
            balances,
            vec![Decimal::from(50), Decimal::from(30), Decimal::from(10)]
        );
    }

    #[test]
    fn test_list_ties_keep_identifier_order() {
        let store = two_accounts(5, 5);

        let ids: Vec<String> = store
            .list_by_balance_descending()
            .unwrap()
            .into_iter()
            .map(|(id, _)| id.to_string())
            .collect();

        assert_eq!(ids, vec![ALICE.to_string(), BOB.to_string()]);
    }

    #[test]
    fn test_save_of_load_is_noop() {
        let mut store = two_accounts(100, 7);
        store.credit(ALICE, Decimal::new(5, 1)).unwrap();
        let before = store.storage().document().map(str::to_string);

        let accounts = store.load().unwrap();
        store.save(&accounts).unwrap();

        assert_eq!(store.storage().document().map(str::to_string), before);
    }

    #[test]
    fn test_corrupt_store_is_fatal_for_every_operation() {
        let mut store = seeded_store("{ broken");

        assert!(store.create_account("X").unwrap_err().is_fatal());
        assert!(store.get_balance(ALICE).unwrap_err().is_fatal());
        assert!(store.credit(ALICE, Decimal::ONE).unwrap_err().is_fatal());
        assert!(store.transfer(ALICE, BOB, Decimal::ONE).unwrap_err().is_fatal());
        assert!(store.delete_account(ALICE).unwrap_err().is_fatal());
        assert!(store.list_by_balance_descending().unwrap_err().is_fatal());
        assert_eq!(store.storage().save_count(), 0);
    }
}
