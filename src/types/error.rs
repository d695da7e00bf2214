//! Error types for the bank ledger
//!
//! This module defines every outcome a ledger operation can report other
//! than success. Errors are designed to be descriptive and user-friendly
//! for CLI output.
//!
//! # Error Categories
//!
//! - **User outcomes**: Account not found, insufficient funds. These are
//!   non-fatal; the operation is a no-op and nothing is written.
//! - **Storage faults**: The backing store could not be read, parsed or
//!   written. Fatal for the current operation.
//! - **Input errors**: Malformed amounts or account identifiers typed by a user.
//! - **Internal limits**: Identifier retries exhausted, arithmetic overflow.

use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Main error type for the bank ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No account exists with the given identifier
    ///
    /// This is a recoverable outcome - the operation is skipped and the
    /// store is not rewritten.
    #[error("Account not found: {id}")]
    AccountNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// The sending account cannot cover a transfer
    ///
    /// This is a recoverable outcome - balances remain unchanged.
    #[error("Insufficient funds in account {id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Sending account identifier
        id: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },

    /// The backing store exists but could not be read or parsed
    #[error("Failed to read ledger from '{path}': {message}")]
    StorageRead {
        /// Path of the backing store
        path: String,
        /// Description of the failure
        message: String,
    },

    /// The backing store could not be written
    ///
    /// No partial-write protection exists, so the store may be left
    /// truncated or corrupted.
    #[error("Failed to write ledger to '{path}': {message}")]
    StorageWrite {
        /// Path of the backing store
        path: String,
        /// Description of the failure
        message: String,
    },

    /// Every generated identifier collided with an existing account
    #[error("Could not generate a unique account identifier after {attempts} attempts")]
    IdentifierSpaceExhausted {
        /// Number of candidates tried
        attempts: usize,
    },

    /// A balance update would overflow the decimal range
    #[error("Arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        id: String,
    },

    /// A user-supplied amount could not be parsed
    #[error("Invalid amount '{input}'")]
    InvalidAmount {
        /// The rejected input
        input: String,
    },

    /// A string does not have the shape of an account identifier
    #[error("Invalid account number '{input}': expected 16 digits from 1 to 9")]
    InvalidAccountId {
        /// The rejected input
        input: String,
    },
}

impl LedgerError {
    /// Whether the error aborts the current operation as a fault
    ///
    /// Not-found, insufficient-funds and input errors are outcomes to report
    /// to the user; everything else is fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LedgerError::StorageRead { .. }
                | LedgerError::StorageWrite { .. }
                | LedgerError::IdentifierSpaceExhausted { .. }
                | LedgerError::ArithmeticOverflow { .. }
        )
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        LedgerError::AccountNotFound { id: id.to_string() }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(id: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            id: id.to_string(),
            balance,
            requested,
        }
    }

    /// Create a StorageRead error
    pub fn storage_read(path: &Path, message: impl ToString) -> Self {
        LedgerError::StorageRead {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a StorageWrite error
    pub fn storage_write(path: &Path, message: impl ToString) -> Self {
        LedgerError::StorageWrite {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create an IdentifierSpaceExhausted error
    pub fn identifier_space_exhausted(attempts: usize) -> Self {
        LedgerError::IdentifierSpaceExhausted { attempts }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        LedgerError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an InvalidAccountId error
    pub fn invalid_account_id(input: &str) -> Self {
        LedgerError::InvalidAccountId {
            input: input.to_string(),
        }
    }
}
