//! Bank Ledger Library
//! # Overview
//!
//! This library manages a small set of bank accounts (name, balance) persisted
//! as a single JSON document, with an interactive menu and one-shot commands
//! on top.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, AccountId, LedgerError)
//! - [`storage`] - Whole-document persistence behind the [`storage::Storage`] trait
//! - [`core`] - Business logic components:
//!   - [`core::identifier`] - Unique 16-digit account identifier generation
//!   - [`core::ledger`] - The ledger store and every account-level operation
//! - [`cli`] - CLI argument parsing, commands and the interactive menu
//! - [`logging`] - tracing subscriber setup
//!
//! # Operations
//!
//! Every operation loads the full mapping, mutates it in memory and, if it
//! changed anything, rewrites the full mapping:
//!
//! - **Create**: New account with a zero balance and a fresh identifier
//! - **Delete**: Remove an account
//! - **Balance**: Read an account's balance
//! - **Credit**: Add any amount (including negative) to a balance
//! - **Transfer**: Move funds between two accounts, checked against the sender's balance
//! - **List**: All accounts by balance, highest first
//!
//! # Outcomes
//!
//! "Account not found" and "insufficient funds" are reported as
//! [`LedgerError`] variants for which [`LedgerError::is_fatal`] is false; they
//! never write to the store. Storage faults are fatal for the operation.

// Module declarations
pub mod cli;
pub mod core;
pub mod logging;
pub mod storage;
pub mod types;

pub use core::{LedgerConfig, LedgerStore, TransferReceipt};
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use types::{Account, AccountId, AccountMap, LedgerError};
