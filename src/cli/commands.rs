//! One-shot subcommand execution

use crate::cli::args::Command;
use crate::cli::output;
use crate::core::LedgerStore;
use crate::storage::Storage;
use crate::types::LedgerError;
use rand::Rng;
use std::io::{self, Write};
use thiserror::Error;

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    /// A ledger operation failed or reported a user outcome
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Writing to the terminal failed
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error
    ///
    /// - 1: fatal (storage fault, output failure, ...)
    /// - 2: non-fatal user outcome (not found, insufficient funds, bad input)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Ledger(e) if !e.is_fatal() => 2,
            _ => 1,
        }
    }
}

/// Run a single command against the ledger and print its result
///
/// # Errors
///
/// Ledger errors are returned unprinted so the caller decides where they go.
pub fn run_command<S: Storage, R: Rng>(
    store: &mut LedgerStore<S, R>,
    command: &Command,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Create { name } => {
            let id = store.create_account(name)?;
            output::write_created(output, &id)?;
        }
        Command::Balance { id } => {
            let balance = store.get_balance(id)?;
            output::write_balance(output, balance)?;
        }
        Command::Credit { id, amount } => {
            let balance = store.credit(id, *amount)?;
            output::write_credited(output, balance)?;
        }
        Command::Transfer { from, to, amount } => {
            let receipt = store.transfer(from, to, *amount)?;
            output::write_transfer(output, &receipt)?;
        }
        Command::List => {
            let accounts = store.list_by_balance_descending()?;
            output::write_accounts(output, &accounts)?;
        }
        Command::Delete { id } => {
            store.delete_account(id)?;
            output::write_deleted(output)?;
        }
    }
    Ok(())
}
