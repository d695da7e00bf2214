//! User-facing text for ledger results
//!
//! Shared by the interactive menu and the one-shot subcommands so both print
//! the same messages. All functions only write to the given writer.

use crate::core::TransferReceipt;
use crate::types::{Account, AccountId, LedgerError};
use rust_decimal::Decimal;
use std::io::{self, Write};

pub fn write_created(output: &mut dyn Write, id: &AccountId) -> io::Result<()> {
    writeln!(output, "ACCOUNT SUCCESSFULLY CREATED!")?;
    writeln!(output, "YOUR ACCOUNT NUMBER IS: {}", id)
}

pub fn write_balance(output: &mut dyn Write, balance: Decimal) -> io::Result<()> {
    writeln!(output, "Your account balance is: {}$", balance)
}

pub fn write_credited(output: &mut dyn Write, balance: Decimal) -> io::Result<()> {
    writeln!(output, "Your total amount is: {}$", balance)
}

pub fn write_transfer(output: &mut dyn Write, receipt: &TransferReceipt) -> io::Result<()> {
    writeln!(
        output,
        "Transferred {}$ from account {} to {}",
        receipt.amount, receipt.from_name, receipt.to_name
    )
}

pub fn write_deleted(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "ACCOUNT NUMBER REMOVED!")
}

/// Write every account as a Name / Account number / Balance block
pub fn write_accounts(output: &mut dyn Write, accounts: &[(AccountId, Account)]) -> io::Result<()> {
    if accounts.is_empty() {
        return writeln!(output, "No accounts yet.");
    }

    for (id, account) in accounts {
        writeln!(output, "Name = {}", account.name)?;
        writeln!(output, "Account number = {}", id)?;
        writeln!(output, "Balance = {}", account.balance)?;
        writeln!(output)?;
    }
    Ok(())
}

/// Write the message for a ledger error
///
/// Non-fatal outcomes get the short user-facing wording; faults are prefixed
/// with "Error:".
pub fn write_error(output: &mut dyn Write, error: &LedgerError) -> io::Result<()> {
    match error {
        LedgerError::AccountNotFound { id } => {
            writeln!(output, "Account not found: {}", id)
        }
        LedgerError::InsufficientFunds { .. } => {
            writeln!(output, "Your account balance is not enough")
        }
        LedgerError::InvalidAmount { .. } | LedgerError::InvalidAccountId { .. } => {
            writeln!(output, "{}", error)
        }
        _ => writeln!(output, "Error: {}", error),
    }
}
