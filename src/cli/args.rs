use crate::core::LedgerConfig;
use crate::storage::json_file::DEFAULT_LEDGER_FILE;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Manage bank accounts stored in a JSON ledger file
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Manage bank accounts stored in a JSON ledger file", long_about = None)]
pub struct CliArgs {
    /// Path of the ledger file
    #[arg(
        long = "file",
        short = 'f',
        value_name = "PATH",
        env = "BANK_LEDGER_FILE",
        default_value = DEFAULT_LEDGER_FILE,
        help = "Path to the JSON ledger file (created on first write)"
    )]
    pub file: PathBuf,

    /// Bound on account identifier regeneration
    #[arg(
        long = "max-id-attempts",
        value_name = "COUNT",
        help = "Maximum identifier candidates drawn when creating an account (default: 1000)"
    )]
    pub max_id_attempts: Option<usize>,

    /// Log filter directive
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Log filter, e.g. 'info' or 'bank_ledger=debug' (default: RUST_LOG or 'warn')"
    )]
    pub log_level: Option<String>,

    /// Emit JSON logs
    #[arg(long = "log-json", help = "Write logs to stderr as JSON")]
    pub log_json: bool,

    /// One-shot operation; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot ledger operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create an account and print its number
    Create {
        /// Account holder's name
        name: String,
    },
    /// Print an account's balance
    Balance {
        /// Account number
        id: String,
    },
    /// Add money to an account (negative amounts are applied as-is)
    Credit {
        /// Account number
        id: String,
        /// Amount to add
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Move money between two accounts
    Transfer {
        /// Sender's account number
        from: String,
        /// Recipient's account number
        to: String,
        /// Amount to move
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// List all accounts by balance, highest first
    List,
    /// Delete an account
    Delete {
        /// Account number
        id: String,
    },
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    ///
    /// Falls back to defaults for anything not provided.
    pub fn to_ledger_config(&self) -> LedgerConfig {
        match self.max_id_attempts {
            Some(attempts) => LedgerConfig::new(attempts),
            None => LedgerConfig::default(),
        }
    }
}
