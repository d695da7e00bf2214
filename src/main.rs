//! Bank Ledger CLI
//!
//! Manage bank accounts stored in a JSON ledger file.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # interactive menu
//! cargo run -- --file bank.json create "Alice Smith"
//! cargo run -- credit 1234567891234567 50
//! cargo run -- transfer 1234567891234567 7654321987654321 12.5
//! cargo run -- list
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Fatal error (ledger file unreadable or unwritable, output failure)
//! - 2: Account not found or insufficient funds (one-shot commands only)

use bank_ledger::cli::{self, output, CliError, Menu};
use bank_ledger::logging;
use bank_ledger::{JsonFileStorage, LedgerStore};
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    logging::init(args.log_level.as_deref(), args.log_json);

    info!(file = %args.file.display(), "using ledger file");
    let storage = JsonFileStorage::new(&args.file);
    let mut store = LedgerStore::new(storage, args.to_ledger_config());

    let stdout = io::stdout();
    let result = match &args.command {
        Some(command) => cli::run_command(&mut store, command, &mut stdout.lock()),
        None => Menu::new(&mut store, io::stdin().lock(), stdout.lock()).run(),
    };

    if let Err(e) = result {
        match &e {
            CliError::Ledger(ledger_error) => {
                if ledger_error.is_fatal() {
                    error!(error = %ledger_error, "operation failed");
                }
                let _ = output::write_error(&mut io::stderr(), ledger_error);
            }
            CliError::Output(_) => eprintln!("Error: {}", e),
        }
        process::exit(e.exit_code());
    }
}
