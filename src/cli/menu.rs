//! Interactive text menu
//!
//! A thin caller over `LedgerStore`: it prompts, parses user input, invokes a
//! single ledger operation and prints the result. It holds no ledger logic.
//!
//! Non-fatal outcomes and storage faults are printed and the menu keeps
//! looping; only an output failure ends it with an error. End of input ends
//! the session like choosing EXIT.

use crate::cli::commands::CliError;
use crate::cli::output;
use crate::core::LedgerStore;
use crate::storage::Storage;
use crate::types::LedgerError;
use rand::Rng;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, error};

/// Menu entries in display order
const MENU_ITEMS: [&str; 7] = [
    "NEW ACCOUNT",
    "CHECK THE BALANCE",
    "ADD MONEY",
    "PERFORM TRANSACTION",
    "VIEW USER'S LIST BY BALANCE DECREASE",
    "DELETE ACCOUNT",
    "EXIT",
];

const SEPARATOR: &str = "--------------------------------";

/// Parse a user-typed amount
///
/// Accepts plain decimals ("12.50", "-3") and scientific notation ("1e3").
pub fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::invalid_amount(trimmed))
}

/// Interactive session over a ledger store
pub struct Menu<'a, S: Storage, R: Rng, I: BufRead, O: Write> {
    store: &'a mut LedgerStore<S, R>,
    input: I,
    output: O,
}

impl<'a, S: Storage, R: Rng, I: BufRead, O: Write> Menu<'a, S, R, I, O> {
    pub fn new(store: &'a mut LedgerStore<S, R>, input: I, output: O) -> Self {
        Menu {
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until EXIT or end of input
    pub fn run(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "----------------------")?;
        writeln!(self.output, "BANK MANAGEMENT SYSTEM")?;
        writeln!(self.output, "----------------------")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice please (1-7): ")? else {
                return Ok(());
            };
            debug!(choice = %choice, "menu choice");

            let keep_going = match choice.as_str() {
                "1" => self.create_account()?,
                "2" => self.check_balance()?,
                "3" => self.add_money()?,
                "4" => self.perform_transaction()?,
                "5" => self.list_accounts()?,
                "6" => self.delete_account()?,
                "7" => {
                    writeln!(self.output, "THANK YOU FOR USING OUR SERVICE!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "{}", SEPARATOR)?;
                    writeln!(self.output, "INVALID OPTION, PLEASE TRY AGAIN!")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
            writeln!(self.output)?;
        }
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        writeln!(self.output)?;
        writeln!(self.output, "MAIN MENU")?;
        for (index, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, item)?;
        }
        Ok(())
    }

    // Returns None at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>, CliError> {
        Ok(self
            .prompt_line(message)?
            .map(|line| line.trim().to_string()))
    }

    // Like `prompt`, but only the line terminator is removed
    fn prompt_line(&mut self, message: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    // Prints a ledger error; storage faults are logged as well
    fn report(&mut self, e: &LedgerError) -> Result<(), CliError> {
        if e.is_fatal() {
            error!(error = %e, "ledger operation failed");
        }
        output::write_error(&mut self.output, e)?;
        Ok(())
    }

    fn create_account(&mut self) -> Result<bool, CliError> {
        writeln!(self.output, "_______ CREATING AN ACCOUNT _______")?;
        let Some(name) = self.prompt_line("Enter your full name please: ")? else {
            return Ok(false);
        };

        match self.store.create_account(&name) {
            Ok(id) => {
                writeln!(self.output, "{}", SEPARATOR)?;
                output::write_created(&mut self.output, &id)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn check_balance(&mut self) -> Result<bool, CliError> {
        writeln!(self.output, "_______ CHECKING THE BALANCE _______")?;
        let Some(id) = self.prompt("Please enter account number for check: ")? else {
            return Ok(false);
        };

        match self.store.get_balance(&id) {
            Ok(balance) => output::write_balance(&mut self.output, balance)?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn add_money(&mut self) -> Result<bool, CliError> {
        writeln!(self.output, "_______ ADDING THE BALANCE _______")?;
        let Some(id) = self.prompt("Please enter account number for add a money: ")? else {
            return Ok(false);
        };
        writeln!(self.output, "Enter amount to be added")?;
        let Some(text) = self.prompt("Amount added: ")? else {
            return Ok(false);
        };
        let amount = match parse_amount(&text) {
            Ok(amount) => amount,
            Err(e) => {
                self.report(&e)?;
                return Ok(true);
            }
        };

        match self.store.credit(&id, amount) {
            Ok(balance) => output::write_credited(&mut self.output, balance)?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn perform_transaction(&mut self) -> Result<bool, CliError> {
        writeln!(self.output, "_______ PERFORMING TRANSACTION _______")?;
        let Some(from) = self.prompt("Sender's Account Number: ")? else {
            return Ok(false);
        };
        let Some(to) = self.prompt("Recipient's Account Number: ")? else {
            return Ok(false);
        };
        let Some(text) = self.prompt("Transaction Amount: ")? else {
            return Ok(false);
        };
        let amount = match parse_amount(&text) {
            Ok(amount) => amount,
            Err(e) => {
                self.report(&e)?;
                return Ok(true);
            }
        };

        match self.store.transfer(&from, &to, amount) {
            Ok(receipt) => output::write_transfer(&mut self.output, &receipt)?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn list_accounts(&mut self) -> Result<bool, CliError> {
        writeln!(self.output, "_______ SHOWING ALL ACCOUNTS _______")?;
        match self.store.list_by_balance_descending() {
            Ok(accounts) => output::write_accounts(&mut self.output, &accounts)?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn delete_account(&mut self) -> Result<bool, CliError> {
        writeln!(self.output, "_______ DELETING AN ACCOUNT _______")?;
        let Some(id) = self.prompt("Please enter account number for delete: ")? else {
            return Ok(false);
        };

        match self.store.delete_account(&id) {
            Ok(_) => output::write_deleted(&mut self.output)?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }
}
