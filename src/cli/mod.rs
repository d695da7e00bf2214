// CLI module
// Command-line interface: argument parsing, one-shot commands and the interactive menu

mod args;
pub mod commands;
pub mod menu;
pub mod output;

pub use args::{CliArgs, Command};
pub use commands::{run_command, CliError};
pub use menu::Menu;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments, or --help flag), clap will
/// display an error message or help text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
