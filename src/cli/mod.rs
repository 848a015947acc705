//! Command-line interface module.
//!
//! Provides argument parsing and the checks that turn raw arguments into a
//! scan request.

pub mod args;
pub mod normalize;

use clap::CommandFactory;
use tracing::warn;

pub use self::args::Args;
pub use self::normalize::{Invocation, normalize};

use crate::error::CliError;
use crate::report::{EXIT_FAILURE, EXIT_USAGE};

/// Reports a command-line problem on stderr and returns the exit code to use.
///
/// Usage errors print the full help text; validation errors print the message
/// and the one-line usage.
pub fn report_cli_error(error: &CliError) -> u8 {
    warn!(%error, "Rejected command line.");
    let mut command = Args::command();
    match error {
        CliError::Usage(_) => {
            eprintln!("error: {error}\n");
            eprintln!("{}", command.render_help());
            EXIT_USAGE
        }
        CliError::Validation { .. } => {
            eprintln!("error: {error}\n");
            eprintln!("{}", command.render_usage());
            EXIT_FAILURE
        }
    }
}
