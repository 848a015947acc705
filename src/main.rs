// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use std::process::ExitCode;
use tracing::{error, info};

use observatory_scan::app::App;
use observatory_scan::cli::{self, Args};
use observatory_scan::core::scanner::RemoteScanner;
use observatory_scan::error::CliError;
use observatory_scan::logging;
use observatory_scan::report::EXIT_FAILURE;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    if let Err(e) = logging::initialize_logging() {
        eprintln!("warning: file logging disabled: {e}");
    }

    let args = Args::parse();

    let invocation = match cli::normalize(&args) {
        Ok(invocation) => invocation,
        Err(e) => return Ok(ExitCode::from(cli::report_cli_error(&e))),
    };

    let scanner = match RemoteScanner::new(&args.scanner_url) {
        Ok(scanner) => scanner,
        Err(e) => {
            let e = CliError::Validation { option: "--scanner-url", reason: e.to_string() };
            return Ok(ExitCode::from(cli::report_cli_error(&e)));
        }
    };
    info!(endpoint = %scanner.endpoint(), "Using remote scanner.");

    match App::new(invocation).run(&scanner).await {
        Ok(rendered) => {
            println!("{}", rendered.output);
            Ok(ExitCode::from(rendered.exit_code))
        }
        Err(e) => {
            error!(error = %e, "Could not render the report.");
            eprintln!("error: could not render the report: {e}");
            Ok(ExitCode::from(EXIT_FAILURE))
        }
    }
}
