mod cli;
mod commands;
mod error;
mod logging;
mod metadata;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init(cli.log_format);
    debug!(command = ?cli.command, format = ?cli.format, "starting");

    let envelope = commands::run(&cli)?;
    output::render(&envelope, cli.format, cli.pretty, cli.output.as_deref())?;

    if cli.strict && !envelope.is_clean() {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
        });
    }

    Ok(ExitCode::SUCCESS)
}
