//! sql-to-ra CLI
//!
//! Command-line tool compiling SQL queries into relational algebra trees.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use sql_ra::driver::FAILURE_LINE;
use sql_ra::prelude::*;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = match cli.read_input() {
        Ok(input) => input,
        Err(err) => {
            error!("{err}");
            println!("{FAILURE_LINE}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let status = run(&cli, &input, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(status.into())
}
