//! Compiles one input and writes the result.

use std::io::{self, Write};
use std::process::ExitCode;

use sql_ra_core::boundary::OptimizeRequest;
use sql_ra_core::{document, render, RelNode};
use tracing::{debug, info};

use crate::cli::{Cli, Format};
use crate::error::Result;

/// Banner printed before a JSON document.
pub const JSON_BANNER: &str = "Parsing successful. Relational Algebra Tree (JSON format):";

/// Banner printed before a text tree.
pub const TREE_BANNER: &str = "Parsing successful. Relational Algebra Tree:";

/// Line printed on stdout when the input is rejected.
pub const FAILURE_LINE: &str = "Parsing failed.";

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The input was compiled and printed.
    Success,
    /// The input was rejected.
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::FAILURE,
        }
    }
}

/// Reads the input as SQL, or as a document when `--from-json` is set.
///
/// # Errors
///
/// Returns the parse or document error for rejected input.
pub fn compile(cli: &Cli, input: &str) -> Result<RelNode> {
    let tree = if cli.from_json {
        document::from_json(input)?
    } else {
        sql_ra_core::parse(input)?
    };
    info!(kind = tree.kind(), joins = tree.join_count(), "compiled input");
    Ok(tree)
}

/// Formats a compiled tree according to `--format` and `--envelope`.
///
/// # Errors
///
/// Returns `CliError::Document` if serialization fails.
pub fn format(cli: &Cli, tree: &RelNode) -> Result<String> {
    if cli.format == Format::Tree {
        if cli.envelope {
            debug!("--envelope has no effect on tree output");
        }
        return Ok(render::tree(tree));
    }

    let pretty = cli.format == Format::Json;
    let text = match (cli.envelope, pretty) {
        (true, true) => serde_json::to_string_pretty(&OptimizeRequest::new(tree))?,
        (true, false) => serde_json::to_string(&OptimizeRequest::new(tree))?,
        (false, true) => document::to_json_pretty(tree)?,
        (false, false) => document::to_json(tree)?,
    };
    Ok(text)
}

/// Compiles `input` and writes the outcome: the banner and output on
/// `stdout`, or the failure line on `stdout` and the diagnostic on
/// `stderr`.
///
/// # Errors
///
/// Returns an IO error only if writing to `stdout` or `stderr` fails.
pub fn run(
    cli: &Cli,
    input: &str,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<Status> {
    match compile(cli, input).and_then(|tree| format(cli, &tree)) {
        Ok(text) => {
            if !cli.quiet {
                let banner = if cli.format == Format::Tree {
                    TREE_BANNER
                } else {
                    JSON_BANNER
                };
                writeln!(stdout, "{banner}")?;
            }
            if text.ends_with('\n') {
                write!(stdout, "{text}")?;
            } else {
                writeln!(stdout, "{text}")?;
            }
            Ok(Status::Success)
        }
        Err(err) => {
            writeln!(stdout, "{FAILURE_LINE}")?;
            writeln!(stderr, "{err}")?;
            Ok(Status::Failure)
        }
    }
}
