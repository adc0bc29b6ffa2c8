//! Command-line arguments.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{CliError, Result};

/// Output format of the compiled tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented JSON document.
    #[default]
    Json,
    /// Single-line JSON document.
    Compact,
    /// Indented text tree, one operator per line.
    Tree,
}

/// Compile a SQL query into a relational algebra tree.
#[derive(Debug, Parser)]
#[command(name = "sql-to-ra")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file (standard input if not specified).
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, env = "SQL_TO_RA_FORMAT", default_value_t = Format::Json)]
    pub format: Format,

    /// Wrap the document in an optimizer request envelope.
    #[arg(long)]
    pub envelope: bool,

    /// Read a JSON document instead of a SQL query.
    #[arg(long)]
    pub from_json: bool,

    /// Omit the banner line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Reads the whole input, from `file` or standard input.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Read` or `CliError::Stdin` if the input cannot be
    /// read.
    pub fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            }),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(CliError::Stdin)?;
                Ok(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sql-to-ra"]).unwrap();
        assert_eq!(cli.file, None);
        assert!(!cli.envelope && !cli.from_json && !cli.quiet && !cli.verbose);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "sql-to-ra",
            "--format",
            "tree",
            "--envelope",
            "--from-json",
            "-q",
            "-v",
            "query.sql",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::Tree);
        assert_eq!(cli.file, Some(PathBuf::from("query.sql")));
        assert!(cli.envelope && cli.from_json && cli.quiet && cli.verbose);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["sql-to-ra", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "SELECT a.id FROM a;").unwrap();
        let cli = Cli::try_parse_from(["sql-to-ra", file.path().to_str().unwrap()]).unwrap();
        assert_eq!(cli.read_input().unwrap(), "SELECT a.id FROM a;");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sql");
        let cli = Cli::try_parse_from(["sql-to-ra", path.to_str().unwrap()]).unwrap();
        assert!(matches!(cli.read_input(), Err(CliError::Read { .. })));
    }
}
