//! Command-line driver for the SQL to relational algebra compiler.
//!
//! `sql-to-ra` reads one query (from a file or standard input), compiles it
//! with [`sql_ra_core`] and prints the relational algebra tree.
//!
//! # CLI Usage
//!
//! ```bash
//! # Compile a query and print the JSON document
//! echo "SELECT a.id FROM a WHERE a.id = 5;" | sql-to-ra
//!
//! # Single-line document wrapped for the optimizer endpoints
//! sql-to-ra --format compact --envelope query.sql
//!
//! # Print a stored document as an indented tree
//! sql-to-ra --from-json --format tree plan.json
//! ```

pub mod cli;
pub mod driver;
pub mod error;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cli::{Cli, Format};
    pub use crate::driver::{compile, format, run, Status};
    pub use crate::error::{CliError, Result};
}
