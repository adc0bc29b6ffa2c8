//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt parsing for
//! conditions. Semantic actions build the relational algebra tree directly.

mod error;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;

pub use error::ParseError;
pub use parser::Parser;
