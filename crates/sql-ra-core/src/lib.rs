//! # sql-ra-core
//!
//! Compiles a restricted SQL dialect into a relational algebra tree and
//! emits it as the canonical JSON document read by the plan optimizer and
//! visualizer.
//!
//! This crate provides:
//! - A hand-written lexer and recursive descent parser with Pratt parsing
//!   for `WHERE`/`ON` conditions
//! - The relational algebra AST (`Project`, `Select`, `Join`, `Subquery`, ...)
//! - The document serializer and reader
//!
//! ## Supported dialect
//!
//! ```text
//! SELECT (* | t.col [[AS] alias], ...)
//! FROM (table [[AS] alias] | (SELECT ...) [AS] alias)
//!      [JOIN table_or_subquery ON condition]*
//! [WHERE condition]
//! ```
//!
//! Joins compile to a left-deep chain in FROM-clause order:
//!
//! ```rust
//! use sql_ra_core::{parse, RelNode};
//!
//! let tree = parse("SELECT a.id FROM a JOIN b ON a.id = b.aid JOIN c ON b.id = c.bid").unwrap();
//! let RelNode::Project { input, .. } = tree else { unreachable!() };
//! let RelNode::Join { left, .. } = *input else { unreachable!() };
//! assert!(matches!(*left, RelNode::Join { .. }));
//! ```

pub mod ast;
pub mod boundary;
pub mod document;
pub mod lexer;
pub mod parser;
pub mod render;

pub use ast::{Column, CompareOp, Condition, Literal, Operand, RelNode, Table};
pub use document::{from_json, to_json, to_json_pretty, DocumentError, NodeDoc};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};

/// Parses one query into its relational algebra tree.
///
/// # Errors
///
/// Returns a `ParseError` on the first lexical or syntax error.
pub fn parse(sql: &str) -> Result<RelNode, ParseError> {
    Parser::new(sql).parse_query()
}
