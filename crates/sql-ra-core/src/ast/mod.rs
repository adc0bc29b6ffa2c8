//! Relational algebra AST produced by the parser.

mod condition;
mod relational;

pub use condition::{Column, CompareOp, Condition, Literal, Operand, WILDCARD};
pub use relational::{RelNode, Table};
