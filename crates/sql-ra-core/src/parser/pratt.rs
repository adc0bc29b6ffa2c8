//! Binding powers for the condition sub-grammar.
//!
//! Precedence from loosest to tightest: `OR`, `AND`, `NOT`, then
//! parenthesized groups and comparisons, which are parsed as primaries.

use crate::ast::CompareOp;
use crate::lexer::{Keyword, TokenKind};

/// Binding power of the `NOT` prefix operator.
///
/// Tighter than both `AND` and `OR`, so `NOT a AND b` is `(NOT a) AND b`.
pub const NOT_BINDING_POWER: u8 = 5;

/// Boolean connective found in infix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: `left_bp < right_bp`
///
/// Returns `None` if the token is not an infix connective.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(Connective, u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((Connective::Or, 1, 2)),
        TokenKind::Keyword(Keyword::And) => Some((Connective::And, 3, 4)),
        _ => None,
    }
}

/// Converts a token to a comparison operator.
#[must_use]
pub const fn token_to_compare_op(kind: &TokenKind) -> Option<CompareOp> {
    match kind {
        TokenKind::Eq => Some(CompareOp::Eq),
        TokenKind::Lt => Some(CompareOp::Lt),
        TokenKind::Gt => Some(CompareOp::Gt),
        TokenKind::LtEq => Some(CompareOp::Le),
        TokenKind::GtEq => Some(CompareOp::Ge),
        TokenKind::NotEq => Some(CompareOp::Ne),
        _ => None,
    }
}
