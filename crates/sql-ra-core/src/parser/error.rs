//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// A parse error. Parsing is all-or-nothing: the first error aborts the
/// whole query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The input contains a character sequence that is not a token.
    #[error("lexical error at line {line}, column {column}: {message}")]
    Lexical {
        /// The error message.
        message: String,
        /// The location of the offending text.
        span: Span,
        /// 1-based line of `span.start`.
        line: usize,
        /// 1-based column of `span.start`.
        column: usize,
    },

    /// The token stream does not match the grammar.
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        /// The error message.
        message: String,
        /// Expected tokens (if applicable).
        expected: Option<String>,
        /// The actual token found.
        found: Option<TokenKind>,
        /// The location of the error.
        span: Span,
        /// 1-based line of `span.start`.
        line: usize,
        /// 1-based column of `span.start`.
        column: usize,
    },
}

impl ParseError {
    /// Creates a lexical error for an `Error` token.
    #[must_use]
    pub fn lexical(message: impl Into<String>, span: Span, source: &str) -> Self {
        let (line, column) = span.line_col(source);
        Self::Lexical {
            message: message.into(),
            span,
            line,
            column,
        }
    }

    /// Creates a syntax error with a free-form message.
    #[must_use]
    pub fn syntax(message: impl Into<String>, span: Span, source: &str) -> Self {
        let (line, column) = span.line_col(source);
        Self::Syntax {
            message: message.into(),
            expected: None,
            found: None,
            span,
            line,
            column,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(
        expected: impl Into<String>,
        found: TokenKind,
        span: Span,
        source: &str,
    ) -> Self {
        let expected: String = expected.into();
        let (line, column) = span.line_col(source);
        let message = if matches!(found, TokenKind::Eof) {
            format!("unexpected end of input: expected {expected}")
        } else {
            format!("expected {expected}, found {}", found.describe())
        };
        Self::Syntax {
            message,
            expected: Some(expected),
            found: Some(found),
            span,
            line,
            column,
        }
    }

    /// Returns the location of the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lexical { span, .. } | Self::Syntax { span, .. } => *span,
        }
    }

    /// Returns the 1-based line and column of the error.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::Lexical { line, column, .. } | Self::Syntax { line, column, .. } => {
                (*line, *column)
            }
        }
    }

    /// Returns true for lexical errors.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexical { .. })
    }

    /// Returns the error message without location.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Lexical { message, .. } | Self::Syntax { message, .. } => message,
        }
    }
}
