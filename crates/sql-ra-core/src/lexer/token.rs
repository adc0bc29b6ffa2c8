//! Token types for the SQL lexer.

use super::Span;

/// Keywords of the supported SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Select,
    From,
    Where,
    Join,
    On,
    As,
    And,
    Or,
    Not,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "JOIN" => Some(Self::Join),
            "ON" => Some(Self::On),
            "AS" => Some(Self::As),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Join => "JOIN",
            Self::On => "ON",
            Self::As => "AS",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42)
    Integer(i64),
    /// Float literal (e.g., 3.14)
    Float(f64),
    /// String literal (e.g., 'hello')
    String(String),

    // Identifiers and keywords
    /// Identifier (e.g., `column_name`)
    Identifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Comparison operators
    /// =
    Eq,
    /// <> or !=
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Punctuation
    /// *
    Star,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// .
    Dot,
    /// ;
    Semicolon,

    // Special
    /// End of input
    Eof,
    /// Invalid/unknown token
    Error(String),
}

impl TokenKind {
    /// Short human-readable description used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(n) => format!("integer {n}"),
            Self::Float(f) => format!("float {f}"),
            Self::String(s) => format!("string '{s}'"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Keyword(kw) => format!("keyword {}", kw.as_str()),
            Self::Eq => String::from("'='"),
            Self::NotEq => String::from("'<>'"),
            Self::Lt => String::from("'<'"),
            Self::LtEq => String::from("'<='"),
            Self::Gt => String::from("'>'"),
            Self::GtEq => String::from("'>='"),
            Self::Star => String::from("'*'"),
            Self::LeftParen => String::from("'('"),
            Self::RightParen => String::from("')'"),
            Self::Comma => String::from("','"),
            Self::Dot => String::from("'.'"),
            Self::Semicolon => String::from("';'"),
            Self::Eof => String::from("end of input"),
            Self::Error(message) => message.clone(),
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("JoIn"), Some(Keyword::Join));
        assert_eq!(Keyword::from_str("group"), None);
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::Select.as_str(), "SELECT");
        assert_eq!(Keyword::Not.as_str(), "NOT");
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        let star = Token::new(TokenKind::Star, Span::new(0, 1));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(star.as_keyword(), None);
        assert!(!select.is_eof());
    }

    #[test]
    fn test_describe() {
        assert_eq!(TokenKind::Eof.describe(), "end of input");
        assert_eq!(
            TokenKind::Identifier(String::from("users")).describe(),
            "identifier 'users'"
        );
        assert_eq!(TokenKind::Keyword(Keyword::From).describe(), "keyword FROM");
    }
}
