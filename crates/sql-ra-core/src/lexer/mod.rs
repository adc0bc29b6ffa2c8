//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer that turns query text into a stream of tokens.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
