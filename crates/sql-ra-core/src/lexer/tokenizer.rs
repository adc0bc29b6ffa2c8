//! SQL Tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments. Returns an error token for a block
    /// comment that is never closed.
    fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- line comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* block comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.start = self.pos;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => {
                            return Some(self.make_token(TokenKind::Error(String::from(
                                "unterminated block comment",
                            ))));
                        }
                    }
                }
                continue;
            }

            return None;
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        if let Some(keyword) = Keyword::from_str(text) {
            self.make_token(TokenKind::Keyword(keyword))
        } else {
            self.make_token(TokenKind::Identifier(String::from(text)))
        }
    }

    /// Scans a double-quoted identifier (e.g., "order").
    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance(); // opening quote
        let mut name = String::new();

        loop {
            match self.advance() {
                Some('"') if self.peek() == Some('"') => {
                    self.advance();
                    name.push('"');
                }
                Some('"') => break,
                Some(c) => name.push(c),
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "unterminated quoted identifier",
                    )));
                }
            }
        }

        if name.is_empty() {
            return self.make_token(TokenKind::Error(String::from("empty quoted identifier")));
        }
        self.make_token(TokenKind::Identifier(name))
    }

    /// Scans a number (integer or float), with an optional leading minus.
    fn scan_number(&mut self) -> Token {
        let mut is_float = false;

        if self.peek() == Some('-') {
            self.advance();
        }

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(); // .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') && self.exponent_follows() {
            is_float = true;
            self.advance(); // e/E
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];

        if is_float {
            match text.parse::<f64>() {
                Ok(f) if f.is_finite() => self.make_token(TokenKind::Float(f)),
                Ok(_) => self.make_token(TokenKind::Error(format!("float out of range: {text}"))),
                Err(e) => self.make_token(TokenKind::Error(format!("invalid float: {e}"))),
            }
        } else {
            match text.parse::<i64>() {
                Ok(i) => self.make_token(TokenKind::Integer(i)),
                Err(e) => self.make_token(TokenKind::Error(format!("invalid integer: {e}"))),
            }
        }
    }

    /// Returns true if the `e`/`E` at the cursor starts a well-formed exponent.
    fn exponent_follows(&self) -> bool {
        let mut chars = self.input[self.pos..].chars().skip(1);
        match chars.next() {
            Some('+' | '-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    /// Scans a single-quoted string literal.
    fn scan_string(&mut self) -> Token {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                // '' is an escaped quote
                Some('\'') if self.peek() == Some('\'') => {
                    self.advance();
                    value.push('\'');
                }
                Some('\'') => break,
                Some(c) => value.push(c),
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "unterminated string literal",
                    )));
                }
            }
        }

        self.make_token(TokenKind::String(value))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        if let Some(error) = self.skip_whitespace_and_comments() {
            return error;
        }
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '=' => self.make_token(TokenKind::Eq),
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Error(String::from("unexpected character '!'")))
                }
            }

            '\'' => {
                self.pos = self.start;
                self.scan_string()
            }
            '"' => {
                self.pos = self.start;
                self.scan_quoted_identifier()
            }

            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }
            '-' if self.peek().is_some_and(|n| n.is_ascii_digit()) => {
                self.pos = self.start;
                self.scan_number()
            }

            c if c.is_alphabetic() || c == '_' => {
                self.pos = self.start;
                self.scan_identifier()
            }

            _ => self.make_token(TokenKind::Error(format!("unexpected character '{c}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = vec![];
        loop {
            let token = lexer.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return tokens;
            }
        }
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Identifier(String::from(name))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_kinds(""), vec![TokenKind::Eof]);
        assert_eq!(token_kinds("   \n\t  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            token_kinds("SELECT -- comment\n/* block\n comment */ FROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("select FROM wHeRe join On as AND or nOt"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Keyword(Keyword::Join),
                TokenKind::Keyword(Keyword::On),
                TokenKind::Keyword(Keyword::As),
                TokenKind::Keyword(Keyword::And),
                TokenKind::Keyword(Keyword::Or),
                TokenKind::Keyword(Keyword::Not),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers_verbatim() {
        assert_eq!(
            token_kinds("Users _tmp1 orderId"),
            vec![ident("Users"), ident("_tmp1"), ident("orderId"), TokenKind::Eof]
        );
    }

    #[test]
    fn test_quoted_identifier() {
        assert_eq!(
            token_kinds("\"select\" \"a\"\"b\""),
            vec![ident("select"), ident("a\"b"), TokenKind::Eof]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 0 -7 3.25 1e3 2.5E-2"),
            vec![
                TokenKind::Integer(42),
                TokenKind::Integer(0),
                TokenKind::Integer(-7),
                TokenKind::Float(3.25),
                TokenKind::Float(1e3),
                TokenKind::Float(2.5e-2),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_integer_overflow_is_error() {
        let kinds = token_kinds("99999999999999999999");
        assert!(matches!(&kinds[0], TokenKind::Error(m) if m.starts_with("invalid integer")));
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            token_kinds("'hello' 'it''s' ''"),
            vec![
                TokenKind::String(String::from("hello")),
                TokenKind::String(String::from("it's")),
                TokenKind::String(String::new()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let kinds = token_kinds("'abc");
        assert_eq!(
            kinds[0],
            TokenKind::Error(String::from("unterminated string literal"))
        );
    }

    #[test]
    fn test_comparison_operators() {
        assert_eq!(
            token_kinds("= < > <= >= <> !="),
            vec![
                TokenKind::Eq,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            token_kinds(", . ( ) * ;"),
            vec![
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Star,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unknown_character() {
        let kinds = token_kinds("a @ b");
        assert_eq!(kinds[0], ident("a"));
        assert_eq!(
            kinds[1],
            TokenKind::Error(String::from("unexpected character '@'"))
        );
        assert_eq!(kinds[2], ident("b"));
    }

    #[test]
    fn test_dotted_reference() {
        assert_eq!(
            token_kinds("t.x.y"),
            vec![
                ident("t"),
                TokenKind::Dot,
                ident("x"),
                TokenKind::Dot,
                ident("y"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            token_kinds("SELECT a.id FROM a WHERE a.id = 5"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                ident("a"),
                TokenKind::Dot,
                ident("id"),
                TokenKind::Keyword(Keyword::From),
                ident("a"),
                TokenKind::Keyword(Keyword::Where),
                ident("a"),
                TokenKind::Dot,
                ident("id"),
                TokenKind::Eq,
                TokenKind::Integer(5),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT a.id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 8));
        assert_eq!(tokens[2].span, Span::new(8, 9));
        assert_eq!(tokens[3].span, Span::new(9, 11));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = tokenize("SELECT a.id /* AND a.x = 2");
        assert_eq!(
            tokens[4].kind,
            TokenKind::Error(String::from("unterminated block comment"))
        );
        assert_eq!(tokens[4].span, Span::new(12, 26));
        assert_eq!(tokens[5].kind, TokenKind::Eof);
    }
}
