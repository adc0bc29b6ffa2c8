//! SQL Parser implementation.

use tracing::{debug, trace};

use super::error::ParseError;
use super::pratt::{infix_binding_power, token_to_compare_op, Connective, NOT_BINDING_POWER};
use crate::ast::{Column, Condition, Literal, Operand, RelNode, Table, WILDCARD};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// Maximum nesting of subqueries, parentheses and `NOT` operators.
const MAX_DEPTH: usize = 128;

/// Maximum number of joins, `AND`/`OR` connectives and nesting levels in one
/// query, subqueries included. Bounds the height of the finished tree.
const MAX_OPERATORS: usize = 256;

/// SQL Parser.
///
/// Each parser owns its token stream and returns the finished tree from
/// [`Parser::parse_query`]; nothing is shared between parses.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
    operators: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            source: input,
            lexer,
            current,
            depth: 0,
            operators: 0,
        }
    }

    /// Parses one query, optionally terminated by `;`, and returns its
    /// relational algebra tree. The outermost node is always `Project`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid query. No partial
    /// tree is returned.
    pub fn parse_query(&mut self) -> Result<RelNode, ParseError> {
        let tree = self.parse_select_statement()?;

        if self.check(&TokenKind::Semicolon) {
            self.advance();
        }
        if !self.current.is_eof() {
            return Err(self.unexpected("end of query"));
        }

        debug!(
            joins = tree.join_count(),
            tables = tree.base_tables().len(),
            "parsed query"
        );
        Ok(tree)
    }

    /// Parses `SELECT select_list FROM join_list [WHERE condition]`.
    ///
    /// Subqueries re-enter here, so every nested query is an independent
    /// `Project` tree.
    fn parse_select_statement(&mut self) -> Result<RelNode, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let columns = self.parse_select_list()?;

        self.expect_keyword(Keyword::From)?;
        let mut input = self.parse_join_list()?;

        if self.check_keyword(Keyword::Where) {
            self.advance();
            let condition = self.parse_condition(0)?;
            trace!(%condition, "reduce select");
            input = input.select(condition);
        }

        trace!(columns = columns.len(), "reduce project");
        Ok(input.project(columns))
    }

    /// Parses `*` or a comma-separated list of (optionally aliased) columns.
    fn parse_select_list(&mut self) -> Result<Vec<Column>, ParseError> {
        if self.check(&TokenKind::Star) {
            self.advance();
            return Ok(vec![Column::wildcard()]);
        }

        let mut columns = vec![];
        loop {
            let column = self.parse_column_ref("column reference or '*'", true)?;

            // Output aliases have no place in the document and are dropped.
            if let Some(alias) = self.parse_optional_alias()? {
                debug!(%column, %alias, "dropping select-list alias");
            }
            columns.push(column);

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        Ok(columns)
    }

    /// Parses the FROM clause, folding each `JOIN ... ON ...` to the left.
    fn parse_join_list(&mut self) -> Result<RelNode, ParseError> {
        let mut tree = self.parse_first_item()?;

        while self.check_keyword(Keyword::Join) {
            self.charge()?;
            self.advance();
            let right = self.parse_table_item()?;

            if !self.check_keyword(Keyword::On) {
                return Err(self.error_here("JOIN requires an ON condition"));
            }
            self.advance();
            let condition = self.parse_condition(0)?;

            trace!(%condition, "reduce join");
            tree = tree.join(right, condition);
        }

        Ok(tree)
    }

    /// Parses the first FROM entry: a subquery, or one or more tables
    /// separated by commas that share a single base relation.
    fn parse_first_item(&mut self) -> Result<RelNode, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            return self.parse_subquery();
        }

        let mut tables = vec![self.parse_table_ref()?];
        while self.check(&TokenKind::Comma) {
            self.advance();
            if self.check(&TokenKind::LeftParen) {
                return Err(self.error_here(
                    "subqueries cannot appear in a comma-separated FROM list; use JOIN ... ON",
                ));
            }
            tables.push(self.parse_table_ref()?);
        }

        trace!(tables = tables.len(), "reduce base relation");
        Ok(RelNode::BaseRelation { tables })
    }

    /// Parses the operand of a JOIN: a table or a subquery.
    fn parse_table_item(&mut self) -> Result<RelNode, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            self.parse_subquery()
        } else {
            Ok(RelNode::base(self.parse_table_ref()?))
        }
    }

    /// Parses `name [[AS] alias]`.
    fn parse_table_ref(&mut self) -> Result<Table, ParseError> {
        let name = self.expect_identifier("table name")?;
        let alias = self.parse_optional_alias()?;
        Ok(Table { name, alias })
    }

    /// Parses `( select_stmt ) [AS] alias`; the alias is mandatory.
    fn parse_subquery(&mut self) -> Result<RelNode, ParseError> {
        self.expect(&TokenKind::LeftParen, "'('")?;
        self.enter()?;
        let inner = self.parse_select_statement()?;
        self.leave();
        self.expect(&TokenKind::RightParen, "')'")?;

        match self.parse_optional_alias()? {
            Some(alias) => {
                trace!(%alias, "reduce subquery");
                Ok(inner.subquery(alias))
            }
            None => Err(self.error_here("subquery in FROM requires an alias")),
        }
    }

    /// Parses an optional alias: `AS name` or a bare identifier.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.check_keyword(Keyword::As) {
            self.advance();
            Ok(Some(self.expect_identifier("alias")?))
        } else if matches!(&self.current.kind, TokenKind::Identifier(_)) {
            Ok(Some(self.expect_identifier("alias")?))
        } else {
            Ok(None)
        }
    }

    /// Parses `table.attr(.attr)*`, or `table.*` when `allow_star` is set.
    fn parse_column_ref(&mut self, expected: &str, allow_star: bool) -> Result<Column, ParseError> {
        let table = match &self.current.kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => return Err(self.unexpected(expected)),
        };
        let start = self.current.span;
        self.advance();

        if !self.check(&TokenKind::Dot) {
            if matches!(self.current.kind, TokenKind::Error(_)) {
                return Err(self.unexpected("'.'"));
            }
            return Err(ParseError::syntax(
                format!("column reference '{table}' must be qualified as table.column"),
                start,
                self.source,
            ));
        }
        self.advance();

        if allow_star && self.check(&TokenKind::Star) {
            self.advance();
            return Ok(Column::new(table, WILDCARD));
        }

        let mut attr = self.expect_identifier("column name")?;
        while self.check(&TokenKind::Dot) {
            self.advance();
            attr.push('.');
            attr.push_str(&self.expect_identifier("column name")?);
        }

        Ok(Column { table, attr })
    }

    /// Parses a condition using binding powers: `OR` < `AND` < `NOT`.
    fn parse_condition(&mut self, min_bp: u8) -> Result<Condition, ParseError> {
        let mut lhs = self.parse_condition_prefix()?;

        while let Some((connective, l_bp, r_bp)) = infix_binding_power(&self.current.kind) {
            if l_bp < min_bp {
                break;
            }
            self.charge()?;
            self.advance();
            let rhs = self.parse_condition(r_bp)?;
            lhs = match connective {
                Connective::And => lhs.and(rhs),
                Connective::Or => lhs.or(rhs),
            };
        }

        Ok(lhs)
    }

    /// Parses `NOT cond`, `( cond )` or a comparison.
    fn parse_condition_prefix(&mut self) -> Result<Condition, ParseError> {
        if self.check_keyword(Keyword::Not) {
            self.advance();
            self.enter()?;
            let inner = self.parse_condition(NOT_BINDING_POWER)?;
            self.leave();
            return Ok(inner.not());
        }

        if self.check(&TokenKind::LeftParen) {
            self.advance();
            self.enter()?;
            let inner = self.parse_condition(0)?;
            self.leave();
            self.expect(&TokenKind::RightParen, "')'")?;
            return Ok(inner);
        }

        self.parse_comparison()
    }

    /// Parses `column op (column | literal)`.
    fn parse_comparison(&mut self) -> Result<Condition, ParseError> {
        let left = self.parse_column_ref("column reference, NOT or '('", false)?;

        let Some(op) = token_to_compare_op(&self.current.kind) else {
            return Err(self.unexpected("comparison operator"));
        };
        self.advance();

        let right = match &self.current.kind {
            TokenKind::Integer(n) => {
                let value = *n;
                self.advance();
                Operand::Literal(Literal::Int(value))
            }
            TokenKind::Float(x) => {
                let value = *x;
                self.advance();
                Operand::Literal(Literal::Float(value))
            }
            TokenKind::String(s) => {
                let value = s.clone();
                self.advance();
                Operand::Literal(Literal::String(value))
            }
            TokenKind::Identifier(_) => {
                Operand::Column(self.parse_column_ref("column reference", false)?)
            }
            _ => return Err(self.unexpected("column reference or literal")),
        };

        Ok(Condition::Comparison { op, left, right })
    }

    // --- Helper methods ---

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Enters one nesting level.
    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error_here("query nesting is too deep"));
        }
        self.charge()
    }

    /// Counts one operator against the per-query budget.
    fn charge(&mut self) -> Result<(), ParseError> {
        self.operators += 1;
        if self.operators > MAX_OPERATORS {
            return Err(self.error_here("query is too large"));
        }
        Ok(())
    }

    /// Leaves one nesting level.
    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.as_keyword() == Some(keyword)
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self, expected: &str) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Builds an error for the current token. Lexer error tokens become
    /// lexical errors; anything else is a syntax error.
    fn unexpected(&self, expected: &str) -> ParseError {
        match &self.current.kind {
            TokenKind::Error(message) => {
                ParseError::lexical(message.clone(), self.current.span, self.source)
            }
            found => ParseError::unexpected(expected, found.clone(), self.current.span, self.source),
        }
    }

    /// Builds a free-form error located at the current token.
    fn error_here(&self, message: &str) -> ParseError {
        match &self.current.kind {
            TokenKind::Error(lexical) => {
                ParseError::lexical(lexical.clone(), self.current.span, self.source)
            }
            _ => ParseError::syntax(message, self.current.span, self.source),
        }
    }
}
