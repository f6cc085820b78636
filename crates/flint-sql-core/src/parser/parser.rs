//! SQL Parser implementation.

use tracing::{debug, trace};

use super::error::ParseError;
use super::pratt::{
    arithmetic_binding_power, logical_binding_power, token_to_binary_op, token_to_comparison_op,
};
use crate::ast::{
    CreateIndexSpec, CreateTableStatement, DeleteStatement, Expr, FromClause, FunctionCall,
    Identifier, InsertStatement, Join, Literal, OrderItem, QualifiedField, SelectItem,
    SelectStatement, Statement, UpdateAssignment, UpdateStatement,
};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// A grammar rule usable as an ordered alternative.
type Rule<T> = fn(&mut Parser) -> Result<T, ParseError>;

/// SQL Parser.
///
/// The whole input is tokenized up front so that any rule can be retried
/// from a saved cursor position.
pub struct Parser {
    tokens: Vec<Token>,
    /// Index of the current token; never moves past the trailing `Eof`.
    pos: usize,
    /// The failure that got furthest into the input so far.
    furthest: Option<ParseError>,
}

impl Parser {
    /// Creates a new parser for the given input.
    ///
    /// # Errors
    ///
    /// Returns a lexical `ParseError` if the input cannot be tokenized.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            furthest: None,
        })
    }

    /// Parses a single SQL statement spanning the whole input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if no statement form matches the entire
    /// input. The error reported is the one that progressed furthest.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.rewind();
        let alternatives: [(&str, Rule<Statement>); 6] = [
            ("SELECT", Self::complete_select),
            ("INSERT", Self::complete_insert),
            ("UPDATE", Self::complete_update),
            ("DELETE", Self::complete_delete),
            ("CREATE TABLE", Self::complete_create_table),
            ("CREATE INDEX", Self::complete_create_index),
        ];
        match self.first_of("SELECT, INSERT, UPDATE, DELETE or CREATE", &alternatives) {
            Ok(stmt) => {
                debug!(%stmt, "parsed statement");
                Ok(stmt)
            }
            Err(err) => Err(self.furthest_error(err)),
        }
    }

    /// Parses an arithmetic expression spanning the whole input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a single expression.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.rewind();
        self.complete(|p| p.parse_arithmetic(0))
            .map_err(|err| self.furthest_error(err))
    }

    /// Parses a logical condition (comparisons and BETWEEN joined by
    /// AND/OR) spanning the whole input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a single condition.
    pub fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        self.rewind();
        self.complete(|p| p.parse_logic(0))
            .map_err(|err| self.furthest_error(err))
    }

    // --- Statements ---

    fn complete_select(&mut self) -> Result<Statement, ParseError> {
        self.complete(Self::parse_select_statement)
            .map(Statement::Select)
    }

    fn complete_insert(&mut self) -> Result<Statement, ParseError> {
        self.complete(Self::parse_insert_statement)
            .map(Statement::Insert)
    }

    fn complete_update(&mut self) -> Result<Statement, ParseError> {
        self.complete(Self::parse_update_statement)
            .map(Statement::Update)
    }

    fn complete_delete(&mut self) -> Result<Statement, ParseError> {
        self.complete(Self::parse_delete_statement)
            .map(Statement::Delete)
    }

    fn complete_create_table(&mut self) -> Result<Statement, ParseError> {
        self.complete(Self::parse_create_table_statement)
            .map(Statement::CreateTable)
    }

    fn complete_create_index(&mut self) -> Result<Statement, ParseError> {
        self.complete(Self::parse_create_index_statement)
            .map(Statement::CreateIndex)
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        let items = self.parse_select_items()?;
        let from = self.parse_from_clause()?;
        let where_clause = self.parse_optional_where()?;

        // HAVING is only accepted as part of a GROUP BY clause
        let (group_by, having) = if self.check_keyword(Keyword::Group) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            let group_by = self.parse_group_by_list()?;
            let having = if self.check_keyword(Keyword::Having) {
                self.advance();
                Some(self.parse_logic(0)?)
            } else {
                None
            };
            (group_by, having)
        } else {
            (vec![], None)
        };

        let order_by = if self.check_keyword(Keyword::Order) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_list()?
        } else {
            vec![]
        };

        Ok(SelectStatement {
            items,
            from,
            where_clause,
            group_by,
            having,
            order_by,
        })
    }

    /// Parses the SELECT list: a lone `*` or one or more expressions.
    fn parse_select_items(&mut self) -> Result<Vec<SelectItem>, ParseError> {
        if self.check(&TokenKind::Star) {
            self.advance();
            return Ok(vec![SelectItem::Wildcard]);
        }

        let mut items = vec![];
        loop {
            items.push(SelectItem::Expr(self.parse_arithmetic(0)?));
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses `FROM table` followed by any number of `LEFT JOIN`s.
    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        self.expect_keyword(Keyword::From)?;
        let table = self.expect_identifier()?;

        let mut joins = vec![];
        while self.check_keyword(Keyword::Left) {
            self.advance();
            self.expect_keyword(Keyword::Join)?;
            let table = self.expect_identifier()?;
            self.expect_keyword(Keyword::On)?;
            let condition = self.parse_logic(0)?;
            joins.push(Join { table, condition });
        }

        Ok(FromClause { table, joins })
    }

    fn parse_optional_where(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.check_keyword(Keyword::Where) {
            self.advance();
            Ok(Some(self.parse_logic(0)?))
        } else {
            Ok(None)
        }
    }

    /// Parses GROUP BY fields: qualified fields or bare identifiers.
    fn parse_group_by_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let alternatives: [(&str, Rule<Expr>); 2] = [
            ("qualified field", Self::parse_qualified_field),
            ("identifier", Self::parse_identifier_value),
        ];
        let mut fields = vec![];
        loop {
            fields.push(self.first_of("field name", &alternatives)?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(fields)
    }

    /// Parses ORDER BY entries.
    fn parse_order_by_list(&mut self) -> Result<Vec<OrderItem>, ParseError> {
        let mut items = vec![];
        loop {
            let expr = self.parse_arithmetic(0)?;
            let ascending = if self.check_keyword(Keyword::Desc) {
                self.advance();
                false
            } else {
                if self.check_keyword(Keyword::Asc) {
                    self.advance();
                }
                true
            };
            items.push(OrderItem { expr, ascending });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;
        let table = self.expect_identifier()?;

        let fields = if self.check(&TokenKind::LeftParen) {
            Some(self.parse_parenthesized_identifiers()?)
        } else {
            None
        };

        self.expect_keyword(Keyword::Values)?;
        let mut rows = vec![];
        loop {
            rows.push(self.parse_value_row()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        Ok(InsertStatement {
            table,
            fields,
            rows,
        })
    }

    /// Parses one parenthesized row of literals for INSERT.
    fn parse_value_row(&mut self) -> Result<Vec<Literal>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut row = vec![];
        loop {
            row.push(self.expect_literal()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(row)
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.expect_identifier()?;
        self.expect_keyword(Keyword::Set)?;

        let mut assignments = vec![];
        loop {
            let field = self.expect_identifier()?;
            self.expect(&TokenKind::Eq)?;
            let value = self.parse_arithmetic(0)?;
            assignments.push(UpdateAssignment { field, value });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        let where_clause = self.parse_optional_where()?;

        Ok(UpdateStatement {
            table,
            assignments,
            where_clause,
        })
    }

    /// Parses a DELETE statement; `DELETE * FROM` equals `DELETE FROM`.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        self.eat(&TokenKind::Star);
        self.expect_keyword(Keyword::From)?;
        let table = self.expect_identifier()?;
        let where_clause = self.parse_optional_where()?;

        Ok(DeleteStatement {
            table,
            where_clause,
        })
    }

    /// Parses a CREATE TABLE statement.
    ///
    /// The parenthesized list mixes field names and inline `INDEX`
    /// definitions; at least one field name is required.
    fn parse_create_table_statement(&mut self) -> Result<CreateTableStatement, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.expect_identifier()?;

        let open = self.current().span;
        self.expect(&TokenKind::LeftParen)?;
        let mut fields = vec![];
        let mut indexes = vec![];
        loop {
            if self.check_keyword(Keyword::Index) {
                indexes.push(self.parse_inline_index()?);
            } else {
                fields.push(self.expect_identifier()?);
            }
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;

        if fields.is_empty() {
            return Err(ParseError::new(
                "CREATE TABLE requires at least one field",
                open.merge(self.previous_span()),
            ));
        }

        Ok(CreateTableStatement {
            table,
            fields,
            indexes,
        })
    }

    /// Parses `INDEX [name] [USING method] (fields)` inside CREATE TABLE.
    fn parse_inline_index(&mut self) -> Result<CreateIndexSpec, ParseError> {
        self.expect_keyword(Keyword::Index)?;
        let name = self.parse_optional_identifier();
        let method = self.parse_optional_using()?;
        let fields = self.parse_parenthesized_identifiers()?;

        Ok(CreateIndexSpec {
            name,
            table: None,
            method,
            fields,
        })
    }

    /// Parses `CREATE INDEX [name] ON table [USING method] (fields)`.
    fn parse_create_index_statement(&mut self) -> Result<CreateIndexSpec, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Index)?;
        let name = self.parse_optional_identifier();
        self.expect_keyword(Keyword::On)?;
        let table = self.expect_identifier()?;
        let method = self.parse_optional_using()?;
        let fields = self.parse_parenthesized_identifiers()?;

        Ok(CreateIndexSpec {
            name,
            table: Some(table),
            method,
            fields,
        })
    }

    fn parse_optional_using(&mut self) -> Result<Option<Identifier>, ParseError> {
        if self.check_keyword(Keyword::Using) {
            self.advance();
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    // --- Expressions ---

    /// Parses a logical expression: conditions joined by AND/OR.
    ///
    /// Both operators share one binding power, so `a AND b OR c` is
    /// `(a AND b) OR c` and `a OR b AND c` is `(a OR b) AND c`.
    fn parse_logic(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_predicate()?;

        loop {
            let Some((l_bp, r_bp)) = logical_binding_power(&self.current().kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let Some(op) = token_to_binary_op(&self.current().kind) else {
                break;
            };
            self.advance();
            let rhs = self.parse_logic(r_bp)?;
            lhs = lhs.binary(op, rhs);
        }

        Ok(lhs)
    }

    /// Parses a comparison or a BETWEEN predicate.
    ///
    /// Both forms begin with an arbitrary expression; it is parsed once and
    /// the following token decides which form applies.
    fn parse_predicate(&mut self) -> Result<Expr, ParseError> {
        let subject = self.parse_arithmetic(0)?;

        if let Some(op) = token_to_comparison_op(&self.current().kind) {
            self.advance();
            let rhs = self.parse_arithmetic(0)?;
            return Ok(subject.binary(op, rhs));
        }

        if self.check_keyword(Keyword::Between) {
            self.advance();
            let start = self.parse_arithmetic(0)?;
            self.expect_keyword(Keyword::And)?;
            let end = self.parse_arithmetic(0)?;
            return Ok(subject.between(start, end));
        }

        Err(self.unexpected_here("comparison operator or BETWEEN"))
    }

    /// Parses an arithmetic expression using precedence climbing.
    fn parse_arithmetic(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_value()?;

        loop {
            let Some((l_bp, r_bp)) = arithmetic_binding_power(&self.current().kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let Some(op) = token_to_binary_op(&self.current().kind) else {
                break;
            };
            self.advance();
            let rhs = self.parse_arithmetic(r_bp)?;
            lhs = lhs.binary(op, rhs);
        }

        Ok(lhs)
    }

    /// Parses a primitive value.
    ///
    /// Qualified fields and function calls start with the same identifier
    /// token as a bare identifier, so they are tried first and the cursor is
    /// rolled back when they do not match.
    fn parse_value(&mut self) -> Result<Expr, ParseError> {
        let alternatives: [(&str, Rule<Expr>); 5] = [
            ("qualified field", Self::parse_qualified_field),
            ("function call", Self::parse_function_call),
            ("identifier", Self::parse_identifier_value),
            ("integer", Self::parse_integer_value),
            ("string", Self::parse_string_value),
        ];
        self.first_of("value", &alternatives)
    }

    fn parse_qualified_field(&mut self) -> Result<Expr, ParseError> {
        let table = self.expect_identifier()?;
        self.expect(&TokenKind::Dot)?;
        let field = self.expect_identifier()?;
        Ok(Expr::QualifiedField(QualifiedField { table, field }))
    }

    /// Parses `name(value, ...)`; the argument list may be empty.
    fn parse_function_call(&mut self) -> Result<Expr, ParseError> {
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;

        let mut args = vec![];
        if !self.check(&TokenKind::RightParen) {
            loop {
                args.push(self.parse_value()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen)?;

        Ok(Expr::Function(FunctionCall { name, args }))
    }

    fn parse_identifier_value(&mut self) -> Result<Expr, ParseError> {
        Ok(Expr::Identifier(self.expect_identifier()?))
    }

    fn parse_integer_value(&mut self) -> Result<Expr, ParseError> {
        let TokenKind::Integer(n) = self.current().kind else {
            return Err(self.unexpected_here("integer"));
        };
        self.advance();
        Ok(Expr::integer(n))
    }

    fn parse_string_value(&mut self) -> Result<Expr, ParseError> {
        match &self.current().kind {
            TokenKind::String(raw) => {
                let literal = Literal::from_quoted(raw);
                self.advance();
                Ok(Expr::Literal(literal))
            }
            _ => Err(self.unexpected_here("string")),
        }
    }

    // --- Lists ---

    /// Parses `(ident, ...)` with at least one identifier.
    fn parse_parenthesized_identifiers(&mut self) -> Result<Vec<Identifier>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let idents = self.parse_identifier_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(idents)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(idents)
    }

    // --- Backtracking ---

    /// Runs `rule`, restoring the cursor if it fails.
    fn attempt<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved = self.pos;
        rule(&mut *self).inspect_err(|err| {
            trace!(
                restored = saved,
                failed_at = err.span.start,
                "backtracking"
            );
            self.record_failure(err);
            self.pos = saved;
        })
    }

    /// Tries each alternative in order and returns the first success.
    ///
    /// When every alternative fails, the failure that got furthest wins; if
    /// none got past the current token, the error names `what` was expected.
    fn first_of<T>(
        &mut self,
        what: &str,
        alternatives: &[(&str, Rule<T>)],
    ) -> Result<T, ParseError> {
        let start = self.current().span.start;
        let mut best: Option<ParseError> = None;

        for (name, rule) in alternatives {
            match self.attempt(*rule) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    trace!(alternative = *name, "alternative rejected");
                    if best.as_ref().is_none_or(|b| err.span.start > b.span.start) {
                        best = Some(err);
                    }
                }
            }
        }

        match best {
            Some(err) if err.span.start > start => Err(err),
            _ => Err(self.unexpected_here(what)),
        }
    }

    /// Requires `rule` to consume everything up to `Eof`.
    fn complete<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let value = rule(&mut *self)?;
        let token = self.current();
        if token.is_eof() {
            Ok(value)
        } else {
            Err(ParseError::trailing(token.kind.clone(), token.span))
        }
    }

    /// Keeps `err` if it got at least as far as any earlier failure. On a
    /// tie the later error wins, as it comes from an enclosing rule.
    fn record_failure(&mut self, err: &ParseError) {
        let further = self
            .furthest
            .as_ref()
            .is_none_or(|f| err.span.start >= f.span.start);
        if further {
            self.furthest = Some(err.clone());
        }
    }

    /// Picks between `err` and the furthest failure seen during the parse.
    fn furthest_error(&mut self, err: ParseError) -> ParseError {
        match self.furthest.take() {
            Some(furthest) if furthest.span.start > err.span.start => furthest,
            _ => err,
        }
    }

    fn rewind(&mut self) {
        self.pos = 0;
        self.furthest = None;
    }

    // --- Helper methods ---

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .map_or_else(|| self.current().span, |i| self.tokens[i].span)
    }

    /// Advances to the next token, stopping at `Eof`.
    fn advance(&mut self) {
        if !self.current().is_eof() {
            self.pos += 1;
        }
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().as_keyword() == Some(keyword)
    }

    /// Consumes the current token if it matches the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn unexpected_here(&self, expected: &str) -> ParseError {
        let token = self.current();
        ParseError::unexpected(expected, token.kind.clone(), token.span)
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected_here(&kind.to_string()))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected_here(keyword.as_str()))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        match &self.current().kind {
            TokenKind::Identifier(name) => {
                let ident = Identifier::new(name.as_str());
                self.advance();
                Ok(ident)
            }
            _ => Err(self.unexpected_here("identifier")),
        }
    }

    fn parse_optional_identifier(&mut self) -> Option<Identifier> {
        self.expect_identifier().ok()
    }

    /// Expects an integer or string literal.
    fn expect_literal(&mut self) -> Result<Literal, ParseError> {
        let literal = match &self.current().kind {
            TokenKind::Integer(n) => Literal::Integer(*n),
            TokenKind::String(raw) => Literal::from_quoted(raw),
            _ => return Err(self.unexpected_here("integer or string literal")),
        };
        self.advance();
        Ok(literal)
    }
}
