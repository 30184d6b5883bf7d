// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::iter::once;

use log::{debug, warn};
use strum::AsRefStr;

use crate::{
    AssignExpression, BinaryExpression, BinaryOperator, Comparison, Diagnostic, DiagnosticKind, Expression, IfStatement, Keyword, Punctuator, Reporter, Span, Spanned, Statement, StatementKind, Token, TokenKind, UnaryExpression, UnaryOperator, VariableStatement, WhileStatement
};

pub type ParseResult<T> = Result<T, Box<ParseDiagnostic>>;

/// How deep statements and expressions may nest inside each other before the
/// parser gives up on the declaration.
const MAX_NESTING_DEPTH: usize = 64;

#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
    depth: usize,
    diagnostics: Vec<ParseDiagnostic>,
    end_of_file_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let end = tokens.last().map(|x| x.span.clone()).unwrap_or_default();

        Self {
            tokens,
            cursor: 0,
            depth: 0,
            diagnostics: Vec::new(),
            end_of_file_token: Token::new(TokenKind::EndOfFile, "", end),
        }
    }

    /// Parses declarations until the end of the input. Declarations that fail
    /// to parse are dropped and recorded in [`Self::diagnostics`].
    pub fn parse_program(&mut self) -> Vec<Statement> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(statement) = self.parse_declaration() {
                statements.push(statement);
            }
        }

        statements
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseDiagnostic> {
        self.diagnostics
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek_token().is_end_of_file()
    }

    fn parse_declaration(&mut self) -> Option<Statement> {
        let start = self.cursor;

        let result = if self.peek_keyword() == Some(Keyword::Let) {
            let keyword = self.consume_token();
            self.parse_variable_statement(keyword.span)
        } else {
            self.parse_statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(diagnostic) => {
                warn!("Dropping declaration: {diagnostic}");
                self.diagnostics.push(*diagnostic);
                self.synchronize(start);
                None
            }
        }
    }

    /// Skips tokens until just after a `;`, or until the next token starts a
    /// declaration. Always makes progress when the failed declaration didn't
    /// consume anything.
    fn synchronize(&mut self, declaration_start: usize) {
        if self.cursor == declaration_start && !self.is_at_end() {
            if self.consume_token().kind == TokenKind::Punctuator(Punctuator::Semicolon) {
                return;
            }
        }

        while !self.is_at_end() {
            if self.peek_keyword().is_some_and(|keyword| keyword.starts_declaration()) {
                return;
            }

            if self.consume_token().kind == TokenKind::Punctuator(Punctuator::Semicolon) {
                return;
            }
        }
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.nested(Self::parse_statement_at_depth)
    }

    fn parse_statement_at_depth(&mut self) -> ParseResult<Statement> {
        let first_token = self.peek_token();
        let span = first_token.span.clone();
        let first_kind = first_token.kind;

        let kind = match first_kind {
            TokenKind::Keyword(Keyword::If) => {
                self.consume_token();
                StatementKind::If(self.parse_if_statement()?)
            }

            TokenKind::Keyword(Keyword::While) => {
                self.consume_token();
                StatementKind::While(self.parse_while_statement()?)
            }

            TokenKind::Keyword(Keyword::For) => {
                self.consume_token();
                return self.parse_for_statement(span);
            }

            TokenKind::Keyword(Keyword::Print) => {
                self.consume_token();
                let expression = self.parse_expression()?;
                self.expect_punctuator(Punctuator::Semicolon, "after value")?;
                StatementKind::Print(expression)
            }

            TokenKind::Punctuator(Punctuator::LeftCurlyBracket) => {
                self.consume_token();
                StatementKind::Block(self.parse_block()?)
            }

            _ => {
                let expression = self.parse_expression()?;
                self.expect_punctuator(Punctuator::Semicolon, "after expression")?;
                StatementKind::Expression(expression)
            }
        };

        Ok(Statement::new(span, kind))
    }

    fn parse_variable_statement(&mut self, span: Span) -> ParseResult<Statement> {
        let name = self.peek_token().clone();
        if name.kind != TokenKind::Identifier {
            return Err(Box::new(ParseDiagnostic::ExpectedVariableName { token: name }));
        }
        self.consume_token();

        let initializer = if self.match_punctuator(Punctuator::Assignment).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_punctuator(Punctuator::Semicolon, "after variable declaration")?;

        Ok(Statement::new(span, StatementKind::Variable(VariableStatement {
            name,
            initializer,
        })))
    }

    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        self.expect_punctuator(Punctuator::LeftParenthesis, "after `if`")?;
        let condition = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RightParenthesis, "after if condition")?;

        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.peek_keyword() == Some(Keyword::Else) {
            self.consume_token();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(IfStatement {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<WhileStatement> {
        self.expect_punctuator(Punctuator::LeftParenthesis, "after `while`")?;
        let condition = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RightParenthesis, "after while condition")?;

        let body = Box::new(self.parse_statement()?);

        Ok(WhileStatement {
            condition,
            body,
        })
    }

    /// Parses a `for` loop and lowers it into a block holding the initializer
    /// and a `while` loop.
    fn parse_for_statement(&mut self, span: Span) -> ParseResult<Statement> {
        self.expect_punctuator(Punctuator::LeftParenthesis, "after `for`")?;

        let initializer = if self.match_punctuator(Punctuator::Semicolon).is_some() {
            None
        } else if self.peek_keyword() == Some(Keyword::Let) {
            let keyword = self.consume_token();
            Some(self.parse_variable_statement(keyword.span)?)
        } else {
            let expression_span = self.peek_token().span.clone();
            let expression = self.parse_expression()?;
            self.expect_punctuator(Punctuator::Semicolon, "after expression")?;
            Some(Statement::new(expression_span, StatementKind::Expression(expression)))
        };

        let condition = if self.check_punctuator(Punctuator::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_punctuator(Punctuator::Semicolon, "after loop condition")?;

        let increment = if self.check_punctuator(Punctuator::RightParenthesis) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_punctuator(Punctuator::RightParenthesis, "after for clauses")?;

        let mut body = self.parse_statement()?;

        if let Some(increment) = increment {
            let increment = Statement::new(increment.span().clone(), StatementKind::Expression(increment));
            body = Statement::new(body.span.clone(), StatementKind::Block(vec![body, increment]));
        }

        let condition = condition.unwrap_or_else(|| {
            Expression::Literal(Token::new(TokenKind::Keyword(Keyword::True), "true", span.clone()))
        });

        let while_statement = Statement::new(span.clone(), StatementKind::While(WhileStatement {
            condition,
            body: Box::new(body),
        }));

        let statements = initializer.into_iter().chain(once(while_statement)).collect();
        Ok(Statement::new(span, StatementKind::Block(statements)))
    }

    /// Parses the declarations of a block after its `{`. Declarations inside
    /// the block recover on their own.
    fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        while !self.check_punctuator(Punctuator::RightCurlyBracket) && !self.is_at_end() {
            if let Some(statement) = self.parse_declaration() {
                statements.push(statement);
            }
        }

        self.expect_punctuator(Punctuator::RightCurlyBracket, "after block")?;
        Ok(statements)
    }

    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.nested(Self::parse_assignment_expression)
    }

    fn parse_assignment_expression(&mut self) -> ParseResult<Expression> {
        let expression = self.parse_equality_expression()?;

        let Some(equals) = self.match_punctuator(Punctuator::Assignment) else {
            return Ok(expression);
        };

        let value = self.parse_expression()?;

        match expression {
            Expression::Variable(name) => Ok(Expression::Assign(AssignExpression {
                name,
                value: Box::new(value),
            })),

            _ => Err(Box::new(ParseDiagnostic::InvalidAssignmentTarget { token: equals })),
        }
    }

    fn parse_equality_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_relational_expression, &[
            (Punctuator::NotEquals, BinaryOperator::Comparison(Comparison::Inequality)),
            (Punctuator::Equals, BinaryOperator::Comparison(Comparison::Equality)),
        ])
    }

    fn parse_relational_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_additive_expression, &[
            (Punctuator::GreaterThan, BinaryOperator::Comparison(Comparison::GreaterThan)),
            (Punctuator::GreaterThanOrEqual, BinaryOperator::Comparison(Comparison::GreaterThanOrEqual)),
            (Punctuator::LessThan, BinaryOperator::Comparison(Comparison::LessThan)),
            (Punctuator::LessThanOrEqual, BinaryOperator::Comparison(Comparison::LessThanOrEqual)),
        ])
    }

    fn parse_additive_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_multiplicative_expression, &[
            (Punctuator::PlusSign, BinaryOperator::Add),
            (Punctuator::HyphenMinus, BinaryOperator::Subtract),
        ])
    }

    fn parse_multiplicative_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_unary_expression, &[
            (Punctuator::Asterisk, BinaryOperator::Multiply),
            (Punctuator::Solidus, BinaryOperator::Divide),
        ])
    }

    fn parse_bi_expression<F>(&mut self, mut operand: F, operators: &[(Punctuator, BinaryOperator)]) -> ParseResult<Expression>
            where F: FnMut(&mut Self) -> ParseResult<Expression> {
        let mut expr = operand(self)?;

        loop {
            let next = self.peek_token();

            let Some((_, operator)) = operators.iter().find(|(p, _)| next.kind == TokenKind::Punctuator(*p)).copied() else {
                break;
            };

            let operator_span = self.consume_token().span;
            let operator = Spanned::new(operator_span, operator);

            let lhs = expr;
            let rhs = operand(self)?;

            expr = Expression::Binary(BinaryExpression {
                lhs: Box::new(lhs),
                operator,
                rhs: Box::new(rhs),
            });
        }

        Ok(expr)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let operator = match self.peek_token().kind {
            TokenKind::Punctuator(Punctuator::Not) => UnaryOperator::Not,
            TokenKind::Punctuator(Punctuator::HyphenMinus) => UnaryOperator::Negate,
            _ => return self.parse_primary_expression(),
        };

        let operator_span = self.consume_token().span;
        let operand = self.nested(Self::parse_unary_expression)?;

        Ok(Expression::Unary(UnaryExpression {
            operator: Spanned::new(operator_span, operator),
            operand: Box::new(operand),
        }))
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let kind = self.peek_token().kind;

        if kind.is_literal() {
            return Ok(Expression::Literal(self.consume_token()));
        }

        match kind {
            TokenKind::Identifier => Ok(Expression::Variable(self.consume_token())),

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                self.consume_token();
                let expression = self.parse_expression()?;
                self.expect_punctuator(Punctuator::RightParenthesis, "after expression")?;
                Ok(Expression::Grouping(Box::new(expression)))
            }

            _ => Err(Box::new(ParseDiagnostic::ExpectedExpression { token: self.peek_token().clone() })),
        }
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_file_token)
    }

    fn peek_keyword(&self) -> Option<Keyword> {
        match self.peek_token().kind {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    fn check_punctuator(&self, punctuator: Punctuator) -> bool {
        self.peek_token().kind == TokenKind::Punctuator(punctuator)
    }

    /// Consumes the next token if it is the given punctuator.
    fn match_punctuator(&mut self, punctuator: Punctuator) -> Option<Token> {
        if self.check_punctuator(punctuator) {
            Some(self.consume_token())
        } else {
            None
        }
    }

    /// Returns the next token and advances, except at the end of the input.
    fn consume_token(&mut self) -> Token {
        let token = self.peek_token().clone();

        if !token.is_end_of_file() {
            self.cursor += 1;
        }

        token
    }

    fn expect_punctuator(&mut self, expected: Punctuator, context: &'static str) -> ParseResult<Token> {
        match self.match_punctuator(expected) {
            Some(token) => Ok(token),
            None => Err(Box::new(ParseDiagnostic::ExpectedPunctuator {
                expected,
                context,
                token: self.peek_token().clone(),
            })),
        }
    }

    /// Runs `parse` one nesting level deeper, refusing to go past
    /// [`MAX_NESTING_DEPTH`].
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Box::new(ParseDiagnostic::NestingTooDeep { token: self.peek_token().clone() }));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

/// Parses a whole token stream. Syntax errors go to the `reporter`; the
/// statements that failed to parse are left out of the result.
pub fn parse(tokens: &[Token], reporter: &mut dyn Reporter) -> Vec<Statement> {
    let mut parser = Parser::new(tokens);
    let statements = parser.parse_program();
    let diagnostics = parser.into_diagnostics();

    debug!("Parsed {} statements with {} syntax errors", statements.len(), diagnostics.len());

    for diagnostic in diagnostics {
        reporter.report(diagnostic.to_diagnostic());
    }

    statements
}

#[derive(Clone, Debug, PartialEq, thiserror::Error, AsRefStr)]
pub enum ParseDiagnostic {
    #[error("expected expression, but got {token}")]
    ExpectedExpression { token: Token },

    #[error("expected `{expected}` {context}, but got {token}")]
    ExpectedPunctuator { expected: Punctuator, context: &'static str, token: Token },

    #[error("expected variable name, but got {token}")]
    ExpectedVariableName { token: Token },

    #[error("invalid assignment target")]
    InvalidAssignmentTarget { token: Token },

    #[error("too much nesting at {token}")]
    NestingTooDeep { token: Token },
}

impl ParseDiagnostic {
    pub fn token(&self) -> &Token {
        match self {
            Self::ExpectedExpression { token } => token,
            Self::ExpectedPunctuator { token, .. } => token,
            Self::ExpectedVariableName { token } => token,
            Self::InvalidAssignmentTarget { token } => token,
            Self::NestingTooDeep { token } => token,
        }
    }

    pub fn span(&self) -> &Span {
        &self.token().span
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ExpectedExpression { .. } => "E101",
            Self::ExpectedPunctuator { .. } => "E102",
            Self::ExpectedVariableName { .. } => "E103",
            Self::InvalidAssignmentTarget { .. } => "E104",
            Self::NestingTooDeep { .. } => "E105",
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::Syntax, self.span().clone(), self)
            .with_code(self.code())
    }
}
