// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use crate::{Span, Spanned, Token, TokenKind};

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Assign(AssignExpression),
    Binary(BinaryExpression),
    Grouping(Box<Expression>),

    /// A number, string, `true`, `false` or `nil` token.
    Literal(Token),

    Unary(UnaryExpression),
    Variable(Token),
}

impl Expression {
    /// The location of the token that best identifies this expression: the
    /// operator for unary and binary expressions, the name for variables and
    /// assignments.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Assign(expr) => &expr.name.span,
            Self::Binary(expr) => expr.operator.span(),
            Self::Grouping(expr) => expr.span(),
            Self::Literal(token) => &token.span,
            Self::Unary(expr) => expr.operator.span(),
            Self::Variable(token) => &token.span,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assign(expr) => Display::fmt(expr, f),
            Self::Binary(expr) => Display::fmt(expr, f),
            Self::Grouping(expr) => {
                f.write_str("(group ")?;
                Display::fmt(expr, f)?;
                f.write_char(')')
            }
            Self::Literal(token) => {
                if token.kind == TokenKind::StringLiteral {
                    f.write_char('"')?;
                    f.write_str(&token.lexeme)?;
                    f.write_char('"')
                } else {
                    f.write_str(&token.lexeme)
                }
            }
            Self::Unary(expr) => Display::fmt(expr, f),
            Self::Variable(token) => f.write_str(&token.lexeme),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignExpression {
    pub name: Token,
    pub value: Box<Expression>,
}

impl Display for AssignExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(= {} {})", self.name.lexeme, self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpression {
    pub lhs: Box<Expression>,
    pub operator: Spanned<BinaryOperator>,
    pub rhs: Box<Expression>,
}

impl Display for BinaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.operator.as_str(), self.lhs, self.rhs)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpression {
    pub operator: Spanned<UnaryOperator>,
    pub operand: Box<Expression>,
}

impl Display for UnaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {})", self.operator.as_str(), self.operand)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl UnaryOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Comparison(Comparison),
}

impl BinaryOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Comparison(comp) => comp.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Comparison {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }

    /// Compares two numbers with IEEE semantics, so any comparison involving
    /// NaN except `!=` is false.
    #[must_use]
    pub fn compare_numbers(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Equality => lhs == rhs,
            Self::Inequality => lhs != rhs,
            Self::LessThan => lhs < rhs,
            Self::LessThanOrEqual => lhs <= rhs,
            Self::GreaterThan => lhs > rhs,
            Self::GreaterThanOrEqual => lhs >= rhs,
        }
    }
}
