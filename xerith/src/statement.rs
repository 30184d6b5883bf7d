// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use crate::{Expression, Span, Token};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The location of the first token of the statement.
    pub span: Span,
    pub kind: StatementKind,
}

impl Statement {
    #[must_use]
    pub fn new(span: Span, kind: StatementKind) -> Self {
        Self { span, kind }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Block(Vec<Statement>),
    Expression(Expression),
    If(IfStatement),
    Print(Expression),
    Variable(VariableStatement),
    While(WhileStatement),
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Block(statements) => {
                f.write_str("(block")?;
                for statement in statements {
                    f.write_char(' ')?;
                    Display::fmt(statement, f)?;
                }
                f.write_char(')')
            }

            Self::Expression(expression) => write!(f, "(expr {expression})"),

            Self::If(statement) => {
                write!(f, "(if {} {}", statement.condition, statement.then_branch)?;
                if let Some(else_branch) = &statement.else_branch {
                    write!(f, " {else_branch}")?;
                }
                f.write_char(')')
            }

            Self::Print(expression) => write!(f, "(print {expression})"),

            Self::Variable(statement) => {
                write!(f, "(let {}", statement.name.lexeme)?;
                if let Some(initializer) = &statement.initializer {
                    write!(f, " {initializer}")?;
                }
                f.write_char(')')
            }

            Self::While(statement) => write!(f, "(while {} {})", statement.condition, statement.body),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableStatement {
    pub name: Token,
    pub initializer: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
}
