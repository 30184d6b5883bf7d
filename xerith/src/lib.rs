// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod diagnostic;
mod expression;
mod lexer;
mod parser;
mod statement;
mod util;

pub use self::{
    config::{ConfigRoot, ConfigSectionDiagnostics, ConfigSectionLog},
    diagnostic::{Diagnostic, DiagnosticKind, Reporter, Severity},
    expression::*,
    lexer::{scan, Keyword, Lexer, LexerError, LexerErrorKind, Punctuator, Token, TokenKind},
    parser::{parse, ParseDiagnostic, ParseResult, Parser},
    statement::{IfStatement, Statement, StatementKind, VariableStatement, WhileStatement},
    util::{SourceCode, Span, Spanned},
};
