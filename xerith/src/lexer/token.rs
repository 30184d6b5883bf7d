// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::Span;

use super::TokenKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,

    /// The source text of the token. For string literals this is the value
    /// after unescaping, without the surrounding quotes.
    pub lexeme: String,

    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    #[must_use]
    pub fn is_end_of_file(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => f.write_str("end of file"),
            TokenKind::StringLiteral => write!(f, "\"{}\"", self.lexeme),
            _ => write!(f, "`{}`", self.lexeme),
        }
    }
}
