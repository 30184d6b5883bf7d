// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Punctuator(Punctuator),

    Identifier,
    StringLiteral,
    Number,

    EndOfFile,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(..) => "keyword",
            Self::Punctuator(punctuator) => punctuator.name(),

            Self::Identifier => "identifier",
            Self::StringLiteral => "string",
            Self::Number => "number",

            Self::EndOfFile => "end of file",
        }
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::StringLiteral
                | Self::Number
                | Self::Keyword(Keyword::True | Keyword::False | Keyword::Nil)
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            _ => f.write_str(self.name()),
        }
    }
}
