// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    And,
    Class,
    Else,
    False,
    Fn,
    For,
    Fun,
    If,
    Let,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    While,
}

impl Keyword {
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    /// Keywords at which the parser may resume after a syntax error.
    #[must_use]
    pub const fn starts_declaration(&self) -> bool {
        matches!(self, Self::Class | Self::Fun | Self::Let | Self::For | Self::If | Self::While | Self::Print | Self::Return)
    }
}
