// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "open parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "close parenthesis")]
    RightParenthesis,
    #[strum(serialize = "open curly bracket")]
    LeftCurlyBracket,
    #[strum(serialize = "close curly bracket")]
    RightCurlyBracket,
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "period")]
    Period,
    #[strum(serialize = "minus")]
    HyphenMinus,
    #[strum(serialize = "plus")]
    PlusSign,
    #[strum(serialize = "semicolon")]
    Semicolon,
    #[strum(serialize = "slash")]
    Solidus,
    #[strum(serialize = "asterisk")]
    Asterisk,
    #[strum(serialize = "not")]
    Not,
    #[strum(serialize = "not-equals")]
    NotEquals,
    #[strum(serialize = "assignment")]
    Assignment,
    #[strum(serialize = "equals")]
    Equals,
    #[strum(serialize = "greater-than")]
    GreaterThan,
    #[strum(serialize = "greater-than-or-equal")]
    GreaterThanOrEqual,
    #[strum(serialize = "less-than")]
    LessThan,
    #[strum(serialize = "less-than-or-equal")]
    LessThanOrEqual,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::Comma => ",",
            Self::Period => ".",
            Self::HyphenMinus => "-",
            Self::PlusSign => "+",
            Self::Semicolon => ";",
            Self::Solidus => "/",
            Self::Asterisk => "*",
            Self::Not => "!",
            Self::NotEquals => "!=",
            Self::Assignment => "=",
            Self::Equals => "==",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
