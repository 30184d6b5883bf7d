// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::AsRefStr;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// hehe billion dollar mistake
    #[default]
    Nil,

    Boolean(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// `nil` and `false` are falsy, everything else is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }

    /// Values of different types are never equal.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Boolean(lhs), Self::Boolean(rhs)) => lhs == rhs,
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Text(lhs), Self::Text(rhs)) => lhs == rhs,
            _ => false,
        }
    }

    #[must_use]
    pub const fn typ(&self) -> ValueType {
        match self {
            Self::Nil => ValueType::Nil,
            Self::Boolean(..) => ValueType::Boolean,
            Self::Number(..) => ValueType::Number,
            Self::Text(..) => ValueType::Text,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Boolean(b) => b.fmt(f),
            Self::Number(n) => n.fmt(f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
    Nil,
    Boolean,
    Number,
    Text,
}
