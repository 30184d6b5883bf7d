// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use strum::AsRefStr;
use xerith::{Diagnostic, DiagnosticKind, Severity, Span};

use crate::ValueType;

/// An error that aborts the statements that are still left to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub span: Span,
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    #[must_use]
    pub fn new(span: Span, kind: RuntimeErrorKind) -> Self {
        Self { span, kind }
    }

    #[must_use]
    pub fn internal(span: Span, message: impl Display) -> Self {
        Self::new(span, RuntimeErrorKind::Internal { message: message.to_string() })
    }

    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::new(self.kind.diagnostic_kind(), self.span.clone(), &self.kind)
            .with_code(self.kind.code());

        match self.kind {
            RuntimeErrorKind::Internal { .. } => diagnostic.with_severity(Severity::Fatal),
            _ => diagnostic,
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for RuntimeError {}

#[derive(Debug, Clone, PartialEq, thiserror::Error, AsRefStr)]
pub enum RuntimeErrorKind {
    #[error("operands of `{operator}` must be {expected}, but got {lhs} and {rhs}")]
    TypeMismatch {
        operator: &'static str,
        expected: &'static str,
        lhs: ValueType,
        rhs: ValueType,
    },

    #[error("operand of `{operator}` must be a number, but got {operand}")]
    UnaryTypeMismatch {
        operator: &'static str,
        operand: ValueType,
    },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("{message}")]
    Internal { message: String },
}

impl RuntimeErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } | Self::UnaryTypeMismatch { .. } => "E201",
            Self::UndefinedVariable { .. } => "E202",
            Self::Internal { .. } => "E900",
        }
    }

    #[must_use]
    pub const fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            Self::TypeMismatch { .. } | Self::UnaryTypeMismatch { .. } => DiagnosticKind::Type,
            Self::UndefinedVariable { .. } => DiagnosticKind::Semantic,
            Self::Internal { .. } => DiagnosticKind::Internal,
        }
    }
}
