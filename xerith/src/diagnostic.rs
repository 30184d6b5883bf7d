// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use crate::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Characters that don't form a token.
    Lexical,

    /// Grammar violations.
    Syntax,

    /// Use of names that don't exist.
    Semantic,

    /// Operators applied to operands of the wrong type.
    Type,

    /// The interpreter itself misbehaved.
    Internal,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical error",
            Self::Syntax => "syntax error",
            Self::Semantic => "semantic error",
            Self::Type => "type error",
            Self::Internal => "internal error",
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        })
    }
}

/// A failure description handed from the pipeline to a [`Reporter`]. The
/// pipeline never formats or prints these itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    severity: Severity,
    span: Span,
    message: String,
    code: Option<&'static str>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, span: Span, message: impl Display) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            span,
            message: message.to_string(),
            code: None,
        }
    }

    #[must_use]
    pub fn with_severity(self, severity: Severity) -> Self {
        Self {
            severity,
            ..self
        }
    }

    #[must_use]
    pub fn with_code(self, code: impl Into<Option<&'static str>>) -> Self {
        Self {
            code: code.into(),
            ..self
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        self.code
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity >= Severity::Error
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(code) = self.code {
            write!(f, "[{code}] ")?;
        }

        write!(f, "{} at {}: {}", self.kind, self.span, self.message)
    }
}

impl Error for Diagnostic {}

/// Receives every lexical, syntax and runtime failure.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<R> Reporter for &mut R
        where R: Reporter + ?Sized {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
