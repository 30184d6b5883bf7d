// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, warn};
use xerith::{parse, scan, Diagnostic, Reporter, SourceCode, Statement, Token};

use crate::{Interpreter, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,

    /// Lexical or syntax errors were reported. The statements that survived
    /// recovery still ran.
    StaticErrors,

    RuntimeError,
}

impl RunOutcome {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::StaticErrors => 65,
            Self::RuntimeError => 70,
        }
    }
}

/// Forwards diagnostics while counting the ones that are errors.
struct ErrorCounter<'reporter> {
    inner: &'reporter mut dyn Reporter,
    errors: usize,
}

impl Reporter for ErrorCounter<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.errors += 1;
        }

        self.inner.report(diagnostic);
    }
}

/// Scans, parses and interprets one source text against `interpreter`.
pub fn run_source<O>(source_code: &SourceCode, interpreter: &mut Interpreter<O>, reporter: &mut dyn Reporter) -> RunOutcome
        where O: Output {
    let mut counter = ErrorCounter {
        inner: reporter,
        errors: 0,
    };

    let tokens = scan(source_code.contents(), source_code.filename(), &mut counter);
    let statements = parse(&tokens, &mut counter);
    let static_errors = counter.errors;

    if static_errors != 0 {
        warn!("{static_errors} static errors in {}, running the remaining statements", source_code.filename());
    }

    let result = interpreter.interpret(&statements, &mut counter);

    let outcome = if static_errors != 0 {
        RunOutcome::StaticErrors
    } else if result.is_err() {
        RunOutcome::RuntimeError
    } else {
        RunOutcome::Completed
    };

    debug!("Finished {} with {outcome:?}", source_code.filename());
    outcome
}

/// One line per token: `line:column kind lexeme`.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> Vec<String> {
    tokens.iter()
        .map(|token| format!("{}:{} {} {}", token.span.line(), token.span.column(), token.kind.name(), token.lexeme))
        .collect()
}

/// One line per top-level statement in parenthesized prefix form.
#[must_use]
pub fn format_statements(statements: &[Statement]) -> Vec<String> {
    statements.iter()
        .map(ToString::to_string)
        .collect()
}
