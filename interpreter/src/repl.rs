// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{BufRead, Write};

use anyhow::Context;
use log::debug;
use xerith::SourceCode;

use crate::{run_source, DiagnosticPrinter, Interpreter, Output};

pub const REPL_FILENAME: &str = "<repl>";

/// Reads lines from `input` until end of input, running each one against the
/// same interpreter so that declarations carry over between lines.
pub fn run_repl<O>(mut input: impl BufRead, mut prompt: impl Write, interpreter: &mut Interpreter<O>, printer: &mut DiagnosticPrinter) -> anyhow::Result<()>
        where O: Output {
    let mut line = String::new();

    loop {
        write!(prompt, "> ").context("failed to write the prompt")?;
        prompt.flush().context("failed to flush the prompt")?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read from standard input")?;
        if read == 0 {
            debug!("End of input, leaving the REPL");
            return Ok(());
        }

        let source_code = SourceCode::new(REPL_FILENAME, line.as_str());
        printer.set_source(&source_code);

        run_source(&source_code, interpreter, printer);
        printer.reset_counts();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xerith::ConfigSectionDiagnostics;

    #[test]
    fn declarations_persist_across_lines() {
        let input = "let a = 1;\nprint missing;\na = a + 1;\nprint a;\n";
        let mut prompt = Vec::new();
        let mut interpreter = Interpreter::new(Vec::new());
        let mut printer = DiagnosticPrinter::new(&ConfigSectionDiagnostics {
            color: false,
            source_context: false,
        });

        run_repl(input.as_bytes(), &mut prompt, &mut interpreter, &mut printer).unwrap();

        assert_eq!(interpreter.output(), &["2".to_string()]);
        assert_eq!(String::from_utf8(prompt).unwrap(), "> > > > > ");
    }
}
