// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Write;

use colored::{Color, ColoredString, Colorize};
use log::debug;
use xerith::{ConfigSectionDiagnostics, Diagnostic, Reporter, Severity, SourceCode, Span};

/// Renders diagnostics to standard error, optionally quoting the source line
/// with a caret under the offending column.
pub struct DiagnosticPrinter {
    source_code: Option<SourceCode>,
    color: bool,
    source_context: bool,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticPrinter {
    #[must_use]
    pub fn new(settings: &ConfigSectionDiagnostics) -> Self {
        Self {
            source_code: None,
            color: settings.color,
            source_context: settings.source_context,
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Sets the file that source context is taken from. Diagnostics in other
    /// files are printed without context.
    pub fn set_source(&mut self, source_code: &SourceCode) {
        self.source_code = Some(source_code.clone());
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    #[must_use]
    pub const fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn reset_counts(&mut self) {
        self.error_count = 0;
        self.warning_count = 0;
    }

    #[must_use]
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let color = match diagnostic.severity() {
            Severity::Warning => Color::Yellow,
            Severity::Error | Severity::Fatal => Color::Red,
        };

        let mut out = String::new();

        let severity = self.paint(&diagnostic.severity().to_string(), color);
        _ = writeln!(out, "{severity}: {}", self.bold(&diagnostic.to_string()));

        if self.source_context {
            if let Some(line) = self.source_line(diagnostic.span()) {
                self.render_source_context(&mut out, diagnostic.span(), line, color);
            }
        }

        out
    }

    fn render_source_context(&self, out: &mut String, span: &Span, line: &str, color: Color) {
        let line_number = span.line().to_string();
        let gutter = " ".repeat(line_number.len());
        let separator = self.paint("|", Color::Blue);

        _ = writeln!(out, "{} {separator} {line}", self.paint(&line_number, Color::Blue));

        let spaces = " ".repeat(span.column().saturating_sub(1));
        _ = writeln!(out, "{gutter} {separator} {spaces}{}", self.paint("^", color));
    }

    fn source_line(&self, span: &Span) -> Option<&str> {
        let source_code = self.source_code.as_ref()?;

        if !span.is_known() || source_code.filename() != span.filename() {
            return None;
        }

        source_code.line(span.line())
    }

    fn paint(&self, text: &str, color: Color) -> ColoredString {
        if self.color {
            text.color(color).bold()
        } else {
            text.normal()
        }
    }

    fn bold(&self, text: &str) -> ColoredString {
        if self.color {
            text.bold()
        } else {
            text.normal()
        }
    }
}

impl Reporter for DiagnosticPrinter {
    fn report(&mut self, diagnostic: Diagnostic) {
        debug!("Reporting {:?} {:?} at {}", diagnostic.severity(), diagnostic.kind(), diagnostic.span());

        if diagnostic.is_error() {
            self.error_count += 1;
        } else {
            self.warning_count += 1;
        }

        eprint!("{}", self.render(&diagnostic));
    }
}
