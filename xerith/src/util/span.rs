// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, sync::Arc};

/// A location inside a source file. Lines and columns are one-based; line `0`
/// means the location is unknown.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    filename: Arc<str>,
    line: usize,
    column: usize,
}

impl Span {
    const UNKNOWN_FILENAME: &'static str = "unknown";

    #[must_use]
    pub fn new(filename: impl Into<Arc<str>>, line: usize, column: usize) -> Self {
        debug_assert!(line == 0 || column >= 1, "column must be one-based when the line is known");

        Self {
            filename: filename.into(),
            line,
            column,
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN_FILENAME, 0, 0)
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// One-based line number
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// One-based column number, counted in characters
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.line != 0
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}
