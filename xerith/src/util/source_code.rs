// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::Arc;

use super::Span;

#[derive(Debug, Clone)]
pub struct SourceCode {
    filename: Arc<str>,
    contents: Arc<str>,
}

impl SourceCode {
    #[must_use]
    #[cfg(test)]
    pub fn new_test(contents: &str) -> Self {
        Self::new("test.xrth", contents)
    }

    #[must_use]
    pub fn new(filename: impl Into<Arc<str>>, contents: impl Into<Arc<str>>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Creates a span in this file, sharing the filename allocation.
    #[must_use]
    pub fn span(&self, line: usize, column: usize) -> Span {
        Span::new(Arc::clone(&self.filename), line, column)
    }

    /// Returns the text of a one-based line, without its line terminator.
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&str> {
        self.contents.lines().nth(line.checked_sub(1)?)
    }
}
