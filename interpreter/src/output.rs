// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::Write;

use log::error;

/// Where `print` statements write to.
pub trait Output {
    fn write_line(&mut self, text: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn write_line(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{text}") {
            error!("Failed to write to standard output: {e}");
        }
    }
}

impl Output for Vec<String> {
    fn write_line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<O> Output for &mut O
        where O: Output + ?Sized {
    fn write_line(&mut self, text: &str) {
        (**self).write_line(text);
    }
}
