// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod diagnostics;
mod environment;
mod error;
mod interpreter;
mod logger;
mod output;
mod pipeline;
mod repl;
mod value;

pub use self::{
    config::{load_config, parse_config, CONFIG_FILE_NAME},
    diagnostics::DiagnosticPrinter,
    environment::Environment,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::Interpreter,
    logger::Logger,
    output::{Output, Stdout},
    pipeline::{format_statements, format_tokens, run_source, RunOutcome},
    repl::{run_repl, REPL_FILENAME},
    value::{Value, ValueType},
};
