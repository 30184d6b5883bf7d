// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

use std::{
    env::current_dir,
    fs,
    io::{stdin, stdout},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use log::LevelFilter;
use xerith::{parse, scan, SourceCode};
use xerith_interpreter::{
    format_statements, format_tokens, load_config, run_repl, run_source, DiagnosticPrinter, Interpreter, Logger, RunOutcome, Stdout,
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Log pipeline progress to standard error.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print diagnostics without colors.
    #[arg(long, global = true)]
    no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a script.
    Run {
        file: PathBuf,
    },

    /// Start an interactive session.
    Repl,

    /// Print the tokens of a script.
    Tokens {
        file: PathBuf,
    },

    /// Print the statements of a script in prefix form.
    Ast {
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config_directory = match &args.command {
        Commands::Run { file } | Commands::Tokens { file } | Commands::Ast { file } => {
            file.parent().map(Path::to_path_buf).unwrap_or_default()
        }
        Commands::Repl => current_dir().context("failed to determine the working directory")?,
    };

    let config = load_config(&config_directory)?;

    let level = if args.verbose || config.log.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Logger::initialize(level);

    let mut settings = config.diagnostics.clone();
    if args.no_color {
        settings.color = false;
    }

    if !settings.color {
        colored::control::set_override(false);
    }

    let mut printer = DiagnosticPrinter::new(&settings);

    match args.command {
        Commands::Run { file } => {
            let source_code = read_source(&file)?;
            printer.set_source(&source_code);

            let mut interpreter = Interpreter::new(Stdout);
            let outcome = run_source(&source_code, &mut interpreter, &mut printer);
            Ok(ExitCode::from(outcome.exit_code()))
        }

        Commands::Repl => {
            let mut interpreter = Interpreter::new(Stdout);
            run_repl(stdin().lock(), stdout(), &mut interpreter, &mut printer)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Tokens { file } => {
            let source_code = read_source(&file)?;
            printer.set_source(&source_code);

            let tokens = scan(source_code.contents(), source_code.filename(), &mut printer);
            for line in format_tokens(&tokens) {
                println!("{line}");
            }

            Ok(static_exit_code(&printer))
        }

        Commands::Ast { file } => {
            let source_code = read_source(&file)?;
            printer.set_source(&source_code);

            let tokens = scan(source_code.contents(), source_code.filename(), &mut printer);
            let statements = parse(&tokens, &mut printer);
            for line in format_statements(&statements) {
                println!("{line}");
            }

            Ok(static_exit_code(&printer))
        }
    }
}

fn read_source(path: &Path) -> anyhow::Result<SourceCode> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(SourceCode::new(path.display().to_string(), contents))
}

fn static_exit_code(printer: &DiagnosticPrinter) -> ExitCode {
    if printer.error_count() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(RunOutcome::StaticErrors.exit_code())
    }
}
