// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use xerith::{parse, scan, Diagnostic, Lexer, Parser, SourceCode, Statement, Token, TokenKind};
use xerith_interpreter::{Interpreter, RuntimeError, Value};

const FILENAME: &str = "test.xrth";

fn init_logging() {
    _ = env_logger::builder().is_test(true).filter(None, log::LevelFilter::max()).try_init();
}

/// The kinds of all tokens, including the trailing end-of-file token.
pub fn scan_kinds(input: &str) -> (Vec<TokenKind>, Vec<Diagnostic>) {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let kinds = scan(input, FILENAME, &mut diagnostics)
        .into_iter()
        .map(|token| token.kind)
        .collect();
    (kinds, diagnostics)
}

pub fn parse_statements(input: &str) -> (Vec<Statement>, Vec<Diagnostic>) {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let tokens = scan(input, FILENAME, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);
    (statements, diagnostics)
}

pub fn interpret_expression(input: &str) -> Result<Value, RuntimeError> {
    init_logging();

    let source_code = SourceCode::new(FILENAME, input);
    let tokens: Vec<Token> = Lexer::new(&source_code).collect();
    let mut parser = Parser::new(&tokens);

    let expression = parser.parse_expression().unwrap();
    assert!(parser.is_at_end(), "Residual tokens in {input:?}");

    Interpreter::new(Vec::new()).evaluate(&expression)
}

/// Runs a program that must be free of static errors and returns the printed
/// lines together with every diagnostic that was reported.
pub fn interpret_with_diagnostics(input: &str) -> (Vec<String>, Vec<Diagnostic>) {
    init_logging();

    let (statements, mut diagnostics) = parse_statements(input);
    assert!(diagnostics.is_empty(), "Static errors: {diagnostics:#?}");

    let mut interpreter = Interpreter::new(Vec::new());
    _ = interpreter.interpret(&statements, &mut diagnostics);

    (interpreter.into_output(), diagnostics)
}

pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    let (output, diagnostics) = interpret_with_diagnostics(input);
    assert!(diagnostics.is_empty(), "Runtime errors: {diagnostics:#?}");
    output
}
