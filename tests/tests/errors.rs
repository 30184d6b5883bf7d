// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret_and_return_stdout, interpret_with_diagnostics, parse_statements, scan_kinds};
use xerith::{DiagnosticKind, Punctuator, Severity, TokenKind};

#[test]
fn scan_ends_with_exactly_one_end_of_file() {
    for input in ["", "print 1;", "\"open", "@@@", "// trailing comment", "12."] {
        let (kinds, _) = scan_kinds(input);
        let count = kinds.iter().filter(|kind| **kind == TokenKind::EndOfFile).count();

        assert_eq!(count, 1, "in {input:?}");
        assert_eq!(kinds.last(), Some(&TokenKind::EndOfFile));
    }
}

#[test]
fn number_before_period() {
    let (kinds, diagnostics) = scan_kinds("12.");

    assert!(diagnostics.is_empty());
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Punctuator(Punctuator::Period), TokenKind::EndOfFile]);
}

#[test]
fn unterminated_string() {
    let (kinds, diagnostics) = scan_kinds("print \"never closed;");

    assert!(!kinds.contains(&TokenKind::StringLiteral));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::Lexical);
    assert_eq!(diagnostics[0].code(), Some("E002"));
    assert_eq!((diagnostics[0].span().line(), diagnostics[0].span().column()), (1, 7));
}

#[test]
fn recovery_keeps_the_following_declaration() {
    let (statements, diagnostics) = parse_statements("let = ; let x = 1;");

    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].to_string(), "(let x 1)");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code(), Some("E103"));
}

#[rstest]
#[case("print 1", "E102")]
#[case("print ;", "E101")]
#[case("let 1 = 2;", "E103")]
#[case("1 + 2 = 3;", "E104")]
#[case("if 1 print 2;", "E102")]
#[case("{ print 1;", "E102")]
#[case("(1 + 2;", "E102")]
fn syntax_error_codes(#[case] input: &str, #[case] code: &str) {
    let (_, diagnostics) = parse_statements(input);

    assert_eq!(diagnostics.len(), 1, "{diagnostics:#?}");
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::Syntax);
    assert_eq!(diagnostics[0].code(), Some(code));
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let (statements, diagnostics) = parse_statements(&format!("print {}1;\nprint 2;", "-".repeat(500)));

    assert_eq!(statements.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::Syntax);
    assert_eq!(diagnostics[0].code(), Some("E105"));
}

#[test]
fn nesting_just_below_the_limit_evaluates() {
    let output = interpret_and_return_stdout(&format!(
        "print {}1{};\nprint {}1;",
        "(".repeat(60),
        ")".repeat(60),
        "-".repeat(60),
    ));

    assert_eq!(output, vec!["1", "1"]);
}

#[test]
fn undefined_variable_skips_remaining_statements() {
    let (output, diagnostics) = interpret_with_diagnostics("print 1; print y; print 2;");

    assert_eq!(output, vec!["1".to_string()]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::Semantic);
    assert_eq!(diagnostics[0].code(), Some("E202"));
    assert_eq!(diagnostics[0].to_string(), "[E202] semantic error at test.xrth:1:16: undefined variable `y`");
}

#[test]
fn type_mismatch_is_a_type_error() {
    let (output, diagnostics) = interpret_with_diagnostics("print 1 + true;");

    assert!(output.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::Type);
    assert_eq!(diagnostics[0].severity(), Severity::Error);
    assert_eq!(diagnostics[0].code(), Some("E201"));
}

#[test]
fn invalid_escape_is_only_a_warning() {
    let (statements, diagnostics) = parse_statements("print \"\\x\";");

    assert_eq!(statements.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity(), Severity::Warning);
    assert!(!diagnostics[0].is_error());
}
