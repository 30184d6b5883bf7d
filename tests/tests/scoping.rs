// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret_and_return_stdout, interpret_with_diagnostics};

#[rstest]
#[case("let a = \"global\"; { let a = \"inner\"; { print a; } } print a;", &["inner", "global"])]
#[case("let a = 1; { a = 2; { a = 3; } } print a;", &["3"])]
#[case("let a = 1; let a = 2; print a;", &["2"])]
#[case("{ let a = 1; } let a = 5; print a;", &["5"])]
#[case("let i = 10; for (let i = 0; i < 1; i = i + 1) print i; print i;", &["0", "10"])]
#[case("let total = 0; for (let i = 1; i <= 4; i = i + 1) { let square = i * i; total = total + square; } print total;", &["30"])]
fn scoping(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn block_variables_do_not_leak() {
    let (output, diagnostics) = interpret_with_diagnostics("{ let hidden = 1; print hidden; } print hidden;");

    assert_eq!(output, vec!["1".to_string()]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code(), Some("E202"));
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    let (output, diagnostics) = interpret_with_diagnostics("for (let i = 0; i < 2; i = i + 1) {} print i;");

    assert!(output.is_empty());
    assert_eq!(diagnostics.len(), 1);
}
