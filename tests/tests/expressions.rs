// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::interpret_expression;
use xerith_interpreter::Value;

#[rstest]
#[case("1 + 2 * 3", Value::Number(7.0))]
#[case("(1 + 2) * 3", Value::Number(9.0))]
#[case("10 - 4 - 3", Value::Number(3.0))]
#[case("1 / 0", Value::Number(f64::INFINITY))]
#[case("-1 / 0", Value::Number(f64::NEG_INFINITY))]
#[case("\"a\" + \"b\"", Value::Text("ab".into()))]
#[case("1 < 2", Value::Boolean(true))]
#[case("2 <= 1", Value::Boolean(false))]
#[case("3 > 3", Value::Boolean(false))]
#[case("3 >= 3", Value::Boolean(true))]
#[case("1 == 1", Value::Boolean(true))]
#[case("\"a\" == \"a\"", Value::Boolean(true))]
#[case("nil == nil", Value::Boolean(true))]
#[case("nil == false", Value::Boolean(false))]
#[case("1 == \"1\"", Value::Boolean(false))]
#[case("1 != 2", Value::Boolean(true))]
#[case("!true", Value::Boolean(false))]
#[case("!nil", Value::Boolean(true))]
#[case("!\"\"", Value::Boolean(false))]
#[case("--5", Value::Number(5.0))]
#[case("nil", Value::Nil)]
fn evaluate(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(interpret_expression(input), Ok(expected));
}

#[test]
fn nan_is_not_equal_to_itself() {
    assert_eq!(interpret_expression("0 / 0 == 0 / 0"), Ok(Value::Boolean(false)));
    assert_eq!(interpret_expression("0 / 0 != 0 / 0"), Ok(Value::Boolean(true)));
}

#[rstest]
#[case("1 + true", "TypeMismatch")]
#[case("1 + nil", "TypeMismatch")]
#[case("\"a\" - \"b\"", "TypeMismatch")]
#[case("true * 2", "TypeMismatch")]
#[case("\"a\" > 1", "TypeMismatch")]
#[case("-\"a\"", "UnaryTypeMismatch")]
#[case("-nil", "UnaryTypeMismatch")]
#[case("missing", "UndefinedVariable")]
#[case("missing = 1", "UndefinedVariable")]
fn evaluate_errors(#[case] input: &str, #[case] expected: &str) {
    let error = interpret_expression(input).unwrap_err();
    assert_eq!(error.kind.name(), expected);
}
