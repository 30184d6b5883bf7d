// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case(
    r#"
        print "Hello!";
    "#,
    &[
        "Hello!",
    ],
)]
#[case(
    r#"
        let x = 1;
        x = 2;
        print x;
    "#,
    &[
        "2",
    ],
)]
#[case(
    r#"
        let x = 1;
        {
            let x = 2;
            print x;
        }
        print x;
    "#,
    &[
        "2",
        "1",
    ],
)]
#[case(
    r#"
        for (let i = 0; i < 3; i = i + 1) print i;
    "#,
    &[
        "0",
        "1",
        "2",
    ],
)]
#[case(
    r#"
        let a = 0;
        let b = 1;
        while (a < 50) {
            print a;
            let next = a + b;
            a = b;
            b = next;
        }
    "#,
    &[
        "0", "1", "1", "2", "3", "5", "8", "13", "21", "34",
    ],
)]
#[case(
    r#"
        let n = 15;
        if (n > 10) {
            if (n > 20) print "big"; else print "medium";
        } else {
            print "small";
        }
    "#,
    &[
        "medium",
    ],
)]
#[case(
    r#"
        let greeting;
        print greeting;
        greeting = "hi";
        print greeting + ", " + "there";
    "#,
    &[
        "nil",
        "hi, there",
    ],
)]
#[case(
    r#"
        // comments and escapes
        print "tab:\tend";
        print "quote: \"q\"";
    "#,
    &[
        "tab:\tend",
        "quote: \"q\"",
    ],
)]
#[case(
    r#"
        print 10 / 4;
        print 1 / 3;
        print 2 * 3.5;
        print -(4 - 6);
    "#,
    &[
        "2.5",
        "0.3333333333333333",
        "7",
        "2",
    ],
)]
fn interpret_and_return_stdout_tests(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}
