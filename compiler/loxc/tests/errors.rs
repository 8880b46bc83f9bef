//! Diagnostics and exit codes.

mod common;

use common::run;
use pretty_assertions::assert_eq;

#[test]
fn undefined_assignment() {
    let script = run("undef = 123;");
    assert_eq!(script.stdout, "");
    assert_eq!(script.stderr, "[line 1]: Undefined Variable 'undef'.\n");
    assert!(script.outcome.had_runtime_error);
    assert_eq!(script.outcome.exit_code(), 70);
}

#[test]
fn undefined_read() {
    let script = run("print \"start\";\nprint undef;\nprint \"unreached\";");
    assert_eq!(script.stdout, "start\n");
    assert_eq!(script.stderr, "[line 2]: Undefined Variable 'undef'.\n");
}

#[test]
fn missing_semicolon_points_at_next_token() {
    let script = run("print 10\nvar a = 20;");
    assert_eq!(
        script.stderr,
        "[line 2] Error at 'var': Expect ';' after value.\n"
    );
    assert_eq!(script.stdout, "");
    assert_eq!(script.outcome.exit_code(), 65);
}

#[test]
fn syntax_error_prevents_all_execution() {
    let script = run("print \"before\";\nprint ;\nprint \"after\";");
    assert_eq!(script.stdout, "");
    assert_eq!(
        script.stderr,
        "[line 2] Error at ';': Expect expression.\n"
    );
}

#[test]
fn multiple_syntax_errors_are_reported() {
    let script = run("var = 1;\nprint 1 +;\nvar ok = 2;\n(a) = 3;");
    assert_eq!(
        script.stderr,
        "[line 1] Error at '=': Expect variable name.\n\
         [line 2] Error at ';': Expect expression.\n\
         [line 4] Error at '=': Invalid assignment target.\n"
    );
    assert!(script.outcome.had_syntax_error);
    assert!(!script.outcome.had_runtime_error);
}

#[test]
fn error_at_end() {
    let script = run("var a = 1");
    assert_eq!(
        script.stderr,
        "[line 1] Error at end: Expect ';' after variable declaration.\n"
    );
}

#[test]
fn lexical_errors_come_first() {
    let script = run("var a = @;\nprint a;");
    assert_eq!(
        script.stderr,
        "[line 1] Error: Unexpected character.\n\
         [line 1] Error at ';': Expect expression.\n"
    );
    assert_eq!(script.outcome.exit_code(), 65);
}

#[test]
fn unterminated_string() {
    let script = run("print \"never\nclosed;");
    assert!(script
        .stderr
        .starts_with("[line 2] Error: Unterminated String.\n"));
    assert!(script.outcome.had_syntax_error);
}

#[test]
fn runtime_type_errors() {
    let cases = [
        ("print -\"x\";", "[line 1]: Operand must be a number.\n"),
        ("print 1 < \"2\";", "[line 1]: Operands must be numbers.\n"),
        (
            "print 1 + null;",
            "[line 1]: Operands must be two numbers or two strings.\n",
        ),
    ];
    for (source, expected) in cases {
        let script = run(source);
        assert_eq!(script.stderr, expected, "for {source:?}");
        assert_eq!(script.outcome.exit_code(), 70);
    }
}

#[test]
fn runtime_error_line_is_operator_line() {
    let script = run("var a = \"x\";\nvar b = a\n  * 2;");
    assert_eq!(script.stderr, "[line 3]: Operands must be numbers.\n");
}
