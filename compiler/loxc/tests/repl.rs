//! The interactive prompt, driven from an in-memory reader.

mod common;

use loxc::commands::repl;
use pretty_assertions::assert_eq;

fn repl_session(input: &str) -> common::Script {
    let mut session = common::session();
    let result = repl(input.as_bytes(), &mut session);
    assert!(result.is_ok());
    common::finish(session, loxc::RunOutcome::default())
}

#[test]
fn definitions_persist_between_lines() {
    let script = repl_session("var a = 1;\nprint a;\na = a + 1;\nprint a;\n");
    assert_eq!(script.stdout, "> > 1\n> > 2\n> ");
    assert_eq!(script.stderr, "");
}

#[test]
fn errors_do_not_end_the_session() {
    let script = repl_session("print undef;\nprint ;\nprint \"still here\";\n");
    assert_eq!(script.stdout, "> > > still here\n> ");
    assert_eq!(
        script.stderr,
        "[line 1]: Undefined Variable 'undef'.\n\
         [line 1] Error at ';': Expect expression.\n"
    );
}

#[test]
fn each_line_starts_at_line_one() {
    let script = repl_session("\n\nvar b = 2\n");
    assert_eq!(
        script.stderr,
        "[line 1] Error at end: Expect ';' after variable declaration.\n"
    );
}

#[test]
fn final_line_without_newline() {
    let script = repl_session("print 42;");
    assert_eq!(script.stdout, "> 42\n> ");
}

#[test]
fn empty_input() {
    let script = repl_session("");
    assert_eq!(script.stdout, "> ");
}
