//! Helpers shared by the end-to-end tests.

#![allow(dead_code)]

use lox_diagnostic::emitter::{ColorMode, TerminalEmitter};
use lox_eval::buffer_handler;
use loxc::{RunOutcome, Session};

pub type TestSession = Session<TerminalEmitter<Vec<u8>>>;

pub fn session() -> TestSession {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    Session::with_print_handler(emitter, buffer_handler())
}

/// Program output and rendered diagnostics of one script.
pub struct Script {
    pub outcome: RunOutcome,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(source: &str) -> Script {
    let mut session = session();
    let outcome = session.run(source);
    finish(session, outcome)
}

pub fn finish(session: TestSession, outcome: RunOutcome) -> Script {
    let stdout = session.print_handler().get_output();
    let stderr = String::from_utf8_lossy(&session.into_emitter().into_inner()).into_owned();
    Script {
        outcome,
        stdout,
        stderr,
    }
}

/// Run a script expected to succeed and return what it printed.
pub fn output(source: &str) -> String {
    let script = run(source);
    assert_eq!(script.stderr, "", "unexpected diagnostics for {source:?}");
    assert!(script.outcome.is_success());
    script.stdout
}
