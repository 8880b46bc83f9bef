//! Interactive prompt.

use std::io::{self, BufRead};

use lox_diagnostic::emitter::DiagnosticEmitter;

use super::stderr_emitter;
use crate::{exit_code, RunConfig, Session};

const PROMPT: &str = "> ";

/// Run the REPL on stdin until end of input.
pub fn run_prompt(config: &RunConfig) -> i32 {
    let mut session = Session::new(stderr_emitter(config));
    match repl(io::stdin().lock(), &mut session) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("error reading input: {e}");
            exit_code::IO_ERR
        }
    }
}

/// Execute each line of `input` in `session`, printing a prompt before each.
///
/// Errors on one line are reported and the loop moves on; they never end
/// the session.
pub fn repl<R: BufRead, E: DiagnosticEmitter>(
    mut input: R,
    session: &mut Session<E>,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        session.print_handler().print(PROMPT);
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let outcome = session.run(line.trim_end_matches(['\n', '\r']));
        tracing::trace!(?outcome, "repl line");
    }
}
