//! Command handlers for the `lox` binary.
//!
//! Each handler returns the process exit code instead of exiting, so the
//! binary stays a thin argument dispatcher.

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{dump_ast, dump_tokens, lex_file, parse_file};
pub use explain::{explain_error, explanation};
pub use repl::{repl, run_prompt};
pub use run::run_file;

use std::io::{self, IsTerminal};

use lox_diagnostic::emitter::TerminalEmitter;

use crate::RunConfig;

/// Read a script, describing the failure in user terms.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

pub(crate) fn stderr_emitter(config: &RunConfig) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(config.color, io::stderr().is_terminal())
}
