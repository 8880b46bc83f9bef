//! The default command: execute a script file.

use super::{read_file, stderr_emitter};
use crate::{exit_code, RunConfig, Session};

/// Run the script at `path` and return its exit code.
pub fn run_file(path: &str, config: &RunConfig) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return exit_code::IO_ERR;
        }
    };

    let mut session = Session::new(stderr_emitter(config));
    session.run(&source).exit_code()
}
