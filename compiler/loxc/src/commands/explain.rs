//! The `explain` command: documentation for error codes.

use lox_diagnostic::{ErrorCode, ErrorDocs};

use crate::exit_code;

/// Documentation for `code_str`, or a message saying why there is none.
pub fn explanation(code_str: &str) -> Result<&'static str, String> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| format!("Unknown error code: {code_str}"))?;
    ErrorDocs::get(code).ok_or_else(|| format!("No documentation available for {code}"))
}

pub fn explain_error(code_str: &str) -> i32 {
    match explanation(code_str) {
        Ok(doc) => {
            println!("{doc}");
            exit_code::SUCCESS
        }
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!();
            eprintln!("Codes have the format EXXXX where X is a digit.");
            eprintln!("Examples: E0001, E1001, E6003");
            exit_code::USAGE
        }
    }
}
