//! Core diagnostic type.

use std::fmt;

use crate::ErrorCode;

/// Where on a line a syntax error was found.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Location {
    /// No token to point at (lexical errors).
    #[default]
    Unspecified,
    /// The error was found at end of input.
    AtEnd,
    /// The error was found at a token with this lexeme.
    At(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unspecified => Ok(()),
            Location::AtEnd => write!(f, " at end"),
            Location::At(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// A single reported problem.
///
/// Renders (via `Display`) as
/// - `[line N] Error<location>: <message>` for lexical and syntax errors
/// - `[line N]: <message>` for runtime errors
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub line: u32,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic with an empty message.
    pub fn error(code: ErrorCode, line: u32) -> Self {
        Diagnostic {
            code,
            line,
            location: Location::Unspecified,
            message: String::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Runtime errors omit the `Error<location>` part when rendered.
    pub fn is_runtime(&self) -> bool {
        self.code.is_runtime_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_runtime() {
            write!(f, "[line {}]: {}", self.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error{}: {}",
                self.line, self.location, self.message
            )
        }
    }
}
