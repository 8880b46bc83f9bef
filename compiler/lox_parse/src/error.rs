//! Parse error type.

use lox_diagnostic::{Diagnostic, ErrorCode, Location};
use lox_ir::{Line, StringInterner, Token, TokenKind};

/// A syntax error at a specific token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub line: Line,
    /// The offending token: its lexeme, or end of input.
    pub location: Location,
}

impl ParseError {
    /// Create an error pointing at `token`.
    #[cold]
    pub fn at(
        token: &Token,
        interner: &StringInterner,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        let location = if token.kind == TokenKind::Eof {
            Location::AtEnd
        } else {
            Location::At(interner.lookup(token.lexeme).to_string())
        };
        ParseError {
            code,
            message: message.into(),
            line: token.line,
            location,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code, self.line)
            .with_location(self.location.clone())
            .with_message(self.message.clone())
    }
}
