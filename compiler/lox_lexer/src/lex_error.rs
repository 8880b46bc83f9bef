//! Lexer error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Line;

/// A lexical error. Scanning always continues past it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Line where scanning of the offending text ended.
    pub line: Line,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot begin any token.
    UnexpectedCharacter { ch: char },
    /// Input ended inside a string literal.
    UnterminatedString,
}

impl LexError {
    #[cold]
    pub fn unexpected_character(ch: char, line: Line) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedCharacter { ch },
            line,
        }
    }

    #[cold]
    pub fn unterminated_string(line: Line) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnexpectedCharacter { .. } => "Unexpected character.",
            LexErrorKind::UnterminatedString => "Unterminated String.",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.line).with_message(self.message())
    }
}
