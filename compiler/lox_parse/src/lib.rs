//! Recursive descent parser for Lox.
//!
//! Produces a list of statements from a token list. A syntax error inside a
//! declaration abandons that declaration, records the error, and resumes at
//! the next statement boundary, so a single run reports every independent
//! mistake. `for` loops are lowered to `while` here; the interpreter never
//! sees them.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use error::ParseError;
pub use recovery::TokenSet;

use cursor::Cursor;
use lox_ir::{Stmt, StringInterner, TokenKind, TokenList};

/// Result of parsing: every declaration that parsed cleanly, plus the errors.
///
/// When `errors` is non-empty the statements are incomplete and must not be
/// executed.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Check if parsing produced any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            errors: Vec::new(),
        }
    }

    /// Parse `declaration* EOF`.
    pub fn parse_program(mut self) -> ParseOutput {
        let statements = self.declarations_until(TokenKind::Eof);
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }
}

/// Parse a token list into statements.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let output = Parser::new(tokens, interner).parse_program();
    tracing::debug!(
        statements = output.statements.len(),
        errors = output.errors.len(),
        "parsed"
    );
    output
}

#[cfg(test)]
mod tests;
