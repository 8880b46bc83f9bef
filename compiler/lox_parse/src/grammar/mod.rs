//! Grammar productions.
//!
//! ```text
//! program     -> declaration* EOF
//! declaration -> varDecl | statement
//! varDecl     -> "var" IDENTIFIER ( "=" expression )? ";"
//! statement   -> exprStmt | printStmt | block | ifStmt | whileStmt | forStmt
//! ```
//!
//! Expression productions are in `expr.rs`.

mod expr;
mod stmt;

use crate::{recovery, Parser};
use lox_ir::{Stmt, TokenKind};

impl Parser<'_> {
    /// Parse declarations until `end` (not consumed) or end of input.
    ///
    /// A failed declaration is recorded and skipped; the loop resumes at the
    /// next statement boundary. Used both for the program and inside blocks.
    pub(crate) fn declarations_until(&mut self, end: TokenKind) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.cursor.check(end) && !self.cursor.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    tracing::trace!(line = error.line, message = %error.message, "recovering");
                    self.errors.push(error);
                    recovery::synchronize(&mut self.cursor);
                }
            }
        }
        statements
    }
}
