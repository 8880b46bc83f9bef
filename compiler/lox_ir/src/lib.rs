//! Lox IR - the data shared between lexer, parser and interpreter.
//!
//! - Names for interned identifiers and string literals
//! - Tokens and `TokenList` for lexer output
//! - The statement/expression tree produced by the parser
//!
//! Trees are plain owned values (`Box<Expr>`); each node exclusively owns
//! its children. Identifiers and string contents are interned as [`Name`]
//! so comparing two identifiers is a `u32` compare.

pub mod ast;
mod interner;
mod name;
mod token;

pub use ast::{AstPrinter, BinaryOp, Expr, Literal, LogicalOp, Stmt, UnaryOp};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use token::{Token, TokenKind, TokenList};

/// 1-based source line number.
pub type Line = u32;
