//! Diagnostic system for Lox error reporting.
//!
//! Every phase reports problems as a [`Diagnostic`]: an error code for
//! `lox explain`, the line it happened on, and a message. Lexical and
//! syntax diagnostics additionally carry a [`Location`] naming the
//! offending token.
//!
//! Diagnostics are collected in a [`DiagnosticQueue`] and rendered by a
//! [`DiagnosticEmitter`](emitter::DiagnosticEmitter).

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;

pub use diagnostic::{Diagnostic, Location};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use queue::DiagnosticQueue;
