//! Tree-walking interpreter for Lox.
//!
//! Executes the statements produced by `lox_parse` against an
//! [`Environment`] of nested scopes. The interpreter and its global scope
//! persist across calls to [`Interpreter::interpret`], which is what lets a
//! REPL session remember variables between lines.
//!
//! The first runtime error aborts the current `interpret` call; output
//! already printed stays printed.

mod environment;
mod errors;
mod interpreter;
mod operators;
pub mod print_handler;
mod unary_operators;
mod value;

pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use errors::{
    operand_must_be_number, operands_must_be_numbers, operands_must_be_numbers_or_strings,
    undefined_variable, EvalResult, RuntimeError, RuntimeErrorKind,
};
pub use interpreter::{Interpreter, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{buffer_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler};
pub use unary_operators::evaluate_unary;
pub use value::Value;
