//! Runtime errors.
//!
//! Every runtime error carries the line of the operator or identifier that
//! raised it and maps onto one of the `E6xxx` error codes.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Line;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, RuntimeError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,
    #[error("Undefined Variable '{name}'.")]
    UndefinedVariable { name: String },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}]: {kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: Line,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, line: Line) -> Self {
        RuntimeError { kind, line }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            RuntimeErrorKind::OperandMustBeNumber => ErrorCode::E6001,
            RuntimeErrorKind::OperandsMustBeNumbers
            | RuntimeErrorKind::OperandsMustBeNumbersOrStrings => ErrorCode::E6002,
            RuntimeErrorKind::UndefinedVariable { .. } => ErrorCode::E6003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.line).with_message(self.kind.to_string())
    }
}

#[cold]
pub fn operand_must_be_number(line: Line) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandMustBeNumber, line)
}

#[cold]
pub fn operands_must_be_numbers(line: Line) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandsMustBeNumbers, line)
}

#[cold]
pub fn operands_must_be_numbers_or_strings(line: Line) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandsMustBeNumbersOrStrings, line)
}

#[cold]
pub fn undefined_variable(name: &str, line: Line) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::UndefinedVariable {
            name: name.to_string(),
        },
        line,
    )
}
