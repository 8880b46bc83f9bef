//! Unary operator evaluation.

use lox_ir::{Line, UnaryOp};

use crate::{operand_must_be_number, EvalResult, Value};

/// Apply `op` to an already-evaluated operand.
///
/// `!` accepts any value and negates its truthiness; `-` requires a number.
pub fn evaluate_unary(value: Value, op: UnaryOp, line: Line) -> EvalResult {
    match (op, value) {
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Neg, _) => Err(operand_must_be_number(line)),
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
    }
}
