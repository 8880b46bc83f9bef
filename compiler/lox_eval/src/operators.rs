//! Binary operator evaluation.
//!
//! Both operands are evaluated (left first) before any type check, so side
//! effects in either operand happen even when the operator then fails.

use lox_ir::{BinaryOp, Line};

use crate::{operands_must_be_numbers, operands_must_be_numbers_or_strings, EvalResult, Value};

/// Apply `op` to two already-evaluated operands.
///
/// `==` and `!=` accept any pair of values. `+` adds numbers or concatenates
/// strings; mixing the two is an error. The remaining operators require two
/// numbers and follow IEEE semantics, so `1 / 0` is infinity.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp, line: Line) -> EvalResult {
    match (op, &left, &right) {
        (BinaryOp::Eq, ..) => Ok(Value::Bool(left == right)),
        (BinaryOp::NotEq, ..) => Ok(Value::Bool(left != right)),

        (BinaryOp::Add, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (BinaryOp::Add, Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        (BinaryOp::Add, ..) => Err(operands_must_be_numbers_or_strings(line)),

        (_, Value::Number(a), Value::Number(b)) => Ok(numeric(op, *a, *b)),
        _ => Err(operands_must_be_numbers(line)),
    }
}

fn numeric(op: BinaryOp, a: f64, b: f64) -> Value {
    match op {
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        // Matched before reaching here.
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
    }
}
