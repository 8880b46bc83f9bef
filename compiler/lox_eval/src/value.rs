//! Runtime values.

use std::fmt;
use std::rc::Rc;

use lox_ir::{Literal, StringInterner};

/// A Lox runtime value.
///
/// Equality is structural: values of different variants are never equal,
/// numbers compare with IEEE `==` (so `NaN != NaN`), strings by content.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Written `null` in source; displayed as `nil`.
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Convert a literal from the syntax tree.
    pub fn from_literal(literal: Literal, interner: &StringInterner) -> Self {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
            Literal::String(name) => Value::string(interner.lookup(name)),
        }
    }

    /// `nil` and `false` are falsey; everything else, `0` and `""` included,
    /// is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => fmt_number(*n, f),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Integral values print without a fractional part (`3`, not `3.0`).
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{n}")
    }
}
