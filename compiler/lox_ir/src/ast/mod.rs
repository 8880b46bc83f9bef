//! Statement and expression tree.
//!
//! Produced by the parser, consumed by the interpreter. `for` loops never
//! appear here: the parser lowers them to `Block`/`While`.

mod operators;
mod printer;
mod teardown;

pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use printer::AstPrinter;

use super::{Line, Name};

/// A literal value as written in source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    /// String contents without the surrounding quotes.
    String(Name),
}

/// Expression node.
///
/// Nodes that can fail at runtime carry the line of their operator (or
/// identifier) so errors point at the right place.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        line: Line,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
        line: Line,
    },
    /// Short-circuiting `and` / `or`.
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    Variable {
        name: Name,
        line: Line,
    },
    Assign {
        name: Name,
        value: Box<Expr>,
        line: Line,
    },
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOp, right: Expr, line: Line) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            line,
        }
    }

    pub fn logical(left: Expr, op: LogicalOp, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr, line: Line) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
            line,
        }
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// Expression evaluated for its side effects; the value is discarded.
    Expression(Expr),
    Print(Expr),
    Var {
        name: Name,
        initializer: Option<Expr>,
        line: Line,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}
