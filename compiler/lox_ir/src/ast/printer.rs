//! Parenthesized rendering of the tree, used by `lox parse` and in tests.

use super::{Expr, Literal, Stmt};
use crate::StringInterner;
use std::fmt::Write;

/// Renders statements and expressions as prefix S-expressions.
///
/// `1 + 2 * 3` renders as `(+ 1 (* 2 3))`; `print a;` as `(print a)`.
pub struct AstPrinter<'a> {
    interner: &'a StringInterner,
    out: String,
}

impl<'a> AstPrinter<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        AstPrinter {
            interner,
            out: String::new(),
        }
    }

    /// Render a program, one statement per line.
    pub fn print_program(mut self, statements: &[Stmt]) -> String {
        for stmt in statements {
            self.stmt(stmt);
            self.out.push('\n');
        }
        self.out
    }

    pub fn print_stmt(mut self, stmt: &Stmt) -> String {
        self.stmt(stmt);
        self.out
    }

    pub fn print_expr(mut self, expr: &Expr) -> String {
        self.expr(expr);
        self.out
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) => {
                self.out.push_str("(; ");
                self.expr(expr);
                self.out.push(')');
            }
            Stmt::Print(expr) => {
                self.out.push_str("(print ");
                self.expr(expr);
                self.out.push(')');
            }
            Stmt::Var {
                name, initializer, ..
            } => {
                self.out.push_str("(var ");
                self.out.push_str(self.interner.lookup(*name));
                if let Some(init) = initializer {
                    self.out.push(' ');
                    self.expr(init);
                }
                self.out.push(')');
            }
            Stmt::Block(statements) => {
                self.out.push_str("(block");
                for inner in statements {
                    self.out.push(' ');
                    self.stmt(inner);
                }
                self.out.push(')');
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.out.push_str(if else_branch.is_some() {
                    "(if-else "
                } else {
                    "(if "
                });
                self.expr(condition);
                self.out.push(' ');
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push(' ');
                    self.stmt(else_branch);
                }
                self.out.push(')');
            }
            Stmt::While { condition, body } => {
                self.out.push_str("(while ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(body);
                self.out.push(')');
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(literal) => self.literal(*literal),
            Expr::Grouping(inner) => {
                self.out.push_str("(group ");
                self.expr(inner);
                self.out.push(')');
            }
            Expr::Unary { op, operand, .. } => {
                self.out.push('(');
                self.out.push_str(op.as_symbol());
                self.out.push(' ');
                self.expr(operand);
                self.out.push(')');
            }
            Expr::Binary {
                left, op, right, ..
            } => self.infix(op.as_symbol(), left, right),
            Expr::Logical { left, op, right } => self.infix(op.as_symbol(), left, right),
            Expr::Variable { name, .. } => self.out.push_str(self.interner.lookup(*name)),
            Expr::Assign { name, value, .. } => {
                self.out.push_str("(= ");
                self.out.push_str(self.interner.lookup(*name));
                self.out.push(' ');
                self.expr(value);
                self.out.push(')');
            }
        }
    }

    fn infix(&mut self, symbol: &str, left: &Expr, right: &Expr) {
        self.out.push('(');
        self.out.push_str(symbol);
        self.out.push(' ');
        self.expr(left);
        self.out.push(' ');
        self.expr(right);
        self.out.push(')');
    }

    fn literal(&mut self, literal: Literal) {
        // Writing to a String cannot fail.
        let _ = match literal {
            Literal::Nil => write!(self.out, "nil"),
            Literal::Bool(b) => write!(self.out, "{b}"),
            Literal::Number(n) => write!(self.out, "{n}"),
            Literal::String(name) => write!(self.out, "\"{}\"", self.interner.lookup(name)),
        };
    }
}
