//! Iterative destruction of syntax trees.
//!
//! The derived drop glue recurses once per nesting level, so a tree built
//! from `((((...))))` or thousands of nested blocks would overflow the
//! stack while being freed. These impls detach children onto a worklist
//! first, leaving every node shallow by the time its own glue runs.

use std::mem;

use super::{Expr, Literal, Stmt};

const EMPTY_EXPR: Expr = Expr::Literal(Literal::Nil);

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_expr(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_expr(&mut expr, &mut pending);
        }
    }
}

fn detach_expr(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Grouping(inner)
        | Expr::Unary { operand: inner, .. }
        | Expr::Assign { value: inner, .. } => {
            pending.push(mem::replace(&mut **inner, EMPTY_EXPR));
        }
        Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
            pending.push(mem::replace(&mut **left, EMPTY_EXPR));
            pending.push(mem::replace(&mut **right, EMPTY_EXPR));
        }
        Expr::Literal(_) | Expr::Variable { .. } => {}
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_stmt(self, &mut pending);
        while let Some(mut stmt) = pending.pop() {
            detach_stmt(&mut stmt, &mut pending);
        }
    }
}

fn detach_stmt(stmt: &mut Stmt, pending: &mut Vec<Stmt>) {
    match stmt {
        Stmt::Block(statements) => pending.append(statements),
        Stmt::If {
            then_branch,
            else_branch,
            ..
        } => {
            pending.push(mem::replace(&mut **then_branch, Stmt::Block(Vec::new())));
            if let Some(else_branch) = else_branch.take() {
                pending.push(*else_branch);
            }
        }
        Stmt::While { body, .. } => {
            pending.push(mem::replace(&mut **body, Stmt::Block(Vec::new())));
        }
        // Expressions tear themselves down.
        Stmt::Expression(_) | Stmt::Print(_) | Stmt::Var { .. } => {}
    }
}
