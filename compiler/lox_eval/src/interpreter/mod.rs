//! Statement execution and expression evaluation.
//!
//! The interpreter owns the [`Environment`] so state survives across calls
//! to [`Interpreter::interpret`]. Block scopes are pushed through
//! [`ScopedInterpreter`], which pops them again even when a runtime error
//! unwinds the block early.

mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use lox_ir::{Expr, LogicalOp, SharedInterner, Stmt};
use lox_stack::ensure_sufficient_stack;

use crate::{
    evaluate_binary, evaluate_unary, stdout_handler, undefined_variable, AssignError,
    Environment, EvalResult, RuntimeError, SharedPrintHandler, Value,
};

pub struct Interpreter {
    interner: SharedInterner,
    pub(crate) env: Environment,
    print: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new(interner: SharedInterner) -> Self {
        Self::with_print_handler(interner, stdout_handler())
    }

    pub fn with_print_handler(interner: SharedInterner, print: SharedPrintHandler) -> Self {
        Interpreter {
            interner,
            env: Environment::new(),
            print,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Execute `statements` in order, stopping at the first runtime error.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            if let Err(err) = self.execute(stmt) {
                tracing::debug!(line = err.line, code = %err.code(), "runtime error");
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print.println(&value.to_string());
                Ok(())
            }
            Stmt::Var {
                name, initializer, ..
            } => {
                let value = match initializer {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Nil,
                };
                self.env.define(*name, value);
                Ok(())
            }
            Stmt::Block(statements) => self.execute_block(statements),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
        }
    }

    /// Run `statements` in a fresh scope nested in the current one.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        self.with_env_scope(|scoped| {
            statements
                .iter()
                .try_for_each(|stmt| scoped.execute(stmt))
        })
    }

    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from_literal(*literal, &self.interner)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, operand, line } => {
                let value = self.evaluate(operand)?;
                evaluate_unary(value, *op, *line)
            }
            Expr::Binary {
                left,
                op,
                right,
                line,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(left, right, *op, *line)
            }
            Expr::Logical { left, op, right } => {
                let left = self.evaluate(left)?;
                let short_circuits = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Variable { name, line } => self
                .env
                .lookup(*name)
                .ok_or_else(|| undefined_variable(self.interner.lookup(*name), *line)),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                match self.env.assign(*name, value.clone()) {
                    Ok(()) => Ok(value),
                    Err(AssignError::Undefined) => {
                        Err(undefined_variable(self.interner.lookup(*name), *line))
                    }
                }
            }
        }
    }
}
