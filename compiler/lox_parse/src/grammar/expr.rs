//! Expression parsing.
//!
//! ```text
//! expression -> assignment
//! assignment -> IDENTIFIER "=" assignment | logic_or
//! logic_or   -> logic_and ( "or" logic_and )*
//! logic_and  -> equality ( "and" equality )*
//! equality   -> comparison ( ( "!=" | "==" ) comparison )*
//! comparison -> term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       -> factor ( ( "-" | "+" ) factor )*
//! factor     -> unary ( ( "/" | "*" ) unary )*
//! unary      -> ( "!" | "-" ) unary | primary
//! primary    -> NUMBER | STRING | "true" | "false" | "null"
//!             | "(" expression ")" | IDENTIFIER
//! ```

use crate::{ParseError, Parser};
use lox_diagnostic::ErrorCode;
use lox_ir::{BinaryOp, Expr, Literal, LogicalOp, TokenKind, UnaryOp};
use lox_stack::ensure_sufficient_stack;

fn equality_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::EqualEqual => Some(BinaryOp::Eq),
        TokenKind::BangEqual => Some(BinaryOp::NotEq),
        _ => None,
    }
}

fn comparison_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Greater => Some(BinaryOp::Gt),
        TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
        TokenKind::Less => Some(BinaryOp::Lt),
        TokenKind::LessEqual => Some(BinaryOp::LtEq),
        _ => None,
    }
}

fn term_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Plus => Some(BinaryOp::Add),
        _ => None,
    }
}

fn factor_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Star => Some(BinaryOp::Mul),
        _ => None,
    }
}

fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Bang => Some(UnaryOp::Not),
        TokenKind::Minus => Some(UnaryOp::Neg),
        _ => None,
    }
}

impl Parser<'_> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// Right-associative: `a = b = c` assigns `c` to `b`, then to `a`.
    ///
    /// An invalid target is reported without abandoning the statement; the
    /// left-hand expression is returned in place of the assignment.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.logic_or()?;

        if self.cursor.check(TokenKind::Equal) {
            let equals = self.cursor.advance();
            let value = self.assignment()?;

            if let Expr::Variable { name, line } = expr {
                return Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                    line,
                });
            }

            self.errors.push(ParseError::at(
                &equals,
                self.cursor.interner(),
                ErrorCode::E1004,
                "Invalid assignment target.",
            ));
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logic_and()?;
        while self.cursor.eat(TokenKind::Or) {
            let right = self.logic_and()?;
            expr = Expr::logical(expr, LogicalOp::Or, right);
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.cursor.eat(TokenKind::And) {
            let right = self.equality()?;
            expr = Expr::logical(expr, LogicalOp::And, right);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.left_assoc(Self::comparison, equality_op)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.left_assoc(Self::term, comparison_op)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.left_assoc(Self::factor, term_op)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.left_assoc(Self::unary, factor_op)
    }

    /// One left-associative binary precedence level.
    fn left_assoc(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
        op_for: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;
        while let Some(op) = op_for(self.cursor.current_kind()) {
            let line = self.cursor.advance().line;
            let right = operand(self)?;
            expr = Expr::binary(expr, op, right, line);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = unary_op(self.cursor.current_kind()) {
            let line = self.cursor.advance().line;
            let operand = ensure_sufficient_stack(|| self.unary())?;
            return Ok(Expr::unary(op, operand, line));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = *self.cursor.current();
        let expr = match token.kind {
            TokenKind::False => Expr::Literal(Literal::Bool(false)),
            TokenKind::True => Expr::Literal(Literal::Bool(true)),
            TokenKind::Null => Expr::Literal(Literal::Nil),
            TokenKind::Number | TokenKind::String => {
                Expr::Literal(token.literal.unwrap_or(Literal::Nil))
            }
            TokenKind::Identifier => Expr::Variable {
                name: token.lexeme,
                line: token.line,
            },
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.cursor
                    .expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::Grouping(Box::new(inner)));
            }
            _ => {
                return Err(self
                    .cursor
                    .error_at_current(ErrorCode::E1001, "Expect expression."));
            }
        };
        self.cursor.advance();
        Ok(expr)
    }
}
