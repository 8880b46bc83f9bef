//! Declaration and statement parsing.

use crate::{ParseError, Parser};
use lox_diagnostic::ErrorCode;
use lox_ir::{Expr, Literal, Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;

impl Parser<'_> {
    pub(crate) fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.cursor.eat(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    /// `"var" IDENTIFIER ( "=" expression )? ";"`, after `var`.
    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        if !self.cursor.check(TokenKind::Identifier) {
            return Err(self
                .cursor
                .error_at_current(ErrorCode::E1003, "Expect variable name."));
        }
        let name = self.cursor.advance();

        let initializer = if self.cursor.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var {
            name: name.lexeme,
            initializer,
            line: name.line,
        })
    }

    /// Nested blocks and control flow recurse through here.
    fn statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Print => {
                self.cursor.advance();
                self.print_statement()
            }
            TokenKind::LeftBrace => {
                self.cursor.advance();
                Ok(Stmt::Block(self.block()?))
            }
            TokenKind::If => {
                self.cursor.advance();
                self.if_statement()
            }
            TokenKind::While => {
                self.cursor.advance();
                self.while_statement()
            }
            TokenKind::For => {
                self.cursor.advance();
                self.for_statement()
            }
            _ => self.expression_statement(),
        }
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// Statements up to the closing `}`, after `{`.
    ///
    /// Errors inside the block are recovered from here, so the block itself
    /// only fails if its closing brace is missing.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let statements = self.declarations_until(TokenKind::RightBrace);
        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    /// `"if" "(" expression ")" statement ( "else" statement )?`
    ///
    /// An `else` binds to the nearest preceding `if`.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// `"for" "(" ( varDecl | exprStmt | ";" ) expression? ";" expression? ")" statement`
    ///
    /// Lowered to
    /// `Block[init, While(cond or true, Block[body, Expression(increment)])]`,
    /// dropping the parts that are absent.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.cursor.eat(TokenKind::Semicolon) {
            None
        } else if self.cursor.eat(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.cursor.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition = condition.unwrap_or(Expr::Literal(Literal::Bool(true)));
        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }
}
