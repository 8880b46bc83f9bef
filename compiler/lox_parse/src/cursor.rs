//! Token cursor for navigating the token stream.

use super::ParseError;
use lox_diagnostic::ErrorCode;
use lox_ir::{StringInterner, Token, TokenKind, TokenList};

/// Cursor for navigating tokens.
///
/// Never moves past the final `Eof`. If the list lacks a trailing `Eof`,
/// one is synthesized so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    interner: &'a StringInterner,
    pos: usize,
    eof: Token,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        let tokens = tokens.as_slice();
        let last_line = tokens.last().map_or(1, |t| t.line);
        Cursor {
            tokens,
            interner,
            pos: 0,
            eof: Token::eof(last_line),
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the most recently consumed token, if any.
    #[inline]
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. At `Eof` this is a no-op
    /// that returns the `Eof` token.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with an error at the current token.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(ErrorCode::E1002, message))
        }
    }

    #[cold]
    pub fn error_at_current(&self, code: ErrorCode, message: &str) -> ParseError {
        ParseError::at(self.current(), self.interner, code, message)
    }
}
