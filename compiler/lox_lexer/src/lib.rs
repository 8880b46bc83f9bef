//! Lexer for Lox using logos with string interning.
//!
//! Turns source text into a [`TokenList`]:
//! - every lexeme, identifier and string content is interned
//! - whitespace and comments are dropped, newlines only advance the line
//! - bad input is reported and skipped, so one run reports every lexical error
//!
//! The list always ends with exactly one `Eof` token carrying the final line.

mod keywords;
mod lex_error;
mod raw_token;

pub use lex_error::{LexError, LexErrorKind};

use logos::Logos;
use lox_diagnostic::DiagnosticQueue;
use lox_ir::{Line, Literal, StringInterner, Token, TokenKind, TokenList};
use raw_token::RawToken;

/// Tokens plus the lexical errors found while producing them.
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

/// Lex source code, reporting errors into `diagnostics`.
pub fn lex(source: &str, interner: &StringInterner, diagnostics: &mut DiagnosticQueue) -> TokenList {
    let LexOutput { tokens, errors } = lex_with_errors(source, interner);
    diagnostics.extend(errors.iter().map(LexError::to_diagnostic));
    tokens
}

/// Lex source code, returning errors alongside the tokens.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex_with_errors(source: &str, interner: &StringInterner) -> LexOutput {
    let mut tokens = TokenList::new();
    let mut errors = Vec::new();
    let mut line: Line = 1;
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let slice = logos.slice();

        let raw = match token_result {
            Ok(raw) => raw,
            Err(()) => {
                for ch in slice.chars() {
                    errors.push(LexError::unexpected_character(ch, line));
                }
                continue;
            }
        };

        let kind = match raw {
            RawToken::Newline => {
                line += 1;
                continue;
            }
            RawToken::LineComment => continue,
            RawToken::BlockComment => {
                line += count_newlines(slice);
                continue;
            }
            RawToken::UnterminatedString => {
                line += count_newlines(slice);
                errors.push(LexError::unterminated_string(line));
                continue;
            }
            RawToken::String => {
                line += count_newlines(slice);
                TokenKind::String
            }
            RawToken::Number => TokenKind::Number,
            RawToken::Identifier => keywords::lookup(slice).unwrap_or(TokenKind::Identifier),
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::LeftBrace => TokenKind::LeftBrace,
            RawToken::RightBrace => TokenKind::RightBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Star => TokenKind::Star,
            RawToken::Bang => TokenKind::Bang,
            RawToken::BangEqual => TokenKind::BangEqual,
            RawToken::Equal => TokenKind::Equal,
            RawToken::EqualEqual => TokenKind::EqualEqual,
            RawToken::Greater => TokenKind::Greater,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::Less => TokenKind::Less,
            RawToken::LessEqual => TokenKind::LessEqual,
        };

        tokens.push(cook_token(kind, slice, line, interner));
    }

    tokens.push(Token::eof(line));
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "lexed");

    LexOutput { tokens, errors }
}

/// Build the final token, decoding literal values.
fn cook_token(kind: TokenKind, slice: &str, line: Line, interner: &StringInterner) -> Token {
    let lexeme = interner.intern(slice);
    match kind {
        TokenKind::Number => {
            // The raw pattern only admits `digits(.digits)?`, which always parses.
            let value = slice.parse::<f64>().unwrap_or_default();
            Token::with_literal(kind, lexeme, Literal::Number(value), line)
        }
        TokenKind::String => {
            let contents = &slice[1..slice.len() - 1];
            Token::with_literal(kind, lexeme, Literal::String(interner.intern(contents)), line)
        }
        _ => Token::new(kind, lexeme, line),
    }
}

fn count_newlines(slice: &str) -> Line {
    let count = slice.bytes().filter(|&b| b == b'\n').count();
    Line::try_from(count).unwrap_or(Line::MAX)
}

#[cfg(test)]
mod tests;
