//! Token types for the lexer.

use super::{Line, Literal, Name};
use std::fmt;

/// A token with the line it ended on.
///
/// `lexeme` is the exact source text (quotes included for strings). For
/// tokens spanning several lines, `line` is the line of the last character.
#[derive(Copy, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Name,
    /// Decoded value for `Number` and `String` tokens.
    pub literal: Option<Literal>,
    pub line: Line,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: Name, line: Line) -> Self {
        Token {
            kind,
            lexeme,
            literal: None,
            line,
        }
    }

    #[inline]
    pub fn with_literal(kind: TokenKind, lexeme: Name, literal: Literal, line: Line) -> Self {
        Token {
            kind,
            lexeme,
            literal: Some(literal),
            line,
        }
    }

    /// The end-of-input marker.
    pub fn eof(line: Line) -> Self {
        Token::new(TokenKind::Eof, Name::EMPTY, line)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal {
            Some(literal) => write!(f, "{:?}({:?}) @ {}", self.kind, literal, self.line),
            None => write!(f, "{:?} @ {}", self.kind, self.line),
        }
    }
}

/// Token kinds.
///
/// Fieldless so that kinds fit in a bitset (see `TokenSet` in the parser);
/// payloads live in [`Token::literal`] and [`Token::lexeme`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Null,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Number of distinct kinds.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Index of this kind, `0..COUNT`.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Check if this is a reserved word.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Null
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

/// Lexer output: tokens in source order, always ending in exactly one `Eof`.
#[derive(Clone, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create from a Vec of tokens.
    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Kinds in order; handy for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
