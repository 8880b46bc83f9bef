//! Raw token recognition with logos.
//!
//! Raw tokens carry no payload; interning, literal decoding, keyword
//! resolution and line counting happen in the cooking loop in `lib.rs`.

use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    // === Trivia ===
    #[token("\n")]
    Newline,
    #[regex(r"//[^\n]*")]
    LineComment,
    /// `/* ... */`, or `/*` to end of input when never closed. Not nested.
    #[token("/*", block_comment)]
    BlockComment,

    // === Punctuation ===
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,

    // === Operators ===
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    // === Literals ===
    /// `digits` or `digits.digits`; a trailing `.` is left for the next token.
    #[regex(r"[0-9]+", number_fraction)]
    Number,
    /// Strings may span lines and have no escape sequences.
    #[regex(r#""[^"]*""#)]
    String,
    #[regex(r#""[^"]*"#)]
    UnterminatedString,
    /// Identifiers and keywords; keywords are resolved afterwards.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
}

/// Consume the rest of a block comment, up to and including `*/`.
fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
    true
}

/// Extend an integer match with `.digits` when a digit follows the dot.
fn number_fraction(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + digits);
    }
    true
}
