//! Error recovery for the parser.
//!
//! Provides token sets and statement-boundary synchronization.

use super::cursor::Cursor;
use lox_ir::TokenKind;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit corresponds to a `TokenKind` discriminant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

const _: () = assert!(TokenKind::COUNT <= 64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Keywords that begin a new declaration or statement.
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Skip tokens after a syntax error until a likely statement start.
///
/// Always consumes the current token first. Then stops right after a `;`,
/// or before a token in [`STMT_BOUNDARY`], or at end of input.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    cursor.advance();
    while !cursor.is_at_end() {
        if cursor.previous_kind() == Some(TokenKind::Semicolon) {
            return;
        }
        if STMT_BOUNDARY.contains(cursor.current_kind()) {
            return;
        }
        cursor.advance();
    }
}
