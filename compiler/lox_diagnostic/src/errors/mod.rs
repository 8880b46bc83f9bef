//! Error documentation for `lox explain`.

use crate::ErrorCode;

/// Registry of error documentation.
///
/// Use `ErrorDocs::get(code)` to retrieve the explanation for an error code.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (
        ErrorCode::E0001,
        "\
# E0001: unexpected character

The scanner found a character that does not begin any token, such as
`@`, `$`, `^` or a backtick. Each such character is reported once and
scanning continues with the next one.

    var a = 1 @ 2;   // Error: Unexpected character.
",
    ),
    (
        ErrorCode::E0002,
        "\
# E0002: unterminated string

A string literal was opened with `\"` but the input ended before the
closing quote. Strings may span lines, so the error is reported on the
last line of the input.

    print \"hello;   // Error: Unterminated String.
",
    ),
    (
        ErrorCode::E1001,
        "\
# E1001: expected expression

The parser needed an expression (a literal, a variable, a grouping or an
operator application) but found a token that cannot start one.

    ;            // Error at ';': Expect expression.
    print 1 +;   // Error at ';': Expect expression.
",
    ),
    (
        ErrorCode::E1002,
        "\
# E1002: expected token

A required piece of punctuation is missing: the `;` ending a statement,
the `)` closing a grouping or condition, or the `}` closing a block.

    print 10
    var a = 20;   // Error at 'var': Expect ';' after value.
",
    ),
    (
        ErrorCode::E1003,
        "\
# E1003: expected identifier

`var` must be followed by the name of the variable being declared.

    var = 20;   // Error at '=': Expect variable name.
",
    ),
    (
        ErrorCode::E1004,
        "\
# E1004: invalid assignment target

Only a variable can appear on the left of `=`. Parsing continues after
this error, so later mistakes are still reported.

    1 = 2;       // Error at '=': Invalid assignment target.
    (a) = 3;     // Error at '=': Invalid assignment target.
",
    ),
    (
        ErrorCode::E6001,
        "\
# E6001: operand must be a number

Unary `-` only applies to numbers.

    print -\"abc\";   // Operand must be a number.
",
    ),
    (
        ErrorCode::E6002,
        "\
# E6002: operand type mismatch

`-`, `*`, `/`, `<`, `<=`, `>` and `>=` need two numbers. `+` needs two
numbers or two strings; there is no implicit conversion between them.

    print 1 - \"a\";   // Operands must be numbers.
    print 1 + \"a\";   // Operands must be two numbers or two strings.
",
    ),
    (
        ErrorCode::E6003,
        "\
# E6003: undefined variable

A variable was read or assigned before any `var` declaration of that
name is visible. Assignment never creates a variable.

    print undef;   // Undefined Variable 'undef'.
    b = 1;         // Undefined Variable 'b'.
",
    ),
];
