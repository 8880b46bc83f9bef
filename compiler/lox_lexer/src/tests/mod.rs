use super::*;
use lox_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

mod proptests;

fn lex_source(source: &str) -> (LexOutput, StringInterner) {
    let interner = StringInterner::new();
    let output = lex_with_errors(source, &interner);
    (output, interner)
}

/// `(kind, lexeme, line)` for every token.
fn summary(output: &LexOutput, interner: &StringInterner) -> Vec<(TokenKind, String, Line)> {
    output
        .tokens
        .iter()
        .map(|t| (t.kind, interner.lookup(t.lexeme).to_string(), t.line))
        .collect()
}

fn single(kind: TokenKind, lexeme: &str) -> Vec<(TokenKind, String, Line)> {
    vec![(kind, lexeme.to_string(), 1), (TokenKind::Eof, String::new(), 1)]
}

#[test]
fn test_reserved_keywords() {
    let cases = [
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("for", TokenKind::For),
        ("fun", TokenKind::Fun),
        ("if", TokenKind::If),
        ("null", TokenKind::Null),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
    ];
    for (source, kind) in cases {
        let (output, interner) = lex_source(source);
        assert_eq!(summary(&output, &interner), single(kind, source));
        assert!(output.errors.is_empty());
    }
}

#[test]
fn test_punctuation_and_operators() {
    let cases = [
        ("(", TokenKind::LeftParen),
        (")", TokenKind::RightParen),
        ("{", TokenKind::LeftBrace),
        ("}", TokenKind::RightBrace),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("-", TokenKind::Minus),
        ("+", TokenKind::Plus),
        (";", TokenKind::Semicolon),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("!", TokenKind::Bang),
        ("!=", TokenKind::BangEqual),
        ("=", TokenKind::Equal),
        ("==", TokenKind::EqualEqual),
        ("<", TokenKind::Less),
        ("<=", TokenKind::LessEqual),
        (">", TokenKind::Greater),
        (">=", TokenKind::GreaterEqual),
    ];
    for (source, kind) in cases {
        let (output, interner) = lex_source(source);
        assert_eq!(summary(&output, &interner), single(kind, source));
    }
}

#[test]
fn test_maximal_munch_operators() {
    let (output, _) = lex_source("!==<=>= =");
    assert_eq!(
        output.tokens.kinds(),
        vec![
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Equal,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifiers() {
    for source in ["health", "damage", "magic", "_underscoreIdentifier", "a1_b2"] {
        let (output, interner) = lex_source(source);
        assert_eq!(summary(&output, &interner), single(TokenKind::Identifier, source));
    }
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let (output, _) = lex_source("orchid variable nullable");
    assert_eq!(
        output.tokens.kinds(),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_ignored() {
    let (output, _) = lex_source("//I am a single line comment.");
    assert_eq!(output.tokens.as_slice(), &[Token::eof(1)]);

    let (output, _) =
        lex_source("/*I am a multiline line comment.\nScanner should ignore all my lines*/");
    assert_eq!(output.tokens.as_slice(), &[Token::eof(2)]);
    assert!(output.errors.is_empty());
}

#[test]
fn test_code_after_comments() {
    let (output, interner) = lex_source("a // trailing\n/* x */ b /* y\n */ c");
    assert_eq!(
        summary(&output, &interner),
        vec![
            (TokenKind::Identifier, "a".to_string(), 1),
            (TokenKind::Identifier, "b".to_string(), 2),
            (TokenKind::Identifier, "c".to_string(), 3),
            (TokenKind::Eof, String::new(), 3),
        ]
    );
}

#[test]
fn test_unterminated_block_comment_consumes_rest() {
    let (output, _) = lex_source("1 /* never closed\nprint 2;");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(output.tokens.as_slice()[1].line, 2);
    assert!(output.errors.is_empty());
}

#[test]
fn test_numbers() {
    for source in ["123", "123.456", "0123", "12345567.123124"] {
        let (output, interner) = lex_source(source);
        assert_eq!(summary(&output, &interner), single(TokenKind::Number, source));
        let expected: f64 = source.parse().unwrap_or_default();
        assert_eq!(
            output.tokens.as_slice()[0].literal,
            Some(Literal::Number(expected))
        );
    }
}

#[test]
fn test_trailing_dot_is_separate_token() {
    let (output, interner) = lex_source("123.");
    assert_eq!(
        summary(&output, &interner),
        vec![
            (TokenKind::Number, "123".to_string(), 1),
            (TokenKind::Dot, ".".to_string(), 1),
            (TokenKind::Eof, String::new(), 1),
        ]
    );
}

#[test]
fn test_leading_dot_is_separate_token() {
    let (output, _) = lex_source(".5");
    assert_eq!(
        output.tokens.kinds(),
        vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_strings_report_end_line() {
    let cases = [
        ("\"I am a String.\"", 1, "I am a String."),
        (
            "\"I am a multiline string.\nThis line is on new row.\nThis is on third row\"",
            3,
            "I am a multiline string.\nThis line is on new row.\nThis is on third row",
        ),
        ("\"\nI start from second line.\"", 2, "\nI start from second line."),
    ];
    for (source, line, contents) in cases {
        let (output, interner) = lex_source(source);
        let token = output.tokens.as_slice()[0];
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.line, line);
        assert_eq!(interner.lookup(token.lexeme), source);
        assert_eq!(
            token.literal,
            Some(Literal::String(interner.intern(contents)))
        );
        assert_eq!(output.tokens.as_slice()[1], Token::eof(line));
    }
}

#[test]
fn test_empty_string_literal() {
    let (output, _) = lex_source("\"\"");
    assert_eq!(
        output.tokens.as_slice()[0].literal,
        Some(Literal::String(lox_ir::Name::EMPTY))
    );
}

#[test]
fn test_unexpected_characters() {
    for source in ["@", "$", "^", "`"] {
        let (output, _) = lex_source(source);
        assert_eq!(output.tokens.as_slice(), &[Token::eof(1)]);
        assert_eq!(output.errors.len(), 1);
        assert_eq!(
            output.errors[0].to_diagnostic().to_string(),
            "[line 1] Error: Unexpected character."
        );
    }
}

#[test]
fn test_scanning_continues_after_errors() {
    let (output, _) = lex_source("@ 1 $\n#");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Number, TokenKind::Eof]);
    let lines: Vec<Line> = output.errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 1, 2]);
}

#[test]
fn test_adjacent_bad_characters_each_reported() {
    let (output, _) = lex_source("@@");
    assert_eq!(output.errors.len(), 2);
}

#[test]
fn test_unterminated_string() {
    let (output, _) = lex_source("print \"abc\ndef");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Print, TokenKind::Eof]);
    assert_eq!(output.errors, vec![LexError::unterminated_string(2)]);
    assert_eq!(
        output.errors[0].to_diagnostic().to_string(),
        "[line 2] Error: Unterminated String."
    );
    assert_eq!(output.errors[0].code(), ErrorCode::E0002);
}

#[test]
fn test_statement_lexemes() {
    let (output, interner) = lex_source("var x = 10;\nprint x;");
    let lexemes: Vec<&str> = output
        .tokens
        .iter()
        .map(|t| interner.lookup(t.lexeme))
        .collect();
    assert_eq!(lexemes, vec!["var", "x", "=", "10", ";", "print", "x", ";", ""]);
    assert_eq!(output.tokens.as_slice().last().map(|t| t.line), Some(2));
}

#[test]
fn test_empty_source() {
    let (output, _) = lex_source("");
    assert_eq!(output.tokens.as_slice(), &[Token::eof(1)]);

    let (output, _) = lex_source(" \t\r\n\n");
    assert_eq!(output.tokens.as_slice(), &[Token::eof(3)]);
}

#[test]
fn test_lex_reports_into_queue() {
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::new();
    let tokens = lex("1 @ \"open", &interner, &mut queue);

    assert_eq!(tokens.kinds(), vec![TokenKind::Number, TokenKind::Eof]);
    let rendered: Vec<String> = queue.diagnostics().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "[line 1] Error: Unexpected character.".to_string(),
            "[line 1] Error: Unterminated String.".to_string(),
        ]
    );
}
