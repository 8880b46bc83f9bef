use super::*;
use proptest::prelude::*;

/// Source fragments that each lex to exactly one token.
fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,6}",
        "[0-9]{1,4}\\.[0-9]{1,4}",
        "\"[a-zA-Z0-9 ]{0,10}\"",
        prop::sample::select(vec![
            "(", ")", "{", "}", ",", ".", "-", "+", ";", "/", "*", "!", "!=", "=", "==", ">",
            ">=", "<", "<=",
        ])
        .prop_map(str::to_string),
    ]
}

proptest! {
    #[test]
    fn lexing_arbitrary_input_terminates_with_single_eof(source in "\\PC{0,64}") {
        let (output, _) = lex_source(&source);
        let eofs = output.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(output.tokens.as_slice().last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn lexemes_reproduce_source(parts in prop::collection::vec(lexeme(), 0..16)) {
        let source = parts.join(" ");
        let (output, interner) = lex_source(&source);

        prop_assert!(output.errors.is_empty());
        let lexemes: Vec<&str> = output
            .tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| interner.lookup(t.lexeme))
            .collect();
        prop_assert_eq!(lexemes.join(" "), source);
    }

    #[test]
    fn each_lexeme_relexes_to_same_kind(source in "\\PC{0,64}") {
        let (output, interner) = lex_source(&source);

        for token in output.tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
            let text = interner.lookup(token.lexeme);
            let (alone, alone_interner) = lex_source(text);
            let kinds: Vec<TokenKind> = alone.tokens.iter().map(|t| t.kind).collect();
            prop_assert_eq!(kinds, vec![token.kind, TokenKind::Eof], "lexeme {:?}", text);
            prop_assert!(alone.errors.is_empty());
            let first = alone.tokens.as_slice().first().map(|t| alone_interner.lookup(t.lexeme));
            prop_assert_eq!(first, Some(text));
        }
    }

    #[test]
    fn eof_line_counts_newlines(parts in prop::collection::vec(("[a-z]{1,4}", 0usize..3), 0..12)) {
        let mut source = String::new();
        for (word, newlines) in &parts {
            source.push_str(word);
            source.push(' ');
            source.push_str(&"\n".repeat(*newlines));
        }
        let expected = 1 + source.matches('\n').count();

        let (output, _) = lex_source(&source);
        let eof_line = output.tokens.as_slice().last().map(|t| t.line as usize);
        prop_assert_eq!(eof_line, Some(expected));
    }
}
