//! Parser tests.
//!
//! - `parser`: expressions, statements and `for` lowering
//! - `errors`: error messages and recovery


use crate::{parse, ParseOutput};
use lox_ir::{AstPrinter, StringInterner};

fn parse_source(source: &str) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    let tokens = lox_lexer::lex_with_errors(source, &interner).tokens;
    let output = parse(&tokens, &interner);
    (output, interner)
}

/// Parse and render without errors, one statement per line.
fn render(source: &str) -> String {
    let (output, interner) = parse_source(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        output.errors
    );
    AstPrinter::new(&interner).print_program(&output.statements)
}

/// Rendered diagnostics for a source with syntax errors.
fn error_messages(source: &str) -> Vec<String> {
    let (output, _) = parse_source(source);
    output
        .errors
        .iter()
        .map(|e| e.to_diagnostic().to_string())
        .collect()
}
