//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::{self, Write};

use lox_diagnostic::emitter::DiagnosticEmitter;
use lox_diagnostic::DiagnosticQueue;
use lox_ir::{AstPrinter, Literal, StringInterner};
use lox_parse::ParseError;

use super::{read_file, stderr_emitter};
use crate::{exit_code, RunConfig};

/// Lex a file and print one token per line.
pub fn lex_file(path: &str, config: &RunConfig) -> i32 {
    with_source(path, config, |source, out| dump_tokens(source, out))
}

/// Parse a file and print the statement tree.
pub fn parse_file(path: &str, config: &RunConfig) -> i32 {
    with_source(path, config, |source, out| dump_ast(source, out))
}

fn with_source(
    path: &str,
    config: &RunConfig,
    dump: impl FnOnce(&str, &mut io::StdoutLock<'static>) -> io::Result<DiagnosticQueue>,
) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return exit_code::IO_ERR;
        }
    };

    let mut out = io::stdout().lock();
    let diagnostics = match dump(&source, &mut out) {
        Ok(diagnostics) => diagnostics,
        Err(e) => {
            eprintln!("error writing output: {e}");
            return exit_code::IO_ERR;
        }
    };

    if diagnostics.has_errors() {
        let mut emitter = stderr_emitter(config);
        emitter.emit_all(diagnostics.diagnostics());
        emitter.flush();
        exit_code::DATA_ERR
    } else {
        exit_code::SUCCESS
    }
}

/// Write the token stream of `source` to `out`: line, kind, lexeme and
/// literal value when there is one. Lexical errors are returned.
pub fn dump_tokens<W: Write>(source: &str, out: &mut W) -> io::Result<DiagnosticQueue> {
    let interner = StringInterner::new();
    let mut diagnostics = DiagnosticQueue::new();
    let tokens = lox_lexer::lex(source, &interner, &mut diagnostics);

    for token in &tokens {
        let lexeme = interner.lookup(token.lexeme);
        let kind = format!("{:?}", token.kind);
        write!(out, "{:>4} {kind:<12} {lexeme}", token.line)?;
        match token.literal {
            Some(Literal::Number(n)) => writeln!(out, " {n:?}")?,
            Some(Literal::String(s)) => writeln!(out, " {:?}", interner.lookup(s))?,
            _ => writeln!(out)?,
        }
    }
    Ok(diagnostics)
}

/// Write the parenthesized statement tree of `source` to `out`. Lexical
/// and syntax errors are returned in that order.
pub fn dump_ast<W: Write>(source: &str, out: &mut W) -> io::Result<DiagnosticQueue> {
    let interner = StringInterner::new();
    let mut diagnostics = DiagnosticQueue::new();
    let tokens = lox_lexer::lex(source, &interner, &mut diagnostics);
    let parsed = lox_parse::parse(&tokens, &interner);
    diagnostics.extend(parsed.errors.iter().map(ParseError::to_diagnostic));

    out.write_all(AstPrinter::new(&interner).print_program(&parsed.statements).as_bytes())?;
    Ok(diagnostics)
}
