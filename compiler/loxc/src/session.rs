//! Compile-and-run session.

use lox_diagnostic::emitter::DiagnosticEmitter;
use lox_diagnostic::DiagnosticQueue;
use lox_eval::{stdout_handler, Interpreter, SharedPrintHandler};
use lox_ir::SharedInterner;
use lox_parse::ParseError;

use crate::exit_code;

/// What went wrong, if anything, in one call to [`Session::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub had_syntax_error: bool,
    pub had_runtime_error: bool,
}

impl RunOutcome {
    pub fn is_success(self) -> bool {
        !self.had_syntax_error && !self.had_runtime_error
    }

    /// `65` for syntax errors, `70` for runtime errors, `0` otherwise.
    pub fn exit_code(self) -> i32 {
        if self.had_syntax_error {
            exit_code::DATA_ERR
        } else if self.had_runtime_error {
            exit_code::SOFTWARE
        } else {
            exit_code::SUCCESS
        }
    }
}

/// Interpreter state plus the emitter that receives its diagnostics.
///
/// Globals defined by one [`run`](Self::run) stay visible to the next.
pub struct Session<E: DiagnosticEmitter> {
    interner: SharedInterner,
    interpreter: Interpreter,
    emitter: E,
}

impl<E: DiagnosticEmitter> Session<E> {
    /// Session whose `print` output goes to stdout.
    pub fn new(emitter: E) -> Self {
        Self::with_print_handler(emitter, stdout_handler())
    }

    pub fn with_print_handler(emitter: E, print: SharedPrintHandler) -> Self {
        let interner = SharedInterner::default();
        let interpreter = Interpreter::with_print_handler(interner.clone(), print);
        Session {
            interner,
            interpreter,
            emitter,
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        self.interpreter.print_handler()
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }

    /// Lex, parse and execute `source`.
    ///
    /// Lexical errors are reported before syntax errors. Any of either
    /// prevents execution. A runtime error stops execution at the failing
    /// statement and is reported on its own.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run(&mut self, source: &str) -> RunOutcome {
        let mut diagnostics = DiagnosticQueue::new();
        let tokens = lox_lexer::lex(source, &self.interner, &mut diagnostics);
        let parsed = lox_parse::parse(&tokens, &self.interner);
        diagnostics.extend(parsed.errors.iter().map(ParseError::to_diagnostic));

        if diagnostics.has_errors() {
            tracing::debug!(errors = diagnostics.error_count(), "not executing");
            self.emitter.emit_all(diagnostics.diagnostics());
            self.emitter.flush();
            return RunOutcome {
                had_syntax_error: true,
                had_runtime_error: false,
            };
        }

        match self.interpreter.interpret(&parsed.statements) {
            Ok(()) => RunOutcome::default(),
            Err(err) => {
                self.emitter.emit(&err.to_diagnostic());
                self.emitter.flush();
                RunOutcome {
                    had_syntax_error: false,
                    had_runtime_error: true,
                }
            }
        }
    }
}
