//! Lox driver.
//!
//! [`Session`] ties the phases together: lex and parse a chunk of source,
//! report every syntax diagnostic, and only when there are none hand the
//! statements to the interpreter. The same session serves a whole script
//! or every line of a REPL.
//!
//! # Logging
//!
//! - `LOX_LOG=debug`: phase entry/exit and runtime errors.
//! - `LOX_LOG=lox_parse=trace`: every recovered syntax error.
//!
//! `RUST_LOG` is read when `LOX_LOG` is unset.

pub mod commands;
mod config;
pub mod exit_code;
mod session;
mod tracing_setup;

pub use config::RunConfig;
pub use session::{RunOutcome, Session};
pub use tracing_setup::init_tracing;
