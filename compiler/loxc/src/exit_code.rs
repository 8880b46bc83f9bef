//! Process exit codes (BSD `sysexits.h`).

pub const SUCCESS: i32 = 0;
/// Command line usage error.
pub const USAGE: i32 = 64;
/// Lexical or syntax error in the script.
pub const DATA_ERR: i32 = 65;
/// Runtime error while executing the script.
pub const SOFTWARE: i32 = 70;
/// Script or stdin could not be read.
pub const IO_ERR: i32 = 74;
