//! `lox` command line.

use loxc::commands::{explain_error, lex_file, parse_file, run_file, run_prompt};
use loxc::{exit_code, init_tracing, RunConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let config = RunConfig::from_env();

    let code = match args.as_slice() {
        [] => run_prompt(&config),
        ["help" | "--help" | "-h"] => {
            print_usage();
            exit_code::SUCCESS
        }
        ["version" | "--version" | "-V"] => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            exit_code::SUCCESS
        }
        ["run", path] => run_file(path, &config),
        ["lex", path] => lex_file(path, &config),
        ["parse", path] => parse_file(path, &config),
        ["explain" | "--explain", code] => explain_error(code),
        ["run" | "lex" | "parse" | "explain" | "--explain"] => {
            print_usage();
            exit_code::USAGE
        }
        [path] => run_file(path, &config),
        _ => {
            println!("Usage: lox [script]");
            exit_code::USAGE
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    println!("Lox interpreter");
    println!();
    println!("Usage: lox [script]");
    println!();
    println!("Commands:");
    println!("  <script>             Run a Lox script");
    println!("  run <script>         Run a Lox script");
    println!("  lex <script>         Print the token stream");
    println!("  parse <script>       Print the syntax tree");
    println!("  explain <code>       Explain an error code (e.g., E1001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("With no arguments, starts an interactive prompt.");
    println!();
    println!("Environment:");
    println!("  LOX_LOG=<filter>     Enable logging (e.g., debug, lox_parse=trace)");
    println!("  LOX_COLOR=<mode>     Diagnostic color: auto, always, never");
    println!("  NO_COLOR=1           Disable colored diagnostics");
}
