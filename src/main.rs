//! delivcheck CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to CLI commands (via cli::run)
//! 3. Prints operational errors to stderr
//! 4. Exits with the command's status code
//!
//! Exit codes: 0 package valid, 1 package has errors, 2 operational failure.
//!
//! main.rs must NOT load files, build packages, or render reports.
//! All logic is delegated to the CLI module.

use delivcheck::cli;

fn main() {
    match cli::run() {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}
