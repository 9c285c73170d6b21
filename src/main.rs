//! formtree CLI entry point
//!
//! A minimal entrypoint that parses CLI arguments, dispatches to the
//! CLI module, prints errors to stderr and exits non-zero on failure.

use formtree::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
