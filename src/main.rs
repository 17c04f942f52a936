//! Binary entry point for `rr`.

use colored::Colorize;
use rr::RenameError;
use std::process;

fn main() {
    if let Err(e) = rr::run() {
        match &e {
            RenameError::Cancelled => {}
            RenameError::InvalidArguments(usage) => eprint!("{}", usage),
            _ => eprintln!("{} {}", "Error:".red().bold(), e),
        }
        process::exit(e.exit_code());
    }
}
