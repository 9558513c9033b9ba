//! Stdout helpers for the pipeline contract
//!
//! Every result and diagnostic goes to stdout; stderr carries only the
//! tracing stream. Calling scripts capture stdout, so nothing here may
//! change the text itself (colored drops the escapes off-tty).

use colored::Colorize;

/// Print a bare result value (what calling scripts consume).
pub fn result(value: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", value);
}

/// Print an operation diagnostic.
pub fn diagnostic(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print a success confirmation.
pub fn confirmation(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print a failure with the `Error:` prefix.
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", format!("Error: {}", msg).red());
}
