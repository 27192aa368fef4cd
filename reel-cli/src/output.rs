// reel-cli/src/output.rs
//
// Terminal output helpers. Results go to stdout, errors to stderr; colors are
// applied only when the stream supports them.

use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!(
        "{}: {}",
        label.if_supports_color(Stream::Stdout, |l| l.bright_cyan()),
        value
    );
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(
        "{} {}",
        "✓".if_supports_color(Stream::Stdout, |m| m.green()),
        message
    );
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        "Error:".if_supports_color(Stream::Stderr, |m| m.bright_red()),
        message
    );
}
