//! Shared CLI output helpers.
//!
//! Color scheme (console respects NO_COLOR):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints, paths, keys
//! - Bold: headers, important values

use std::fmt::Display;

use console::style;

/// Print a success message with checkmark (green).
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print an indented key-value pair (label dimmed).
pub fn kv(label: &str, value: impl Display) {
    println!("  {:<12} {}", style(label).dim(), value);
}

/// Print an indented secondary line (dimmed).
pub fn dim(msg: &str) {
    println!("  {}", style(msg).dim());
}
