//! Status messages for terminal output.
//!
//! Messages go to stderr so the bundle artifact can stream to stdout
//! unmixed. `owo-colors` honors `NO_COLOR` and terminal capabilities on its
//! own.

use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}
