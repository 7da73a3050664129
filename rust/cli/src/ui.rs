//! UI helper functions for terminal output formatting.
//!
//! Shared by the commands for banners, error lines and warnings.

use std::io::Write;

pub const WELCOME_BANNER: &str = "\t\tWelcome to Blackjack!";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

pub fn write_banner(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", WELCOME_BANNER)?;
    writeln!(out)
}
