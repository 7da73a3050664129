//! Line-oriented input helpers for interactive prompts.
//!
//! All reads go through a `&mut dyn BufRead` so tests can script a session
//! with a `Cursor` instead of a terminal.

use std::io::{BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims surrounding whitespace and a leading UTF-8 BOM. Returns `None` on EOF
/// or on a read error.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use blackjack_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            strip_utf8_bom(&mut line);
            Some(line.trim().to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Writes `question` without a newline, flushes, and reads the answer.
pub fn prompt(
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
    question: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;
    Ok(read_stdin_line(stdin))
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
