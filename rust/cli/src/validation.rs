//! Input parsing and validation for interactive prompts.
//!
//! Parsers here never fail hard: they return a [`Parsed`] value telling the
//! caller whether to use the answer or ask again.

use blackjack_engine::game::MAX_PLAYERS;

/// Outcome of parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum Parsed<T> {
    /// Usable answer
    Value(T),
    /// Unusable answer; the message explains why
    Invalid(String),
}

/// Parse the number of players, which must be between 1 and 7.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_player_count, Parsed};
/// assert_eq!(parse_player_count("3"), Parsed::Value(3));
/// assert!(matches!(parse_player_count("8"), Parsed::Invalid(_)));
/// assert!(matches!(parse_player_count("two"), Parsed::Invalid(_)));
/// ```
pub fn parse_player_count(input: &str) -> Parsed<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_PLAYERS).contains(&n) => Parsed::Value(n),
        Ok(n) => Parsed::Invalid(format!(
            "{} players is out of range (1-{})",
            n, MAX_PLAYERS
        )),
        Err(_) => Parsed::Invalid(format!("'{}' is not a number", input.trim())),
    }
}

/// Parse a player name. Names are trimmed and must not be empty.
pub fn parse_player_name(input: &str) -> Parsed<String> {
    let name = input.trim();
    if name.is_empty() {
        Parsed::Invalid("Name must not be empty".to_string())
    } else {
        Parsed::Value(name.to_string())
    }
}

/// True only for an explicit yes ("y" or "yes", any case).
///
/// Used for hit prompts, where anything else means stand.
pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// True only for an explicit no ("n" or "no", any case).
///
/// Used for the play-again prompt, where anything else means play again.
pub fn is_no(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "n" | "no")
}
