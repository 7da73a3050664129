use thiserror::Error;

use crate::game::MAX_PLAYERS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Out of cards. Unable to deal.")]
    OutOfCards,
    #[error("No card to flip for {name}")]
    NoCardToFlip { name: String },
    #[error("Invalid player count: {count} (expected 1-{max})", max = MAX_PLAYERS)]
    InvalidPlayerCount { count: usize },
}
