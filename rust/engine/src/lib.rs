//! # blackjack-engine: Blackjack Rules Core
//!
//! The rules engine for a table of one to seven players against the house.
//! Covers card values, soft/hard hand totals, the deck lifecycle, turn order
//! and win/lose/push adjudication. Input and output are left to a [`table::Table`]
//! implementation supplied by the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`hand`] - Ordered card container and total computation
//! - [`participant`] - Players and the house, with their hit decisions
//! - [`deck`] - Seeded shuffling, dealing and the draw loop
//! - [`game`] - Round orchestration and adjudication
//! - [`table`] - Collaborator trait for decisions and notifications
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::Hand;
//!
//! let mut hand = Hand::new();
//! hand.add(Card::new(Rank::Ace, Suit::Clubs));
//! hand.add(Card::new(Rank::Ace, Suit::Hearts));
//! assert_eq!(hand.total(), 12);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Shuffles come from a seeded ChaCha20 RNG owned by the deck:
//!
//! ```rust
//! use blackjack_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.cards(), d2.cards());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod participant;
pub mod table;
