use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no weight in blackjack scoring and are kept for display only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (c)
    Clubs,
    /// Diamonds suit (d)
    Diamonds,
    /// Hearts suit (h)
    Hearts,
    /// Spades suit (s)
    Spades,
}

/// Represents the rank of a playing card from Ace through King.
/// The discriminant is the rank's position (Ace = 1, King = 13), not its point value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1, may count as 11 in a soft total)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (counts 10)
    Jack,
    /// Queen (counts 10)
    Queen,
    /// King (counts 10)
    King,
}

impl Rank {
    /// Baseline point value: the rank number capped at 10. Aces count 1 here.
    pub fn points(self) -> u32 {
        (self as u32).min(10)
    }
}

/// A single playing card.
///
/// Rank and suit are fixed once the card is created; only the facing can change.
/// A face-down card is worth nothing until it is flipped back up.
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
///
/// let mut card = Card::new(Rank::Queen, Suit::Hearts);
/// assert_eq!(card.value(), 10);
///
/// card.flip();
/// assert_eq!(card.value(), 0);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a face-up card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self::with_facing(rank, suit, true)
    }

    pub fn with_facing(rank: Rank, suit: Suit, face_up: bool) -> Self {
        Self {
            rank,
            suit,
            face_up,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Point value of the card: 0 when face-down, otherwise the rank capped at 10.
    pub fn value(&self) -> u32 {
        if self.face_up {
            self.rank.points()
        } else {
            0
        }
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Builds the 52 face-up cards in suit-major, rank-minor order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(r, s));
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_are_capped_at_ten() {
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::Jack, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).value(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Spades).value(), 10);
    }

    #[test]
    fn ace_counts_one_at_baseline() {
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).value(), 1);
    }

    #[test]
    fn pip_cards_count_their_rank() {
        for (rank, expected) in all_ranks().iter().zip(1..=9) {
            assert_eq!(Card::new(*rank, Suit::Clubs).value(), expected);
        }
    }

    #[test]
    fn face_down_card_is_worth_zero_until_flipped_back() {
        let mut card = Card::with_facing(Rank::Seven, Suit::Spades, false);
        assert_eq!(card.value(), 0);
        card.flip();
        assert!(card.is_face_up());
        assert_eq!(card.value(), 7);
    }

    #[test]
    fn flip_twice_restores_facing() {
        let mut card = Card::new(Rank::Five, Suit::Hearts);
        card.flip();
        card.flip();
        assert!(card.is_face_up());
        assert_eq!(card.rank(), Rank::Five);
        assert_eq!(card.suit(), Suit::Hearts);
    }

    #[test]
    fn full_deck_is_suit_major() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck[12], Card::new(Rank::King, Suit::Clubs));
        assert_eq!(deck[13], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck[51], Card::new(Rank::King, Suit::Spades));
    }
}
