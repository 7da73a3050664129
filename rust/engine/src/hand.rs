use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u32 = 21;

/// Ordered cards held by a participant or the deck, in the order they arrived.
///
/// The hand owns its cards outright; moving a card to another hand goes through
/// [`Hand::take_top`] and [`Hand::add`], never through shared references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(7),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Drops every card. Calling it on an empty hand is a no-op.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Hand total with one ace promoted to 11 when that keeps the hand at 21 or under.
    ///
    /// Returns 0 for an empty hand and for a hand whose first card is face-down, so
    /// the house's hidden total never leaks while its hole card is covered.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackjack_engine::cards::{Card, Rank, Suit};
    /// use blackjack_engine::hand::Hand;
    ///
    /// let mut hand = Hand::new();
    /// hand.add(Card::new(Rank::Ace, Suit::Spades));
    /// hand.add(Card::new(Rank::King, Suit::Hearts));
    /// assert_eq!(hand.total(), 21);
    /// ```
    pub fn total(&self) -> u32 {
        match self.cards.first() {
            None => return 0,
            Some(first) if !first.is_face_up() => return 0,
            Some(_) => {}
        }

        let hard: u32 = self.cards.iter().map(Card::value).sum();
        let has_ace = self
            .cards
            .iter()
            .any(|c| c.is_face_up() && c.rank() == Rank::Ace);

        // counting one ace as 11 adds exactly 10 on top of the hard total
        if has_ace && hard <= BLACKJACK - 10 {
            hard + 10
        } else {
            hard
        }
    }

    pub fn is_busted(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Flips the first card over.
    pub(crate) fn flip_first(&mut self, owner: &str) -> Result<(), GameError> {
        match self.cards.first_mut() {
            Some(card) => {
                card.flip();
                Ok(())
            }
            None => Err(GameError::NoCardToFlip {
                name: owner.to_string(),
            }),
        }
    }

    /// Removes the most recently added card.
    pub(crate) fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
