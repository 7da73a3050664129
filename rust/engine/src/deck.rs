use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, warn};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::hand::Hand;
use crate::participant::Participant;
use crate::table::{Table, TableEvent};

/// The card source for a game: a hand that starts full and shrinks as it deals.
///
/// Cards come off the end of the sequence. The RNG is owned by the deck, so a
/// fixed seed replays the same shuffles.
#[derive(Debug)]
pub struct Deck {
    cards: Hand,
    rng: ChaCha20Rng,
}

impl Deck {
    /// A populated, unshuffled deck.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: Hand::with_capacity(52),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.populate();
        deck
    }

    /// A deck holding exactly `cards`; the last card is dealt first.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Discards whatever is left and refills with the 52 standard cards, face-up.
    pub fn populate(&mut self) {
        self.cards.clear();
        for card in full_deck() {
            self.cards.add(card);
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.cards_mut().shuffle(&mut self.rng);
    }

    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Moves the top card into `target`. An empty deck leaves `target` untouched.
    pub fn deal(&mut self, target: &mut Hand) -> Result<(), GameError> {
        let card = self.cards.take_top().ok_or(GameError::OutOfCards)?;
        debug!(?card, remaining = self.cards.len(), "deal");
        target.add(card);
        Ok(())
    }

    /// Deals to a participant, telling the table when the deck has run dry.
    pub fn deal_to(
        &mut self,
        participant: &mut Participant,
        table: &mut dyn Table,
    ) -> Result<(), GameError> {
        let dealt = self.deal(participant.hand_mut());
        if dealt.is_err() {
            warn!(name = participant.name(), "out of cards");
            table.notify(TableEvent::OutOfCards);
        }
        dealt
    }

    /// Keeps dealing while the participant is still under 22 and wants a card.
    ///
    /// Each new card is shown to the table, and a bust is announced the moment it
    /// happens. Running out of cards ends the loop.
    pub fn additional_cards(&mut self, participant: &mut Participant, table: &mut dyn Table) {
        while !participant.is_busted() && participant.is_hitting(table) {
            if self.deal_to(participant, table).is_err() {
                break;
            }
            table.notify(TableEvent::Hand(participant.view()));

            if participant.is_busted() {
                participant.bust(table);
            }
        }
    }
}
