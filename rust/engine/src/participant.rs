use tracing::{debug, warn};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::table::{HandView, Outcome, Table, TableEvent};

/// The house keeps drawing while its total is at or below this value.
pub const HOUSE_HITS_THROUGH: u32 = 16;

/// Default display name for the dealer.
pub const HOUSE_NAME: &str = "House";

/// Decides how a participant answers "do you want another card?".
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    /// Asks the table, which in turn asks a human.
    Player,
    /// Fixed rule: hit on 16 or less, stand on 17 or more.
    House,
}

/// A named hand seated at the table, either a player or the house.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    hand: Hand,
    role: Role,
}

impl Participant {
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            role: Role::Player,
        }
    }

    pub fn house(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            role: Role::House,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn add(&mut self, card: Card) {
        self.hand.add(card);
    }

    pub fn clear(&mut self) {
        self.hand.clear();
    }

    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    /// Whether this participant takes another card right now.
    ///
    /// The house answers from its own total and never touches the table;
    /// a player's answer comes from [`Table::hit_decision`].
    pub fn is_hitting(&self, table: &mut dyn Table) -> bool {
        match self.role {
            Role::House => self.total() <= HOUSE_HITS_THROUGH,
            Role::Player => table.hit_decision(&HandView::of(self)),
        }
    }

    pub fn bust(&self, table: &mut dyn Table) {
        debug!(name = %self.name, total = self.total(), "bust");
        table.notify(TableEvent::Bust {
            name: self.name.clone(),
        });
    }

    pub fn win(&self, table: &mut dyn Table) {
        self.announce(Outcome::Win, table);
    }

    pub fn lose(&self, table: &mut dyn Table) {
        self.announce(Outcome::Lose, table);
    }

    pub fn push(&self, table: &mut dyn Table) {
        self.announce(Outcome::Push, table);
    }

    fn announce(&self, outcome: Outcome, table: &mut dyn Table) {
        table.notify(TableEvent::Outcome {
            name: self.name.clone(),
            outcome,
        });
    }

    /// Turns the first card over (hides or reveals the house's hole card).
    ///
    /// An empty hand is reported to the table and left untouched.
    pub fn flip_first_card(&mut self, table: &mut dyn Table) -> Result<(), GameError> {
        let flipped = self.hand.flip_first(&self.name);
        if let Err(GameError::NoCardToFlip { name }) = &flipped {
            warn!(name = %name, "no card to flip");
            table.notify(TableEvent::NoCardToFlip { name: name.clone() });
        }
        flipped
    }

    pub fn view(&self) -> HandView {
        HandView::of(self)
    }
}
