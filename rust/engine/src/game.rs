use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::participant::{Participant, HOUSE_NAME};
use crate::table::{Outcome, Table, TableEvent};

/// Most players that can sit against the house.
pub const MAX_PLAYERS: usize = 7;

/// Cards every participant receives before anyone draws.
pub const INITIAL_CARDS: usize = 2;

/// Stages of a single round, in the order [`Game::play`] walks through them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Two cards each, house hole card hidden
    InitialDeal,
    /// Each player draws in seat order
    PlayersDraw,
    /// House reveals and draws to 17
    HouseDraw,
    /// Players still standing are compared with the house
    Adjudicate,
    /// All hands are thrown away
    Cleanup,
}

/// How one player's round ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub name: String,
    pub total: u32,
    pub outcome: Outcome,
}

/// What happened in a round, captured before the hands were cleared.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub players: Vec<PlayerResult>,
    pub house_total: u32,
    pub house_busted: bool,
    pub deck_remaining: usize,
}

impl RoundSummary {
    pub fn outcome_of(&self, name: &str) -> Option<Outcome> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.outcome)
    }
}

/// One table: a deck, the house and up to seven players.
///
/// The deck is populated and shuffled once, at construction. Later rounds keep
/// drawing from whatever is left of it.
///
/// # Examples
///
/// ```
/// use blackjack_engine::game::Game;
/// use blackjack_engine::table::RecordingTable;
///
/// let mut game = Game::new(["Ann", "Bo"], 42).unwrap();
/// let mut table = RecordingTable::new(); // every player stands
/// let summary = game.play(&mut table);
///
/// assert_eq!(summary.players.len(), 2);
/// assert!(game.players().iter().all(|p| p.hand().is_empty()));
/// ```
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    house: Participant,
    players: Vec<Participant>,
}

impl Game {
    pub fn new<I, S>(names: I, seed: u64) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_house_name(names, HOUSE_NAME, seed)
    }

    /// Like [`Game::new`], with the dealer seated under `house_name`.
    pub fn with_house_name<I, S>(names: I, house_name: &str, seed: u64) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        Self::with_deck(names, house_name, deck)
    }

    /// Seats the players against a house called `house_name`, using `deck` as is.
    pub fn with_deck<I, S>(names: I, house_name: &str, deck: Deck) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Participant> = names.into_iter().map(Participant::player).collect();
        if players.is_empty() || players.len() > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount {
                count: players.len(),
            });
        }
        info!(players = players.len(), house = house_name, "table opened");
        Ok(Self {
            deck,
            house: Participant::house(house_name),
            players,
        })
    }

    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    pub fn house(&self) -> &Participant {
        &self.house
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Plays one full round and leaves every hand empty afterwards.
    pub fn play(&mut self, table: &mut dyn Table) -> RoundSummary {
        self.enter(RoundPhase::InitialDeal);
        self.initial_deal(table);
        // hide the hole card; an empty house hand is reported by flip_first_card
        let _ = self.house.flip_first_card(table);
        for player in &self.players {
            table.notify(TableEvent::Hand(player.view()));
        }
        table.notify(TableEvent::Hand(self.house.view()));

        self.enter(RoundPhase::PlayersDraw);
        for player in &mut self.players {
            self.deck.additional_cards(player, table);
        }

        self.enter(RoundPhase::HouseDraw);
        // an empty house hand reports NoCardToFlip here a second time
        let _ = self.house.flip_first_card(table);
        table.notify(TableEvent::HouseReveal);
        table.notify(TableEvent::Hand(self.house.view()));
        self.deck.additional_cards(&mut self.house, table);

        self.enter(RoundPhase::Adjudicate);
        let summary = self.adjudicate(table);

        self.enter(RoundPhase::Cleanup);
        for player in &mut self.players {
            player.clear();
        }
        self.house.clear();
        summary
    }

    fn enter(&self, phase: RoundPhase) {
        debug!(?phase, deck_remaining = self.deck.remaining(), "round phase");
    }

    fn initial_deal(&mut self, table: &mut dyn Table) {
        for _ in 0..INITIAL_CARDS {
            for player in &mut self.players {
                let _ = self.deck.deal_to(player, table);
            }
            let _ = self.deck.deal_to(&mut self.house, table);
        }
    }

    fn adjudicate(&self, table: &mut dyn Table) -> RoundSummary {
        let house_total = self.house.total();
        let house_busted = self.house.is_busted();

        let players = self
            .players
            .iter()
            .map(|player| {
                let outcome = if player.is_busted() {
                    Outcome::Bust
                } else if house_busted || player.total() > house_total {
                    player.win(table);
                    Outcome::Win
                } else if player.total() < house_total {
                    player.lose(table);
                    Outcome::Lose
                } else {
                    player.push(table);
                    Outcome::Push
                };
                info!(name = player.name(), total = player.total(), ?outcome, "result");
                PlayerResult {
                    name: player.name().to_string(),
                    total: player.total(),
                    outcome,
                }
            })
            .collect();

        RoundSummary {
            players,
            house_total,
            house_busted,
            deck_remaining: self.deck.remaining(),
        }
    }
}
