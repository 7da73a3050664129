//! The seam between the rules engine and whoever sits at the table.
//!
//! The engine never reads input or prints anything itself. Player hit decisions
//! are asked of a [`Table`], and everything worth showing is handed to it as a
//! [`TableEvent`].

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::participant::Participant;

/// Result of a single player's round against the house.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Beat the house, or survived a house bust
    Win,
    /// Lower total than the house
    Lose,
    /// Same total as the house
    Push,
    /// Went over 21 during their own draw
    Bust,
}

/// Snapshot of a participant's hand for display.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandView {
    pub name: String,
    pub cards: Vec<Card>,
    /// Zero while the first card is face-down.
    pub total: u32,
}

impl HandView {
    pub fn of(participant: &Participant) -> Self {
        Self {
            name: participant.name().to_string(),
            cards: participant.hand().cards().to_vec(),
            total: participant.total(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TableEvent {
    /// A participant's current hand.
    Hand(HandView),
    /// The house turns its hole card over before drawing.
    HouseReveal,
    Bust { name: String },
    /// Win, lose or push announcement for a player still standing.
    Outcome { name: String, outcome: Outcome },
    OutOfCards,
    NoCardToFlip { name: String },
}

/// External collaborator that answers hit decisions and receives notifications.
pub trait Table {
    /// Whether the player shown in `view` wants another card. May block on input.
    fn hit_decision(&mut self, view: &HandView) -> bool;

    fn notify(&mut self, event: TableEvent);
}

/// In-memory table with scripted hit decisions, for tests and headless runs.
///
/// Decisions are consumed in order; once the script runs out every further
/// request is answered with "stand".
#[derive(Debug, Default)]
pub struct RecordingTable {
    decisions: Vec<bool>,
    next: usize,
    pub events: Vec<TableEvent>,
}

impl RecordingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decisions(decisions: impl IntoIterator<Item = bool>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            next: 0,
            events: Vec::new(),
        }
    }

    pub fn outcomes(&self) -> Vec<(String, Outcome)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TableEvent::Outcome { name, outcome } => Some((name.clone(), *outcome)),
                _ => None,
            })
            .collect()
    }

    pub fn busts(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TableEvent::Bust { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn decisions_used(&self) -> usize {
        self.next
    }
}

impl Table for RecordingTable {
    fn hit_decision(&mut self, _view: &HandView) -> bool {
        let decision = self.decisions.get(self.next).copied().unwrap_or(false);
        self.next += 1;
        decision
    }

    fn notify(&mut self, event: TableEvent) {
        self.events.push(event);
    }
}
