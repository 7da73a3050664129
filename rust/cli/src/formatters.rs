//! Card and hand formatters for terminal display.
//!
//! Cards render as a rank code followed by a suit letter (`Ac`, `10h`, `Qs`);
//! a face-down card renders as `XX` so the house's hole card stays hidden.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::format_card;
//!
//! let mut card = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(format_card(&card), "As");
//! card.flip();
//! assert_eq!(format_card(&card), "XX");
//! ```

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::table::{HandView, Outcome};

/// Placeholder shown in place of a face-down card.
pub const HIDDEN_CARD: &str = "XX";

pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "c",
        Suit::Diamonds => "d",
        Suit::Hearts => "h",
        Suit::Spades => "s",
    }
}

pub fn format_card(card: &Card) -> String {
    if card.is_face_up() {
        format!("{}{}", format_rank(card.rank()), format_suit(card.suit()))
    } else {
        HIDDEN_CARD.to_string()
    }
}

/// One display line for a participant: name, cards, and the total when it is known.
///
/// ```text
/// Ann:    Ac      Kd      (21)
/// House:  XX      7s
/// Bo:     <empty>
/// ```
pub fn format_hand(view: &HandView) -> String {
    let mut line = format!("{}:\t", view.name);
    if view.cards.is_empty() {
        line.push_str("<empty>");
        return line;
    }
    for card in &view.cards {
        line.push_str(&format_card(card));
        line.push('\t');
    }
    if view.total != 0 {
        line.push_str(&format!("({})", view.total));
    }
    line
}

pub fn format_outcome(name: &str, outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => format!("{} wins.", name),
        Outcome::Lose => format!("{} loses.", name),
        Outcome::Push => format!("{} pushes.", name),
        Outcome::Bust => format!("{} busts.", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(name: &str, cards: Vec<Card>, total: u32) -> HandView {
        HandView {
            name: name.to_string(),
            cards,
            total,
        }
    }

    #[test]
    fn every_rank_and_suit_has_a_code() {
        assert_eq!(format_card(&Card::new(Rank::Ten, Suit::Hearts)), "10h");
        assert_eq!(format_card(&Card::new(Rank::Jack, Suit::Clubs)), "Jc");
        assert_eq!(format_card(&Card::new(Rank::Two, Suit::Diamonds)), "2d");
        assert_eq!(format_card(&Card::new(Rank::King, Suit::Spades)), "Ks");
    }

    #[test]
    fn face_down_card_is_two_character_placeholder() {
        let card = Card::with_facing(Rank::Ace, Suit::Hearts, false);
        assert_eq!(format_card(&card), "XX");
        assert_eq!(HIDDEN_CARD.len(), 2);
    }

    #[test]
    fn hand_line_shows_total() {
        let line = format_hand(&view(
            "Ann",
            vec![Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::King, Suit::Diamonds)],
            21,
        ));
        assert_eq!(line, "Ann:\tAc\tKd\t(21)");
    }

    #[test]
    fn hidden_total_is_suppressed() {
        let line = format_hand(&view(
            "House",
            vec![
                Card::with_facing(Rank::Nine, Suit::Clubs, false),
                Card::new(Rank::Seven, Suit::Spades),
            ],
            0,
        ));
        assert_eq!(line, "House:\tXX\t7s\t");
    }

    #[test]
    fn empty_hand_line() {
        assert_eq!(format_hand(&view("Bo", vec![], 0)), "Bo:\t<empty>");
    }

    #[test]
    fn outcome_lines() {
        assert_eq!(format_outcome("Ann", Outcome::Win), "Ann wins.");
        assert_eq!(format_outcome("Ann", Outcome::Lose), "Ann loses.");
        assert_eq!(format_outcome("Ann", Outcome::Push), "Ann pushes.");
        assert_eq!(format_outcome("Ann", Outcome::Bust), "Ann busts.");
    }
}
