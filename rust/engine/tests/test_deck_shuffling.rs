use std::collections::HashSet;

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::deck::Deck;
use blackjack_engine::hand::Hand;

fn deal_n(deck: &mut Deck, n: usize) -> Vec<Card> {
    let mut hand = Hand::new();
    for _ in 0..n {
        deck.deal(&mut hand).expect("deck should not run out");
    }
    hand.cards().to_vec()
}

#[test]
fn populate_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.populate();
    let set: HashSet<(Rank, Suit)> = deck.cards().iter().map(|c| (c.rank(), c.suit())).collect();
    assert_eq!(deck.remaining(), 52);
    assert_eq!(set.len(), 52);
}

#[test]
fn populate_twice_still_has_52() {
    let mut deck = Deck::new_with_seed(3);
    deck.populate();
    deck.populate();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn dealing_shrinks_deck_without_replacement() {
    let mut deck = Deck::new_with_seed(2024);
    deck.shuffle();
    for n in [1usize, 10, 26] {
        let mut fresh = Deck::new_with_seed(2024);
        fresh.shuffle();
        let dealt = deal_n(&mut fresh, n);
        assert_eq!(fresh.remaining(), 52 - n);
        let unique: HashSet<Card> = dealt.iter().copied().collect();
        assert_eq!(unique.len(), n, "dealt cards must be pairwise distinct");
    }
    let all = deal_n(&mut deck, 52);
    assert_eq!(all.iter().copied().collect::<HashSet<_>>().len(), 52);
    assert!(deck.is_empty());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(deal_n(&mut d1, 10), deal_n(&mut d2, 10), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        deal_n(&mut d1, 10),
        deal_n(&mut d2, 10),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::new_with_seed(77);
    let before: HashSet<Card> = deck.cards().iter().copied().collect();
    deck.shuffle();
    let after: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn top_card_position_is_roughly_uniform() {
    // 52 positions, 5200 shuffles: each card should land on top about 100 times
    let mut deck = Deck::new_with_seed(9);
    let mut counts = std::collections::HashMap::new();
    for _ in 0..5200 {
        deck.populate();
        deck.shuffle();
        let top = *deck.cards().last().unwrap();
        *counts.entry(top).or_insert(0u32) += 1;
    }
    assert_eq!(counts.len(), 52, "every card should reach the top at least once");
    assert!(counts.values().all(|&c| (40..=180).contains(&c)), "{:?}", counts);
}
