use std::collections::HashMap;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use twenty_one::{Card, CardValue, Dealer, Deck, Face, GameError, Hand, Suit, DECK_SIZE};

fn counts(cards: &[Card]) -> HashMap<(Suit, Face), usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry((card.suit, card.face)).or_insert(0) += 1;
    }
    counts
}

fn face_strategy() -> impl Strategy<Value = Face> {
    prop::sample::select(Face::ALL.to_vec())
}

#[test]
fn every_suit_and_face_appears_once() {
    let deck = Deck::create();
    let counts = counts(deck.cards());
    assert_eq!(counts.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for face in Face::ALL {
            assert_eq!(counts[&(suit, face)], 1, "{face:?} of {suit:?}");
        }
    }
}

#[test]
fn fifty_third_draw_fails() {
    let mut deck = Deck::create();
    deck.shuffle(&mut SmallRng::seed_from_u64(3));
    let drawn: Vec<Card> = (0..DECK_SIZE).map(|_| deck.draw().unwrap()).collect();
    assert_eq!(counts(&drawn).len(), DECK_SIZE);
    assert!(matches!(deck.draw(), Err(GameError::EmptyDeck)));
}

proptest! {
    #[test]
    fn shuffle_only_reorders(seed in any::<u64>()) {
        let mut deck = Deck::create();
        deck.shuffle(&mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(deck.remaining(), DECK_SIZE);
        prop_assert_eq!(counts(deck.cards()), counts(Deck::create().cards()));
    }

    #[test]
    fn non_ace_value_ignores_hand(faces in prop::collection::vec(face_strategy(), 0..6), face in face_strategy()) {
        prop_assume!(face != Face::Ace);
        let mut hand = Hand::new();
        for f in &faces {
            hand.add_card(Card::new(Suit::Hearts, *f));
        }
        hand.add_card(Card::new(Suit::Spades, face));
        let added = hand.cards().last().unwrap();
        prop_assert_eq!(added.value(), Card::new(Suit::Spades, face).value());
    }

    #[test]
    fn ace_takes_eleven_only_when_it_fits(faces in prop::collection::vec(face_strategy(), 0..6)) {
        let mut hand = Hand::new();
        for f in &faces {
            hand.add_card(Card::new(Suit::Hearts, *f));
        }
        let before = hand.total();
        hand.add_card(Card::new(Suit::Spades, Face::Ace));
        let expected = if before + 11 <= 21 { 11 } else { 1 };
        prop_assert_eq!(hand.cards().last().unwrap().value(), CardValue::Fixed(expected));
        prop_assert_eq!(hand.total(), before + expected);
    }

    #[test]
    fn dealer_finishes_standing_or_busted(seed in any::<u64>()) {
        let mut dealer = Dealer::new(&mut SmallRng::seed_from_u64(seed));
        dealer.deal_self().unwrap();
        dealer.deal_self().unwrap();
        dealer.play_out().unwrap();
        let total = dealer.hand().total();
        prop_assert!(dealer.hand().is_busted() || (17..=21).contains(&total));
        prop_assert_eq!(dealer.should_stay(), (17..=21).contains(&total));
    }
}
