use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{
    card::{Card, Face, Suit},
    error::GameError,
};

pub const DECK_SIZE: usize = 52;

/// A single 52-card deck. The top of the deck is the end of the sequence.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full deck in creation order: suits outer, faces inner.
    pub fn create() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for face in Face::ALL {
                cards.push(Card::new(suit, face));
            }
        }
        Deck { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!(cards = self.cards.len(), "shuffled deck");
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
