use serde::Serialize;
use tracing::trace;

use crate::card::{Card, WINNING_SCORE};

/// Total and bust flag of a hand at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Score {
    pub total: u8,
    pub busted: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a card, pinning an Ace's value against the current total.
    pub fn add_card(&mut self, card: Card) {
        let card = card.resolve(self.total());
        self.cards.push(card);
        trace!(%card, total = self.total(), "card added to hand");
    }

    pub fn total(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, card| total.saturating_add(card.points()))
    }

    pub fn is_busted(&self) -> bool {
        self.total() > WINNING_SCORE
    }

    pub fn score(&self) -> Score {
        Score {
            total: self.total(),
            busted: self.is_busted(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}
