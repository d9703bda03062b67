use rand::Rng;
use tracing::debug;

use crate::{card::WINNING_SCORE, deck::Deck, error::GameError, hand::Hand};

/// Lowest total at which the dealer stops drawing.
pub const DEALER_STAY_SCORE: u8 = 17;

pub struct Dealer {
    hand: Hand,
    deck: Deck,
}

impl Dealer {
    /// Creates a fresh deck and shuffles it once.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::create();
        deck.shuffle(rng);
        Self::with_deck(deck)
    }

    /// Uses `deck` in its current order.
    pub fn with_deck(deck: Deck) -> Self {
        Dealer {
            hand: Hand::new(),
            deck,
        }
    }

    pub fn deal_to(&mut self, hand: &mut Hand) -> Result<(), GameError> {
        let card = self.deck.draw()?;
        hand.add_card(card);
        Ok(())
    }

    pub fn deal_self(&mut self) -> Result<(), GameError> {
        let card = self.deck.draw()?;
        self.hand.add_card(card);
        Ok(())
    }

    pub fn should_stay(&self) -> bool {
        (DEALER_STAY_SCORE..=WINNING_SCORE).contains(&self.hand.total())
    }

    /// Hits until the hand stays or busts.
    pub fn play_out(&mut self) -> Result<(), GameError> {
        while !(self.hand.is_busted() || self.should_stay()) {
            debug!(total = self.hand.total(), "dealer hits");
            self.deal_self()?;
        }
        debug!(total = self.hand.total(), busted = self.hand.is_busted(), "dealer done");
        Ok(())
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }
}
