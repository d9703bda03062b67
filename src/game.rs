use std::{cmp::Ordering, str::FromStr};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    dealer::Dealer,
    error::GameError,
    hand::{Hand, Score},
};

/// Turn phases, in the order a game passes through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Setup,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolution,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Choice {
    Hit,
    Stay,
}

impl FromStr for Choice {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "hit" | "h" => Ok(Choice::Hit),
            "stay" | "s" => Ok(Choice::Stay),
            other => Err(GameError::InvalidInput(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    DealerWins,
    PlayerWins,
    Tie,
}

impl Outcome {
    /// Player bust beats everything, then dealer bust, then the higher total.
    pub fn decide(player: Score, dealer: Score) -> Self {
        if player.busted {
            return Outcome::PlayerBust;
        }
        if dealer.busted {
            return Outcome::DealerBust;
        }
        match dealer.total.cmp(&player.total) {
            Ordering::Greater => Outcome::DealerWins,
            Ordering::Less => Outcome::PlayerWins,
            Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn message(&self, player: Score, dealer: Score) -> String {
        match self {
            Outcome::PlayerBust => "You busted and lost.".to_string(),
            Outcome::DealerBust => {
                format!("Dealer busted. You won at a score of {}.", player.total)
            }
            Outcome::DealerWins => format!("The dealer won with a score of {}.", dealer.total),
            Outcome::PlayerWins => format!("You won with a score of {}.", player.total),
            Outcome::Tie => format!(
                "It is a tie. Both parties received a score of {}.",
                player.total
            ),
        }
    }
}

/// One round between the player and the dealer.
///
/// Each operation is only legal in one phase and returns
/// [`GameError::InvalidPhase`] otherwise, leaving the game untouched.
pub struct Game {
    player: Hand,
    dealer: Dealer,
    phase: Phase,
}

impl Game {
    pub fn new(dealer: Dealer) -> Self {
        Game {
            player: Hand::new(),
            dealer,
            phase: Phase::Setup,
        }
    }

    /// Two cards to the player, then two to the dealer.
    pub fn deal_initial(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Setup)?;
        self.phase = Phase::Dealing;
        for _ in 0..2 {
            self.dealer.deal_to(&mut self.player)?;
        }
        for _ in 0..2 {
            self.dealer.deal_self()?;
        }
        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    /// Applies the player's decision and returns the phase it leads to.
    pub fn apply_choice(&mut self, choice: Choice) -> Result<Phase, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;
        debug!(?choice, total = self.player.total(), "player choice");
        if choice == Choice::Hit {
            self.dealer.deal_to(&mut self.player)?;
        }
        if self.player.is_busted() {
            self.phase = Phase::Resolution;
        } else if choice == Choice::Stay {
            self.phase = Phase::DealerTurn;
        }
        Ok(self.phase)
    }

    pub fn play_dealer(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::DealerTurn)?;
        self.dealer.play_out()?;
        self.phase = Phase::Resolution;
        Ok(())
    }

    pub fn resolve(&mut self) -> Result<Outcome, GameError> {
        self.expect_phase(Phase::Resolution)?;
        let player = self.player.score();
        let dealer = self.dealer.hand().score();
        let outcome = Outcome::decide(player, dealer);
        info!(?outcome, player = player.total, dealer = dealer.total, "round resolved");
        self.phase = Phase::Done;
        Ok(outcome)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}
