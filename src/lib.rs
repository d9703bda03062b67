//! Twenty-One: one player against a dealer over a single shuffled deck.
mod card;
mod dealer;
mod deck;
mod error;
mod game;
mod hand;
mod table;
mod terminal;

pub use card::{Card, CardValue, Face, Suit, WINNING_SCORE};
pub use dealer::{Dealer, DEALER_STAY_SCORE};
pub use deck::{Deck, DECK_SIZE};
pub use error::GameError;
pub use game::{Choice, Game, Outcome, Phase};
pub use hand::{Hand, Score};
pub use table::{RoundSummary, Table, TableConfig};
pub use terminal::{ConsoleTerminal, Terminal};
