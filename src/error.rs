use thiserror::Error;

use crate::game::Phase;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    #[error("Expected the {expected:?} phase but the game is in {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },
    #[error("Input closed before a choice was made")]
    InputClosed,
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
