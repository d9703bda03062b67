use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    card::Card,
    dealer::Dealer,
    error::GameError,
    game::{Choice, Game, Outcome, Phase},
    hand::{Hand, Score},
    terminal::Terminal,
};

const CHOICE_PROMPT: &str = "\nWhat would you like to do now? ((h)it/(s)tay):";

#[derive(Clone, Debug)]
pub struct TableConfig {
    /// Clear the terminal before showing the result.
    pub clear_screen: bool,
    /// Fixed shuffle seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            clear_screen: true,
            seed: None,
        }
    }
}

/// Everything a finished round produced.
#[derive(Clone, Debug, Serialize)]
pub struct RoundSummary {
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player: Score,
    pub dealer: Score,
    pub outcome: Outcome,
    pub message: String,
}

/// Drives one game from the deal to the result, talking to a [`Terminal`].
pub struct Table<T> {
    game: Game,
    terminal: T,
    config: TableConfig,
}

impl<T: Terminal> Table<T> {
    pub fn new(config: TableConfig, terminal: T) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let game = Game::new(Dealer::new(&mut rng));
        Self::with_game(game, config, terminal)
    }

    pub fn with_game(game: Game, config: TableConfig, terminal: T) -> Self {
        Table {
            game,
            terminal,
            config,
        }
    }

    pub fn play(&mut self) -> Result<RoundSummary, GameError> {
        self.terminal.display("Welcome to the card game of Twenty-One!")?;
        self.game.deal_initial()?;
        self.show_initial_cards()?;
        self.player_turn()?;
        if self.game.phase() == Phase::DealerTurn {
            self.game.play_dealer()?;
        }
        let outcome = self.game.resolve()?;
        let summary = self.summarize(outcome);
        self.show_result(&summary)?;
        match serde_json::to_string(&summary) {
            Ok(json) => debug!(summary = %json, "round finished"),
            Err(err) => warn!(%err, "failed to serialize round summary"),
        }
        Ok(summary)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    fn show_initial_cards(&mut self) -> Result<(), GameError> {
        self.terminal.display("\nThe player's initial cards are as follows:")?;
        let player = self.game.player().clone();
        self.display_cards(&player)?;
        self.terminal.display("\nThe dealer's initial cards are as follows:")?;
        if let Some(up_card) = self.game.dealer().hand().first() {
            self.terminal.display(&up_card.to_string())?;
        }
        self.terminal.display("Hidden")
    }

    fn player_turn(&mut self) -> Result<(), GameError> {
        self.terminal.display("\nIt is your turn to play.")?;
        let mut choice = Choice::Stay;
        while self.game.phase() == Phase::PlayerTurn {
            self.show_player_cards("\nYour current cards are as follows:")?;
            choice = self.terminal.prompt_choice(CHOICE_PROMPT)?;
            self.game.apply_choice(choice)?;
        }
        if self.game.player().is_busted() {
            self.terminal.display("You busted.")?;
        } else if choice == Choice::Stay {
            self.terminal.display("You have chosen to stay.")?;
        }
        self.show_player_cards("\nYour current cards are as follows:")
    }

    fn show_result(&mut self, summary: &RoundSummary) -> Result<(), GameError> {
        if self.config.clear_screen {
            self.terminal.clear_screen();
        }
        self.terminal.display("")?;
        self.terminal.display(&summary.message)?;
        self.show_player_cards("\nYour final cards are as follows:")?;
        self.terminal.display("\nThe dealer's final cards are as follows:")?;
        let dealer = self.game.dealer().hand().clone();
        self.display_cards(&dealer)?;
        self.terminal.display(&format!("The dealer has a final score of: {}", dealer.total()))?;
        self.terminal.display("\nThank you for playing Twenty-One. Goodbye!")
    }

    fn show_player_cards(&mut self, heading: &str) -> Result<(), GameError> {
        self.terminal.display(heading)?;
        let player = self.game.player().clone();
        self.display_cards(&player)?;
        self.terminal.display(&format!("You have a current score of: {}", player.total()))
    }

    fn display_cards(&mut self, hand: &Hand) -> Result<(), GameError> {
        for card in hand.cards() {
            self.terminal.display(&card.to_string())?;
        }
        Ok(())
    }

    fn summarize(&self, outcome: Outcome) -> RoundSummary {
        let player = self.game.player();
        let dealer = self.game.dealer().hand();
        RoundSummary {
            player_cards: player.cards().to_vec(),
            dealer_cards: dealer.cards().to_vec(),
            player: player.score(),
            dealer: dealer.score(),
            outcome,
            message: outcome.message(player.score(), dealer.score()),
        }
    }
}
