use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::{debug, warn};

use crate::{error::GameError, game::Choice};

/// Line-oriented I/O the table talks to. Holds no game logic.
pub trait Terminal {
    fn display(&mut self, text: &str) -> Result<(), GameError>;

    /// Blocks for one line of input; `Ok(None)` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, GameError>;

    /// Best effort. Failures must not abort the game.
    fn clear_screen(&mut self);

    /// Re-prompts until the input names a valid choice.
    fn prompt_choice(&mut self, prompt: &str) -> Result<Choice, GameError> {
        loop {
            self.display(prompt)?;
            let line = self.read_line()?.ok_or(GameError::InputClosed)?;
            match line.parse::<Choice>() {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    debug!(%err, "rejected choice");
                    self.display("Your choice is invalid. Please try again.")?;
                }
            }
        }
    }
}

pub struct ConsoleTerminal<R, W> {
    input: R,
    output: W,
}

impl ConsoleTerminal<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        ConsoleTerminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleTerminal { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn display(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn clear_screen(&mut self) {
        if let Err(err) = execute!(self.output, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!(%err, "failed to clear screen");
        }
    }
}
