//! Interactive console game.
//!
//! A [`Session`] asks for a difficulty and a mark, plays one game between the
//! human and the automated opponent, and offers a replay. It reads lines from
//! any [`BufRead`] and writes to any [`Write`], so tests drive it with
//! in-memory buffers and the binary drives it with stdin/stdout.
//!
//! End of input at any prompt ends the session without an error.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_rust::game::{Session, Settings};
//!
//! let input = Cursor::new("i\nx\n");
//! let mut output = Vec::new();
//! let mut session = Session::new(input, &mut output, fastrand::Rng::with_seed(1));
//! session.run(Settings::default()).unwrap();
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::board::{Board, Mark, Outcome, parse_action, str_action};
use crate::constants::{ANSI_CLEAR, ANSI_GREEN, ANSI_RED, ANSI_RESET};
use crate::policy::{Difficulty, choose_move};

/// Options fixed up front instead of prompted for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Difficulty for every game; prompted per game when `None`.
    pub difficulty: Option<Difficulty>,
    /// The human's mark for every game; prompted per game when `None`.
    pub human: Option<Mark>,
}

/// Console game state.
pub struct Session<R, W> {
    input: R,
    output: W,
    rng: fastrand::Rng,
    /// Emit ANSI colors and screen clears
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session without colors.
    pub fn new(input: R, output: W, rng: fastrand::Rng) -> Self {
        Self {
            input,
            output,
            rng,
            color: false,
        }
    }

    /// Enable or disable ANSI colors and screen clears.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Play games until the human declines a replay or input runs out.
    pub fn run(&mut self, settings: Settings) -> Result<()> {
        writeln!(self.output, "WELCOME TO TICTACTOE!")?;
        writeln!(self.output, "---------------------\n")?;

        loop {
            let difficulty = match settings.difficulty {
                Some(d) => d,
                None => match self.prompt_difficulty()? {
                    Some(d) => d,
                    None => return Ok(()),
                },
            };
            let human = match settings.human {
                Some(m) => m,
                None => match self.prompt_player()? {
                    Some(m) => m,
                    None => return Ok(()),
                },
            };
            writeln!(self.output)?;

            if self.play_game(human, difficulty)?.is_none() {
                return Ok(());
            }

            write!(self.output, "\nPlay again? (Y/N): ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    writeln!(self.output)?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Play one game from the empty board.
    ///
    /// Returns the final outcome, or `None` if input ran out mid-game.
    pub fn play_game(&mut self, human: Mark, difficulty: Difficulty) -> Result<Option<Outcome>> {
        let ai = human.opponent();
        let mut board = Board::empty();
        let mut invalid = false;
        info!(%human, %ai, %difficulty, "game started");

        while !board.is_terminal() {
            if board.current_player() == human {
                self.draw_frame(&board, human, invalid)?;
                write!(self.output, "\nEnter coordinates of move (row, col): ")?;
                self.output.flush()?;

                let Some(line) = self.read_line()? else {
                    return Ok(None);
                };
                match parse_action(&line) {
                    Ok(action) if board.legal_actions().contains(&action) => {
                        board.play(action, human)?;
                        debug!(mark = %human, action = %str_action(action), "human move");
                        invalid = false;
                    }
                    _ => invalid = true,
                }
            } else {
                let (action, _) = choose_move(&board, ai, difficulty, &mut self.rng)?;
                board.play(action, ai)?;
            }
        }

        let outcome = board.outcome();
        info!(?outcome, "game over");
        self.draw_verdict(&board, outcome, human)?;
        Ok(Some(outcome))
    }

    fn prompt_difficulty(&mut self) -> Result<Option<Difficulty>> {
        loop {
            write!(
                self.output,
                "Choose your difficulty ('E' for easy, 'N' for normal, 'I' for impossible): "
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            // Single letters only, as the prompt advertises.
            if line.len() == 1 {
                if let Ok(difficulty) = line.parse::<Difficulty>() {
                    writeln!(self.output)?;
                    return Ok(Some(difficulty));
                }
            }
            writeln!(self.output, "Invalid input.\n")?;
        }
    }

    fn prompt_player(&mut self) -> Result<Option<Mark>> {
        loop {
            write!(self.output, "Choose your player (X or O): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Mark>() {
                Ok(mark) => {
                    writeln!(self.output, "Playing as {mark}.")?;
                    return Ok(Some(mark));
                }
                Err(_) => writeln!(self.output, "Invalid input.\n")?,
            }
        }
    }

    fn draw_frame(&mut self, board: &Board, human: Mark, invalid: bool) -> Result<()> {
        self.clear()?;
        write!(self.output, "PLAYING AS {human}")?;
        if invalid {
            let msg = self.paint(ANSI_RED, "[Action is invalid]");
            write!(self.output, " {msg}")?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "------------------\n")?;
        write!(self.output, "{board}")?;
        Ok(())
    }

    fn draw_verdict(&mut self, board: &Board, outcome: Outcome, human: Mark) -> Result<()> {
        self.clear()?;
        let verdict = match outcome {
            Outcome::Win(mark) if mark == human => self.paint(ANSI_GREEN, "YOU WON!"),
            Outcome::Win(_) => self.paint(ANSI_RED, "YOU LOST!"),
            Outcome::Draw | Outcome::Ongoing => self.paint(ANSI_GREEN, "TIE!"),
        };
        writeln!(self.output, "{verdict}")?;
        writeln!(self.output, "------------------\n")?;
        write!(self.output, "{board}")?;
        Ok(())
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }

    fn clear(&mut self) -> Result<()> {
        if self.color {
            write!(self.output, "{ANSI_CLEAR}")?;
        }
        Ok(())
    }

    /// Read one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
