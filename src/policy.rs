//! Move sourcing for the automated opponent.
//!
//! Each automated turn rolls a percentage and, depending on the difficulty,
//! either plays a uniformly random legal move or the minimax move.
//! The random source is always passed in, so a caller seeds one
//! [`fastrand::Rng`] per process and tests can use a fixed seed.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::board::{Action, Board, Mark, str_action};
use crate::constants::{
    EASY_RANDOM_CHANCE, IMPOSSIBLE_RANDOM_CHANCE, NORMAL_RANDOM_CHANCE, ROLL_RANGE,
};
use crate::error::{GameError, Result};
use crate::minimax::minimax;

/// Strength of the automated opponent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Impossible,
}

impl Difficulty {
    /// Chance, in percent, that a turn is played at random.
    pub fn random_chance(self) -> u32 {
        match self {
            Difficulty::Easy => EASY_RANDOM_CHANCE,
            Difficulty::Normal => NORMAL_RANDOM_CHANCE,
            Difficulty::Impossible => IMPOSSIBLE_RANDOM_CHANCE,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Impossible => "impossible",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "easy" => Ok(Difficulty::Easy),
            "n" | "normal" => Ok(Difficulty::Normal),
            "i" | "impossible" => Ok(Difficulty::Impossible),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Where an automated move came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Random,
    Optimal,
}

/// A legal action drawn uniformly at random.
///
/// # Errors
/// [`GameError::NoLegalActions`] if the board is full.
pub fn random_move(board: &Board, rng: &mut fastrand::Rng) -> Result<Action> {
    let actions: Vec<Action> = board.legal_actions().into_iter().collect();
    if actions.is_empty() {
        return Err(GameError::NoLegalActions);
    }
    Ok(actions[rng.usize(..actions.len())])
}

/// Whether a roll in `0..100` selects a random move at `difficulty`.
pub fn plays_random(difficulty: Difficulty, roll: u32) -> bool {
    roll < difficulty.random_chance()
}

/// Pick the automated opponent's move for this turn.
///
/// Rolls once per call; see [`plays_random`] for how the roll is used.
pub fn choose_move(
    board: &Board,
    ai: Mark,
    difficulty: Difficulty,
    rng: &mut fastrand::Rng,
) -> Result<(Action, MoveSource)> {
    let roll = rng.u32(0..ROLL_RANGE);
    let (action, source) = if plays_random(difficulty, roll) {
        (random_move(board, rng)?, MoveSource::Random)
    } else {
        (minimax(board, ai)?, MoveSource::Optimal)
    };
    debug!(
        mark = %ai,
        %difficulty,
        roll,
        ?source,
        action = %str_action(action),
        "automated move"
    );
    Ok((action, source))
}
