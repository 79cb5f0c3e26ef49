//! Exhaustive minimax search.
//!
//! [`max_value`] and [`min_value`] recurse into each other over the full
//! remaining game tree. There is no pruning and no memoization: the tree under
//! a 3x3 board is small enough that the exact game-theoretic value is always
//! computed. Recursion depth is bounded by the number of empty cells.
//!
//! Values are utilities from X's point of view, so X maximizes and O minimizes.

use tracing::debug;

use crate::board::{Action, Board, Mark, str_action};
use crate::error::{GameError, Result};

/// Best utility X can force from `board`, with O replying optimally.
pub fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }
    board
        .successors()
        .map(|(_, child)| min_value(&child))
        .fold(i32::MIN, i32::max)
}

/// Best utility O can force from `board`, with X replying optimally.
pub fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }
    board
        .successors()
        .map(|(_, child)| max_value(&child))
        .fold(i32::MAX, i32::min)
}

/// Game-theoretic value of every legal action for `ai`, in row-major order.
///
/// # Errors
/// - [`GameError::GameOver`] if the board already has a winner
/// - [`GameError::NoLegalActions`] if the board is full
pub fn action_values(board: &Board, ai: Mark) -> Result<Vec<(Action, i32)>> {
    if board.winner().is_some() {
        return Err(GameError::GameOver);
    }
    let actions = board.legal_actions();
    if actions.is_empty() {
        return Err(GameError::NoLegalActions);
    }

    let mut values = Vec::with_capacity(actions.len());
    for action in actions {
        let child = board.apply(action, ai)?;
        let value = match ai {
            Mark::X => min_value(&child),
            Mark::O => max_value(&child),
        };
        debug!(mark = %ai, action = %str_action(action), value, "evaluated action");
        values.push((action, value));
    }
    Ok(values)
}

/// The optimal action for `ai` on `board`.
///
/// X keeps the first action with the strictly greatest value, O the first
/// with the strictly least. Earlier actions win ties.
pub fn minimax(board: &Board, ai: Mark) -> Result<Action> {
    let values = action_values(board, ai)?;

    let mut best = None;
    let mut best_value = match ai {
        Mark::X => i32::MIN,
        Mark::O => i32::MAX,
    };
    for (action, value) in values {
        let better = match ai {
            Mark::X => value > best_value,
            Mark::O => value < best_value,
        };
        if better {
            best_value = value;
            best = Some(action);
        }
    }

    let action = best.ok_or(GameError::NoLegalActions)?;
    debug!(mark = %ai, action = %str_action(action), value = best_value, "minimax choice");
    Ok(action)
}
