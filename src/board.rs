//! Board state model.
//!
//! A [`Board`] is a plain 3x3 grid of cells. Whose turn it is, the legal
//! actions, and the winner are all derived from the cells on demand; nothing
//! else is stored. The board is `Copy`, so the search works on cheap
//! snapshots while the game loop keeps one live board and mutates it with
//! [`Board::play`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::{N, UTILITY_DRAW, UTILITY_O_WINS, UTILITY_X_WINS};
use crate::error::{GameError, Result};

/// A player's mark. X always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Mark::X => 'X',
            Mark::O => 'O',
        };
        write!(f, "{ch}")
    }
}

impl FromStr for Mark {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(GameError::InvalidMark(other.to_string())),
        }
    }
}

/// A `(row, col)` coordinate, 0-indexed.
pub type Action = (usize, usize);

/// How a board stands right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
    Ongoing,
}

/// The 3x3 grid. `None` is an empty cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Mark>; N]; N],
}

impl Board {
    /// An empty board (starting state).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cell contents, or `None` for empty or off-board coordinates.
    pub fn get(&self, (row, col): Action) -> Option<Mark> {
        if row >= N || col >= N {
            return None;
        }
        self.cells[row][col]
    }

    fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(mark))
            .count()
    }

    /// Number of marks placed so far.
    pub fn placed(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// The mark whose turn it is, derived from the cell counts.
    ///
    /// Equal counts mean X; otherwise the mark with fewer placements moves.
    pub fn current_player(&self) -> Mark {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x <= o { Mark::X } else { Mark::O }
    }

    /// All empty cells, in row-major order. Empty when the board is full.
    pub fn legal_actions(&self) -> BTreeSet<Action> {
        let mut available = BTreeSet::new();
        for row in 0..N {
            for col in 0..N {
                if self.cells[row][col].is_none() {
                    available.insert((row, col));
                }
            }
        }
        available
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    fn check_move(&self, (row, col): Action) -> Result<()> {
        if row >= N || col >= N {
            return Err(GameError::OutOfBounds((row, col)));
        }
        if self.cells[row][col].is_some() {
            return Err(GameError::Occupied((row, col)));
        }
        Ok(())
    }

    /// Place `mark` at `action` on the live board.
    ///
    /// # Errors
    /// - [`GameError::OutOfBounds`] if the coordinate is off the board
    /// - [`GameError::Occupied`] if the cell already holds a mark
    pub fn play(&mut self, action: Action, mark: Mark) -> Result<()> {
        self.check_move(action)?;
        let (row, col) = action;
        self.cells[row][col] = Some(mark);
        Ok(())
    }

    /// Return a copy of the board with `mark` placed at `action`.
    ///
    /// Fails the same way as [`Board::play`]; `self` is never modified.
    pub fn apply(&self, action: Action, mark: Mark) -> Result<Board> {
        let mut next = *self;
        next.play(action, mark)?;
        Ok(next)
    }

    /// Every legal action paired with the board it leads to, the mover being
    /// [`Board::current_player`].
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        let mover = self.current_player();
        self.legal_actions().into_iter().map(move |(row, col)| {
            let mut next = *self;
            next.cells[row][col] = Some(mover);
            ((row, col), next)
        })
    }

    fn line(&self, cells: [Action; N]) -> Option<Mark> {
        let first = self.cells[cells[0].0][cells[0].1]?;
        cells[1..]
            .iter()
            .all(|&(r, c)| self.cells[r][c] == Some(first))
            .then_some(first)
    }

    /// The mark holding a complete line, if any.
    ///
    /// Lines are scanned row i then column i for each index, then the main
    /// diagonal and the anti-diagonal. The first complete line wins.
    pub fn winner(&self) -> Option<Mark> {
        for i in 0..N {
            let row = std::array::from_fn(|j| (i, j));
            if let Some(m) = self.line(row) {
                return Some(m);
            }
            let col = std::array::from_fn(|j| (j, i));
            if let Some(m) = self.line(col) {
                return Some(m);
            }
        }
        self.line(std::array::from_fn(|j| (j, j)))
            .or_else(|| self.line(std::array::from_fn(|j| (j, N - 1 - j))))
    }

    /// True if someone has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Win, draw, or still in progress.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(mark) => Outcome::Win(mark),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }

    /// +1 if X has won, -1 if O has won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards, but never rejects a live one.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Mark::X) => UTILITY_X_WINS,
            Some(Mark::O) => UTILITY_O_WINS,
            None => UTILITY_DRAW,
        }
    }
}

impl From<[[Option<Mark>; N]; N]> for Board {
    fn from(cells: [[Option<Mark>; N]; N]) -> Self {
        Self { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..N {
            write!(f, "{col}  ")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                match cell {
                    Some(mark) => write!(f, "{mark}  ")?,
                    None => write!(f, ".  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a coordinate string such as `"1,2"` or `"(1, 2)"` into an [`Action`].
///
/// Both components must be integers in `0..3`.
pub fn parse_action(s: &str) -> Result<Action> {
    let invalid = || GameError::InvalidCoordinate(s.to_string());

    let inner: String = s.chars().filter(|c| !matches!(c, '(' | ')')).collect();

    let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
    let row: usize = row.trim().parse().map_err(|_| invalid())?;
    let col: usize = col.trim().parse().map_err(|_| invalid())?;

    if row >= N || col >= N {
        return Err(invalid());
    }
    Ok((row, col))
}

/// Format an [`Action`] as `"(row, col)"`.
pub fn str_action((row, col): Action) -> String {
    format!("({row}, {col})")
}
