//! Helpers shared by the integration tests.

use std::collections::HashSet;

use tictactoe_rust::board::{Board, Mark};

#[allow(dead_code)]
/// Build a board from three row strings using `X`, `O` and `.`.
pub fn board(rows: [&str; 3]) -> Board {
    let mut cells = [[None; 3]; 3];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            cells[r][c] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' => None,
                other => panic!("unexpected cell {other:?} in {row:?}"),
            };
        }
    }
    Board::from(cells)
}

#[allow(dead_code)]
/// Every board reachable from the empty board by alternating play, stopping
/// at terminal boards.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::empty()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if !board.is_terminal() {
            stack.extend(board.successors().map(|(_, child)| child));
        }
    }
    seen
}
