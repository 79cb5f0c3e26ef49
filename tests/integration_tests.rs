//! Integration tests for tictactoe-rust
//!
//! Board model properties are checked against every board reachable from the
//! empty board (5478 of them), and the console session is driven with
//! scripted input.

mod common;

use std::io::Cursor;

use common::{board, reachable_boards};
use tictactoe_rust::GameError;
use tictactoe_rust::board::{Board, Mark, Outcome, parse_action};
use tictactoe_rust::game::{Session, Settings};
use tictactoe_rust::policy::{Difficulty, random_move};

// =============================================================================
// Board model
// =============================================================================

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_legal_actions_count() {
    for b in reachable_boards() {
        assert_eq!(b.legal_actions().len(), 9 - b.placed(), "{b}");
    }
}

#[test]
fn test_mark_counts_invariant() {
    for b in reachable_boards() {
        let count = |mark| {
            (0..3)
                .flat_map(|r| (0..3).map(move |c| (r, c)))
                .filter(|&cell| b.get(cell) == Some(mark))
                .count()
        };
        let (x, o) = (count(Mark::X), count(Mark::O));
        assert!(x == o || x == o + 1, "{b}");

        let expected = if x == o { Mark::X } else { Mark::O };
        assert_eq!(b.current_player(), expected, "{b}");
    }
}

#[test]
fn test_terminal_verdicts_are_exclusive() {
    let mut wins_x = 0;
    let mut wins_o = 0;
    let mut draws = 0;
    for b in reachable_boards().into_iter().filter(Board::is_terminal) {
        let x_won = b.winner() == Some(Mark::X);
        let o_won = b.winner() == Some(Mark::O);
        let draw = b.winner().is_none() && b.is_full();
        assert_eq!(
            [x_won, o_won, draw].iter().filter(|&&v| v).count(),
            1,
            "{b}"
        );
        match b.outcome() {
            Outcome::Win(Mark::X) => wins_x += 1,
            Outcome::Win(Mark::O) => wins_o += 1,
            Outcome::Draw => draws += 1,
            Outcome::Ongoing => panic!("terminal board reported as ongoing:\n{b}"),
        }
    }
    assert_eq!((wins_x, wins_o, draws), (626, 316, 16));
}

#[test]
fn test_utility_matches_winner() {
    for b in reachable_boards().into_iter().filter(Board::is_terminal) {
        let expected = match b.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        };
        assert_eq!(b.utility(), expected, "{b}");
    }
}

#[test]
fn test_apply_rejects_occupied_and_keeps_board() {
    let b = board(["X..", ".O.", "..."]);
    assert_eq!(b.apply((1, 1), Mark::X), Err(GameError::Occupied((1, 1))));
    assert_eq!(b, board(["X..", ".O.", "..."]));
}

#[test]
fn test_human_input_validated_against_legal_actions() {
    let b = board(["X..", ".O.", "..."]);
    let legal = b.legal_actions();

    let taken = parse_action("(1, 1)").unwrap();
    assert!(!legal.contains(&taken));

    let free = parse_action("2,2").unwrap();
    assert!(legal.contains(&free));

    assert!(matches!(
        parse_action("3,3"),
        Err(GameError::InvalidCoordinate(_))
    ));
}

// =============================================================================
// Random move source
// =============================================================================

#[test]
fn test_random_move_uniform() {
    let b = board(["X.O", ".X.", "O.."]);
    let legal: Vec<_> = b.legal_actions().into_iter().collect();
    assert_eq!(legal.len(), 5);

    let mut rng = fastrand::Rng::with_seed(2024);
    let trials = 10_000;
    let mut counts = std::collections::HashMap::new();
    for _ in 0..trials {
        let action = random_move(&b, &mut rng).unwrap();
        *counts.entry(action).or_insert(0usize) += 1;
    }

    assert_eq!(counts.len(), legal.len(), "every legal action is visited");
    let expected = trials / legal.len();
    for action in &legal {
        let n = counts[action];
        assert!(
            n.abs_diff(expected) < expected / 5,
            "{action:?} drawn {n} times, expected about {expected}"
        );
    }
}

#[test]
fn test_random_move_on_full_board() {
    let b = board(["XOX", "XOO", "OXX"]);
    let mut rng = fastrand::Rng::with_seed(1);
    assert_eq!(random_move(&b, &mut rng), Err(GameError::NoLegalActions));
}

// =============================================================================
// Console session
// =============================================================================

#[test]
fn test_session_with_preset_settings() {
    let settings = Settings {
        difficulty: Some(Difficulty::Impossible),
        human: Some(Mark::O),
    };
    let script = "0,0\n0,1\n0,2\n1,0\n1,1\n1,2\n2,0\n2,1\n2,2\nn\n";
    let mut output = Vec::new();
    let mut session = Session::new(
        Cursor::new(script),
        &mut output,
        fastrand::Rng::with_seed(4),
    );
    session.run(settings).unwrap();

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("PLAYING AS O"));
    assert!(!out.contains("YOU WON!"));
    assert!(!out.contains("Choose your"));
}

#[test]
fn test_session_easy_games_finish() {
    let cells = "0,0\n0,1\n0,2\n1,0\n1,1\n1,2\n2,0\n2,1\n2,2\n";
    for seed in 0..10 {
        let mut output = Vec::new();
        let mut session = Session::new(
            Cursor::new(cells),
            &mut output,
            fastrand::Rng::with_seed(seed),
        );
        let outcome = session.play_game(Mark::X, Difficulty::Easy).unwrap();
        assert!(
            matches!(outcome, Some(Outcome::Win(_)) | Some(Outcome::Draw)),
            "seed {seed}: {outcome:?}"
        );
    }
}
