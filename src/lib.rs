//! Tictactoe-Rust: a terminal tic-tac-toe game with a minimax opponent.
//!
//! The automated opponent searches the full game tree with plain minimax and,
//! depending on the difficulty, sometimes plays a random legal move instead.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, difficulty thresholds, terminal escapes
//! - [`board`] - Board state, turn, legal actions, winner detection
//! - [`minimax`] - Exhaustive minimax search
//! - [`policy`] - Random moves and the difficulty coin flip
//! - [`game`] - Interactive console session
//! - [`error`] - Error type shared by the modules above
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::board::{Board, Mark};
//! use tictactoe_rust::minimax::minimax;
//!
//! let mut board = Board::empty();
//! board.play((0, 0), Mark::X).unwrap();
//!
//! // The only reply that holds the draw is the center.
//! let reply = minimax(&board, Mark::O).unwrap();
//! assert_eq!(reply, (1, 1));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod minimax;
pub mod policy;

pub use error::{GameError, Result};
