//! Constants for board geometry, difficulty thresholds, and terminal output.
//!
//! The board is always 3x3; there is no feature switch for other sizes.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

// =============================================================================
// Search
// =============================================================================

/// Utility of a board won by X.
pub const UTILITY_X_WINS: i32 = 1;

/// Utility of a board won by O.
pub const UTILITY_O_WINS: i32 = -1;

/// Utility of a drawn (or undecided) board.
pub const UTILITY_DRAW: i32 = 0;

// =============================================================================
// Difficulty Thresholds
// =============================================================================

/// Percentage rolls are drawn from `0..ROLL_RANGE`.
pub const ROLL_RANGE: u32 = 100;

/// Chance (in percent) of a random move on Easy.
pub const EASY_RANDOM_CHANCE: u32 = 50;

/// Chance (in percent) of a random move on Normal.
pub const NORMAL_RANDOM_CHANCE: u32 = 35;

/// Chance (in percent) of a random move on Impossible.
pub const IMPOSSIBLE_RANDOM_CHANCE: u32 = 0;

// =============================================================================
// Terminal Output
// =============================================================================

/// Red background.
pub const ANSI_RED: &str = "\x1b[41m";

/// Green background.
pub const ANSI_GREEN: &str = "\x1b[42m";

/// Reset all attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Clear the screen and move the cursor home.
pub const ANSI_CLEAR: &str = "\x1b[2J\x1b[1;1H";
