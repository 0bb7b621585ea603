//! This module contains all the constants used in the game.

/// The number of rows in the game board, in cells.
pub const BOARD_ROWS: usize = 29;
/// The number of columns in the game board, in cells.
pub const BOARD_COLUMNS: usize = 26;

/// Number of plies the minimax look-ahead explores (one pursued move, one joint pursuer response).
pub const SEARCH_DEPTH: u32 = 2;

/// Probability that a ghost ignores its planned move and wanders to a random neighbor instead.
pub const PURSUER_RANDOM_MOVE_CHANCE: f64 = 0.25;

/// Weight applied to the distance from the pursued agent to its nearest collectible.
pub const NEAREST_COLLECTIBLE_WEIGHT: f64 = 0.5;

/// The raw layout of the game board.
///
/// `1` marks an open cell and `0` marks a wall. Rows are separated by whitespace, which the parser ignores.
pub const RAW_MAZE: &str = "
    00000000000000000000000000
    01111111111110011111111110
    01000010000010010000010010
    01000010000010010000010010
    01111111111111111111111110
    01000010010000000010010010
    01111110011110011110011110
    00000010000010010000010000
    00000010011111111110010000
    00000010010000000010010000
    11111111110000000011111111
    00000010010000000010010000
    00000010011111111110010000
    00000010010000000010010000
    01111111111110011111111110
    01000010000010010000010010
    01110011111111111111110110
    00010010010000000010010100
    01111110011110011110011110
    01000000000010010000000010
    01111111111111111111111110
    01000010010000000010010010
    01111110011110011110011110
    00000010000010010000010000
    01111111111111111111111110
    01000000001001001000000010
    01000000001001001000000010
    01111111111111111111111110
    00000000000000000000000000
";
