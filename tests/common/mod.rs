#![allow(dead_code)]

use pacman_pursuit::config::Config;
use pacman_pursuit::map::graph::MazeGraph;

/// A 5x5 maze with walls in every interesting position: interior pillars, a wall run, and a gap in the bottom row.
///
/// ```text
/// 1 1 1 1 1
/// 1 0 1 0 1
/// 1 1 1 1 1
/// 1 0 0 0 1
/// 1 1 0 1 1
/// ```
pub const SMALL_MAZE: &str = "
    11111
    10101
    11111
    10001
    11011
";

/// A corridor split in two by a wall: cells 0-1 and 3-4 cannot reach each other.
pub const SPLIT_CORRIDOR: &str = "11011";

pub fn small_maze() -> MazeGraph {
    MazeGraph::new(5, 5, SMALL_MAZE).unwrap()
}

/// A fully open grid with no walls.
pub fn open_grid(rows: usize, columns: usize) -> MazeGraph {
    MazeGraph::new(rows, columns, &"1".repeat(rows * columns)).unwrap()
}

pub fn test_config(rows: usize, columns: usize, maze: &str) -> Config {
    Config {
        rows,
        columns,
        maze: maze.to_string(),
        ..Config::default()
    }
}
