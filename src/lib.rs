//! Maze pursuit engine: maze graphs, path queries and minimax look-ahead for Pac-Man and the ghosts.

pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod game;
pub mod logging;
pub mod map;
pub mod planner;
