//! Centralized error types for the pursuit game.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use crate::map::graph::CellId;

/// Main error type for the pursuit game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while building or running a game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Maze parsing error: {0}")]
    MazeParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Error type for maze parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in maze: {0:?}")]
    UnknownCharacter(char),
    #[error("Maze must contain exactly {expected} cells, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("Maze dimensions must be non-zero, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
}

/// Errors related to map operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Maze has no open cells")]
    NoOpenCells,

    #[error("Cell {0} is outside of the maze")]
    CellOutOfBounds(CellId),

    #[error("No ghost with index {0}")]
    UnknownGhost(usize),

    #[error("Cannot place {agents} agents in a maze with {open} open cells")]
    NotEnoughOpenCells { agents: usize, open: usize },
}

/// Errors raised while validating configuration values.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
