//! This module defines the maze and the graph queries used to navigate it.

pub mod direction;
pub mod graph;
pub mod parser;
pub mod pathfinding;
