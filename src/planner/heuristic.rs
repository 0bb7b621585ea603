//! Leaf evaluation for the pursuit minimax.

use std::collections::BTreeSet;

use crate::constants::NEAREST_COLLECTIBLE_WEIGHT;
use crate::map::graph::{CellId, MazeGraph};

/// Scores a position from Pac-Man's point of view; higher is better for Pac-Man.
///
/// The score adds three terms, all measured with breadth-first path lengths (cells in the path):
/// - the mean distance from Pac-Man to each ghost,
/// - the number of collectibles lying on the route from the episode `origin` to Pac-Man,
/// - minus half the distance to the nearest remaining collectible.
///
/// Missing routes contribute zero, as does the ghost term when there are no ghosts.
pub fn evaluate(
    graph: &MazeGraph,
    collectibles: &BTreeSet<CellId>,
    origin: CellId,
    pursued: CellId,
    pursuers: &[CellId],
) -> f64 {
    let chase = if pursuers.is_empty() {
        0.0
    } else {
        let total: usize = pursuers
            .iter()
            .map(|&pursuer| graph.shortest_path(pursued, pursuer).len())
            .sum();
        total as f64 / pursuers.len() as f64
    };

    let gathered = graph
        .shortest_path(origin, pursued)
        .cells()
        .iter()
        .filter(|cell| collectibles.contains(cell))
        .count();

    let nearest = if collectibles.is_empty() {
        0
    } else {
        graph.shortest_path_to_any(pursued, collectibles).len()
    };

    chase + gathered as f64 - nearest as f64 * NEAREST_COLLECTIBLE_WEIGHT
}
