//! Adversarial look-ahead for Pac-Man and the ghosts.
//!
//! The planner runs a fixed-depth minimax over the maze graph. Pac-Man is the maximizing player
//! and the ghosts, taken together as one joint state, are the minimizing player. Plies alternate,
//! and positions at the depth limit are scored by [`heuristic::evaluate`].
//!
//! Ties are always resolved in favour of the first candidate enumerated, which follows neighbor
//! priority order (left, right, up, down), so planning is fully deterministic.
//!
//! ```
//! use std::collections::BTreeSet;
//! use pacman_pursuit::map::graph::MazeGraph;
//! use pacman_pursuit::planner::PursuitPlanner;
//!
//! let graph = MazeGraph::new(3, 3, "111 111 111").unwrap();
//! let collectibles = BTreeSet::from([4]);
//! let mut planner = PursuitPlanner::new(&graph, &collectibles, 0);
//!
//! let next = planner.plan_pursued_move(0, &[8], 2);
//! assert!(graph.neighbors(0).contains(&next));
//! ```

use std::collections::BTreeSet;

use tracing::trace;

use crate::map::graph::{CellId, MazeGraph};

pub mod heuristic;
mod joint;

pub use joint::{JointMoves, JointState};

/// The move chosen at the root of a search, together with its minimax value.
///
/// When the mover has no legal moves, `mv` is its current position and `score` is the sentinel
/// for its side: negative infinity for Pac-Man, positive infinity for the ghosts.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<M> {
    pub mv: M,
    pub score: f64,
}

/// Basic search stats accumulated across every plan made by one planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior nodes expanded.
    pub nodes: u64,
    /// Leaf positions scored by the heuristic.
    pub leaves: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ply {
    Pursued,
    Pursuers,
}

/// Chooses moves for Pac-Man and the ghosts within one planning episode.
///
/// An episode starts when Pac-Man arrives at a cell; that cell is the `origin` against which the
/// heuristic counts collectibles gathered along the way.
pub struct PursuitPlanner<'a> {
    graph: &'a MazeGraph,
    collectibles: &'a BTreeSet<CellId>,
    origin: CellId,
    stats: SearchStats,
}

impl<'a> PursuitPlanner<'a> {
    pub fn new(graph: &'a MazeGraph, collectibles: &'a BTreeSet<CellId>, origin: CellId) -> Self {
        PursuitPlanner {
            graph,
            collectibles,
            origin,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Picks Pac-Man's next cell, looking `max_depth` plies ahead.
    ///
    /// The result is always one of Pac-Man's neighbors, or `pursued` itself when it has none.
    pub fn plan_pursued_move(&mut self, pursued: CellId, pursuers: &[CellId], max_depth: u32) -> CellId {
        self.decide_pursued_move(pursued, pursuers, max_depth).mv
    }

    /// Picks the next cell for a single ghost, which plans as if it were alone against Pac-Man.
    pub fn plan_pursuer_move(&mut self, pursued: CellId, pursuer: CellId, max_depth: u32) -> CellId {
        let decision = self.decide_pursuers_move(pursued, &[pursuer], max_depth);
        decision.mv.first().copied().unwrap_or(pursuer)
    }

    /// Runs the search rooted at a Pac-Man ply and returns the move with its value.
    pub fn decide_pursued_move(&mut self, pursued: CellId, pursuers: &[CellId], max_depth: u32) -> Decision<CellId> {
        let decision = self.maximize(pursued, pursuers, 0, max_depth);
        trace!(pursued, ?pursuers, chosen = decision.mv, score = decision.score, "Planned pursued move");
        decision
    }

    /// Runs the search rooted at a ghost ply and returns the joint ghost move with its value.
    pub fn decide_pursuers_move(
        &mut self,
        pursued: CellId,
        pursuers: &[CellId],
        max_depth: u32,
    ) -> Decision<JointState> {
        let decision = self.minimize(pursued, pursuers, 0, max_depth);
        trace!(pursued, ?pursuers, chosen = ?decision.mv, score = decision.score, "Planned pursuer move");
        decision
    }

    fn search(&mut self, pursued: CellId, pursuers: &[CellId], depth: u32, max_depth: u32, ply: Ply) -> f64 {
        if depth >= max_depth {
            self.stats.leaves += 1;
            return heuristic::evaluate(self.graph, self.collectibles, self.origin, pursued, pursuers);
        }

        match ply {
            Ply::Pursued => self.maximize(pursued, pursuers, depth, max_depth).score,
            Ply::Pursuers => self.minimize(pursued, pursuers, depth, max_depth).score,
        }
    }

    fn maximize(&mut self, pursued: CellId, pursuers: &[CellId], depth: u32, max_depth: u32) -> Decision<CellId> {
        self.stats.nodes += 1;
        let graph = self.graph;

        let mut best: Option<Decision<CellId>> = None;
        for &next in graph.neighbors(pursued) {
            let score = self.search(next, pursuers, depth + 1, max_depth, Ply::Pursuers);
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(Decision { mv: next, score });
            }
        }

        best.unwrap_or(Decision {
            mv: pursued,
            score: f64::NEG_INFINITY,
        })
    }

    fn minimize(&mut self, pursued: CellId, pursuers: &[CellId], depth: u32, max_depth: u32) -> Decision<JointState> {
        self.stats.nodes += 1;

        let mut best: Option<Decision<JointState>> = None;
        for state in JointMoves::new(self.graph, pursuers) {
            let score = self.search(pursued, &state, depth + 1, max_depth, Ply::Pursued);
            if best.as_ref().is_none_or(|b| score < b.score) {
                best = Some(Decision { mv: state, score });
            }
        }

        best.unwrap_or_else(|| Decision {
            mv: pursuers.iter().copied().collect(),
            score: f64::INFINITY,
        })
    }
}
