use std::iter::FusedIterator;

use smallvec::{smallvec, SmallVec};

use crate::map::graph::{CellId, MazeGraph};

/// One position per ghost, in the same order as the ghosts were given.
pub type JointState = SmallVec<[CellId; 4]>;

/// Lazily enumerates the Cartesian product of every ghost's neighbor list.
///
/// Combinations are produced in lexicographic order: the last ghost's choice changes fastest and
/// each ghost's options follow neighbor priority order. Nothing is materialized up front, so the
/// product can be walked for any number of ghosts. If any ghost has no neighbors the product is
/// empty; with no ghosts at all it contains exactly one (empty) state.
#[derive(Debug, Clone)]
pub struct JointMoves<'g> {
    options: SmallVec<[&'g [CellId]; 4]>,
    cursor: SmallVec<[usize; 4]>,
    exhausted: bool,
}

impl<'g> JointMoves<'g> {
    pub fn new(graph: &'g MazeGraph, pursuers: &[CellId]) -> Self {
        let options: SmallVec<[&'g [CellId]; 4]> = pursuers.iter().map(|&cell| graph.neighbors(cell)).collect();
        let exhausted = options.iter().any(|neighbors| neighbors.is_empty());

        JointMoves {
            cursor: smallvec![0; options.len()],
            options,
            exhausted,
        }
    }

    /// Rewinds the enumeration to the first combination.
    pub fn restart(&mut self) {
        self.cursor.iter_mut().for_each(|index| *index = 0);
        self.exhausted = self.options.iter().any(|neighbors| neighbors.is_empty());
    }

    /// Total number of combinations in the product, regardless of progress.
    pub fn combinations(&self) -> usize {
        self.options.iter().map(|neighbors| neighbors.len()).product()
    }
}

impl Iterator for JointMoves<'_> {
    type Item = JointState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let state = self
            .cursor
            .iter()
            .zip(&self.options)
            .map(|(&index, neighbors)| neighbors[index])
            .collect();

        // Advance the odometer, carrying into earlier ghosts when a later one wraps around
        self.exhausted = true;
        for slot in (0..self.cursor.len()).rev() {
            self.cursor[slot] += 1;
            if self.cursor[slot] < self.options[slot].len() {
                self.exhausted = false;
                break;
            }
            self.cursor[slot] = 0;
        }

        Some(state)
    }
}

impl FusedIterator for JointMoves<'_> {}
