//! Breadth-first and depth-first path queries over a [`MazeGraph`].
//!
//! Both searches report a `steps` metric alongside the path: the number of times a cell was
//! marked as visited. It measures search effort and is not the same as the path's edge count.

use std::collections::{BTreeSet, VecDeque};
use std::time::{Duration, Instant};

use tracing::trace;

use crate::map::graph::{CellId, MazeGraph};

/// What a breadth-first search is looking for.
#[derive(Debug, Clone, Copy)]
pub enum SearchTarget<'a> {
    /// A single destination cell.
    Cell(CellId),
    /// The nearest member of a set of cells.
    AnyOf(&'a BTreeSet<CellId>),
}

impl SearchTarget<'_> {
    pub fn contains(&self, cell: CellId) -> bool {
        match self {
            SearchTarget::Cell(target) => *target == cell,
            SearchTarget::AnyOf(targets) => targets.contains(&cell),
        }
    }
}

/// The outcome of a path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// The cells from start to end inclusive, or `None` when no route exists.
    pub path: Option<Vec<CellId>>,
    /// Number of visited-marking events performed by the search.
    pub steps: usize,
}

impl PathResult {
    fn found(path: Vec<CellId>, steps: usize) -> Self {
        PathResult { path: Some(path), steps }
    }

    fn exhausted(steps: usize) -> Self {
        PathResult { path: None, steps }
    }

    /// Returns `true` if a route was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells in the returned path, or zero when there is no route.
    ///
    /// Degenerate results such as `[x, x]` count both entries.
    pub fn len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cells of the path, or an empty slice when there is no route.
    pub fn cells(&self) -> &[CellId] {
        self.path.as_deref().unwrap_or(&[])
    }
}

/// Walks the predecessor chain back from `last` to `start` and returns the path in forward order.
fn reconstruct(predecessor: &[Option<CellId>], start: CellId, mut last: CellId, end: CellId) -> Vec<CellId> {
    let mut path = vec![end];
    while last != start {
        path.push(last);
        match predecessor[last] {
            Some(previous) => last = previous,
            None => break,
        }
    }
    path.push(start);
    path.reverse();
    path
}

impl MazeGraph {
    /// Finds the shortest route from `start` to `end`. See [`MazeGraph::shortest_path_to`].
    pub fn shortest_path(&self, start: CellId, end: CellId) -> PathResult {
        self.shortest_path_to(start, SearchTarget::Cell(end))
    }

    /// Finds the shortest route from `start` to the nearest of `targets`. See [`MazeGraph::shortest_path_to`].
    pub fn shortest_path_to_any(&self, start: CellId, targets: &BTreeSet<CellId>) -> PathResult {
        self.shortest_path_to(start, SearchTarget::AnyOf(targets))
    }

    /// Finds the shortest route from `start` to `target` with a breadth-first search.
    ///
    /// The frontier is expanded in neighbor priority order and the search stops as soon as a
    /// target cell is discovered. The start cell is not marked up front, so rediscovering it from
    /// one of its neighbors counts as a step like any other cell.
    ///
    /// A start that already satisfies the target returns a zero-step result without searching:
    /// `[start, end]` for a single target cell and `[start, start]` for a target set.
    pub fn shortest_path_to(&self, start: CellId, target: SearchTarget<'_>) -> PathResult {
        match target {
            SearchTarget::Cell(end) if end == start => return PathResult::found(vec![start, end], 0),
            SearchTarget::AnyOf(targets) if targets.contains(&start) => {
                return PathResult::found(vec![start, start], 0);
            }
            _ => {}
        }

        let mut steps = 0;
        let mut visited = vec![false; self.cell_count()];
        let mut predecessor: Vec<Option<CellId>> = vec![None; self.cell_count()];
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for &next in self.neighbors(current) {
                if visited[next] {
                    continue;
                }

                visited[next] = true;
                steps += 1;

                if target.contains(next) {
                    let path = reconstruct(&predecessor, start, current, next);
                    trace!(start, end = next, steps, length = path.len(), "BFS path found");
                    return PathResult::found(path, steps);
                }

                predecessor[next] = Some(current);
                queue.push_back(next);
            }
        }

        trace!(start, steps, "BFS exhausted without reaching target");
        PathResult::exhausted(steps)
    }

    /// Finds a route from `start` to `end` with a depth-first search.
    ///
    /// Unvisited neighbors are pushed in priority order and the most recently pushed cell is
    /// expanded first, so the returned route is the first one found rather than the shortest.
    /// Every push counts as a step.
    pub fn shortest_path_dfs(&self, start: CellId, end: CellId) -> PathResult {
        if start == end {
            return PathResult::found(vec![start, end], 0);
        }
        if !self.contains(start) {
            return PathResult::exhausted(0);
        }

        let mut steps = 0;
        let mut visited = vec![false; self.cell_count()];
        let mut predecessor: Vec<Option<CellId>> = vec![None; self.cell_count()];
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(current) = stack.pop() {
            if current == end {
                let path = match predecessor[current] {
                    Some(previous) => reconstruct(&predecessor, start, previous, current),
                    None => vec![start, current],
                };
                trace!(start, end, steps, length = path.len(), "DFS path found");
                return PathResult::found(path, steps);
            }

            for &next in self.neighbors(current) {
                if !visited[next] {
                    steps += 1;
                    stack.push(next);
                    predecessor[next] = Some(current);
                    visited[next] = true;
                }
            }
        }

        trace!(start, end, steps, "DFS exhausted without reaching target");
        PathResult::exhausted(steps)
    }
}

/// A path query result along with how long it took to compute.
#[derive(Debug, Clone)]
pub struct TimedSearch {
    pub result: PathResult,
    pub elapsed: Duration,
}

impl TimedSearch {
    fn measure(search: impl FnOnce() -> PathResult) -> Self {
        let started = Instant::now();
        let result = search();
        TimedSearch {
            result,
            elapsed: started.elapsed(),
        }
    }
}

/// Side-by-side breadth-first and depth-first results for the same pair of cells.
#[derive(Debug, Clone)]
pub struct SearchComparison {
    pub start: CellId,
    pub end: CellId,
    pub bfs: TimedSearch,
    pub dfs: TimedSearch,
}

/// Runs both searches from `start` to `end`, timing each one.
pub fn compare_searches(graph: &MazeGraph, start: CellId, end: CellId) -> SearchComparison {
    let bfs = TimedSearch::measure(|| graph.shortest_path(start, end));
    let dfs = TimedSearch::measure(|| graph.shortest_path_dfs(start, end));

    SearchComparison { start, end, bfs, dfs }
}
