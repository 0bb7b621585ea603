use glam::IVec2;
use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{GameResult, MapError};
use crate::map::direction::Direction;
use crate::map::parser::{MazeParser, ParsedMaze};

/// A unique identifier for a cell, represented by its row-major index in the maze.
pub type CellId = usize;

/// The neighbors of a single cell, in [`Direction::PRIORITY`] order.
pub type Neighbors = SmallVec<[CellId; 4]>;

/// An undirected, unweighted graph over the cells of a rectangular maze.
///
/// Cells are identified by their row-major index, so no separate node storage is needed:
/// the adjacency list is indexed directly by [`CellId`]. Wall cells have an empty
/// neighbor list, which doubles as the wall predicate. The graph is immutable once built.
#[derive(Debug, Clone)]
pub struct MazeGraph {
    rows: usize,
    columns: usize,
    adjacency_list: Vec<Neighbors>,
    open_count: usize,
}

impl MazeGraph {
    /// Parses `raw` and builds the maze graph from it.
    ///
    /// # Errors
    ///
    /// Returns a parse error for a malformed layout, or [`MapError::NoOpenCells`] if no cell has a walkable neighbor.
    pub fn new(rows: usize, columns: usize, raw: &str) -> GameResult<MazeGraph> {
        let parsed = MazeParser::parse_maze(rows, columns, raw)?;
        Self::from_parsed(&parsed).map_err(Into::into)
    }

    /// Builds the graph from an already parsed maze.
    ///
    /// Construction happens in two passes: every cell first receives its in-bounds orthogonal
    /// candidates, then a single filter pass drops walls on either end of each candidate edge.
    pub fn from_parsed(parsed: &ParsedMaze) -> Result<MazeGraph, MapError> {
        let (rows, columns) = (parsed.rows, parsed.columns);

        let candidates = (0..rows * columns).map(|cell| {
            let position = grid_of(columns, cell);
            Direction::PRIORITY
                .into_iter()
                .filter_map(move |dir| cell_of(rows, columns, position + dir.as_ivec2()))
        });

        let adjacency_list: Vec<Neighbors> = candidates
            .enumerate()
            .map(|(cell, neighbors)| {
                if parsed.tiles[cell].is_open() {
                    neighbors.filter(|&n| parsed.tiles[n].is_open()).collect()
                } else {
                    Neighbors::new()
                }
            })
            .collect();

        let open_count = adjacency_list.iter().filter(|n| !n.is_empty()).count();
        if open_count == 0 {
            return Err(MapError::NoOpenCells);
        }

        debug!(rows, columns, open = open_count, "Maze graph built");

        Ok(MazeGraph {
            rows,
            columns,
            adjacency_list,
            open_count,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the total number of cells, walls included.
    pub fn cell_count(&self) -> usize {
        self.adjacency_list.len()
    }

    /// Returns the number of cells that are not walls (see [`MazeGraph::is_wall`]).
    pub fn open_cell_count(&self) -> usize {
        self.open_count
    }

    /// Returns `true` if `cell` lies inside the maze.
    pub fn contains(&self, cell: CellId) -> bool {
        cell < self.cell_count()
    }

    /// Returns the neighbors of `cell` in priority order (left, right, up, down).
    ///
    /// Walls and cells outside the maze have no neighbors.
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        self.adjacency_list.get(cell).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Returns `true` if `cell` cannot be walked on.
    ///
    /// An open cell fully enclosed by walls has no neighbors and is therefore treated as a wall too.
    pub fn is_wall(&self, cell: CellId) -> bool {
        self.neighbors(cell).is_empty()
    }

    /// Picks a uniformly random cell that is not a wall, by rejection sampling.
    pub fn random_open_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CellId, MapError> {
        if self.open_count == 0 {
            return Err(MapError::NoOpenCells);
        }

        loop {
            let cell = rng.random_range(0..self.cell_count());
            if !self.is_wall(cell) {
                return Ok(cell);
            }
        }
    }

    /// Returns every cell that is not a wall, in ascending order.
    pub fn open_cells(&self) -> Vec<CellId> {
        (0..self.cell_count()).filter(|&cell| !self.is_wall(cell)).collect()
    }

    /// Converts a cell index into its grid coordinate (`x` is the column, `y` the row).
    pub fn cell_to_grid(&self, cell: CellId) -> IVec2 {
        grid_of(self.columns, cell)
    }

    /// Converts a grid coordinate back into a cell index, if it lies inside the maze.
    pub fn grid_to_cell(&self, grid: IVec2) -> Option<CellId> {
        cell_of(self.rows, self.columns, grid)
    }
}

fn grid_of(columns: usize, cell: CellId) -> IVec2 {
    IVec2::new((cell % columns) as i32, (cell / columns) as i32)
}

fn cell_of(rows: usize, columns: usize, grid: IVec2) -> Option<CellId> {
    if grid.x < 0 || grid.y < 0 || grid.x as usize >= columns || grid.y as usize >= rows {
        return None;
    }
    Some(grid.y as usize * columns + grid.x as usize)
}
