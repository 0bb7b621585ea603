use glam::IVec2;
use pacman_pursuit::constants::{BOARD_COLUMNS, BOARD_ROWS, RAW_MAZE};
use pacman_pursuit::error::{GameError, MapError, ParseError};
use pacman_pursuit::map::graph::MazeGraph;
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};
use speculoos::prelude::*;
use std::collections::HashSet;

mod common;

use common::{open_grid, small_maze};

#[test]
fn test_neighbor_priority_order() {
    let graph = open_grid(3, 3);

    assert_eq!(graph.neighbors(4), &[3, 5, 1, 7]);
    assert_eq!(graph.neighbors(0), &[1, 3]);
    assert_eq!(graph.neighbors(8), &[7, 5]);
    assert_eq!(graph.neighbors(1), &[0, 2, 4]);
}

#[test]
fn test_rows_do_not_wrap() {
    let graph = open_grid(2, 3);

    // The last cell of the first row and the first cell of the second row are index-adjacent only
    assert_eq!(graph.neighbors(2), &[1, 5]);
    assert_eq!(graph.neighbors(3), &[4, 0]);
}

#[test]
fn test_walls_have_no_neighbors() {
    let graph = small_maze();

    for wall in [6, 8, 16, 17, 18, 22] {
        assert_that(&graph.is_wall(wall)).is_true();
        assert_that(&graph.neighbors(wall).is_empty()).is_true();
    }

    for cell in 0..graph.cell_count() {
        for &neighbor in graph.neighbors(cell) {
            assert_that(&graph.is_wall(neighbor)).is_false();
        }
    }
}

#[test]
fn test_adjacency_is_symmetric() {
    let graph = small_maze();

    for cell in 0..graph.cell_count() {
        for &neighbor in graph.neighbors(cell) {
            assert!(
                graph.neighbors(neighbor).contains(&cell),
                "{cell} lists {neighbor} as a neighbor, but not the other way around"
            );
        }
    }
}

#[test]
fn test_edges_connect_orthogonal_cells() {
    let graph = small_maze();

    for cell in 0..graph.cell_count() {
        for &neighbor in graph.neighbors(cell) {
            let offset = graph.cell_to_grid(neighbor) - graph.cell_to_grid(cell);
            assert_that(&(offset.x.abs() + offset.y.abs())).is_equal_to(1);
        }
    }
}

#[test]
fn test_open_cells() {
    let graph = small_maze();
    let open = graph.open_cells();

    assert_eq!(open.len(), 19);
    assert_eq!(graph.open_cell_count(), 19);
    assert!(open.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(open.iter().all(|&cell| !graph.is_wall(cell)));
}

#[test]
fn test_out_of_bounds_cells_are_walls() {
    let graph = small_maze();

    assert_that(&graph.contains(25)).is_false();
    assert_that(&graph.neighbors(25).is_empty()).is_true();
    assert_that(&graph.is_wall(1000)).is_true();
}

#[test]
fn test_random_open_cell() {
    let graph = small_maze();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    let mut seen = HashSet::new();
    for _ in 0..2000 {
        let cell = graph.random_open_cell(&mut rng).unwrap();
        assert_that(&graph.is_wall(cell)).is_false();
        seen.insert(cell);
    }

    // Uniform sampling should reach every open cell over this many draws
    assert_eq!(seen.len(), graph.open_cell_count());
}

#[test]
fn test_random_open_cell_is_reproducible() {
    let graph = small_maze();
    let mut first = StdRng::seed_from_u64(99);
    let mut second = StdRng::seed_from_u64(99);

    let a: Vec<_> = (0..32).map(|_| graph.random_open_cell(&mut first).unwrap()).collect();
    let b: Vec<_> = (0..32).map(|_| graph.random_open_cell(&mut second).unwrap()).collect();
    assert_eq!(a, b);
}

#[test]
fn test_maze_without_open_cells() {
    let result = MazeGraph::new(2, 2, "0000");
    assert!(matches!(result, Err(GameError::Map(MapError::NoOpenCells))));

    // A lone open cell with no walkable neighbor counts as a wall
    let result = MazeGraph::new(3, 3, "000 010 000");
    assert!(matches!(result, Err(GameError::Map(MapError::NoOpenCells))));
}

#[test]
fn test_malformed_maze() {
    let result = MazeGraph::new(2, 2, "111");
    assert!(matches!(
        result,
        Err(GameError::MazeParse(ParseError::InvalidLength { expected: 4, found: 3 }))
    ));

    let result = MazeGraph::new(2, 2, "11x1");
    assert!(matches!(result, Err(GameError::MazeParse(ParseError::UnknownCharacter('x')))));
}

#[test]
fn test_grid_conversion() {
    let graph = small_maze();

    for cell in 0..graph.cell_count() {
        assert_eq!(graph.grid_to_cell(graph.cell_to_grid(cell)), Some(cell));
    }

    assert_eq!(graph.cell_to_grid(7), IVec2::new(2, 1));
    assert_eq!(graph.grid_to_cell(IVec2::new(-1, 0)), None);
    assert_eq!(graph.grid_to_cell(IVec2::new(5, 0)), None);
    assert_eq!(graph.grid_to_cell(IVec2::new(0, 5)), None);
}

#[test]
fn test_default_maze_is_connected() {
    let graph = MazeGraph::new(BOARD_ROWS, BOARD_COLUMNS, RAW_MAZE).unwrap();
    let open = graph.open_cells();

    assert_that(&graph.cell_count()).is_equal_to(BOARD_ROWS * BOARD_COLUMNS);
    assert_that(&open.len()).is_greater_than(0);

    let origin = open[0];
    for &cell in &open[1..] {
        assert!(graph.shortest_path(origin, cell).is_found(), "cell {cell} is unreachable");
    }
}
