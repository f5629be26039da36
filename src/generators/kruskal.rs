use rand::Rng;

use super::{Carver, GeneratedMaze, disjoint_set::UnionFind, first_open, is_interior};
use crate::maze::{Coord, DIRECTIONS, Grid, midpoint, offset};

/// Candidate passage between two lattice cells two steps apart.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
}

/// Carves a maze with randomized Kruskal's algorithm on the odd lattice,
/// seeded at (1, 1).
///
/// Requires the grid to be at least 2x2.
pub fn randomized_kruskal<R: Rng>(size: usize, rng: &mut R) -> GeneratedMaze {
    let mut carver = Carver::new(size);

    // Union-Find over every cell, labelled row * size + col
    let mut uf = UnionFind::new(size * size);
    let index = |coord: Coord| coord.0 * size + coord.1;

    let mut edges = lattice_edges(size);

    let start: Coord = (1, 1);
    carver.carve(start);

    while !edges.is_empty() {
        let edge = edges.swap_remove(rng.random_range(0..edges.len()));

        // Only join cells that are not connected yet
        if uf.union(index(edge.cell1), index(edge.cell2)) {
            carver.carve(edge.cell1);
            carver.carve(edge.cell2);
            carver.carve(midpoint(edge.cell1, edge.cell2));
        }
    }

    let end = select_end(carver.grid());
    carver.finish(start, end)
}

/// Collect every edge from an odd-lattice cell to a neighbor two steps away
/// that lies strictly inside the border. Both directions of a pair are listed.
///
/// Sources are only bounded by `size`, so on even sizes the last odd row and
/// column (which sit on the border) also act as sources.
fn lattice_edges(size: usize) -> Vec<Edge> {
    (1..size)
        .step_by(2)
        .flat_map(|row| (1..size).step_by(2).map(move |col| (row, col)))
        .flat_map(|cell| {
            DIRECTIONS
                .into_iter()
                .filter_map(move |direction| offset(cell, direction, 2))
                .filter(move |&target| is_interior(target, size))
                .map(move |target| Edge {
                    cell1: cell,
                    cell2: target,
                })
        })
        .collect()
}

/// Picks the goal for a lattice-carved grid: the first open cell among
/// (size-3, size-2), (size-2, size-3) and (size-3, size-3), falling back to
/// (size-2, size-2).
///
/// Shared by the Prim and Kruskal generators.
pub fn select_end(grid: &Grid) -> Coord {
    let size = grid.rows();
    let fallback = (size - 2, size - 2);
    if size <= 2 {
        return fallback;
    }
    first_open(
        grid,
        [
            (size - 3, size - 2),
            (size - 2, size - 3),
            (size - 3, size - 3),
        ],
    )
    .unwrap_or(fallback)
}
