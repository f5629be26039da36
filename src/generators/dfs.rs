use rand::Rng;

use super::{Carver, GeneratedMaze, first_open};
use crate::maze::{Coord, DIRECTIONS, Grid, midpoint, offset};

/// Carves a maze with an explicit-stack recursive backtracker seeded at (0, 0).
///
/// Cells two steps apart are joined by carving the wall between them, so on
/// grids of any size only even rows and columns become rooms.
pub fn randomized_dfs<R: Rng>(size: usize, rng: &mut R) -> GeneratedMaze {
    let mut carver = Carver::new(size);

    let start: Coord = (0, 0);
    carver.carve(start);

    // The stack only ever holds carved cells
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = DIRECTIONS
            .into_iter()
            .filter_map(|direction| offset(cell, direction, 2))
            .filter(|&c| carver.is_wall(c))
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        carver.carve(midpoint(cell, neighbor));
        carver.carve(neighbor);
        stack.push(neighbor);
    }

    let end = select_end(carver.grid());
    carver.finish(start, end)
}

/// Picks the goal for a DFS-carved grid: the first open cell among
/// (size-2, size-1), (size-1, size-2) and (size-2, size-2), falling back to
/// the bottom-right corner.
pub fn select_end(grid: &Grid) -> Coord {
    let size = grid.rows();
    let fallback = (size - 1, size - 1);
    if size <= 1 {
        return fallback;
    }
    first_open(
        grid,
        [
            (size - 2, size - 1),
            (size - 1, size - 2),
            (size - 2, size - 2),
        ],
    )
    .unwrap_or(fallback)
}
