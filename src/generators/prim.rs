use rand::Rng;

use super::{Carver, GeneratedMaze, is_interior, kruskal::select_end};
use crate::maze::{Coord, DIRECTIONS, midpoint, offset};

/// A boundary between a carved cell and an uncarved cell two steps away.
type FrontierWall = (Coord, Coord);

/// Carves a maze with randomized Prim's algorithm on the interior odd lattice,
/// seeded at (1, 1).
///
/// Requires the grid to be at least 2x2.
pub fn randomized_prim<R: Rng>(size: usize, rng: &mut R) -> GeneratedMaze {
    let mut carver = Carver::new(size);

    let start: Coord = (1, 1);
    carver.carve(start);

    let mut walls: Vec<FrontierWall> = Vec::new();
    push_frontier(&carver, start, &mut walls);

    while !walls.is_empty() {
        let (cell, target) = walls.swap_remove(rng.random_range(0..walls.len()));

        // Another wall may have reached the target first
        if !is_carvable(&carver, target) {
            continue;
        }

        carver.carve(midpoint(cell, target));
        carver.carve(target);
        push_frontier(&carver, target, &mut walls);
    }

    let end = select_end(carver.grid());
    carver.finish(start, end)
}

fn is_carvable(carver: &Carver, coord: Coord) -> bool {
    is_interior(coord, carver.size()) && carver.is_wall(coord)
}

/// Queues the frontier walls of `cell` in neighbor order.
fn push_frontier(carver: &Carver, cell: Coord, walls: &mut Vec<FrontierWall>) {
    walls.extend(
        DIRECTIONS
            .into_iter()
            .filter_map(|direction| offset(cell, direction, 2))
            .filter(|&target| is_carvable(carver, target))
            .map(|target| (cell, target)),
    );
}
