//! Grid model shared by every generator and solver.
//!
//! A maze is a [`Grid`] of open and wall [`Cell`]s addressed by `(row, col)`.
//! Adjacency is 4-directional and always enumerated in the order
//! left, right, up, down. Traces depend on that order.

pub mod cell;
mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// A cell coordinate as `(row, col)`. Serializes as `[row, col]`.
pub type Coord = (usize, usize);

/// Direction offsets as `(delta_row, delta_col)`: left, right, up, down.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Moves `coord` by `step` cells along `direction`.
/// Returns `None` if either coordinate would become negative. The upper bound
/// is not checked here.
pub fn offset(coord: Coord, direction: (isize, isize), step: usize) -> Option<Coord> {
    let step = step as isize;
    Some((
        coord.0.checked_add_signed(direction.0 * step)?,
        coord.1.checked_add_signed(direction.1 * step)?,
    ))
}

/// True iff `coord` lies inside `grid` and is open.
pub fn is_open_and_in_bounds(grid: &Grid, coord: Coord) -> bool {
    grid.get(coord).is_some_and(Cell::is_open)
}

/// Get neighbors of a cell.
/// A neighbor is one step away in a cardinal direction, inside the grid and open.
pub fn get_neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    DIRECTIONS
        .into_iter()
        .filter_map(move |direction| offset(coord, direction, 1))
        .filter(|&c| is_open_and_in_bounds(grid, c))
}

pub fn manhattan_distance(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    manhattan_distance(a, b) == 1
}

/// The cell halfway between two cells that are two steps apart.
pub fn midpoint(a: Coord, b: Coord) -> Coord {
    (a.0.min(b.0) + a.0.abs_diff(b.0) / 2, a.1.min(b.1) + a.1.abs_diff(b.1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_order() {
        let grid = Grid::square(3, Cell::Open);
        let neighbors = get_neighbors((1, 1), &grid).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 0), (1, 2), (0, 1), (2, 1)]);
    }

    #[test]
    fn test_neighbors_skip_walls_and_edges() {
        let mut grid = Grid::square(3, Cell::Open);
        grid.set((0, 1), Cell::Wall);
        let neighbors = get_neighbors((0, 0), &grid).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 0)]);
    }

    #[test]
    fn test_offset_does_not_underflow() {
        assert_eq!(offset((0, 3), (0, -1), 2), Some((0, 1)));
        assert_eq!(offset((1, 3), (-1, 0), 2), None);
        assert_eq!(offset((1, 1), (1, 0), 2), Some((3, 1)));
    }

    #[test]
    fn test_is_open_and_in_bounds() {
        let mut grid = Grid::square(2, Cell::Wall);
        grid.set((1, 1), Cell::Open);
        assert!(is_open_and_in_bounds(&grid, (1, 1)));
        assert!(!is_open_and_in_bounds(&grid, (0, 0)));
        assert!(!is_open_and_in_bounds(&grid, (2, 1)));
    }

    #[test]
    fn test_midpoint_and_adjacency() {
        assert_eq!(midpoint((1, 1), (1, 3)), (1, 2));
        assert_eq!(midpoint((3, 1), (1, 1)), (2, 1));
        assert!(is_adjacent((2, 2), (2, 1)));
        assert!(!is_adjacent((2, 2), (1, 1)));
        assert_eq!(manhattan_distance((0, 0), (4, 4)), 8);
    }
}
