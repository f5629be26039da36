use serde::{Deserialize, Serialize};

use super::{Coord, cell::Cell};
use crate::error::MazeError;

/// Row-major matrix of [`Cell`]s.
///
/// Generators always build square grids. Grids read from the wire only need
/// to be rectangular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u8>>", try_from = "Vec<Vec<u8>>")]
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, cell: Cell) -> Self {
        let data = vec![cell; rows * cols].into_boxed_slice();
        Grid { data, rows, cols }
    }

    /// Creates a `size` x `size` grid filled with `cell`.
    pub fn square(size: usize, cell: Cell) -> Self {
        Grid::new(size, size, cell)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    /// Returns the cell at `coord`, or `None` when it lies outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord)])
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 * self.cols + coord.1
    }

    /// Overwrites the cell at `coord`.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.ravel_index(coord);
        self.data[idx] = cell;
    }

    /// Iterates over every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / cols, i % cols), cell))
    }

    /// Iterates over the coordinates of all open cells, row by row.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|&(_, cell)| cell.is_open())
            .map(|(coord, _)| coord)
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.data
            .chunks(grid.cols.max(1))
            .take(grid.rows)
            .map(|row| row.iter().map(|cell| cell.marker()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = MazeError;

    fn try_from(matrix: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidGrid(
                "grid must have at least one row and one column".to_string(),
            ));
        }
        if let Some(row) = matrix.iter().position(|r| r.len() != cols) {
            return Err(MazeError::InvalidGrid(format!(
                "row {row} has length {}, expected {cols}",
                matrix[row].len()
            )));
        }
        let data = matrix
            .into_iter()
            .flatten()
            .map(Cell::try_from)
            .collect::<Result<Box<[Cell]>, _>>()?;
        Ok(Grid { data, rows, cols })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::square(5, Cell::Wall);
        grid.set((2, 3), Cell::Open);
        assert_eq!(grid[(2, 3)], Cell::Open);
        assert_eq!(grid[(3, 2)], Cell::Wall);
        assert_eq!(grid.get((5, 0)), None);
        assert_eq!(grid.open_cells().collect::<Vec<_>>(), vec![(2, 3)]);
    }

    #[test]
    fn test_wire_format() {
        let grid: Grid = serde_json::from_str("[[0,0,1],[1,0,1],[1,0,0]]").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[(0, 2)], Cell::Wall);
        assert_eq!(grid[(2, 2)], Cell::Open);
        assert_eq!(
            serde_json::to_string(&grid).unwrap(),
            "[[0,0,1],[1,0,1],[1,0,0]]"
        );
    }

    #[test]
    fn test_rejects_malformed_grids() {
        assert!(serde_json::from_str::<Grid>("[]").is_err());
        assert!(serde_json::from_str::<Grid>("[[]]").is_err());
        assert!(serde_json::from_str::<Grid>("[[0,1],[0]]").is_err());
        assert!(serde_json::from_str::<Grid>("[[0,2]]").is_err());
        assert_eq!(
            Grid::try_from(vec![vec![0, 1], vec![0]]),
            Err(MazeError::InvalidGrid(
                "row 1 has length 1, expected 2".to_string()
            ))
        );
    }

    #[test]
    fn test_rectangular_grid() {
        let grid = Grid::try_from(vec![vec![0, 0, 0], vec![1, 1, 0]]).unwrap();
        assert!(grid.is_in_bounds((1, 2)));
        assert!(!grid.is_in_bounds((2, 0)));
        assert!(!grid.is_in_bounds((0, 3)));
    }
}
