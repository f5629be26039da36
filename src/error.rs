//! Error types for mazerunner

use thiserror::Error;

use crate::maze::Coord;

/// Errors surfaced by maze generation, solving and path extraction.
///
/// An unreachable goal is not an error: solvers report it as an empty
/// [`Solution`](crate::solvers::Solution).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Backtracking failed: no path to start {start:?} from end {end:?}")]
    BacktrackingFailed { start: Coord, end: Coord },

    #[error("Invalid size {size} for {algorithm}: must be at least {min}")]
    InvalidSize {
        algorithm: String,
        size: usize,
        min: usize,
    },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;
