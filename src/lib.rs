//! Grid maze generation and solving.
//!
//! Generators ([`Generator`]) carve a square [`Grid`](maze::Grid) and report
//! the carve order plus a start and end cell. Solvers ([`Solver`]) search a
//! grid between two cells and report the visitation order plus, where they
//! track parents, a shortest path. [`extract_optimal_path`] rebuilds a path
//! from any visitation trace.

pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod path;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::{GeneratedMaze, Generator, generate_maze, get_rng};
pub use path::extract_optimal_path;
pub use solvers::{Solution, Solver, solve_maze};

use maze::{Coord, Grid};

/// Generates a `size` x `size` maze with the algorithm named `algorithm`
/// (`dfs`, `prim` or `kruskal`). Pass a seed for a reproducible maze.
pub fn generate(algorithm: &str, size: usize, seed: Option<u64>) -> Result<GeneratedMaze> {
    let generator = algorithm.parse::<Generator>()?;
    generate_maze(generator, size, &mut get_rng(seed))
}

/// Solves `grid` from `start` to `end` with the algorithm named `algorithm`
/// (`dfs`, `bfs` or `astar`).
pub fn solve(algorithm: &str, grid: &Grid, start: Coord, end: Coord) -> Result<Solution> {
    let solver = algorithm.parse::<Solver>()?;
    Ok(solve_maze(solver, grid, start, end))
}
