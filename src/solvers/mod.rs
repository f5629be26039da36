use serde::{Deserialize, Serialize};

mod astar;
mod bfs;
mod dfs;

pub use astar::solve_astar;
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Dfs, Solver::Bfs, Solver::AStar];

    /// Name used on the wire and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Solver::Dfs => "dfs",
            Solver::Bfs => "bfs",
            Solver::AStar => "astar",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.name() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

/// Outcome of a solve. Both sequences are empty when the end is unreachable.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Cells in the order they were visited, ending with the end cell.
    #[serde(rename = "solutionSteps")]
    pub trace: Vec<Coord>,
    /// Start-to-end path. Left empty by solvers that do not track parents.
    pub optimal_path: Vec<Coord>,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        !self.trace.is_empty()
    }
}

/// Solves `grid` from `start` to `end` with the given solver.
pub fn solve_maze(solver: Solver, grid: &Grid, start: Coord, end: Coord) -> Solution {
    let solution = match solver {
        Solver::Dfs => solve_dfs(grid, start, end),
        Solver::Bfs => solve_bfs(grid, start, end),
        Solver::AStar => solve_astar(grid, start, end),
    };
    tracing::debug!(
        "[solve] {} visited {} cells from {:?} to {:?}, path length {}",
        solver.name(),
        solution.trace.len(),
        start,
        end,
        solution.optimal_path.len()
    );
    solution
}
