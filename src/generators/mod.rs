use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

pub mod disjoint_set;
pub mod dfs;
pub mod kruskal;
pub mod prim;

use dfs::randomized_dfs;
use kruskal::randomized_kruskal;
use prim::randomized_prim;

use crate::{
    error::{MazeError, Result},
    maze::{Cell, Coord, Grid, is_open_and_in_bounds},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Dfs,
    Prim,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 3] = [Generator::Dfs, Generator::Prim, Generator::Kruskal];

    /// Name used on the wire and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Generator::Dfs => "dfs",
            Generator::Prim => "prim",
            Generator::Kruskal => "kruskal",
        }
    }

    /// Smallest grid the generator can seed. Prim and Kruskal start at (1, 1).
    pub fn min_size(self) -> usize {
        match self {
            Generator::Dfs => 1,
            Generator::Prim | Generator::Kruskal => 2,
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Generator::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

/// A freshly carved maze together with the order in which it was carved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMaze {
    #[serde(rename = "maze")]
    pub grid: Grid,
    /// Every carve in chronological order, including repeats.
    pub steps: Vec<Coord>,
    pub start: Coord,
    pub end: Coord,
}

/// Generates a `size` x `size` maze with the given generator.
pub fn generate_maze<R: Rng>(
    generator: Generator,
    size: usize,
    rng: &mut R,
) -> Result<GeneratedMaze> {
    if size < generator.min_size() {
        return Err(MazeError::InvalidSize {
            algorithm: generator.name().to_string(),
            size,
            min: generator.min_size(),
        });
    }

    let maze = match generator {
        Generator::Dfs => randomized_dfs(size, rng),
        Generator::Prim => randomized_prim(size, rng),
        Generator::Kruskal => randomized_kruskal(size, rng),
    };
    tracing::debug!(
        "[generate] {} carved {} steps on a {}x{} grid, start {:?}, end {:?}",
        generator.name(),
        maze.steps.len(),
        size,
        size,
        maze.start,
        maze.end
    );
    Ok(maze)
}

/// Grid under construction plus its carve trace.
struct Carver {
    grid: Grid,
    steps: Vec<Coord>,
}

impl Carver {
    /// Starts from a grid made entirely of walls.
    fn new(size: usize) -> Self {
        Carver {
            grid: Grid::square(size, Cell::Wall),
            steps: Vec::new(),
        }
    }

    fn size(&self) -> usize {
        self.grid.rows()
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    /// In bounds and not carved yet.
    fn is_wall(&self, coord: Coord) -> bool {
        self.grid.get(coord) == Some(Cell::Wall)
    }

    fn carve(&mut self, coord: Coord) {
        self.grid.set(coord, Cell::Open);
        self.steps.push(coord);
    }

    /// Forces `start` and `end` open, even if that isolates them from the carved maze.
    fn finish(mut self, start: Coord, end: Coord) -> GeneratedMaze {
        self.carve(start);
        self.carve(end);
        GeneratedMaze {
            grid: self.grid,
            steps: self.steps,
            start,
            end,
        }
    }
}

/// First open candidate, in order.
fn first_open(grid: &Grid, candidates: impl IntoIterator<Item = Coord>) -> Option<Coord> {
    candidates
        .into_iter()
        .find(|&coord| is_open_and_in_bounds(grid, coord))
}

/// Strictly inside the one-cell border of a `size` x `size` grid.
fn is_interior(coord: Coord, size: usize) -> bool {
    coord.0 > 0 && coord.1 > 0 && coord.0 + 1 < size && coord.1 + 1 < size
}
