mod renderer;

pub use renderer::{Renderer, Scene, Tile};

use std::{
    io::Write,
    time::{Duration, Instant},
};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::{
    generators::{GeneratedMaze, Generator, generate_maze, get_rng},
    maze::{Coord, Grid},
    path::extract_optimal_path,
    solvers::{Solution, Solver, solve_maze},
};

/// Settings for the command line front end.
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest maze side accepted before generating. Generation cost grows
    /// at least with the square of the size.
    pub max_size: usize,
    /// Time between two animation frames when replaying traces
    pub frame_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: u8::MAX as usize,
            frame_delay: Duration::from_millis(10),
        }
    }
}

/// Body of a solve request, in the same shape the generate output uses for
/// the grid and the endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub maze: Grid,
    pub start: Coord,
    pub end: Coord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

/// Timings gathered by [`App::profile`].
#[derive(Debug, Clone, Default)]
pub struct ProfileReport {
    pub iterations: usize,
    pub generate_time: Duration,
    pub solve_time: Duration,
    pub solved: usize,
}

pub struct App {
    config: Config,
}

impl Default for App {
    fn default() -> Self {
        App::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn check_size(&self, size: usize) -> anyhow::Result<()> {
        if size > self.config.max_size {
            bail!(
                "Maze size {} exceeds the maximum of {}",
                size,
                self.config.max_size
            );
        }
        Ok(())
    }

    /// Generates a maze after checking `size` against the configured cap.
    pub fn generate(
        &self,
        algorithm: &str,
        size: usize,
        seed: Option<u64>,
    ) -> anyhow::Result<GeneratedMaze> {
        let generator = algorithm.parse::<Generator>()?;
        self.check_size(size)?;
        tracing::info!(
            "Generating a {}x{} maze with {} (seed {:?})",
            size,
            size,
            generator,
            seed
        );
        let maze = generate_maze(generator, size, &mut get_rng(seed))?;
        Ok(maze)
    }

    /// Solves a request. `algorithm` overrides the one named in the request.
    ///
    /// DFS does not track parents, so its path is extracted from the trace.
    /// When that fails the trace is still returned with an empty path.
    pub fn solve(
        &self,
        request: &SolveRequest,
        algorithm: Option<&str>,
    ) -> anyhow::Result<Solution> {
        let name = algorithm
            .or(request.algorithm.as_deref())
            .context("No solving algorithm given")?;
        let solver = name.parse::<Solver>()?;
        tracing::info!(
            "Solving a {}x{} maze from {:?} to {:?} with {}",
            request.maze.rows(),
            request.maze.cols(),
            request.start,
            request.end,
            solver
        );

        let mut solution = solve_maze(solver, &request.maze, request.start, request.end);
        if !solution.is_solved() {
            tracing::info!("No path found to the goal");
        } else if solution.optimal_path.is_empty() {
            match extract_optimal_path(&solution.trace, request.start, request.end) {
                Ok(path) => solution.optimal_path = path,
                Err(e) => tracing::warn!("{}; returning the trace without a path", e),
            }
        }
        Ok(solution)
    }

    /// Generates, solves and draws a maze to `out`, optionally replaying the
    /// carve and search traces frame by frame.
    pub fn run<W: Write>(
        &self,
        out: W,
        generator: &str,
        solver: &str,
        size: usize,
        seed: Option<u64>,
        animate: bool,
    ) -> anyhow::Result<Solution> {
        let maze = self.generate(generator, size, seed)?;
        let request = SolveRequest {
            maze: maze.grid.clone(),
            start: maze.start,
            end: maze.end,
            algorithm: Some(solver.to_string()),
        };
        let solution = self.solve(&request, None)?;

        let mut renderer = Renderer::new(out, self.config.frame_delay);
        if animate {
            renderer
                .replay(&maze, &solution)
                .context("Failed to replay the maze")?;
        } else {
            renderer
                .show(&Scene::from_maze(&maze).with_solution(&solution))
                .context("Failed to draw the maze")?;
        }
        Ok(solution)
    }

    /// Runs generation and solving `iterations` times without rendering and
    /// reports the time spent in each.
    pub fn profile(
        &self,
        size: usize,
        generator: Generator,
        solver: Solver,
        iterations: usize,
    ) -> anyhow::Result<ProfileReport> {
        self.check_size(size)?;
        let mut rng = get_rng(None);
        let mut report = ProfileReport {
            iterations,
            ..Default::default()
        };

        for i in 0..iterations {
            let timer = Instant::now();
            let maze = generate_maze(generator, size, &mut rng)?;
            let generated = timer.elapsed();

            let timer = Instant::now();
            let solution = solve_maze(solver, &maze.grid, maze.start, maze.end);
            let solved = timer.elapsed();

            tracing::debug!(
                "[profile] iteration {}: generate {:?}, solve {:?}, visited {}",
                i,
                generated,
                solved,
                solution.trace.len()
            );
            report.generate_time += generated;
            report.solve_time += solved;
            report.solved += usize::from(solution.is_solved());
        }

        tracing::info!(
            "Profiled {} x {} on {}x{}: generate {:?}, solve {:?} over {} iterations",
            generator,
            solver,
            size,
            size,
            report.generate_time,
            report.solve_time,
            iterations
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    fn corridor_request(algorithm: Option<&str>) -> SolveRequest {
        serde_json::from_value(serde_json::json!({
            "maze": [[0, 0, 1], [1, 0, 1], [1, 0, 0]],
            "start": [0, 0],
            "end": [2, 2],
            "algorithm": algorithm,
        }))
        .unwrap()
    }

    #[test]
    fn test_size_cap() {
        let app = App::new(Config {
            max_size: 9,
            ..Config::default()
        });
        assert!(app.generate("dfs", 9, Some(0)).is_ok());
        assert!(app.generate("dfs", 10, Some(0)).is_err());
    }

    #[test]
    fn test_unknown_algorithm_is_reported() {
        let app = App::default();
        let err = app.generate("foo", 7, None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MazeError>(),
            Some(&MazeError::UnknownAlgorithm("foo".to_string()))
        );
        let err = app.solve(&corridor_request(Some("foo")), None).unwrap_err();
        assert!(err.downcast_ref::<MazeError>().is_some());
        assert!(app.solve(&corridor_request(None), None).is_err());
    }

    #[test]
    fn test_dfs_path_is_extracted() {
        let app = App::default();
        let solution = app.solve(&corridor_request(Some("dfs")), None).unwrap();
        assert_eq!(
            solution.optimal_path,
            vec![(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_override_algorithm() {
        let app = App::default();
        let solution = app
            .solve(&corridor_request(Some("dfs")), Some("astar"))
            .unwrap();
        assert_eq!(solution.optimal_path.len(), 5);
    }

    #[test]
    fn test_dfs_extraction_failure_keeps_trace() {
        // DFS dives down first, dead-ends, then jumps back to (0, 1)
        let request = SolveRequest {
            maze: Grid::try_from(vec![vec![0, 0, 0], vec![0, 1, 1], vec![0, 1, 1]]).unwrap(),
            start: (0, 0),
            end: (0, 2),
            algorithm: Some("dfs".to_string()),
        };
        let solution = App::default().solve(&request, None).unwrap();
        assert_eq!(solution.trace, vec![(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)]);
        assert!(solution.optimal_path.is_empty());
    }

    #[test]
    fn test_run_draws_the_maze() {
        let mut out = Vec::new();
        let solution = App::default()
            .run(&mut out, "prim", "bfs", 9, Some(3), false)
            .unwrap();
        assert!(solution.is_solved());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 9);
    }

    #[test]
    fn test_profile() {
        let report = App::default()
            .profile(11, Generator::Kruskal, Solver::AStar, 3)
            .unwrap();
        assert_eq!(report.iterations, 3);
        assert_eq!(report.solved, 3);
    }
}
