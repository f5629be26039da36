use std::{fmt, io::Write, time::Duration};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    generators::GeneratedMaze,
    maze::{Cell, Coord, Grid},
    solvers::Solution,
};

/// What a single grid position looks like on screen.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    #[default]
    Wall,
    /// Open, not touched by the solver.
    Empty,
    /// Visited during solving.
    Visited,
    /// Part of the solution path.
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Visited => "* ".with(Color::Blue),
            Tile::Route => "🟨".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Top-down view of a maze and, once solved, the search over it.
///
/// Built from the generator and solver outputs; nothing here feeds back into
/// the algorithms.
#[derive(Debug, Clone)]
pub struct Scene {
    tiles: Box<[Tile]>,
    rows: usize,
    cols: usize,
    start: Coord,
    end: Coord,
}

impl Scene {
    /// A scene where every cell is still a wall, for replaying a carve trace.
    pub fn blank(rows: usize, cols: usize, start: Coord, end: Coord) -> Self {
        Scene {
            tiles: vec![Tile::Wall; rows * cols].into_boxed_slice(),
            rows,
            cols,
            start,
            end,
        }
    }

    pub fn from_grid(grid: &Grid, start: Coord, end: Coord) -> Self {
        let mut scene = Scene::blank(grid.rows(), grid.cols(), start, end);
        for (coord, cell) in grid.iter() {
            if cell == Cell::Open {
                scene.carve(coord);
            }
        }
        scene
    }

    pub fn from_maze(maze: &GeneratedMaze) -> Self {
        Scene::from_grid(&maze.grid, maze.start, maze.end)
    }

    /// Marks the solver's visits and then its path.
    pub fn with_solution(mut self, solution: &Solution) -> Self {
        solution.trace.iter().for_each(|&coord| self.visit(coord));
        solution
            .optimal_path
            .iter()
            .for_each(|&coord| self.mark_route(coord));
        self
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.0 < self.rows && coord.1 < self.cols).then(|| coord.0 * self.cols + coord.1)
    }

    fn paint(&mut self, coord: Coord, tile: Tile) {
        if let Some(idx) = self.index(coord) {
            self.tiles[idx] = tile;
        }
    }

    pub fn carve(&mut self, coord: Coord) {
        self.paint(coord, Tile::Empty);
    }

    pub fn visit(&mut self, coord: Coord) {
        self.paint(coord, Tile::Visited);
    }

    pub fn mark_route(&mut self, coord: Coord) {
        self.paint(coord, Tile::Route);
    }

    /// Tile shown at `coord`. Start and goal always win over the underlying state.
    pub fn tile(&self, coord: Coord) -> Tile {
        if coord == self.start {
            Tile::Start
        } else if coord == self.end {
            Tile::Goal
        } else {
            self.index(coord).map_or(Tile::Wall, |idx| self.tiles[idx])
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Queues every row of the scene, each terminated by `\r\n`.
    pub fn draw<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.queue(style::Print(self.tile((row, col))))?;
            }
            out.queue(style::Print("\r\n"))?;
        }
        Ok(())
    }
}

pub struct Renderer<W: Write> {
    out: W,
    /// Time to wait after each animation frame
    frame_delay: Duration,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, frame_delay: Duration) -> Self {
        Self { out, frame_delay }
    }

    /// Warn when the terminal cannot show the whole scene. Output that is not a
    /// terminal is never too small.
    fn check_size(scene: &Scene) {
        if let Ok((term_width, term_height)) = terminal::size() {
            let width = scene.cols() * Tile::CELL_WIDTH as usize;
            if (term_width as usize) < width || (term_height as usize) < scene.rows() {
                tracing::warn!(
                    "Terminal size {}x{} is too small for a {}x{} maze, output will wrap",
                    term_width,
                    term_height,
                    scene.cols(),
                    scene.rows()
                );
            }
        }
    }

    /// Draws a finished scene in one go.
    pub fn show(&mut self, scene: &Scene) -> std::io::Result<()> {
        Self::check_size(scene);
        scene.draw(&mut self.out)?;
        self.out.flush()
    }

    /// Animates the carve trace on a blank scene, then the solver's visits,
    /// then the path.
    pub fn replay(&mut self, maze: &GeneratedMaze, solution: &Solution) -> std::io::Result<()> {
        let mut scene = Scene::blank(maze.grid.rows(), maze.grid.cols(), maze.start, maze.end);
        Self::check_size(&scene);

        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        scene.draw(&mut self.out)?;
        self.out.flush()?;

        for &coord in &maze.steps {
            scene.carve(coord);
            self.update(&scene, coord)?;
        }
        for &coord in &solution.trace {
            scene.visit(coord);
            self.update(&scene, coord)?;
        }
        for &coord in &solution.optimal_path {
            scene.mark_route(coord);
            self.update(&scene, coord)?;
        }

        // Leave the cursor below the maze
        queue!(
            self.out,
            cursor::MoveTo(0, scene.rows().min(u16::MAX as usize) as u16),
            cursor::Show
        )?;
        self.out.flush()
    }

    /// Redraws the tile at `coord` and waits one frame.
    fn update(&mut self, scene: &Scene, coord: Coord) -> std::io::Result<()> {
        let (Ok(row), Ok(col)) = (u16::try_from(coord.0), u16::try_from(coord.1)) else {
            return Ok(());
        };
        queue!(
            self.out,
            cursor::MoveTo(col.saturating_mul(Tile::CELL_WIDTH), row),
            style::Print(scene.tile(coord))
        )?;
        self.out.flush()?;
        std::thread::sleep(self.frame_delay);
        Ok(())
    }
}
