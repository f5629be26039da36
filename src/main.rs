use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use mazerunner::app::{App, Config, Renderer, Scene, SolveRequest};
use tracing_appender::non_blocking::WorkerGuard;

/// Generate and solve grid mazes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Largest accepted maze size
    #[arg(long, global = true, default_value_t = Config::default().max_size)]
    max_size: usize,

    /// Write logs to `mazerunner.log` in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "MAZERUNNER_LOG", default_value = "warn")]
    log_level: tracing::Level,

    /// Delay between animation frames, in milliseconds
    #[arg(long, global = true, default_value_t = 10)]
    frame_delay_ms: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and print it as JSON
    Generate {
        /// dfs, prim or kruskal
        #[arg(short, long, default_value = "dfs")]
        algorithm: String,
        /// Number of cells per side
        #[arg(short, long, default_value_t = 21)]
        size: usize,
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
        /// Draw the maze instead of printing JSON
        #[arg(long)]
        render: bool,
    },
    /// Solve a maze read as JSON (`{"maze", "start", "end", "algorithm"}`)
    Solve {
        /// dfs, bfs or astar. Overrides the request's algorithm
        #[arg(short, long)]
        algorithm: Option<String>,
        /// Request file. Reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Generate, solve and draw a maze
    Run {
        /// dfs, prim or kruskal
        #[arg(short, long, default_value = "dfs")]
        generator: String,
        /// dfs, bfs or astar
        #[arg(short = 'S', long, default_value = "bfs")]
        solver: String,
        /// Number of cells per side
        #[arg(short, long, default_value_t = 21)]
        size: usize,
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
        /// Replay the carving and the search frame by frame
        #[arg(long)]
        animate: bool,
    },
}

/// Install the global subscriber. Logs go through a non-blocking writer that
/// is flushed when the returned guard is dropped.
fn init_tracing(log_dir: Option<&Path>, level: tracing::Level) -> WorkerGuard {
    let (writer, guard) = match log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, "mazerunner.log"))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_ansi(log_dir.is_none())
        .init();
    guard
}

fn read_request(input: Option<&Path>) -> anyhow::Result<SolveRequest> {
    let body = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?,
    };
    serde_json::from_str(&body).context("Invalid solve request")
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref(), cli.log_level);

    let app = App::new(Config {
        max_size: cli.max_size,
        frame_delay: Duration::from_millis(cli.frame_delay_ms),
    });

    match cli.command {
        Command::Generate {
            algorithm,
            size,
            seed,
            render,
        } => {
            let maze = app.generate(&algorithm, size, seed)?;
            if render {
                Renderer::new(std::io::stdout(), app.config().frame_delay)
                    .show(&Scene::from_maze(&maze))?;
            } else {
                print_json(&maze)?;
            }
        }
        Command::Solve { algorithm, input } => {
            let request = read_request(input.as_deref())?;
            let solution = app.solve(&request, algorithm.as_deref())?;
            print_json(&solution)?;
        }
        Command::Run {
            generator,
            solver,
            size,
            seed,
            animate,
        } => {
            let solution = app.run(std::io::stdout(), &generator, &solver, size, seed, animate)?;
            if solution.is_solved() {
                println!(
                    "Path found! {} cells visited, path of {} cells.",
                    solution.trace.len(),
                    solution.optimal_path.len()
                );
            } else {
                println!("No path found.");
            }
        }
    }
    Ok(())
}
