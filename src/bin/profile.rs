use mazerunner::{Generator, Solver, app::App};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let app = App::default();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);
    let size = app.config().max_size;

    for generator in Generator::ALL {
        for solver in Solver::ALL {
            let report = app.profile(size, generator, solver, num_iters)?;
            println!(
                "{:<40} {:<28} generate {:>10.2?}  solve {:>10.2?}  solved {}/{}",
                generator.to_string(),
                solver.to_string(),
                report.generate_time,
                report.solve_time,
                report.solved,
                report.iterations
            );
        }
    }
    Ok(())
}
