use tilemaze::{
    app::{self, RunOptions},
    error::Error,
    logging,
    render::render,
    settings::{Settings, SettingsError},
};

use clap::Parser;
use gmaze::{BuildingStrategy, SolvingStrategy};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "tilemaze")]
struct Args {
    #[clap(short, long, help = "Width of the maze in cells")]
    width: Option<usize>,
    #[clap(short = 'H', long, help = "Height of the maze in cells")]
    height: Option<usize>,
    #[clap(short, long, help = "Generator to build the maze with, key or name")]
    generator: Option<String>,
    #[clap(short, long, help = "Solver to find the path with, key or name")]
    solver: Option<String>,
    #[clap(long, help = "Seed of the random source, random when missing")]
    seed: Option<u64>,
    #[clap(short, long, action, help = "Draw the solution into the maze")]
    trail: bool,
    #[clap(short, long, action, help = "List generators and solvers and quit")]
    list: bool,
    #[clap(short, long, action, help = "Log debug messages")]
    verbose: bool,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let settings_path = Settings::default_path().ok_or(SettingsError::NoConfigDir)?;

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&settings_path));
        return Ok(());
    }

    if args.list {
        list_strategies();
        return Ok(());
    }

    better_panic::install();

    logging::init(LevelFilter::Warn)?;

    let settings = Settings::load(&settings_path)?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        settings.get_log_level()?
    };
    logging::get_logger().set_min_level(level);

    let mut options = RunOptions::from_settings(&settings)?;
    if let Some(width) = args.width {
        options.grid.width = width;
    }
    if let Some(height) = args.height {
        options.grid.height = height;
    }
    if args.generator.is_some() {
        options.generator = app::resolve_generator(args.generator.as_deref())?;
    }
    if args.solver.is_some() {
        options.solver = app::resolve_solver(args.solver.as_deref())?;
    }
    if let Some(seed) = args.seed {
        options.seed = seed;
    }
    options.print_trail |= args.trail;

    let outcome = app::run(&options)?;

    print!(
        "{}",
        render(
            &outcome.grid,
            &outcome.maze,
            &outcome.trail_map,
            options.print_trail,
            true
        )
    );
    println!(
        "{} by {}, seed {}: {} walls opened",
        options.grid.width, options.grid.height, options.seed, outcome.opened
    );
    println!(
        "{}: {} cells long, {} cells explored",
        options.solver,
        outcome.solution().len(),
        outcome.visited_cells()
    );

    Ok(())
}

fn list_strategies() {
    let generators = BuildingStrategy::registry();
    println!("Generators:");
    for (key, strategy) in generators.iter() {
        let default = if generators.get_default() == Some(strategy) { " (default)" } else { "" };
        println!("  {:<24}{}{}", key, strategy, default);
    }

    let solvers = SolvingStrategy::registry();
    println!("Solvers:");
    for (key, strategy) in solvers.iter() {
        let default = if solvers.get_default() == Some(strategy) { " (default)" } else { "" };
        println!("  {:<24}{}{}", key, strategy, default);
    }
}
