use gmaze::{
    grid::SquareGrid, BuildingStrategy, CellId, Maze, ProgressHandle, Random, SolvingStrategy,
    TrailMap,
};
use rand::SeedableRng as _;

use crate::{error::Error, settings::Settings};

/// Everything one run needs, settings and command line merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub grid: SquareGrid,
    pub generator: BuildingStrategy,
    pub solver: SolvingStrategy,
    pub seed: u64,
    pub print_trail: bool,
}

impl RunOptions {
    /// Resolves the settings, falling back to the registries' defaults for unset strategies
    /// and to a random seed.
    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        Ok(Self {
            grid: SquareGrid::new(settings.get_width(), settings.get_height()),
            generator: resolve_generator(settings.get_default_generator())?,
            solver: resolve_solver(settings.get_default_solver())?,
            seed: settings.get_seed().unwrap_or_else(rand::random),
            print_trail: settings.get_print_trail(),
        })
    }
}

pub fn resolve_generator(name: Option<&str>) -> Result<BuildingStrategy, Error> {
    match name {
        Some(name) => Ok(name.parse()?),
        None => Ok(BuildingStrategy::registry()
            .get_default()
            .copied()
            .unwrap_or(BuildingStrategy::Kruskal)),
    }
}

pub fn resolve_solver(name: Option<&str>) -> Result<SolvingStrategy, Error> {
    match name {
        Some(name) => Ok(name.parse()?),
        None => Ok(SolvingStrategy::registry()
            .get_default()
            .copied()
            .unwrap_or(SolvingStrategy::AStarEuclidean)),
    }
}

/// A generated and solved maze.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub grid: SquareGrid,
    pub maze: Maze,
    pub trail_map: TrailMap,
    pub opened: usize,
}

impl Outcome {
    pub fn solution(&self) -> &[CellId] {
        self.trail_map.solution()
    }

    pub fn visited_cells(&self) -> usize {
        (0..self.maze.cell_count())
            .filter(|&cell| self.trail_map.has_been_visited(cell))
            .count()
    }
}

/// Generates a maze over the options' grid and solves it from the first to the last cell.
pub fn run(options: &RunOptions) -> Result<Outcome, Error> {
    let grid = options.grid;
    if grid.cell_count() < 2 {
        return Err(Error::TooSmall(grid.width, grid.height));
    }

    log::info!(
        "Building {}x{} maze using {}, seed {}",
        grid.width,
        grid.height,
        options.generator,
        options.seed
    );

    let mut rng = Random::seed_from_u64(options.seed);
    let mut maze = grid.maze();
    let opened = maze.generate(options.generator, &mut rng, &ProgressHandle::new())?;

    let mut trail_map = maze.trail_map();
    if !trail_map.solve(&maze, options.solver, &mut rng) {
        return Err(Error::Unsolvable {
            start: trail_map.start(),
            end: trail_map.end(),
        });
    }

    Ok(Outcome {
        grid,
        maze,
        trail_map,
        opened,
    })
}
