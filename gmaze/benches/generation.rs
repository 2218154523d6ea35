use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gmaze::{grid::SquareGrid, BuildingStrategy, ProgressHandle, Random, SolvingStrategy};
use rand::SeedableRng;

const GRID: SquareGrid = SquareGrid {
    width: 60,
    height: 60,
};

pub fn generation(c: &mut Criterion) {
    for strategy in BuildingStrategy::ALL {
        c.bench_function(strategy.key(), |b| {
            b.iter(|| {
                let mut maze = GRID.maze();
                let mut rng = Random::seed_from_u64(black_box(7));
                maze.generate(strategy, &mut rng, &ProgressHandle::new())
                    .unwrap()
            })
        });
    }
}

pub fn solving(c: &mut Criterion) {
    let mut maze = GRID.maze();
    let mut rng = Random::seed_from_u64(7);
    maze.generate(BuildingStrategy::Kruskal, &mut rng, &ProgressHandle::new())
        .unwrap();
    let goal = GRID.cell_count() - 1;

    for strategy in SolvingStrategy::ALL {
        c.bench_function(strategy.key(), |b| {
            b.iter(|| {
                let mut rng = Random::seed_from_u64(7);
                strategy
                    .find_path(&maze, black_box(0), goal, &mut rng)
                    .solution()
            })
        });
    }
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generation, solving}
criterion_main!(benches);
