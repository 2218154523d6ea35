use gmaze::{
    grid::SquareGrid, trail::TrailChange, BuildingStrategy, MazeGraph, ProgressHandle, Random,
    SolvingStrategy,
};
use rand::SeedableRng;

#[test]
fn two_by_two_kruskal() {
    let grid = SquareGrid::new(2, 2);
    let mut opened = Vec::new();

    for _ in 0..2 {
        let mut maze = grid.maze();
        let mut rng = Random::seed_from_u64(2024);
        assert_eq!(
            maze.generate(BuildingStrategy::Kruskal, &mut rng, &ProgressHandle::new()),
            Ok(3)
        );
        assert_eq!(maze.shared_walls().len(), 4);

        let open: Vec<usize> = maze
            .shared_walls()
            .iter()
            .filter(|wall| maze.walls()[wall.index].open)
            .map(|wall| wall.index)
            .collect();
        assert_eq!(open.len(), 3);
        opened.push(open);
    }

    assert_eq!(opened[0], opened[1]);
}

#[test]
fn bfs_across_open_grid() {
    let mut maze = SquareGrid::new(8, 8).maze();
    maze.open_all();
    let mut rng = Random::seed_from_u64(0);

    let path = SolvingStrategy::BreadthFirstSearch
        .find_path(&maze, 0, 63, &mut rng)
        .solution()
        .expect("open grid is solvable");
    assert_eq!(path.count(), 15);
}

#[test]
fn every_generator_with_every_solver() {
    let grid = SquareGrid::new(8, 8);

    for (seed, builder) in BuildingStrategy::ALL.into_iter().enumerate() {
        let mut maze = grid.maze();
        let mut rng = Random::seed_from_u64(seed as u64);
        maze.generate(builder, &mut rng, &ProgressHandle::new())
            .unwrap();
        assert_eq!(maze.open_wall_count(), 63, "{builder}");

        for solver in SolvingStrategy::ALL {
            let mut map = maze.trail_map();
            assert!(map.solve(&maze, solver, &mut rng), "{solver} on {builder}");

            let trail = map.solution();
            assert_eq!(trail.first(), Some(&0));
            assert_eq!(trail.last(), Some(&63));
            for pair in trail.windows(2) {
                assert!(maze.is_open_between(pair[0], pair[1]));
            }
        }
    }
}

#[test]
fn unreachable_goal_is_not_solved() {
    let grid = SquareGrid::new(4, 4);
    let mut maze = grid.maze();
    maze.open_all();
    for wall in maze.shared_walls() {
        if wall.a == 15 || wall.b == 15 {
            maze.close_wall(wall.index);
        }
    }
    assert!(maze.accessible_neighbors(15).is_empty());

    let mut rng = Random::seed_from_u64(9);
    for solver in SolvingStrategy::ALL {
        let mut map = maze.trail_map();
        assert!(!map.solve(&maze, solver, &mut rng), "{solver}");
        assert!(!map.has_been_visited(15));
        assert_eq!((0..15).filter(|&c| map.has_been_visited(c)).count(), 15);
    }
}

#[test]
fn trail_edits_replay_the_search() {
    let mut maze = SquareGrid::new(5, 5).maze();
    let mut rng = Random::seed_from_u64(31);
    maze.generate(BuildingStrategy::Wilson, &mut rng, &ProgressHandle::new())
        .unwrap();

    let map = maze.trail_map();
    let mut trail = Vec::new();
    let mut appends = 0;
    for change in map.find_solution(&maze, SolvingStrategy::DepthFirstSearch, &mut rng) {
        if matches!(change, TrailChange::Append(_)) {
            appends += 1;
        }
        change.apply(&mut trail);
    }

    let solution = SolvingStrategy::AStarManhattan
        .find_path(&maze, 0, 24, &mut rng)
        .solution()
        .unwrap();
    assert_eq!(trail, solution.to_vec());
    // Depth-first only ever steps one cell past a cell already on the trail.
    assert!(appends <= 25, "{appends} appends");
}

#[test]
fn stopping_generation_from_another_handle() {
    let mut maze = SquareGrid::new(10, 10).maze();
    let progress = ProgressHandle::new();
    let watcher = progress.clone();
    watcher.stop();

    let mut rng = Random::seed_from_u64(5);
    let result = maze.generate(BuildingStrategy::HuntAndKill, &mut rng, &progress);
    assert_eq!(result, Err(gmaze::GenerationError::Aborted));
    assert!(!progress.progress().is_done);
}
