use std::{fmt, str::FromStr};

use hashbrown::HashSet;
use rand::Rng as _;
use smallvec::SmallVec;

use crate::{
    geometry::Point2D,
    path::Path,
    registry::{Registry, UnknownStrategy},
    traverse, CellId, Random,
};

/// Registry of the solving strategies, keyed by [`SolvingStrategy::key`].
pub type SolvingRegistry = Registry<SolvingStrategy>;

/// What a solver needs to know about a maze: where one can go from a cell, and where the cell
/// is.
pub trait MazeGraph {
    /// Cells reachable from `cell` through an open wall.
    fn accessible_neighbors(&self, cell: CellId) -> SmallVec<[CellId; 6]>;

    fn location(&self, cell: CellId) -> Point2D;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolvingStrategy {
    /// Best-first by straight-line distance to the goal.
    ///
    /// Only the remaining distance counts, the length of the path walked so far does not, so
    /// the found path is not necessarily the shortest one.
    AStarEuclidean,
    /// Same as [`SolvingStrategy::AStarEuclidean`], with the taxicab distance.
    AStarManhattan,
    BreadthFirstSearch,
    DepthFirstSearch,
    /// Expands a random frontier path every step.
    RandomWalk,
    /// Every path has the same priority, so the frontier is expanded in the order it grew.
    HeapWalk,
}

impl SolvingStrategy {
    pub const ALL: [SolvingStrategy; 6] = [
        SolvingStrategy::AStarEuclidean,
        SolvingStrategy::AStarManhattan,
        SolvingStrategy::BreadthFirstSearch,
        SolvingStrategy::DepthFirstSearch,
        SolvingStrategy::RandomWalk,
        SolvingStrategy::HeapWalk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolvingStrategy::AStarEuclidean => "A* Euclidean",
            SolvingStrategy::AStarManhattan => "A* Manhattan",
            SolvingStrategy::BreadthFirstSearch => "Breadth-first Search",
            SolvingStrategy::DepthFirstSearch => "Depth-first Search",
            SolvingStrategy::RandomWalk => "Random Walk",
            SolvingStrategy::HeapWalk => "Heap Walk",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SolvingStrategy::AStarEuclidean => "a-star-euclidean",
            SolvingStrategy::AStarManhattan => "a-star-manhattan",
            SolvingStrategy::BreadthFirstSearch => "bfs",
            SolvingStrategy::DepthFirstSearch => "dfs",
            SolvingStrategy::RandomWalk => "random-walk",
            SolvingStrategy::HeapWalk => "heap-walk",
        }
    }

    /// Catalog of all strategies, A* Euclidean being the default.
    pub fn registry() -> SolvingRegistry {
        let mut registry = Registry::with_default(SolvingStrategy::AStarEuclidean);
        for strategy in Self::ALL {
            registry.register(strategy.key().to_string(), strategy);
        }
        registry
    }

    /// Lazily explores the maze from `start`, yielding every path the search takes up.
    ///
    /// The sequence ends with the first path leading to `goal`. When the goal can't be reached,
    /// it simply runs out without such a path.
    pub fn find_path<'a, G>(
        self,
        graph: &'a G,
        start: CellId,
        goal: CellId,
        rng: &'a mut Random,
    ) -> Solve<'a>
    where
        G: MazeGraph + ?Sized,
    {
        log::debug!("Solving from {} to {} using {}", start, goal, self.name());

        let mut visited = HashSet::new();
        visited.insert(start);

        let select_neighbors = move |path: &Path<CellId>| -> SmallVec<[Path<CellId>; 6]> {
            let Some(&last) = path.last() else {
                return SmallVec::new();
            };
            graph
                .accessible_neighbors(last)
                .into_iter()
                .filter(|&neighbor| visited.insert(neighbor))
                .map(|neighbor| path.to(neighbor))
                .collect()
        };

        let goal_location = graph.location(goal);
        let remaining = move |path: &Path<CellId>, metric: fn(Point2D, Point2D) -> f32| {
            path.last()
                .map_or(0.0, |&cell| metric(graph.location(cell), goal_location))
        };

        let origin = Path::new(start);
        let paths: Box<dyn Iterator<Item = Path<CellId>> + 'a> = match self {
            SolvingStrategy::AStarEuclidean => Box::new(traverse::prioritised(
                origin,
                select_neighbors,
                move |path: &Path<CellId>| remaining(path, Point2D::euclidean_distance_to),
            )),
            SolvingStrategy::AStarManhattan => Box::new(traverse::prioritised(
                origin,
                select_neighbors,
                move |path: &Path<CellId>| remaining(path, Point2D::manhattan_distance_to),
            )),
            SolvingStrategy::BreadthFirstSearch => {
                Box::new(traverse::breadth_first(origin, select_neighbors))
            }
            SolvingStrategy::DepthFirstSearch => {
                Box::new(traverse::depth_first(origin, select_neighbors))
            }
            SolvingStrategy::RandomWalk => Box::new(traverse::prioritised(
                origin,
                select_neighbors,
                move |_: &Path<CellId>| rng.gen::<f32>(),
            )),
            SolvingStrategy::HeapWalk => Box::new(traverse::prioritised(
                origin,
                select_neighbors,
                |_: &Path<CellId>| 0.0f32,
            )),
        };

        Solve {
            paths,
            goal,
            reached: false,
        }
    }
}

impl fmt::Display for SolvingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolvingStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let registry = Self::registry();
        registry
            .get(s)
            .or_else(|| {
                registry.iter().map(|(_, strategy)| strategy).find(|strategy| {
                    strategy.key().eq_ignore_ascii_case(s)
                        || strategy.name().eq_ignore_ascii_case(s)
                })
            })
            .copied()
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Paths explored by a [`SolvingStrategy`], ending at the first one that reaches the goal.
pub struct Solve<'a> {
    paths: Box<dyn Iterator<Item = Path<CellId>> + 'a>,
    goal: CellId,
    reached: bool,
}

impl Solve<'_> {
    pub fn goal(&self) -> CellId {
        self.goal
    }

    pub fn is_solved(&self) -> bool {
        self.reached
    }

    /// Runs the search to the end and returns the path to the goal, if there is one.
    pub fn solution(mut self) -> Option<Path<CellId>> {
        let last = self.by_ref().last()?;
        self.reached.then_some(last)
    }
}

impl Iterator for Solve<'_> {
    type Item = Path<CellId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reached {
            return None;
        }

        let path = self.paths.next()?;
        self.reached = path.last() == Some(&self.goal);
        Some(path)
    }
}
