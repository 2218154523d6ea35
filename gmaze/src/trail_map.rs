use crate::{
    inverted_tree::InvertedTree,
    solving::{MazeGraph, SolvingStrategy},
    trail::{self, TrailChange},
    CellId, Random,
};

/// The solver's view of a maze: where to start and end, the trail shown so far, and
/// everything visited on the way.
#[derive(Debug, Clone)]
pub struct TrailMap {
    start: CellId,
    end: CellId,
    solution: Vec<CellId>,
    visit_counts: Vec<u32>,
    visited_paths: InvertedTree<CellId>,
}

impl TrailMap {
    /// Starts at the lowest cell ordinal and ends at the highest one.
    pub fn new(cell_count: usize) -> Self {
        Self {
            start: 0,
            end: cell_count.saturating_sub(1),
            solution: Vec::new(),
            visit_counts: vec![0; cell_count],
            visited_paths: InvertedTree::new(),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.visit_counts.len()
    }

    pub fn start(&self) -> CellId {
        self.start
    }

    pub fn end(&self) -> CellId {
        self.end
    }

    pub fn solution(&self) -> &[CellId] {
        &self.solution
    }

    pub fn visit_count(&self, cell: CellId) -> u32 {
        self.visit_counts.get(cell).copied().unwrap_or(0)
    }

    pub fn has_been_visited(&self, cell: CellId) -> bool {
        self.visit_count(cell) > 0
    }

    pub fn is_solved(&self) -> bool {
        self.solution.len() > 1 && self.solution.last() == Some(&self.end)
    }

    pub fn can_reset(&self) -> bool {
        !self.solution.is_empty()
    }

    /// Forgets the trail, the visit counts and the visited paths.
    pub fn reset(&mut self) {
        self.solution.clear();
        self.visit_counts.fill(0);
        self.visited_paths.clear();
    }

    pub fn update(&mut self, change: TrailChange<CellId>) {
        match change {
            TrailChange::RemoveLast => {
                self.solution.pop();
            }
            TrailChange::Append(cell) => {
                if let Some(&last) = self.solution.last() {
                    self.visited_paths.insert_after(cell, last);
                }
                if let Some(count) = self.visit_counts.get_mut(cell) {
                    *count += 1;
                }
                self.solution.push(cell);
            }
        }
    }

    pub fn is_valid_start(&self, cell: CellId) -> bool {
        self.is_free(cell)
    }

    pub fn is_valid_end(&self, cell: CellId) -> bool {
        self.is_free(cell)
    }

    fn is_free(&self, cell: CellId) -> bool {
        cell < self.cell_count() && cell != self.start && cell != self.end
    }

    /// Moves the start to `cell`, resetting the trail. Returns `false` and changes nothing
    /// when `cell` is not a valid start.
    pub fn set_start(&mut self, cell: CellId) -> bool {
        if !self.is_valid_start(cell) {
            return false;
        }
        self.start = cell;
        self.reset();
        true
    }

    pub fn set_end(&mut self, cell: CellId) -> bool {
        if !self.is_valid_end(cell) {
            return false;
        }
        self.end = cell;
        self.reset();
        true
    }

    pub fn reverse_endpoints(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.reset();
    }

    /// The trail once taken from the start to an already visited `cell`.
    pub fn path_to_visited(&self, cell: CellId) -> Option<Vec<CellId>> {
        self.has_been_visited(cell)
            .then(|| self.visited_paths.path_to(&cell))
    }

    /// Moves the end of the trail to `cell` the way a user drawing it by hand would.
    ///
    /// A visited cell rewinds the trail to how it first got there, the start cell begins a
    /// new trail, and a cell accessible from the end of the trail extends it. Anything else
    /// is refused with `false`.
    pub fn highlight_trail_to<G>(&mut self, graph: &G, cell: CellId) -> bool
    where
        G: MazeGraph + ?Sized,
    {
        if let Some(target) = self.path_to_visited(cell) {
            let changes: Vec<_> = trail::switch_to(&self.solution, &target).collect();
            for change in changes {
                self.update(change);
            }
            return true;
        }

        let extends = match self.solution.last() {
            Some(&last) => graph.accessible_neighbors(last).contains(&cell),
            None => cell == self.start,
        };
        if extends {
            self.update(TrailChange::Append(cell));
        }
        extends
    }

    /// Lazily solves the maze from the start to the end cell, as trail edits starting from an
    /// empty trail. Feed them to [`TrailMap::update`] after a [`TrailMap::reset`].
    pub fn find_solution<'a, G>(
        &self,
        graph: &'a G,
        strategy: SolvingStrategy,
        rng: &'a mut Random,
    ) -> impl Iterator<Item = TrailChange<CellId>> + 'a
    where
        G: MazeGraph + ?Sized + 'a,
    {
        let paths = strategy
            .find_path(graph, self.start, self.end, rng)
            .map(|path| path.to_vec());
        trail::trail_steps(paths)
    }

    /// Resets the trail and plays a whole solve into it. Returns [`TrailMap::is_solved`].
    pub fn solve<G>(&mut self, graph: &G, strategy: SolvingStrategy, rng: &mut Random) -> bool
    where
        G: MazeGraph + ?Sized,
    {
        self.reset();
        let changes: Vec<_> = self.find_solution(graph, strategy, rng).collect();
        log::debug!("{} took {} trail edits", strategy.name(), changes.len());
        for change in changes {
            self.update(change);
        }
        self.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::{grid::SquareGrid, BuildingStrategy, Maze, ProgressHandle};

    fn generated(width: usize, height: usize) -> Maze {
        let mut maze = SquareGrid::new(width, height).maze();
        let mut rng = Random::seed_from_u64(77);
        maze.generate(BuildingStrategy::RecursiveBacktracker, &mut rng, &ProgressHandle::new())
            .unwrap();
        maze
    }

    #[test]
    fn endpoints_default_to_extremes() {
        let map = SquareGrid::new(4, 4).maze().trail_map();
        assert_eq!(map.start(), 0);
        assert_eq!(map.end(), 15);
        assert!(!map.is_solved());
        assert!(!map.can_reset());
    }

    #[test]
    fn updates_count_visits() {
        let mut map = TrailMap::new(4);
        for change in [
            TrailChange::Append(0),
            TrailChange::Append(1),
            TrailChange::RemoveLast,
            TrailChange::Append(2),
            TrailChange::Append(3),
        ] {
            map.update(change);
        }

        assert_eq!(map.solution(), &[0, 2, 3]);
        assert_eq!(map.visit_count(1), 1);
        assert_eq!(map.visit_count(0), 1);
        assert!(map.is_solved());
        assert_eq!(map.path_to_visited(1), Some(vec![0, 1]));

        map.reset();
        assert!(!map.can_reset());
        assert!(!map.has_been_visited(3));
        assert_eq!(map.path_to_visited(1), None);
    }

    #[test]
    fn lone_end_cell_is_not_solved() {
        let mut map = TrailMap::new(1);
        map.update(TrailChange::Append(0));
        assert!(!map.is_solved());
    }

    #[test]
    fn endpoints_validation() {
        let mut map = TrailMap::new(9);
        map.update(TrailChange::Append(0));

        assert!(!map.set_start(0));
        assert!(!map.set_start(8));
        assert!(!map.set_end(9));
        assert!(map.can_reset());

        assert!(map.set_start(4));
        assert_eq!(map.start(), 4);
        assert!(!map.can_reset());

        assert!(map.set_end(2));
        map.reverse_endpoints();
        assert_eq!((map.start(), map.end()), (2, 4));
    }

    #[test]
    fn solve_ends_on_the_only_path() {
        let maze = generated(6, 5);
        let mut map = maze.trail_map();
        let mut rng = Random::seed_from_u64(1);

        assert!(map.solve(&maze, SolvingStrategy::BreadthFirstSearch, &mut rng));
        let expected = SolvingStrategy::DepthFirstSearch
            .find_path(&maze, 0, 29, &mut rng)
            .solution()
            .unwrap()
            .to_vec();

        assert_eq!(map.solution(), expected.as_slice());
        assert_eq!(map.path_to_visited(29), Some(expected));
        assert!(map.has_been_visited(0));
    }

    #[test]
    fn hand_drawn_trail() {
        let maze = generated(4, 4);
        let mut map = maze.trail_map();

        assert!(!map.highlight_trail_to(&maze, 5));
        assert!(map.highlight_trail_to(&maze, 0));

        let next = maze.accessible_neighbors(0)[0];
        assert!(map.highlight_trail_to(&maze, next));
        assert_eq!(map.solution(), &[0, next]);

        let far = (0..16)
            .find(|&c| c != 0 && c != next && !maze.accessible_neighbors(next).contains(&c))
            .unwrap();
        assert!(!map.highlight_trail_to(&maze, far));

        assert!(map.highlight_trail_to(&maze, 0));
        assert_eq!(map.solution(), &[0]);
    }
}
