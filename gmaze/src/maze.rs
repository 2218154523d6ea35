use smallvec::SmallVec;

use crate::{
    generation::{BuildingStrategy, GenerationError, SharedBorder},
    geometry::Point2D,
    progress::ProgressHandle,
    solving::MazeGraph,
    trail_map::TrailMap,
    CellId, Random,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    /// Outer edge of the tiling, belongs to a single cell.
    Border(CellId),
    Shared(CellId, CellId),
}

impl WallKind {
    pub fn is_shared(&self) -> bool {
        matches!(self, WallKind::Shared(..))
    }

    pub fn touches(&self, cell: CellId) -> bool {
        match *self {
            WallKind::Border(c) => c == cell,
            WallKind::Shared(a, b) => a == cell || b == cell,
        }
    }

    /// The cell on the other side of a shared wall, seen from `cell`.
    pub fn other_side(&self, cell: CellId) -> Option<CellId> {
        match *self {
            WallKind::Shared(a, b) if a == cell => Some(b),
            WallKind::Shared(a, b) if b == cell => Some(a),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub kind: WallKind,
    pub open: bool,
}

impl Wall {
    pub fn new(kind: WallKind) -> Self {
        Self { kind, open: false }
    }
}

/// A shared wall as handed to the generation strategies, remembering where it lives in the
/// maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SharedWall {
    pub index: usize,
    pub a: CellId,
    pub b: CellId,
}

impl SharedBorder for SharedWall {
    fn neighbors(&self) -> (CellId, CellId) {
        (self.a, self.b)
    }
}

/// Walls of a tiling together with the location of every cell.
///
/// Cells are the indices into `locations`. Generation only ever opens walls, solving only
/// reads them.
#[derive(Debug, Clone)]
pub struct Maze {
    walls: Vec<Wall>,
    locations: Vec<Point2D>,
    cell_walls: Vec<SmallVec<[usize; 6]>>,
}

impl Maze {
    pub fn new(walls: impl IntoIterator<Item = WallKind>, locations: Vec<Point2D>) -> Self {
        let walls: Vec<Wall> = walls.into_iter().map(Wall::new).collect();

        let mut cell_walls = vec![SmallVec::new(); locations.len()];
        for (index, wall) in walls.iter().enumerate() {
            if let WallKind::Shared(a, b) = wall.kind {
                for cell in [a, b] {
                    if cell >= cell_walls.len() {
                        cell_walls.resize(cell + 1, SmallVec::new());
                    }
                    cell_walls[cell].push(index);
                }
            }
        }

        if cell_walls.len() > locations.len() {
            log::warn!(
                "Walls reference {} cells, but only {} have a location",
                cell_walls.len(),
                locations.len()
            );
        }

        Self {
            walls,
            locations,
            cell_walls,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cell_walls.len()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn wall(&self, index: usize) -> Option<&Wall> {
        self.walls.get(index)
    }

    /// Descriptors of every shared wall, the input of the generation strategies.
    pub fn shared_walls(&self) -> Vec<SharedWall> {
        self.walls
            .iter()
            .enumerate()
            .filter_map(|(index, wall)| match wall.kind {
                WallKind::Shared(a, b) => Some(SharedWall { index, a, b }),
                WallKind::Border(_) => None,
            })
            .collect()
    }

    /// Opens a shared wall. Border walls stay closed, `false` is returned for them and for
    /// unknown indices.
    pub fn open_wall(&mut self, index: usize) -> bool {
        self.set_open(index, true)
    }

    pub fn close_wall(&mut self, index: usize) -> bool {
        self.set_open(index, false)
    }

    fn set_open(&mut self, index: usize, open: bool) -> bool {
        match self.walls.get_mut(index) {
            Some(wall) if wall.kind.is_shared() => {
                wall.open = open;
                true
            }
            _ => false,
        }
    }

    /// Opens every shared wall, turning the maze into an open field.
    pub fn open_all(&mut self) {
        for wall in self.walls.iter_mut().filter(|w| w.kind.is_shared()) {
            wall.open = true;
        }
    }

    pub fn reset_walls(&mut self) {
        for wall in &mut self.walls {
            wall.open = false;
        }
    }

    pub fn open_wall_count(&self) -> usize {
        self.walls.iter().filter(|wall| wall.open).count()
    }

    pub fn is_open_between(&self, a: CellId, b: CellId) -> bool {
        self.walls_of(a)
            .any(|wall| wall.open && wall.kind.other_side(a) == Some(b))
    }

    fn walls_of(&self, cell: CellId) -> impl Iterator<Item = &Wall> + '_ {
        self.cell_walls
            .get(cell)
            .into_iter()
            .flatten()
            .map(|&index| &self.walls[index])
    }

    /// Closes every wall and carves a new perfect maze using `strategy`.
    ///
    /// Returns the number of opened walls. `progress` counts opened walls out of the
    /// `cells - 1` a spanning tree needs, and stopping it makes the run end with
    /// [`GenerationError::Aborted`], leaving the walls opened so far open.
    pub fn generate(
        &mut self,
        strategy: BuildingStrategy,
        rng: &mut Random,
        progress: &ProgressHandle,
    ) -> Result<usize, GenerationError> {
        self.reset_walls();
        let shared = self.shared_walls();
        progress.lock().from = self.cell_count().saturating_sub(1);

        let mut opened = 0;
        for wall in strategy.select_walls_to_open(&shared, rng)? {
            if progress.is_stopped() {
                log::debug!("{} stopped after {} walls", strategy.name(), opened);
                return Err(GenerationError::Aborted);
            }

            self.walls[wall.index].open = true;
            opened += 1;
            progress.lock().done = opened;
        }

        progress.lock().finish();
        log::debug!("{} opened {} walls", strategy.name(), opened);
        Ok(opened)
    }

    /// Fresh view-model for solving this maze, with the endpoints at the first and last cell.
    pub fn trail_map(&self) -> TrailMap {
        TrailMap::new(self.cell_count())
    }
}

impl MazeGraph for Maze {
    fn accessible_neighbors(&self, cell: CellId) -> SmallVec<[CellId; 6]> {
        self.walls_of(cell)
            .filter(|wall| wall.open)
            .filter_map(|wall| wall.kind.other_side(cell))
            .collect()
    }

    fn location(&self, cell: CellId) -> Point2D {
        self.locations.get(cell).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    // 0 | 1
    // --+--
    // 2 | 3
    fn square() -> Maze {
        let walls = [
            WallKind::Border(0),
            WallKind::Shared(0, 1),
            WallKind::Shared(2, 3),
            WallKind::Shared(0, 2),
            WallKind::Shared(1, 3),
            WallKind::Border(3),
        ];
        let locations = vec![
            Point2D::new(0.5, 0.5),
            Point2D::new(1.5, 0.5),
            Point2D::new(0.5, 1.5),
            Point2D::new(1.5, 1.5),
        ];
        Maze::new(walls, locations)
    }

    #[test]
    fn shared_walls_keep_indices() {
        let maze = square();
        let shared = maze.shared_walls();

        assert_eq!(shared.len(), 4);
        assert_eq!(shared[0], SharedWall { index: 1, a: 0, b: 1 });
        assert_eq!(shared[3], SharedWall { index: 4, a: 1, b: 3 });
        assert_eq!(maze.cell_count(), 4);
    }

    #[test]
    fn border_walls_never_open() {
        let mut maze = square();

        assert!(!maze.open_wall(0));
        assert!(!maze.open_wall(42));
        assert!(maze.open_wall(1));
        assert_eq!(maze.open_wall_count(), 1);

        maze.open_all();
        assert_eq!(maze.open_wall_count(), 4);
        assert!(!maze.walls()[5].open);

        maze.reset_walls();
        assert_eq!(maze.open_wall_count(), 0);
    }

    #[test]
    fn accessible_neighbors_follow_open_walls() {
        let mut maze = square();
        assert!(maze.accessible_neighbors(0).is_empty());

        maze.open_wall(1);
        maze.open_wall(3);
        let mut neighbors = maze.accessible_neighbors(0).to_vec();
        neighbors.sort();
        assert_eq!(neighbors, vec![1, 2]);
        assert_eq!(maze.accessible_neighbors(1).to_vec(), vec![0]);
        assert!(maze.is_open_between(2, 0));
        assert!(!maze.is_open_between(2, 3));
    }

    #[test]
    fn generate_opens_spanning_tree() {
        let mut maze = square();
        let progress = ProgressHandle::new();
        let mut rng = Random::seed_from_u64(3);

        let opened = maze
            .generate(BuildingStrategy::Kruskal, &mut rng, &progress)
            .unwrap();

        assert_eq!(opened, 3);
        assert_eq!(maze.open_wall_count(), 3);
        let done = progress.progress();
        assert!(done.is_done);
        assert_eq!(done.percent(), 1.0);
    }

    #[test]
    fn generate_closes_old_walls_first() {
        let mut maze = square();
        maze.open_all();
        let mut rng = Random::seed_from_u64(3);

        maze.generate(BuildingStrategy::Wilson, &mut rng, &ProgressHandle::new())
            .unwrap();
        assert_eq!(maze.open_wall_count(), 3);
    }

    #[test]
    fn stopped_generation_aborts() {
        let mut maze = square();
        let progress = ProgressHandle::new();
        progress.stop();
        let mut rng = Random::seed_from_u64(3);

        let result = maze.generate(BuildingStrategy::Prim, &mut rng, &progress);
        assert_eq!(result, Err(GenerationError::Aborted));
        assert_eq!(maze.open_wall_count(), 0);
    }

    #[test]
    fn missing_location_is_origin() {
        let maze = square();
        assert_eq!(maze.location(3), Point2D::new(1.5, 1.5));
        assert_eq!(maze.location(9), Point2D::ZERO);
    }
}
