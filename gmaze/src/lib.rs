pub mod disjoint_set;
pub mod generation;
pub mod geometry;
pub mod grid;
pub mod inverted_tree;
pub mod layout;
pub mod maze;
pub mod path;
pub mod progress;
pub mod registry;
pub mod solving;
pub mod trail;
pub mod trail_map;
pub mod traverse;

/// Dense, zero-based ordinal of a cell, assigned by whatever tiling produced the walls.
pub type CellId = usize;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub use generation::{BuildingStrategy, GenerationError, SharedBorder};
pub use geometry::Point2D;
pub use maze::{Maze, SharedWall, Wall, WallKind};
pub use path::Path;
pub use progress::ProgressHandle;
pub use solving::{MazeGraph, SolvingStrategy};
pub use trail::TrailChange;
pub use trail_map::TrailMap;
