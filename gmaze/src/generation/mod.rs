mod backtracker;
mod growing_tree;
mod hunt_and_kill;
mod kruskal;
mod wilson;

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    registry::{Registry, UnknownStrategy},
    CellId, Random,
};
pub use backtracker::RecursiveBacktracker;
pub use growing_tree::{GrowingTree, PoolSelection};
pub use hunt_and_kill::HuntAndKill;
pub use kruskal::Kruskal;
pub use wilson::Wilson;

/// Registry of the building strategies, keyed by [`BuildingStrategy::key`].
pub type BuildingRegistry = Registry<BuildingStrategy>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("there are no shared walls to build a maze from")]
    InvalidInput,
    #[error("generation was stopped")]
    Aborted,
}

/// A wall between exactly two cells, the only kind of wall a strategy may open.
pub trait SharedBorder {
    fn neighbors(&self) -> (CellId, CellId);
}

impl SharedBorder for (CellId, CellId) {
    fn neighbors(&self) -> (CellId, CellId) {
        *self
    }
}

impl<W: SharedBorder + ?Sized> SharedBorder for &W {
    fn neighbors(&self) -> (CellId, CellId) {
        (**self).neighbors()
    }
}

/// Algorithms turning the full set of shared walls into a perfect maze.
///
/// Every strategy yields, lazily and in order, the walls that should be opened. On a
/// connected input of `n` cells exactly `n - 1` walls come out and together they form a
/// spanning tree. The result depends only on the walls and the state of the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingStrategy {
    HuntAndKill,
    Kruskal,
    Prim,
    PrimMixed,
    PrimOldest,
    RecursiveBacktracker,
    Wilson,
}

impl BuildingStrategy {
    pub const ALL: [BuildingStrategy; 7] = [
        BuildingStrategy::HuntAndKill,
        BuildingStrategy::Kruskal,
        BuildingStrategy::Prim,
        BuildingStrategy::PrimMixed,
        BuildingStrategy::PrimOldest,
        BuildingStrategy::RecursiveBacktracker,
        BuildingStrategy::Wilson,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildingStrategy::HuntAndKill => "Hunt and Kill",
            BuildingStrategy::Kruskal => "Kruskal's Algorithm",
            BuildingStrategy::Prim => "Prim's",
            BuildingStrategy::PrimMixed => "Prim's (Mixed)",
            BuildingStrategy::PrimOldest => "Prim's (Oldest)",
            BuildingStrategy::RecursiveBacktracker => "Recursive Backtracker",
            BuildingStrategy::Wilson => "Wilson's",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            BuildingStrategy::HuntAndKill => "hunt-and-kill",
            BuildingStrategy::Kruskal => "kruskal",
            BuildingStrategy::Prim => "prim",
            BuildingStrategy::PrimMixed => "prim-mixed",
            BuildingStrategy::PrimOldest => "prim-oldest",
            BuildingStrategy::RecursiveBacktracker => "recursive-backtracker",
            BuildingStrategy::Wilson => "wilson",
        }
    }

    /// Catalog of all strategies, Kruskal's being the default.
    pub fn registry() -> BuildingRegistry {
        let mut registry = Registry::with_default(BuildingStrategy::Kruskal);
        for strategy in Self::ALL {
            registry.register(strategy.key().to_string(), strategy);
        }
        registry
    }

    /// Starts the strategy over `walls`, consuming `rng` as the walls are pulled.
    pub fn select_walls_to_open<'a, W: SharedBorder>(
        self,
        walls: &'a [W],
        rng: &'a mut Random,
    ) -> Result<Carve<'a, W>, GenerationError> {
        log::debug!("Building over {} walls using {}", walls.len(), self.name());

        Ok(match self {
            BuildingStrategy::Kruskal => Carve::Kruskal(Kruskal::new(walls, rng)),
            BuildingStrategy::HuntAndKill => Carve::HuntAndKill(HuntAndKill::new(walls, rng)?),
            BuildingStrategy::Prim => {
                Carve::GrowingTree(GrowingTree::new(walls, rng, PoolSelection::Random)?)
            }
            BuildingStrategy::PrimMixed => {
                Carve::GrowingTree(GrowingTree::new(walls, rng, PoolSelection::Mixed)?)
            }
            BuildingStrategy::PrimOldest => {
                Carve::GrowingTree(GrowingTree::new(walls, rng, PoolSelection::Oldest)?)
            }
            BuildingStrategy::RecursiveBacktracker => {
                Carve::RecursiveBacktracker(RecursiveBacktracker::new(walls, rng)?)
            }
            BuildingStrategy::Wilson => Carve::Wilson(Wilson::new(walls, rng)?),
        })
    }
}

impl fmt::Display for BuildingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the key as well as the display name, ignoring case.
impl FromStr for BuildingStrategy {
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

/// Lazy sequence of walls to open, produced by one of the [`BuildingStrategy`] variants.
pub enum Carve<'a, W> {
    Kruskal(Kruskal<'a, W>),
    HuntAndKill(HuntAndKill<'a, W>),
    GrowingTree(GrowingTree<'a, W>),
    RecursiveBacktracker(RecursiveBacktracker<'a, W>),
    Wilson(Wilson<'a, W>),
}

impl<'a, W: SharedBorder> Iterator for Carve<'a, W> {
    type Item = &'a W;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Carve::Kruskal(inner) => inner.next(),
            Carve::HuntAndKill(inner) => inner.next(),
            Carve::GrowingTree(inner) => inner.next(),
            Carve::RecursiveBacktracker(inner) => inner.next(),
            Carve::Wilson(inner) => inner.next(),
        }
    }
}
