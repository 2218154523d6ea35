use std::collections::VecDeque;

use rand::Rng as _;

use super::{GenerationError, SharedBorder};
use crate::{layout::CellGraph, CellId, Random};

/// How the growing tree picks the next cell from its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolSelection {
    /// Uniformly random cell, classic Prim's.
    Random,
    /// Coin flip between a random cell and the newest one.
    Mixed,
    /// Always the cell that has been in the pool the longest.
    Oldest,
}

/// Growing-tree family of algorithms.
pub struct GrowingTree<'a, W> {
    graph: CellGraph<'a, W>,
    rng: &'a mut Random,
    pool: VecDeque<CellId>,
    selection: PoolSelection,
}

impl<'a, W: SharedBorder> GrowingTree<'a, W> {
    pub fn new(
        walls: &'a [W],
        rng: &'a mut Random,
        selection: PoolSelection,
    ) -> Result<Self, GenerationError> {
        let mut graph = CellGraph::new(walls, rng);
        let start = graph
            .random_unvisited(rng)
            .ok_or(GenerationError::InvalidInput)?;
        graph.visit(start);

        Ok(Self {
            graph,
            rng,
            pool: VecDeque::from([start]),
            selection,
        })
    }

    fn pick(&mut self) -> usize {
        let len = self.pool.len();
        match self.selection {
            PoolSelection::Random => self.rng.gen_range(0..len),
            PoolSelection::Mixed => {
                if self.rng.gen_range(0..2) > 0 {
                    self.rng.gen_range(0..len)
                } else {
                    len - 1
                }
            }
            PoolSelection::Oldest => 0,
        }
    }
}

impl<'a, W: SharedBorder> Iterator for GrowingTree<'a, W> {
    type Item = &'a W;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.graph.is_complete() && !self.pool.is_empty() {
            let index = self.pick();
            let cell = self.pool[index];

            let next = self.graph.unvisited_neighbors(cell).next();
            match next {
                Some(link) => {
                    self.pool.push_back(link.end);
                    self.graph.visit(link.end);
                    return Some(link.wall);
                }
                None => {
                    self.pool.remove(index);
                }
            }
        }

        None
    }
}
