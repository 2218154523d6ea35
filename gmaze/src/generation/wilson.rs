use std::collections::VecDeque;

use super::{GenerationError, SharedBorder};
use crate::{
    layout::{CellGraph, Link},
    CellId, Random,
};

/// Wilson's algorithm, producing a uniform spanning tree out of loop-erased random walks.
pub struct Wilson<'a, W> {
    graph: CellGraph<'a, W>,
    rng: &'a mut Random,
    carving: VecDeque<Link<'a, W>>,
}

impl<'a, W: SharedBorder> Wilson<'a, W> {
    pub fn new(walls: &'a [W], rng: &'a mut Random) -> Result<Self, GenerationError> {
        let mut graph = CellGraph::new(walls, rng);
        let first = graph
            .random_unvisited(rng)
            .ok_or(GenerationError::InvalidInput)?;
        graph.visit(first);

        // A walk started in another component would never meet a visited cell.
        let reachable = graph.reachable_from(first);
        if reachable.len() < graph.len() {
            log::warn!(
                "{} cells are not reachable, the maze is only a forest",
                graph.len() - reachable.len()
            );

            let mut inside = vec![false; graph.cells().max().map_or(0, |max| max + 1)];
            for cell in reachable {
                inside[cell] = true;
            }
            let outside: Vec<CellId> = graph.cells().filter(|&cell| !inside[cell]).collect();
            for cell in outside {
                graph.visit(cell);
            }
        }

        Ok(Self {
            graph,
            rng,
            carving: VecDeque::new(),
        })
    }

    /// Loop-erased random walk from a random unvisited cell up to the first visited one.
    fn walk(&mut self) -> Option<Vec<CellId>> {
        let mut cell = self.graph.random_unvisited(self.rng)?;
        let mut walk = vec![cell];

        while !self.graph.is_visited(cell) {
            cell = self.graph.random_neighbor(cell, self.rng)?;

            match walk.iter().position(|&c| c == cell) {
                Some(loop_start) => walk.truncate(loop_start + 1),
                None => walk.push(cell),
            }
        }

        Some(walk)
    }
}

impl<'a, W: SharedBorder> Iterator for Wilson<'a, W> {
    type Item = &'a W;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(link) = self.carving.pop_front() {
                self.graph.visit(link.start);
                return Some(link.wall);
            }

            if self.graph.is_complete() {
                return None;
            }

            let walk = self.walk()?;
            self.carving = walk
                .windows(2)
                .filter_map(|step| self.graph.link_between(step[0], step[1]))
                .collect();
        }
    }
}
