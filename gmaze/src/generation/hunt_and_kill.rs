use super::{GenerationError, SharedBorder};
use crate::{layout::CellGraph, CellId, Random};

/// Hunt-and-kill: a random walk that, once stuck, hunts for the first visited cell that still
/// borders an unvisited one and continues from there.
pub struct HuntAndKill<'a, W> {
    graph: CellGraph<'a, W>,
    current: CellId,
    finished: bool,
}

impl<'a, W: SharedBorder> HuntAndKill<'a, W> {
    pub fn new(walls: &'a [W], rng: &mut Random) -> Result<Self, GenerationError> {
        let mut graph = CellGraph::new(walls, rng);
        let current = graph
            .random_unvisited(rng)
            .ok_or(GenerationError::InvalidInput)?;
        graph.visit(current);

        Ok(Self {
            graph,
            current,
            finished: false,
        })
    }
}

impl<'a, W: SharedBorder> Iterator for HuntAndKill<'a, W> {
    type Item = &'a W;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.graph.is_complete() {
            self.finished = true;
            return None;
        }

        let graph = &self.graph;
        let link = graph.unvisited_neighbors(self.current).next().or_else(|| {
            graph
                .visited_cells()
                .find_map(|cell| graph.unvisited_neighbors(cell).next())
        });

        let Some(link) = link else {
            log::warn!(
                "{} cells are not reachable, the maze is only a forest",
                self.graph.unvisited_count()
            );
            self.finished = true;
            return None;
        };

        self.current = link.end;
        self.graph.visit(link.end);
        Some(link.wall)
    }
}
