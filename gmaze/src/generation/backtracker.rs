use super::{GenerationError, SharedBorder};
use crate::{layout::CellGraph, CellId, Random};

/// Depth-first carving with an explicit stack.
pub struct RecursiveBacktracker<'a, W> {
    graph: CellGraph<'a, W>,
    stack: Vec<CellId>,
}

impl<'a, W: SharedBorder> RecursiveBacktracker<'a, W> {
    pub fn new(walls: &'a [W], rng: &mut Random) -> Result<Self, GenerationError> {
        let mut graph = CellGraph::new(walls, rng);
        let start = graph
            .random_unvisited(rng)
            .ok_or(GenerationError::InvalidInput)?;
        graph.visit(start);

        Ok(Self {
            graph,
            stack: vec![start],
        })
    }
}

impl<'a, W: SharedBorder> Iterator for RecursiveBacktracker<'a, W> {
    type Item = &'a W;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&cell) = self.stack.last() {
            if self.graph.is_complete() {
                return None;
            }

            let next = self.graph.unvisited_neighbors(cell).next();
            match next {
                Some(link) => {
                    self.stack.push(link.end);
                    self.graph.visit(link.end);
                    return Some(link.wall);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::generation::tests::lattice;

    #[test]
    fn extends_deepest_cell_by_its_first_neighbor() {
        let walls = lattice(6, 6);
        let mut backtracks = 0;

        for seed in 0..4 {
            let mut rng = Random::seed_from_u64(seed);
            let mut carver = RecursiveBacktracker::new(&walls, &mut rng).unwrap();

            while !carver.graph.is_complete() {
                let stack = carver.stack.clone();
                let (depth, expected) = stack
                    .iter()
                    .enumerate()
                    .rev()
                    .find_map(|(depth, &cell)| {
                        carver
                            .graph
                            .links(cell)
                            .iter()
                            .find(|link| !carver.graph.is_visited(link.end))
                            .map(|&link| (depth, link))
                    })
                    .unwrap();
                if depth + 1 < stack.len() {
                    backtracks += 1;
                }

                assert_eq!(carver.next(), Some(expected.wall));
                assert_eq!(carver.stack.len(), depth + 2);
                assert_eq!(carver.stack.last(), Some(&expected.end));
            }
            assert_eq!(carver.next(), None);
        }

        assert!(backtracks > 0);
    }
}
