use std::vec;

use rand::seq::SliceRandom as _;

use super::SharedBorder;
use crate::{disjoint_set::DisjointSet, CellId, Random};

/// Randomized Kruskal's algorithm.
///
/// Walls are shuffled once up front, then every wall whose two cells are not yet connected is
/// opened.
pub struct Kruskal<'a, W> {
    walls: vec::IntoIter<&'a W>,
    sets: DisjointSet<CellId>,
}

impl<'a, W: SharedBorder> Kruskal<'a, W> {
    pub fn new(walls: &'a [W], rng: &mut Random) -> Self {
        let mut shuffled: Vec<&'a W> = walls.iter().collect();
        shuffled.shuffle(rng);

        let sets = shuffled
            .iter()
            .flat_map(|wall| {
                let (a, b) = wall.neighbors();
                [a, b]
            })
            .collect();

        Self {
            walls: shuffled.into_iter(),
            sets,
        }
    }
}

impl<'a, W: SharedBorder> Iterator for Kruskal<'a, W> {
    type Item = &'a W;

    fn next(&mut self) -> Option<Self::Item> {
        for wall in self.walls.by_ref() {
            let (a, b) = wall.neighbors();
            if let Ok(true) = self.sets.merge(&a, &b) {
                return Some(wall);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn square_keeps_one_wall_closed() {
        let walls = vec![(0, 1), (2, 3), (0, 2), (1, 3)];

        let mut rng = Random::seed_from_u64(2024);
        let opened: Vec<_> = Kruskal::new(&walls, &mut rng).copied().collect();
        assert_eq!(opened.len(), 3);

        let closed: Vec<_> = walls.iter().filter(|w| !opened.contains(*w)).collect();
        assert_eq!(closed.len(), 1);

        let mut rng = Random::seed_from_u64(2024);
        let again: Vec<_> = Kruskal::new(&walls, &mut rng).copied().collect();
        assert_eq!(opened, again);
    }
}
