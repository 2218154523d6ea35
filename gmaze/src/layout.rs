use std::collections::VecDeque;

use rand::{seq::SliceRandom as _, Rng as _};
use smallvec::SmallVec;

use crate::{generation::SharedBorder, CellId, Random};

/// Directed half of a shared wall, pointing from `start` to `end`.
#[derive(Debug)]
pub struct Link<'a, W> {
    pub start: CellId,
    pub end: CellId,
    pub wall: &'a W,
}

impl<W> Clone for Link<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for Link<'_, W> {}

/// Set of cell ids supporting O(1) insert, remove and uniform random pick.
#[derive(Debug, Clone, Default)]
struct CellSet {
    items: Vec<CellId>,
    slots: Vec<Option<usize>>,
}

impl CellSet {
    fn with_capacity(size: usize) -> Self {
        Self {
            items: Vec::with_capacity(size),
            slots: vec![None; size],
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, cell: CellId) -> bool {
        self.slots.get(cell).is_some_and(|slot| slot.is_some())
    }

    fn insert(&mut self, cell: CellId) -> bool {
        if cell >= self.slots.len() {
            self.slots.resize(cell + 1, None);
        }
        if self.slots[cell].is_some() {
            return false;
        }

        self.slots[cell] = Some(self.items.len());
        self.items.push(cell);
        true
    }

    fn remove(&mut self, cell: CellId) -> bool {
        let Some(slot) = self.slots.get_mut(cell).and_then(Option::take) else {
            return false;
        };

        self.items.swap_remove(slot);
        if let Some(&moved) = self.items.get(slot) {
            self.slots[moved] = Some(slot);
        }
        true
    }

    fn choose(&self, rng: &mut Random) -> Option<CellId> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items[rng.gen_range(0..self.items.len())])
    }
}

/// Adjacency view of a tiling, built fresh for each generation run.
///
/// Every cell gets its outgoing links in an order drawn from the supplied random source, and
/// strategies that take "the first unvisited neighbor" depend on exactly that order. Visited
/// state lives in a single set of unvisited cells instead of per-cell flags.
#[derive(Debug)]
pub struct CellGraph<'a, W> {
    links: Vec<SmallVec<[Link<'a, W>; 6]>>,
    order: Vec<CellId>,
    unvisited: CellSet,
}

impl<'a, W: SharedBorder> CellGraph<'a, W> {
    pub fn new(walls: &'a [W], rng: &mut Random) -> Self {
        let mut shuffled: Vec<&'a W> = walls.iter().collect();
        shuffled.shuffle(rng);

        let size = walls
            .iter()
            .map(|wall| {
                let (a, b) = wall.neighbors();
                a.max(b) + 1
            })
            .max()
            .unwrap_or(0);

        let mut links: Vec<SmallVec<[Link<'a, W>; 6]>> = vec![SmallVec::new(); size];
        let mut order = Vec::new();
        let mut unvisited = CellSet::with_capacity(size);

        for wall in shuffled {
            let (a, b) = wall.neighbors();
            for (start, end) in [(a, b), (b, a)] {
                links[start].push(Link { start, end, wall });
                if unvisited.insert(start) {
                    order.push(start);
                }
            }
        }

        Self {
            links,
            order,
            unvisited,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.unvisited.len() == 0
    }

    pub fn unvisited_count(&self) -> usize {
        self.unvisited.len()
    }

    pub fn random_unvisited(&self, rng: &mut Random) -> Option<CellId> {
        self.unvisited.choose(rng)
    }

    pub fn is_visited(&self, cell: CellId) -> bool {
        !self.unvisited.contains(cell)
    }

    pub fn visit(&mut self, cell: CellId) {
        self.unvisited.remove(cell);
    }

    pub fn unvisit(&mut self, cell: CellId) {
        if self.links.get(cell).is_some_and(|links| !links.is_empty()) {
            self.unvisited.insert(cell);
        }
    }

    /// All cells, in the order they first appeared among the shuffled walls.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.order.iter().copied()
    }

    pub fn visited_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        let unvisited = &self.unvisited;
        self.order
            .iter()
            .copied()
            .filter(move |&cell| !unvisited.contains(cell))
    }

    pub fn links(&self, cell: CellId) -> &[Link<'a, W>] {
        self.links.get(cell).map_or(&[], |links| links.as_slice())
    }

    pub fn unvisited_neighbors(&self, cell: CellId) -> impl Iterator<Item = Link<'a, W>> + '_ {
        self.links(cell)
            .iter()
            .copied()
            .filter(|link| !self.is_visited(link.end))
    }

    pub fn visited_neighbors(&self, cell: CellId) -> impl Iterator<Item = Link<'a, W>> + '_ {
        self.links(cell)
            .iter()
            .copied()
            .filter(|link| self.is_visited(link.end))
    }

    pub fn random_neighbor(&self, cell: CellId, rng: &mut Random) -> Option<CellId> {
        let links = self.links(cell);
        if links.is_empty() {
            return None;
        }
        Some(links[rng.gen_range(0..links.len())].end)
    }

    pub fn link_between(&self, start: CellId, end: CellId) -> Option<Link<'a, W>> {
        self.links(start).iter().copied().find(|link| link.end == end)
    }

    /// Cells reachable from `cell` over any link, `cell` included.
    pub fn reachable_from(&self, cell: CellId) -> Vec<CellId> {
        let mut seen = vec![false; self.links.len()];
        let mut queue = VecDeque::from([cell]);
        let mut reached = Vec::new();

        if let Some(flag) = seen.get_mut(cell) {
            *flag = true;
        }

        while let Some(current) = queue.pop_front() {
            reached.push(current);
            for link in self.links(current) {
                if !seen[link.end] {
                    seen[link.end] = true;
                    queue.push_back(link.end);
                }
            }
        }

        reached
    }
}
