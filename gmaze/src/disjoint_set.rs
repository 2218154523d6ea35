use std::{fmt, hash::Hash};

use hashbrown::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisjointSetError {
    #[error("key {0} not found")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy)]
struct Node {
    representative: usize,
    height: u32,
}

/// Union-find over arbitrary hashable keys.
///
/// Keys are mapped to slots of an internal arena, representatives are slot indices. Lookups
/// compress the walked chain, merging is done by height.
#[derive(Debug, Clone)]
pub struct DisjointSet<K> {
    slots: HashMap<K, usize>,
    keys: Vec<K>,
    nodes: Vec<Node>,
}

impl<K> DisjointSet<K> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            keys: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registered keys, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    pub fn set_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, node)| node.representative == *i)
            .count()
    }

    fn find(&mut self, slot: usize) -> usize {
        let parent = self.nodes[slot].representative;
        if parent == slot {
            return slot;
        }

        let root = self.find(parent);
        self.nodes[slot].representative = root;
        root
    }
}

impl<K> DisjointSet<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// Registers `item` as a singleton set. Returns `false` if it was already known.
    pub fn add(&mut self, item: K) -> bool {
        if self.slots.contains_key(&item) {
            return false;
        }

        let slot = self.nodes.len();
        self.nodes.push(Node {
            representative: slot,
            height: 0,
        });
        self.keys.push(item.clone());
        self.slots.insert(item, slot);
        true
    }

    pub fn contains(&self, item: &K) -> bool {
        self.slots.contains_key(item)
    }

    pub fn are_disjoint(&mut self, a: &K, b: &K) -> Result<bool, DisjointSetError> {
        let (a, b) = (self.slot(a)?, self.slot(b)?);
        Ok(self.find(a) != self.find(b))
    }

    /// Unites the sets of `a` and `b`. Returns `false` when they already were one set.
    pub fn merge(&mut self, a: &K, b: &K) -> Result<bool, DisjointSetError> {
        let (a, b) = (self.slot(a)?, self.slot(b)?);
        let (mut root_a, mut root_b) = (self.find(a), self.find(b));

        if root_a == root_b {
            return Ok(false);
        }

        if self.nodes[root_a].height < self.nodes[root_b].height {
            (root_a, root_b) = (root_b, root_a);
        }

        self.nodes[root_b].representative = root_a;
        if self.nodes[root_a].height == self.nodes[root_b].height {
            self.nodes[root_a].height += 1;
        }

        Ok(true)
    }

    fn slot(&self, item: &K) -> Result<usize, DisjointSetError> {
        self.slots
            .get(item)
            .copied()
            .ok_or_else(|| DisjointSetError::NotFound(format!("{:?}", item)))
    }
}

impl<K> Default for DisjointSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for DisjointSet<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut set = DisjointSet::new();
        assert!(set.add(1));
        assert!(!set.add(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn merge_joins_sets() {
        let mut set: DisjointSet<u32> = (0..4).collect();

        assert_eq!(set.are_disjoint(&0, &1), Ok(true));
        assert_eq!(set.merge(&0, &1), Ok(true));
        assert_eq!(set.are_disjoint(&0, &1), Ok(false));
        assert_eq!(set.are_disjoint(&1, &0), Ok(false));
        assert_eq!(set.are_disjoint(&0, &2), Ok(true));
        assert_eq!(set.set_count(), 3);
    }

    #[test]
    fn merge_is_symmetric_and_idempotent() {
        let mut set: DisjointSet<char> = "abc".chars().collect();

        assert_eq!(set.merge(&'a', &'b'), Ok(true));
        assert_eq!(set.merge(&'b', &'a'), Ok(false));
        assert_eq!(set.merge(&'a', &'b'), Ok(false));
        assert_eq!(set.merge(&'c', &'b'), Ok(true));
        assert_eq!(set.are_disjoint(&'a', &'c'), Ok(false));
    }

    #[test]
    fn chained_merges_connect_everything() {
        let n = 100;
        let mut set: DisjointSet<usize> = (0..n).collect();

        for i in 1..n {
            assert_eq!(set.merge(&(i - 1), &i), Ok(true));
        }

        assert_eq!(set.set_count(), 1);
        for i in 0..n {
            assert_eq!(set.are_disjoint(&0, &i), Ok(false));
        }
    }

    #[test]
    fn find_compresses_to_root() {
        let mut set: DisjointSet<usize> = (0..8).collect();
        for (a, b) in [(0, 1), (2, 3), (0, 2), (4, 5), (6, 7), (4, 6), (0, 4)] {
            set.merge(&a, &b).unwrap();
        }

        let root = set.find(7);
        assert_eq!(set.nodes[7].representative, root);
        assert!(set.nodes.iter().all(|n| n.height <= 3));
    }

    #[test]
    fn unknown_key_is_reported() {
        let mut set: DisjointSet<u8> = [1, 2].into_iter().collect();

        assert_eq!(
            set.are_disjoint(&1, &9),
            Err(DisjointSetError::NotFound("9".to_string()))
        );
        assert!(matches!(
            set.merge(&7, &1),
            Err(DisjointSetError::NotFound(_))
        ));
    }
}
