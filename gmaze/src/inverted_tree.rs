use std::hash::Hash;

use hashbrown::HashMap;

/// Tree stored as links from children to their parent.
///
/// Good for remembering many paths sharing a common root: every path ever inserted can be
/// rebuilt from any of its nodes by walking up to the root.
#[derive(Debug, Clone)]
pub struct InvertedTree<T> {
    parents: HashMap<T, T>,
}

impl<T> Default for InvertedTree<T> {
    fn default() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }
}

impl<T: Hash + Eq + Clone> InvertedTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.parents.contains_key(item)
    }

    pub fn parent(&self, item: &T) -> Option<&T> {
        self.parents.get(item)
    }

    /// Inserts a chain, each item becoming the child of the one before it.
    pub fn insert(&mut self, sequence: impl IntoIterator<Item = T>) {
        let mut sequence = sequence.into_iter();
        if let Some(first) = sequence.next() {
            self.insert_many_after(first, sequence);
        }
    }

    /// Links `item` under `parent`. An item keeps the first parent it was given.
    pub fn insert_after(&mut self, item: T, parent: T) -> bool {
        if item == parent || self.parents.contains_key(&item) {
            return false;
        }
        self.parents.insert(item, parent);
        true
    }

    /// Inserts a chain hanging below `parent`.
    pub fn insert_many_after(&mut self, parent: T, sequence: impl IntoIterator<Item = T>) {
        let mut parent = parent;
        for item in sequence {
            self.insert_after(item.clone(), parent);
            parent = item;
        }
    }

    /// Parents of `item`, nearest first.
    pub fn ancestors<'a>(&'a self, item: &'a T) -> Ancestors<'a, T> {
        Ancestors {
            tree: self,
            current: item,
            steps: 0,
        }
    }

    /// The chain from the root down to `item`, `item` included.
    pub fn path_to(&self, item: &T) -> Vec<T> {
        let mut path: Vec<T> = self.ancestors(item).cloned().collect();
        path.reverse();
        path.push(item.clone());
        path
    }

    pub fn clear(&mut self) {
        self.parents.clear();
    }
}

pub struct Ancestors<'a, T> {
    tree: &'a InvertedTree<T>,
    current: &'a T,
    steps: usize,
}

impl<'a, T: Hash + Eq> Iterator for Ancestors<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // A cycle can't be built through `insert_after`, this only bounds the walk.
        if self.steps > self.tree.parents.len() {
            return None;
        }

        let parent = self.tree.parents.get(self.current)?;
        self.current = parent;
        self.steps += 1;
        Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> InvertedTree<u32> {
        let mut tree = InvertedTree::new();
        tree.insert(0..6);
        tree
    }

    #[test]
    fn ancestors_nearest_first() {
        let tree = tree();
        let ancestors: Vec<_> = tree.ancestors(&5).copied().collect();
        assert_eq!(ancestors, vec![4, 3, 2, 1, 0]);
        assert_eq!(tree.ancestors(&0).count(), 0);
        assert_eq!(tree.ancestors(&42).count(), 0);
    }

    #[test]
    fn branches_share_root() {
        let mut tree = tree();
        tree.insert_after(6, 3);
        tree.insert_after(7, 6);

        assert_eq!(tree.path_to(&7), vec![0, 1, 2, 3, 6, 7]);
        assert_eq!(tree.path_to(&5), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn first_parent_wins() {
        let mut tree = tree();
        assert!(!tree.insert_after(4, 0));
        assert!(!tree.insert_after(9, 9));
        assert_eq!(tree.parent(&4), Some(&3));

        tree.insert_many_after(1, [10, 11]);
        assert_eq!(tree.path_to(&11), vec![0, 1, 10, 11]);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut tree = tree();
        assert_eq!(tree.len(), 5);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.path_to(&5), vec![5]);
    }
}
