//! Generic graph walks.
//!
//! None of these keep track of what was already seen, the neighbor selector is expected to
//! filter out nodes that were enqueued before. That keeps them usable for searching over
//! paths, where every enqueued item is a distinct value anyway.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

struct Entry<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P: PartialOrd> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: PartialOrd> Eq for Entry<T, P> {}

impl<T, P: PartialOrd> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: PartialOrd> Ord for Entry<T, P> {
    // Reversed, so the max-heap pops the lowest priority, oldest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Best-first walk, see [`prioritised`].
pub struct Prioritised<T, P, N, F> {
    queue: BinaryHeap<Entry<T, P>>,
    sequence: u64,
    select_neighbors: N,
    priority_of: F,
}

/// Yields `start` and then, repeatedly, the queued item with the lowest priority, enqueuing
/// whatever `select_neighbors` returns for each yielded item. Equal priorities come out in
/// the order they were enqueued.
pub fn prioritised<T, P, I, N, F>(
    start: T,
    select_neighbors: N,
    mut priority_of: F,
) -> Prioritised<T, P, N, F>
where
    P: PartialOrd,
    I: IntoIterator<Item = T>,
    N: FnMut(&T) -> I,
    F: FnMut(&T) -> P,
{
    let mut queue = BinaryHeap::new();
    queue.push(Entry {
        priority: priority_of(&start),
        sequence: 0,
        item: start,
    });

    Prioritised {
        queue,
        sequence: 1,
        select_neighbors,
        priority_of,
    }
}

impl<T, P, I, N, F> Iterator for Prioritised<T, P, N, F>
where
    P: PartialOrd,
    I: IntoIterator<Item = T>,
    N: FnMut(&T) -> I,
    F: FnMut(&T) -> P,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let Entry { item, .. } = self.queue.pop()?;

        for neighbor in (self.select_neighbors)(&item) {
            let priority = (self.priority_of)(&neighbor);
            self.queue.push(Entry {
                priority,
                sequence: self.sequence,
                item: neighbor,
            });
            self.sequence += 1;
        }

        Some(item)
    }
}

/// Breadth-first walk, see [`breadth_first`].
pub struct BreadthFirst<T, N> {
    queue: VecDeque<T>,
    select_neighbors: N,
}

pub fn breadth_first<T, I, N>(start: T, select_neighbors: N) -> BreadthFirst<T, N>
where
    I: IntoIterator<Item = T>,
    N: FnMut(&T) -> I,
{
    BreadthFirst {
        queue: VecDeque::from([start]),
        select_neighbors,
    }
}

impl<T, I, N> Iterator for BreadthFirst<T, N>
where
    I: IntoIterator<Item = T>,
    N: FnMut(&T) -> I,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.queue.pop_front()?;
        self.queue.extend((self.select_neighbors)(&item));
        Some(item)
    }
}

/// Depth-first walk, see [`depth_first`].
pub struct DepthFirst<T, N> {
    stack: Vec<T>,
    select_neighbors: N,
}

/// Neighbors are pushed in the order they are returned, so the last one is visited first.
pub fn depth_first<T, I, N>(start: T, select_neighbors: N) -> DepthFirst<T, N>
where
    I: IntoIterator<Item = T>,
    N: FnMut(&T) -> I,
{
    DepthFirst {
        stack: vec![start],
        select_neighbors,
    }
}

impl<T, I, N> Iterator for DepthFirst<T, N>
where
    I: IntoIterator<Item = T>,
    N: FnMut(&T) -> I,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend((self.select_neighbors)(&item));
        Some(item)
    }
}
