//! Edits turning one displayed trail into another.

use std::{collections::VecDeque, iter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailChange<T> {
    RemoveLast,
    Append(T),
}

impl<T> TrailChange<T> {
    pub fn apply(self, trail: &mut Vec<T>) {
        match self {
            TrailChange::RemoveLast => {
                trail.pop();
            }
            TrailChange::Append(item) => trail.push(item),
        }
    }
}

/// Shortest edit script from `from` to `to` using only removals at the end and appends.
///
/// The common prefix is kept, everything after it is removed from `from`, then the rest of
/// `to` is appended in order.
pub fn switch_to<'a, T>(from: &[T], to: &'a [T]) -> impl Iterator<Item = TrailChange<T>> + 'a
where
    T: PartialEq + Clone,
{
    let common = from.iter().zip(to).take_while(|(a, b)| a == b).count();

    iter::repeat_with(|| TrailChange::RemoveLast)
        .take(from.len() - common)
        .chain(to[common..].iter().cloned().map(TrailChange::Append))
}

/// Flattens a sequence of trails into the edits leading from each one to the next, starting
/// from an empty trail.
pub struct TrailSteps<I, T> {
    trails: I,
    current: Vec<T>,
    pending: VecDeque<TrailChange<T>>,
}

pub fn trail_steps<I, T>(trails: I) -> TrailSteps<I::IntoIter, T>
where
    I: IntoIterator<Item = Vec<T>>,
{
    TrailSteps {
        trails: trails.into_iter(),
        current: Vec::new(),
        pending: VecDeque::new(),
    }
}

impl<I, T> TrailSteps<I, T> {
    /// The trail as it looks after every edit returned so far plus the pending ones.
    pub fn current(&self) -> &[T] {
        &self.current
    }
}

impl<I, T> Iterator for TrailSteps<I, T>
where
    I: Iterator<Item = Vec<T>>,
    T: PartialEq + Clone,
{
    type Item = TrailChange<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(change) = self.pending.pop_front() {
                return Some(change);
            }

            let next = self.trails.next()?;
            self.pending.extend(switch_to(&self.current, &next));
            self.current = next;
        }
    }
}
