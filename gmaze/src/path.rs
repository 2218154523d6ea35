use std::{fmt, rc::Rc};

struct Step<T> {
    prefix: Path<T>,
    last: T,
    count: usize,
}

/// Immutable sequence that shares its prefix with every path extended from it.
///
/// Extending a path with [`Path::to`] is O(1) and never copies the prefix, so a search can keep
/// many overlapping partial paths alive at once.
pub struct Path<T> {
    step: Option<Rc<Step<T>>>,
}

impl<T> Path<T> {
    pub const fn empty() -> Self {
        Self { step: None }
    }

    pub fn new(first: T) -> Self {
        Self::empty().to(first)
    }

    /// Returns a new path with `last` appended, sharing `self` as its prefix.
    pub fn to(&self, last: T) -> Self {
        Self {
            step: Some(Rc::new(Step {
                prefix: self.clone(),
                count: self.count() + 1,
                last,
            })),
        }
    }

    pub fn count(&self) -> usize {
        self.step.as_ref().map_or(0, |step| step.count)
    }

    pub fn is_empty(&self) -> bool {
        self.step.is_none()
    }

    pub fn last(&self) -> Option<&T> {
        self.step.as_ref().map(|step| &step.last)
    }

    pub fn prefix(&self) -> Option<&Path<T>> {
        self.step.as_ref().map(|step| &step.prefix)
    }

    /// Walks the path from its last element back to the first.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev { path: self }
    }

    /// `true` when both paths are the very same node, not just equal elements.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.step, &other.step) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Clone> Path<T> {
    /// Materializes the path, oldest element first.
    pub fn to_vec(&self) -> Vec<T> {
        let mut items: Vec<T> = self.iter_rev().cloned().collect();
        items.reverse();
        items
    }
}

impl<T> Clone for Path<T> {
    fn clone(&self) -> Self {
        Self {
            step: self.step.clone(),
        }
    }
}

impl<T> Default for Path<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items: Vec<&T> = self.iter_rev().collect();
        items.reverse();
        f.debug_list().entries(items).finish()
    }
}

impl<T: PartialEq> PartialEq for Path<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.iter_rev().eq(other.iter_rev())
    }
}

impl<T: Eq> Eq for Path<T> {}

impl<T> Drop for Path<T> {
    // Long paths would otherwise drop recursively, one stack frame per step.
    fn drop(&mut self) {
        let mut next = self.step.take();
        while let Some(step) = next {
            match Rc::try_unwrap(step) {
                Ok(mut step) => next = step.prefix.step.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct IterRev<'a, T> {
    path: &'a Path<T>,
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.path.step.as_ref()?;
        self.path = &step.prefix;
        Some(&step.last)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.path.count();
        (count, Some(count))
    }
}

impl<T> ExactSizeIterator for IterRev<'_, T> {}

impl<T> FromIterator<T> for Path<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Path::empty(), |path, item| path.to(item))
    }
}
