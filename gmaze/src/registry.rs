use std::hash::Hash;

use hashbrown::{Equivalent, HashMap};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown strategy: {0}")]
pub struct UnknownStrategy(pub String);

/// Named catalog of items with an optional default, listed in registration order.
#[derive(Debug, Clone)]
pub struct Registry<T, K = String> {
    items: HashMap<K, T>,
    order: Vec<K>,
    default: Option<T>,
}

impl<T, K> Registry<T, K> {
    pub fn with_default(default: T) -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
            default: Some(default),
        }
    }

    pub fn get_default(&self) -> Option<&T> {
        self.default.as_ref()
    }
}

impl<T, K> Registry<T, K>
where
    K: Hash + Eq + Clone,
{
    pub fn register(&mut self, key: K, item: T) {
        if self.items.insert(key.clone(), item).is_none() {
            self.order.push(key);
        }
    }

    pub fn get<Q>(&self, k: &Q) -> Option<&T>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.items.get(k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &T)> {
        self.order
            .iter()
            .filter_map(|key| self.items.get(key).map(|item| (key, item)))
    }
}
