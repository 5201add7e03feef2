use crate::config::BufferConfig;
use crate::ArrayList;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: PartialOrd> PartialOrd for ArrayList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for ArrayList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Cloning keeps the capacity and the floor of the source list. The clone
/// starts a modification history of its own.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let config = BufferConfig::new()
            .initial_capacity(self.capacity())
            .floor(self.floor());
        let mut list = Self::from_config(config);
        list.extend(self.iter().cloned());
        list
    }

    fn clone_from(&mut self, other: &Self) {
        let shared = self.len().min(other.len());
        for (element, source) in self.iter_mut().zip(other.iter()) {
            element.clone_from(source);
        }
        while self.len() > other.len() {
            // Removing from the back never shifts, and shrinks like any removal.
            let _ = self.remove_at(self.len() - 1);
        }
        self.extend(other.iter().skip(shared).cloned());
    }
}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}
