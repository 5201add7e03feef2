//! Capability traits of an ordered sequence.
//!
//! Code written against these traits works with any list backend; the
//! [`ArrayList`] implementations delegate to its inherent methods.

use crate::{ArrayList, ListError};
use std::borrow::Borrow;

/// Positional access to an ordered sequence.
pub trait OrderedSequence<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Provides a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replaces the element at `index`, returning the old one.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError>;

    /// Inserts an element at `index`, shifting the tail.
    fn insert_at(&mut self, index: usize, value: T) -> Result<(), ListError>;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T, ListError>;
}

/// Equality based search.
pub trait Searchable<T>: OrderedSequence<T> {
    fn index_of(&self, value: &T) -> Option<usize>;

    fn last_index_of(&self, value: &T) -> Option<usize>;

    fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

/// Operations taking a whole, possibly absent, collection.
pub trait BulkMutable<T>: OrderedSequence<T> {
    fn contains_all<I>(&self, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    fn add_all<I>(&mut self, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>;

    fn add_all_at<I>(&mut self, index: usize, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>;

    fn remove_all<I>(&mut self, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;
}

impl<T> OrderedSequence<T> for ArrayList<T> {
    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn is_empty(&self) -> bool {
        ArrayList::is_empty(self)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        ArrayList::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        ArrayList::set(self, index, value)
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<(), ListError> {
        ArrayList::insert(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        ArrayList::remove_at(self, index)
    }
}

impl<T: PartialEq> Searchable<T> for ArrayList<T> {
    fn index_of(&self, value: &T) -> Option<usize> {
        ArrayList::index_of(self, value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize> {
        ArrayList::last_index_of(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        ArrayList::contains(self, value)
    }
}

impl<T: PartialEq> BulkMutable<T> for ArrayList<T> {
    fn contains_all<I>(&self, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        ArrayList::contains_all(self, collection)
    }

    fn add_all<I>(&mut self, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        ArrayList::add_all(self, collection)
    }

    fn add_all_at<I>(&mut self, index: usize, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        ArrayList::add_all_at(self, index, collection)
    }

    fn remove_all<I>(&mut self, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        ArrayList::remove_all(self, collection)
    }
}
