use std::any::{type_name, Any};
use std::fmt::{Debug, Formatter};

use crate::config::BufferConfig;
use crate::list::buffer::Buffer;
use crate::list::cursor::SharedList;
use crate::{Iter, IterMut, ListError};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod buffer;
mod bulk;

/// The `ArrayList` is a growable, index-ordered sequence backed by a
/// contiguous buffer of slots.
///
/// Accessing or replacing an element at any position takes *O*(1) time.
/// Inserting or removing at position `i` shifts the `len - i` elements behind
/// it and takes *O*(*n*) time.
///
/// The `ArrayList` contains:
/// - a buffer of `capacity` slots, of which the first `len` hold the
///   elements in list order;
/// - a modification counter, bumped by one on every structural mutation
///   (anything that changes the length or the positions of elements).
///
/// # Capacity
///
/// The capacity doubles exactly when an insertion finds the buffer full.
/// After removals, a buffer whose capacity exceeds both its floor and three
/// times its length is shrunk to three quarters, never below the floor.
///
/// ```
/// use array_list::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.extend(0..10);
/// assert_eq!(list.capacity(), 10);
/// list.push(10); // the 11th insertion
/// assert_eq!(list.capacity(), 20);
/// ```
///
/// # Null Elements
///
/// A list of `Option<U>` stores `None` as an ordinary value, and searches
/// treat two `None`s as equal:
///
/// ```
/// use array_list::ArrayList;
/// use std::iter::FromIterator;
///
/// let list = ArrayList::from_iter([Some('x'), None, None]);
/// assert_eq!(list.index_of(&None), Some(1));
/// assert_eq!(list.last_index_of(&None), Some(2));
/// ```
pub struct ArrayList<T> {
    buffer: Buffer<T>,
    /// the number of structural modifications so far
    modification_count: usize,
}

// private methods
impl<T> ArrayList<T> {
    fn from_config(config: BufferConfig) -> Self {
        Self {
            buffer: Buffer::new(config.initial_capacity, config.floor),
            modification_count: 0,
        }
    }

    pub(crate) fn buffer(&self) -> &Buffer<T> {
        &self.buffer
    }

    /// Record `count` structural modifications.
    pub(crate) fn record_modifications(&mut self, count: usize) {
        self.modification_count = self.modification_count.wrapping_add(count);
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }

    /// Check that `index` is a valid insertion point, i.e. `index <= len`.
    pub(crate) fn check_position(&self, index: usize) -> Result<(), ListError> {
        if index > self.len() {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    /// Remove the element at `index` without considering a shrink.
    pub(crate) fn detach(&mut self, index: usize) -> Result<T, ListError> {
        let removed = self
            .buffer
            .remove(index)
            .ok_or_else(|| self.out_of_range(index))?;
        self.record_modifications(1);
        Ok(removed)
    }
}

impl<T> ArrayList<T> {
    /// Create an empty `ArrayList` with the default capacity and floor.
    ///
    /// # Examples
    /// ```
    /// use array_list::ArrayList;
    /// let list: ArrayList<u32> = ArrayList::new();
    /// assert_eq!(list.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::from_config(BufferConfig::new())
    }

    /// Create an empty `ArrayList` with `capacity` slots, or return
    /// [`ListError::IllegalArgument`] if `capacity` is zero.
    ///
    /// # Examples
    /// ```
    /// use array_list::{ArrayList, ListError};
    ///
    /// let list: ArrayList<u32> = ArrayList::with_capacity(32).unwrap();
    /// assert_eq!(list.capacity(), 32);
    ///
    /// assert!(matches!(
    ///     ArrayList::<u32>::with_capacity(0),
    ///     Err(ListError::IllegalArgument(_))
    /// ));
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::with_config(BufferConfig::new().initial_capacity(capacity))
    }

    /// Create an empty `ArrayList` from a validated [`BufferConfig`].
    pub fn with_config(config: BufferConfig) -> Result<Self, ListError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the minimum capacity the list is ever shrunk to.
    #[inline]
    pub fn floor(&self) -> usize {
        self.buffer.floor()
    }

    /// Returns the number of structural modifications made so far.
    ///
    /// Replacing elements in place does not count:
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.push('a');
    /// list.push('b');
    /// assert_eq!(list.modification_count(), 2);
    ///
    /// list.set(0, 'c').unwrap();
    /// assert_eq!(list.modification_count(), 2);
    /// ```
    #[inline]
    pub fn modification_count(&self) -> usize {
        self.modification_count
    }

    /// Provides a reference to the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::{ArrayList, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = ArrayList::from_iter(["a", "b"]);
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(list.get(2), Err(ListError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.buffer
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Provides a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len();
        self.buffer
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// This is not a structural modification.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = self.len();
        self.buffer
            .replace(index, value)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortized *O*(1) time.
    pub fn push(&mut self, value: T) {
        self.buffer.push(value);
        self.record_modifications(1);
    }

    /// Inserts an element at `index`, shifting every element at or after
    /// `index` one position higher.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.push(1);
    /// list.push(3);
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list.to_array(), vec![1, 2, 3]);
    ///
    /// assert!(list.insert(5, 4).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.check_position(index)?;
        self.buffer.insert(index, value);
        self.record_modifications(1);
        Ok(())
    }

    /// Removes the element at `index` and returns it, then shrinks the buffer
    /// if it became sparse.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = ArrayList::from_iter([1, 2, 3]);
    /// assert_eq!(list.remove_at(1), Ok(2));
    /// assert_eq!(list.remove_at(0), Ok(1));
    /// assert_eq!(list.remove_at(0), Ok(3));
    /// assert!(list.remove_at(0).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let removed = self.detach(index)?;
        self.buffer.shrink();
        Ok(removed)
    }

    /// Removes the first element equal to `value`. Returns whether anything
    /// was removed.
    ///
    /// ```
    /// use array_list::ArrayList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = ArrayList::from_iter(["a", "b", "a"]);
    /// assert!(list.remove_first(&"a"));
    /// assert_eq!(list.to_array(), vec!["b", "a"]);
    /// assert!(!list.remove_first(&"c"));
    /// ```
    pub fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes every element equal to `value`, then considers a single
    /// shrink. Returns whether anything was removed.
    ///
    /// ```
    /// use array_list::ArrayList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = ArrayList::from_iter(["a", "b", "a", "c", "a"]);
    /// assert!(list.remove_all_occurrences(&"a"));
    /// assert_eq!(list.to_array(), vec!["b", "c"]);
    /// ```
    pub fn remove_all_occurrences(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut removed = false;
        let mut index = 0;
        while index < self.len() {
            if self.buffer.get(index) == Some(value) {
                // The next candidate slides into `index`.
                if self.detach(index).is_ok() {
                    removed = true;
                }
            } else {
                index += 1;
            }
        }
        self.buffer.shrink();
        removed
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|element| element == value)
    }

    /// Returns `true` if the list contains an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    /// use std::iter::FromIterator;
    ///
    /// let list = ArrayList::from_iter([0, 1, 2]);
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes all elements and shrinks the buffer to the floor.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.extend(0..25);
    /// assert_eq!(list.capacity(), 40);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.record_modifications(1);
    }

    /// Copies the elements into a new vector.
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the elements into `target`, stored as `U`.
    ///
    /// If `target` is shorter than the list, a new vector of exactly `len`
    /// slots is returned instead. Otherwise the elements are written to the
    /// front of `target` and, only if `target` is longer than the list,
    /// `None` is written right after the last element; later slots are left
    /// untouched.
    ///
    /// Fails with [`ListError::ArrayStoreIncompatibility`] if an element is
    /// not a `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::{ArrayList, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = ArrayList::from_iter([1, 2]);
    ///
    /// let array = list.to_array_in::<i32>(vec![Some(7); 4]).unwrap();
    /// assert_eq!(array, vec![Some(1), Some(2), None, Some(7)]);
    ///
    /// let array = list.to_array_in::<i32>(Vec::new()).unwrap();
    /// assert_eq!(array, vec![Some(1), Some(2)]);
    ///
    /// assert!(matches!(
    ///     list.to_array_in::<String>(Vec::new()),
    ///     Err(ListError::ArrayStoreIncompatibility { index: 0, .. })
    /// ));
    /// ```
    pub fn to_array_in<U>(&self, mut target: Vec<Option<U>>) -> Result<Vec<Option<U>>, ListError>
    where
        T: Any,
        U: Any + Clone,
    {
        let len = self.len();
        if target.len() < len {
            target = std::iter::repeat_with(|| None).take(len).collect();
        }
        for (index, (slot, element)) in target.iter_mut().zip(self.iter()).enumerate() {
            *slot = Some(store_as::<U>(index, element)?.clone());
        }
        if target.len() > len {
            target[len] = None;
        }
        Ok(target)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    ///
    /// list.push(0);
    /// list.push(1);
    /// list.push(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// Mutating elements in place is not a structural modification.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    ///
    /// list.push(0);
    /// list.push(1);
    /// list.push(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list.to_array(), vec![10, 11, 12]);
    /// assert_eq!(list.modification_count(), 3);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Wraps the list in a [`SharedList`] so that several fail-fast cursors
    /// can work on it at once.
    pub fn into_shared<'id>(self) -> SharedList<'id, T> {
        SharedList::new(self)
    }
}

fn store_as<U: Any>(index: usize, element: &dyn Any) -> Result<&U, ListError> {
    element
        .downcast_ref::<U>()
        .ok_or(ListError::ArrayStoreIncompatibility {
            index,
            target: type_name::<U>(),
        })
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}
