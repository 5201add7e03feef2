use crate::{ArrayList, ListError};
use std::borrow::Borrow;

/// Operations taking a whole collection as argument.
///
/// A collection argument is an `Option`: passing `None` stands for an absent
/// collection and fails with [`ListError::NullReference`].
impl<T> ArrayList<T> {
    /// Returns `true` if every item of `collection` is contained in the list.
    /// An empty collection is trivially contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::{ArrayList, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = ArrayList::from_iter(["a", "b", "c"]);
    /// assert_eq!(list.contains_all(Some(["c", "a"])), Ok(true));
    /// assert_eq!(list.contains_all(Some(["a", "d"])), Ok(false));
    /// assert_eq!(list.contains_all(Some(Vec::<&str>::new())), Ok(true));
    /// assert_eq!(list.contains_all(None::<Vec<&str>>), Err(ListError::NullReference));
    /// ```
    pub fn contains_all<I>(&self, collection: Option<I>) -> Result<bool, ListError>
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let collection = collection.ok_or(ListError::NullReference)?;
        Ok(collection
            .into_iter()
            .all(|item| self.contains(item.borrow())))
    }

    /// Appends every item of `collection` in iteration order. Returns whether
    /// the list changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// assert_eq!(list.add_all(Some(vec![1, 2])), Ok(true));
    /// assert_eq!(list.add_all(Some(Vec::new())), Ok(false));
    /// assert_eq!(list.to_array(), vec![1, 2]);
    /// ```
    pub fn add_all<I>(&mut self, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = collection
            .ok_or(ListError::NullReference)?
            .into_iter()
            .peekable();
        if items.peek().is_none() {
            return Ok(false);
        }
        items.for_each(|item| self.push(item));
        Ok(true)
    }

    /// Inserts every item of `collection` before `index`, keeping their
    /// iteration order. Returns whether the list changed.
    ///
    /// The index is checked before the collection, so an out of range index
    /// with an absent collection reports [`ListError::IndexOutOfRange`].
    ///
    /// # Complexity
    ///
    /// The buffer is reallocated once, to `max(capacity, len + n)` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = ArrayList::from_iter([1, 5]);
    /// assert_eq!(list.add_all_at(1, Some(2..5)), Ok(true));
    /// assert_eq!(list.to_array(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn add_all_at<I>(&mut self, index: usize, collection: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(index)?;
        let items: Vec<T> = collection
            .ok_or(ListError::NullReference)?
            .into_iter()
            .collect();
        if items.is_empty() {
            return Ok(false);
        }
        let count = items.len();
        self.buffer.splice(index, items);
        self.record_modifications(count);
        Ok(true)
    }

    /// Removes every occurrence of every item of `collection`. Returns whether
    /// the list changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = ArrayList::from_iter(['a', 'a', 'b', 'c']);
    /// assert_eq!(list.remove_all(Some(['a', 'b'])), Ok(true));
    /// assert_eq!(list.to_array(), vec!['c']);
    /// assert_eq!(list.remove_all(Some(['x'])), Ok(false));
    /// ```
    pub fn remove_all<I>(&mut self, collection: Option<I>) -> Result<bool, ListError>
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let collection = collection.ok_or(ListError::NullReference)?;
        let mut modified = false;
        for item in collection {
            modified |= self.remove_all_occurrences(item.borrow());
        }
        Ok(modified)
    }

    /// Removes every element not contained in `collection`. Returns whether
    /// the list changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = ArrayList::from_iter([1, 2, 3, 2, 4]);
    /// assert_eq!(list.retain_all(Some([2, 4, 6])), Ok(true));
    /// assert_eq!(list.to_array(), vec![2, 2, 4]);
    /// assert_eq!(list.retain_all(Some([2, 4])), Ok(false));
    /// ```
    pub fn retain_all<I>(&mut self, collection: Option<I>) -> Result<bool, ListError>
    where
        T: PartialEq + Clone,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let kept: Vec<I::Item> = collection
            .ok_or(ListError::NullReference)?
            .into_iter()
            .collect();
        // Distinct doomed values, in order of first occurrence.
        let mut doomed: Vec<T> = Vec::new();
        for element in self.iter() {
            let is_kept = kept.iter().any(|item| {
                let item: &T = item.borrow();
                item == element
            });
            if !is_kept && !doomed.contains(element) {
                doomed.push(element.clone());
            }
        }
        let mut modified = false;
        for value in &doomed {
            modified |= self.remove_all_occurrences(value);
        }
        Ok(modified)
    }
}
