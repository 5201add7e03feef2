use crate::{ArrayList, ListError};
use ghost_cell::{GhostCell, GhostToken};
use std::fmt;
use tracing::debug;

const TARGET: &str = module_path!();

/// An `ArrayList` that several cursors can read and modify at once.
///
/// The list lives in a [`GhostCell`] branded by `'id`. Cursors only keep a
/// shared reference to the `SharedList`; every access goes through the
/// matching [`GhostToken`], borrowed immutably to read and mutably to write.
/// Borrowing the token for each single operation is what lets two cursors
/// over the same list coexist, and the modification counter of the list is
/// what makes each cursor notice the structural changes made by the other.
///
/// # Examples
///
/// ```
/// use array_list::{ArrayList, GhostToken, ListError};
/// use std::iter::FromIterator;
///
/// GhostToken::new(|mut token| {
///     let list = ArrayList::from_iter([1, 2]).into_shared();
///     let mut first = list.iterator(&token);
///     let mut second = list.iterator(&token);
///
///     assert_eq!(first.next(&token), Ok(&1));
///     assert_eq!(first.remove(&mut token), Ok(1));
///
///     assert_eq!(
///         second.next(&token),
///         Err(ListError::ConcurrentModification { expected: 2, actual: 3 })
///     );
/// });
/// ```
pub struct SharedList<'id, T> {
    cell: GhostCell<'id, ArrayList<T>>,
}

impl<'id, T> SharedList<'id, T> {
    /// Wrap `list` in a cell branded by `'id`.
    pub fn new(list: ArrayList<T>) -> Self {
        Self {
            cell: GhostCell::new(list),
        }
    }

    /// Borrow the list immutably.
    pub fn borrow<'a>(&'a self, token: &'a GhostToken<'id>) -> &'a ArrayList<T> {
        self.cell.borrow(token)
    }

    /// Borrow the list mutably.
    ///
    /// Structural modifications made through this borrow invalidate every
    /// cursor over the list.
    pub fn borrow_mut<'a>(&'a self, token: &'a mut GhostToken<'id>) -> &'a mut ArrayList<T> {
        self.cell.borrow_mut(token)
    }

    /// Access the list through a unique borrow, without a token.
    pub fn get_mut(&mut self) -> &mut ArrayList<T> {
        self.cell.get_mut()
    }

    /// Unwrap the list.
    pub fn into_inner(self) -> ArrayList<T> {
        self.cell.into_inner()
    }

    /// Create a forward cursor before the first element.
    pub fn iterator<'a>(&'a self, token: &GhostToken<'id>) -> ForwardCursor<'a, 'id, T> {
        ForwardCursor::new(self, token)
    }

    /// Create a bidirectional cursor before the first element.
    pub fn list_iterator<'a>(&'a self, token: &GhostToken<'id>) -> ListCursor<'a, 'id, T> {
        ListCursor::new(self, token)
    }

    /// Create a bidirectional cursor positioned before the element at
    /// `index`, where `index <= len`.
    ///
    /// The cursor gets there by stepping forward `index` times, so when
    /// `index > 0` the element at `index - 1` counts as the last returned
    /// one and may be removed or replaced right away.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::{ArrayList, GhostToken, ListError};
    /// use std::iter::FromIterator;
    ///
    /// GhostToken::new(|mut token| {
    ///     let list = ArrayList::from_iter(['a', 'b', 'c']).into_shared();
    ///
    ///     let mut cursor = list.list_iterator_at(2, &token).unwrap();
    ///     assert_eq!(cursor.next_index(), 2);
    ///     assert_eq!(cursor.set('B', &mut token), Ok('b'));
    ///     assert_eq!(cursor.next(&token), Ok(&'c'));
    ///
    ///     assert!(matches!(
    ///         list.list_iterator_at(4, &token),
    ///         Err(ListError::IndexOutOfRange { index: 4, len: 3 })
    ///     ));
    /// });
    /// ```
    pub fn list_iterator_at<'a>(
        &'a self,
        index: usize,
        token: &GhostToken<'id>,
    ) -> Result<ListCursor<'a, 'id, T>, ListError> {
        let len = self.borrow(token).len();
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        let mut cursor = self.list_iterator(token);
        for _ in 0..index {
            cursor.next(token)?;
        }
        Ok(cursor)
    }

    /// Call `f` on a copy of every element in order.
    ///
    /// The token is handed to `f`, which may modify the list through it, but
    /// the walk then stops with [`ListError::ConcurrentModification`] as soon
    /// as the structural change is observed.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::{ArrayList, GhostToken, ListError};
    /// use std::iter::FromIterator;
    ///
    /// GhostToken::new(|mut token| {
    ///     let list = ArrayList::from_iter([1, 2, 3]).into_shared();
    ///
    ///     let mut sum = 0;
    ///     list.for_each(|value, _| sum += value, &mut token).unwrap();
    ///     assert_eq!(sum, 6);
    ///
    ///     let result = list.for_each(
    ///         |value, token| {
    ///             list.borrow_mut(token).remove_first(&value);
    ///         },
    ///         &mut token,
    ///     );
    ///     assert!(matches!(result, Err(ListError::ConcurrentModification { .. })));
    /// });
    /// ```
    pub fn for_each<F>(&self, f: F, token: &mut GhostToken<'id>) -> Result<(), ListError>
    where
        T: Clone,
        F: FnMut(T, &mut GhostToken<'id>),
    {
        self.iterator(token).for_each_remaining(f, token)
    }
}

impl<'id, T> From<ArrayList<T>> for SharedList<'id, T> {
    fn from(list: ArrayList<T>) -> Self {
        Self::new(list)
    }
}

/// A fail-fast forward cursor over a [`SharedList`].
///
/// The cursor sits between two elements: `position` is the index of the
/// element the next call to [`next`](ForwardCursor::next) returns. It keeps
/// a snapshot of the modification counter and fails with
/// [`ListError::ConcurrentModification`] once the list was structurally
/// modified by anything but the cursor itself.
pub struct ForwardCursor<'a, 'id, T> {
    list: &'a SharedList<'id, T>,
    position: usize,
    last_returned: Option<usize>,
    allow_remove_or_set: bool,
    expected_modification_count: usize,
}

/// A fail-fast bidirectional cursor over a [`SharedList`].
///
/// In addition to the forward operations, a `ListCursor` can step backward,
/// replace the last returned element and insert at its position.
///
/// # Examples
///
/// ```
/// use array_list::{ArrayList, GhostToken};
/// use std::iter::FromIterator;
///
/// GhostToken::new(|mut token| {
///     let list = ArrayList::from_iter(["a", "c"]).into_shared();
///     let mut cursor = list.list_iterator(&token);
///
///     assert_eq!(cursor.next(&token), Ok(&"a"));
///     cursor.add("b", &mut token).unwrap();
///     assert_eq!(cursor.next(&token), Ok(&"c"));
///     assert_eq!(cursor.previous(&token), Ok(&"c"));
///     assert_eq!(cursor.previous(&token), Ok(&"b"));
///
///     assert_eq!(list.borrow(&token).to_array(), vec!["a", "b", "c"]);
/// });
/// ```
pub struct ListCursor<'a, 'id, T> {
    list: &'a SharedList<'id, T>,
    position: usize,
    last_returned: Option<usize>,
    allow_remove_or_set: bool,
    expected_modification_count: usize,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, 'id, T> $CURSOR<'a, 'id, T> {
            pub(crate) fn new(list: &'a SharedList<'id, T>, token: &GhostToken<'id>) -> Self {
                let expected_modification_count = list.borrow(token).modification_count();
                Self {
                    list,
                    position: 0,
                    last_returned: None,
                    allow_remove_or_set: false,
                    expected_modification_count,
                }
            }

            fn check_for_comodification(&self, list: &ArrayList<T>) -> Result<(), ListError> {
                let actual = list.modification_count();
                if actual != self.expected_modification_count {
                    debug!(
                        target: TARGET,
                        expected = self.expected_modification_count,
                        actual,
                        "{} detected a concurrent modification",
                        stringify!($CURSOR),
                    );
                    return Err(ListError::ConcurrentModification {
                        expected: self.expected_modification_count,
                        actual,
                    });
                }
                Ok(())
            }

            fn eligible_index(&self, operation: &'static str) -> Result<usize, ListError> {
                match self.last_returned {
                    Some(index) if self.allow_remove_or_set => Ok(index),
                    _ => Err(ListError::IllegalState(operation)),
                }
            }
        }

        impl<'a, 'id, T> $CURSOR<'a, 'id, T> {
            /// Returns `true` if a following element exists.
            ///
            /// This is a pure position query and does not check the
            /// modification counter.
            pub fn has_next(&self, token: &GhostToken<'id>) -> bool {
                self.position < self.list.borrow(token).len()
            }

            /// Returns the following element and steps over it.
            ///
            /// Fails with [`ListError::ConcurrentModification`] if the list
            /// was structurally modified behind the cursor, or with
            /// [`ListError::NoSuchElement`] at the end of the list.
            pub fn next<'t>(&mut self, token: &'t GhostToken<'id>) -> Result<&'t T, ListError>
            where
                'a: 't,
            {
                let list = self.list;
                let list = list.borrow(token);
                self.check_for_comodification(list)?;
                let element = list
                    .get(self.position)
                    .map_err(|_| ListError::NoSuchElement)?;
                self.last_returned = Some(self.position);
                self.position += 1;
                self.allow_remove_or_set = true;
                Ok(element)
            }

            /// Removes the last returned element and returns it.
            ///
            /// Allowed once per successful `next` or `previous`. The cursor
            /// stays in front of the element that followed the removed one,
            /// and keeps working: only the other cursors over the list are
            /// invalidated.
            pub fn remove(&mut self, token: &mut GhostToken<'id>) -> Result<T, ListError> {
                let index = self.eligible_index("`remove` requires a preceding `next` or `previous`")?;
                let list = self.list.borrow_mut(token);
                self.check_for_comodification(list)?;
                let removed = list.remove_at(index)?;
                if index < self.position {
                    self.position = index;
                }
                self.position = self.position.min(list.len());
                self.last_returned = None;
                self.allow_remove_or_set = false;
                self.expected_modification_count = list.modification_count();
                Ok(removed)
            }

            /// Calls `f` on a copy of every remaining element, handing the
            /// token over to it.
            ///
            /// The counter is checked before every step, so a structural
            /// modification made by `f` ends the walk with
            /// [`ListError::ConcurrentModification`], even after the last
            /// element.
            pub fn for_each_remaining<F>(
                &mut self,
                mut f: F,
                token: &mut GhostToken<'id>,
            ) -> Result<(), ListError>
            where
                T: Clone,
                F: FnMut(T, &mut GhostToken<'id>),
            {
                loop {
                    let list = self.list.borrow(token);
                    self.check_for_comodification(list)?;
                    if self.position >= list.len() {
                        return Ok(());
                    }
                    let element = self.next(token)?.clone();
                    f(element, &mut *token);
                }
            }
        }

        impl<'a, 'id, T> fmt::Debug for $CURSOR<'a, 'id, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("position", &self.position)
                    .field("last_returned", &self.last_returned)
                    .field("allow_remove_or_set", &self.allow_remove_or_set)
                    .field("expected_modification_count", &self.expected_modification_count)
                    .finish()
            }
        }
    };
}

impl_cursor!(ForwardCursor);
impl_cursor!(ListCursor);

impl<'a, 'id, T> ListCursor<'a, 'id, T> {
    /// Returns `true` if a preceding element exists.
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Returns the index of the element a call to `next` would return.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Returns the index of the element a call to `previous` would return,
    /// or `None` at the front of the list.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Steps back over the preceding element and returns it.
    pub fn previous<'t>(&mut self, token: &'t GhostToken<'id>) -> Result<&'t T, ListError>
    where
        'a: 't,
    {
        let list = self.list;
        let list = list.borrow(token);
        self.check_for_comodification(list)?;
        let index = self.position.checked_sub(1).ok_or(ListError::NoSuchElement)?;
        let element = list.get(index).map_err(|_| ListError::NoSuchElement)?;
        self.position = index;
        self.last_returned = Some(index);
        self.allow_remove_or_set = true;
        Ok(element)
    }

    /// Replaces the last returned element and returns the old one.
    ///
    /// This is not a structural modification, so other cursors stay valid.
    pub fn set(&mut self, value: T, token: &mut GhostToken<'id>) -> Result<T, ListError> {
        let index = self.eligible_index("`set` requires a preceding `next` or `previous`")?;
        let list = self.list.borrow_mut(token);
        self.check_for_comodification(list)?;
        list.set(index, value)
    }

    /// Inserts `value` in front of the cursor, so that a following `next`
    /// is unaffected and a following `previous` returns `value`.
    ///
    /// Adding to an empty list leaves the cursor in front of the new
    /// element. Either way, `remove` and `set` are disabled until the next
    /// step.
    pub fn add(&mut self, value: T, token: &mut GhostToken<'id>) -> Result<(), ListError> {
        self.allow_remove_or_set = false;
        let list = self.list.borrow_mut(token);
        self.check_for_comodification(list)?;
        if list.is_empty() {
            list.push(value);
            self.position = 0;
        } else {
            list.insert(self.position, value)?;
            self.position += 1;
            self.last_returned = self.last_returned.map(|index| index + 1);
        }
        self.expected_modification_count = list.modification_count();
        Ok(())
    }
}
