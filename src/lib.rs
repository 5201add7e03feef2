//! This crate provides a growable array list with fail-fast cursors,
//! implemented over a contiguous buffer of slots.
//!
//! The [`ArrayList`] accesses and replaces elements at any position in
//! constant time. In compromise, inserting or removing elements at any
//! position takes *O*(*n*) time, since the tail of the list is shifted.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use array_list::ArrayList;
//! use std::iter::FromIterator;
//!
//! let mut list = ArrayList::from_iter([1, 2, 4]);
//!
//! list.insert(2, 3).unwrap(); // insert 3 before 4
//! assert_eq!(list.get(2), Ok(&3));
//! assert_eq!(list, ArrayList::from_iter([1, 2, 3, 4]));
//!
//! assert_eq!(list.remove_at(0), Ok(1)); // the tail shifts left
//! assert_eq!(list.index_of(&4), Some(2));
//!
//! assert!(list.get(3).is_err()); // positional arguments are checked
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!     ArrayList
//! ╔═══════════════╗
//! ║    buffer     ║ ───┐
//! ╟───────────────╢    │         live slots                 spare slots
//! ║ modifications ║    │   ┌─────────────────────┐ ┌───────────────────────┐
//! ╚═══════════════╝    └─→ │ Some │ Some │ Some │ │ None │ None │ ┄ │ None │
//!                          └─────────────────────┘ └───────────────────────┘
//!                            0      1      len-1     len                cap-1
//! ```
//! The `ArrayList` contains:
//! - a buffer of `capacity` slots, of which the first `len` hold the elements
//!   in list order and the others are vacant;
//! - a modification counter, bumped on every structural modification.
//!
//! The buffer doubles when an insertion finds it full, and shrinks to three
//! quarters when its capacity exceeds three times the length, never below the
//! floor capacity (10 by default, see [`BufferConfig`]).
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended, exact-size and fused iterators. They borrow the list, so
//! the borrow checker already rules out modifying the list while iterating.
//!
//! ## Examples
//!
//! ```
//! use array_list::ArrayList;
//! use std::iter::FromIterator;
//!
//! let mut list = ArrayList::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! To modify a list while walking it, possibly from several places at once,
//! wrap it in a [`SharedList`]. A shared list hands out any number of
//! [`ForwardCursor`]s and [`ListCursor`]s, and every access is made through a
//! [`GhostToken`] borrowed just for that access.
//!
//! Each cursor snapshots the modification counter of the list. A cursor that
//! finds the counter changed by anything but itself fails with
//! [`ListError::ConcurrentModification`] instead of working on a shifted list.
//!
//! ## Examples
//!
//! ```
//! use array_list::{ArrayList, GhostToken, ListError};
//! use std::iter::FromIterator;
//!
//! GhostToken::new(|mut token| {
//!     let list = ArrayList::from_iter([1, 2, 3, 4]).into_shared();
//!
//!     let mut evens = list.iterator(&token);
//!     while evens.has_next(&token) {
//!         if evens.next(&token)? % 2 == 1 {
//!             evens.remove(&mut token)?;
//!         }
//!     }
//!     assert_eq!(list.borrow(&token).to_array(), vec![2, 4]);
//!
//!     let mut cursor = list.list_iterator(&token);
//!     let mut stale = list.iterator(&token);
//!     cursor.next(&token)?;
//!     cursor.add(3, &mut token)?; // becomes [2, 3, 4]
//!
//!     assert!(matches!(
//!         stale.next(&token),
//!         Err(ListError::ConcurrentModification { .. })
//!     ));
//!     Ok::<(), ListError>(())
//! })
//! .unwrap();
//! ```
//!
//! # Traits
//!
//! The [`OrderedSequence`], [`Searchable`] and [`BulkMutable`] traits expose
//! the list operations to code that is generic over the list backend.
//!
//! [`ArrayList`]: crate::ArrayList
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`SharedList`]: crate::list::cursor::SharedList
//! [`ForwardCursor`]: crate::list::cursor::ForwardCursor
//! [`ListCursor`]: crate::list::cursor::ListCursor

#[doc(inline)]
pub use config::{BufferConfig, DEFAULT_FLOOR};
#[doc(inline)]
pub use error::ListError;
pub use ghost_cell::GhostToken;
#[doc(inline)]
pub use list::cursor::{ForwardCursor, ListCursor, SharedList};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::ArrayList;
#[doc(inline)]
pub use sequence::{BulkMutable, OrderedSequence, Searchable};

pub mod list;
pub mod sequence;

mod config;
mod error;
