use crate::ArrayList;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::slice;
use std::vec;

/// An iterator over the elements of an `ArrayList`.
///
/// The `Iter` borrows the list immutably, so the list cannot be modified
/// while it is alive, and it does not need to check the modification
/// counter. Use a [`ForwardCursor`] to interleave iteration and
/// modification.
///
/// # Examples
///
/// ```compile_fail
/// use array_list::ArrayList;
/// use std::iter::FromIterator;
///
/// let mut list = ArrayList::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push(4);
/// println!("{:?}", iter.next());
/// ```
///
/// [`ForwardCursor`]: crate::ForwardCursor
pub struct Iter<'a, T: 'a> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a ArrayList<T>) -> Self {
        Self {
            slots: list.buffer().live().iter(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for element in self.slots.as_slice().iter().flatten() {
            f.field(element);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_ref()
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of an `ArrayList`.
///
/// `ArrayList` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use array_list::ArrayList;
/// use std::iter::FromIterator;
///
/// let mut list = ArrayList::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.get(0));
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut ArrayList<T>) -> Self {
        Self {
            slots: list.buffer.live_mut().iter_mut(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        for element in self.slots.as_slice().iter().flatten() {
            f.field(element);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_mut()
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of an `ArrayList`.
///
/// This `struct` is created by the [`into_iter`] method on [`ArrayList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: ArrayList::into_iter
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IntoIter");
        for element in self.slots.as_slice().iter().flatten() {
            f.field(element);
        }
        f.finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.buffer.into_live().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::ArrayList;
    use pretty_assertions::assert_eq;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident $(, $REV:ident)?) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = ArrayList::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = list.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )?.enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);

                    let mut iter = list.$ITER() $( .$REV() )?;
                    for item in vec.$ITER() $( .$REV() )?.take(mid) {
                        assert_eq!(iter.next(), Some(item));
                    }
                    let mut iter = iter.rev();
                    for (i, item) in vec.$ITER() $( .$REV() )?.skip(mid).rev().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - mid - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                }
            };
        }
        test_iter!(forward, iter);
        test_iter!(forward_mut, iter_mut);
        test_iter!(backward, iter, rev);
        test_iter!(backward_mut, iter_mut, rev);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            forward(input.clone(), mid);
            forward_mut(input.clone(), mid);
            backward(input.clone(), mid);
            backward_mut(input, mid);
        }
        test_case(0..25, 25);
        test_case(0..25, 11);
        test_case(0..10, 5);
        test_case(0..10, 0);
        test_case(0..2, 1);
        test_case(0..1, 1);
        test_case(0..0, 0);
    }

    #[test]
    fn into_iter() {
        let list = ArrayList::from_iter(vec![String::from("a"), String::from("b"), String::from("c")]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(format!("{:?}", iter), "IntoIter(\"b\")");
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        // Spare capacity does not leak into the owning iterator.
        let mut list = ArrayList::with_capacity(64).unwrap();
        list.push(1);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn iter_debug_and_last() {
        let mut list = ArrayList::from_iter([1, 2, 3]);
        assert_eq!(format!("{:?}", list.iter()), "Iter(1, 2, 3)");
        assert_eq!(format!("{:?}", list.iter_mut()), "IterMut(1, 2, 3)");
        assert_eq!(list.iter().last(), Some(&3));
        assert_eq!(list.iter_mut().last(), Some(&mut 3));
    }

    #[test]
    fn extend_by_reference() {
        let mut list = ArrayList::from_iter([1, 2]);
        let more = [3, 4];
        list.extend(&more);
        for element in &mut list {
            *element *= 2;
        }
        let doubled: Vec<i32> = (&list).into_iter().copied().collect();
        assert_eq!(doubled, vec![2, 4, 6, 8]);
    }
}
