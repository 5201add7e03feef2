use tracing::trace;

const TARGET: &str = module_path!();

/// Capacity multiplier applied when an insertion finds the buffer full.
const GROWTH_FACTOR: usize = 2;

/// A buffer is sparse once its capacity exceeds `SPARSITY * len`.
const SPARSITY: usize = 3;

/// The contiguous slot storage behind an [`ArrayList`].
///
/// Slots `[0, len)` are `Some` and hold the live elements in list order;
/// slots `[len, capacity)` are `None`. Every reallocation moves the live
/// elements into a freshly allocated slot array, so the old and the new
/// arrays are never observable at the same time.
///
/// [`ArrayList`]: crate::ArrayList
pub(crate) struct Buffer<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    floor: usize,
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// `round(capacity * 0.75)`, rounding halves up, without overflowing.
fn shrunk_capacity(capacity: usize) -> usize {
    capacity / 4 * 3 + (capacity % 4 * 3 + 2) / 4
}

impl<T> Buffer<T> {
    pub(crate) fn new(capacity: usize, floor: usize) -> Self {
        Self {
            slots: vacant_slots(capacity),
            len: 0,
            floor,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn floor(&self) -> usize {
        self.floor
    }

    /// The live slots, all of them `Some`.
    #[inline]
    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    #[inline]
    pub(crate) fn live_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots[..self.len]
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.live().get(index)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.live_mut().get_mut(index)?.as_mut()
    }

    /// Replace the live element at `index` and return the old one, or return
    /// `None` without writing if `index` is not live.
    pub(crate) fn replace(&mut self, index: usize, value: T) -> Option<T> {
        self.live_mut().get_mut(index)?.replace(value)
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len, "reallocation would drop live slots");
        let len = self.len;
        let mut slots = vacant_slots(capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..len].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
    }

    /// Double the capacity. Called when an insertion needs one more slot
    /// than available.
    pub(crate) fn grow(&mut self) {
        let from = self.capacity();
        let to = from.saturating_mul(GROWTH_FACTOR).max(1);
        self.reallocate(to);
        trace!(target: TARGET, from, to, len = self.len, "grew buffer");
    }

    /// Shrink a sparse buffer to three quarters of its capacity, never below
    /// the floor. Returns whether a reallocation happened.
    pub(crate) fn shrink(&mut self) -> bool {
        let from = self.capacity();
        if from <= self.floor || from <= SPARSITY.saturating_mul(self.len) {
            return false;
        }
        let to = shrunk_capacity(from).max(self.floor);
        if to >= from {
            return false;
        }
        self.reallocate(to);
        trace!(target: TARGET, from, to, len = self.len, "shrank buffer");
        true
    }

    pub(crate) fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting the tail right by one.
    ///
    /// The caller checks `index <= len`.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        if self.len == self.capacity() {
            self.grow();
        }
        // The vacant slot at `len` rotates down to `index`.
        let len = self.len;
        self.slots[index..=len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
    }

    /// Remove the element at `index`, shifting the tail left by one, or
    /// return `None` if `index` is not live. Never shrinks.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;
        let value = self.slots[index].take();
        self.slots[index..len].rotate_left(1);
        self.len -= 1;
        value
    }

    /// Splice `items` in before `index` with a single reallocation to
    /// `max(capacity, len + items.len())` slots.
    ///
    /// The caller checks `index <= len`.
    pub(crate) fn splice(&mut self, index: usize, items: Vec<T>) {
        debug_assert!(index <= self.len);
        let count = items.len();
        let len = self.len;
        let from = self.capacity();
        let to = from.max(len + count);
        let mut slots = vacant_slots(to);
        let (head, tail) = self.slots[..len].split_at_mut(index);
        let moved = head
            .iter_mut()
            .map(Option::take)
            .chain(items.into_iter().map(Some))
            .chain(tail.iter_mut().map(Option::take));
        for (dst, src) in slots.iter_mut().zip(moved) {
            *dst = src;
        }
        self.slots = slots;
        self.len += count;
        trace!(target: TARGET, from, to, count, index, "spliced into buffer");
    }

    /// Drop every live element and shrink straight to the floor.
    pub(crate) fn clear(&mut self) {
        let from = self.capacity();
        if from > self.floor {
            self.slots = vacant_slots(self.floor);
            trace!(target: TARGET, from, to = self.floor, "cleared buffer");
        } else {
            self.live_mut().iter_mut().for_each(|slot| *slot = None);
        }
        self.len = 0;
    }

    /// Consume the buffer, keeping only the live slots.
    pub(crate) fn into_live(self) -> Vec<Option<T>> {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);
        slots
    }
}
