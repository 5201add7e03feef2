//! Property-based tests comparing `ArrayList` against a `Vec` model.

use array_list::{ArrayList, GhostToken, DEFAULT_FLOOR};
use proptest::prelude::*;

// =============================================================================
// Test helpers
// =============================================================================

/// A random list operation. Positions are percentages of the current length.
#[derive(Clone, Debug)]
enum ListOp {
    Push(u8),
    Insert { pos_pct: f64, value: u8 },
    RemoveAt { pos_pct: f64 },
    RemoveFirst(u8),
    RemoveAllOccurrences(u8),
    Set { pos_pct: f64, value: u8 },
    AddAllAt { pos_pct: f64, values: Vec<u8> },
    Clear,
}

fn arbitrary_list_op() -> impl Strategy<Value = ListOp> {
    // Small values so that searches hit.
    prop_oneof![
        6 => (0u8..8).prop_map(ListOp::Push),
        3 => (0.0..=1.0f64, 0u8..8).prop_map(|(pos_pct, value)| ListOp::Insert { pos_pct, value }),
        4 => (0.0..=1.0f64).prop_map(|pos_pct| ListOp::RemoveAt { pos_pct }),
        2 => (0u8..8).prop_map(ListOp::RemoveFirst),
        1 => (0u8..8).prop_map(ListOp::RemoveAllOccurrences),
        2 => (0.0..=1.0f64, 0u8..8).prop_map(|(pos_pct, value)| ListOp::Set { pos_pct, value }),
        1 => (0.0..=1.0f64, prop::collection::vec(0u8..8, 0..30))
            .prop_map(|(pos_pct, values)| ListOp::AddAllAt { pos_pct, values }),
        1 => Just(ListOp::Clear),
    ]
}

fn position(pos_pct: f64, len: usize) -> usize {
    ((pos_pct * len as f64) as usize).min(len)
}

/// The reference behavior: a `Vec` plus the capacity and counter rules.
struct Model {
    elements: Vec<u8>,
    capacity: usize,
    modification_count: usize,
}

impl Model {
    fn new() -> Self {
        Self {
            elements: Vec::new(),
            capacity: DEFAULT_FLOOR,
            modification_count: 0,
        }
    }

    fn reserve_one(&mut self) {
        if self.elements.len() == self.capacity {
            self.capacity *= 2;
        }
    }

    fn shrink(&mut self) {
        if self.capacity > DEFAULT_FLOOR && self.capacity > 3 * self.elements.len() {
            self.capacity = ((self.capacity * 3 + 2) / 4).max(DEFAULT_FLOOR);
        }
    }

    fn remove_at(&mut self, index: usize) {
        self.elements.remove(index);
        self.modification_count += 1;
        self.shrink();
    }

    fn apply(&mut self, op: &ListOp) {
        let len = self.elements.len();
        match op {
            ListOp::Push(value) => {
                self.reserve_one();
                self.elements.push(*value);
                self.modification_count += 1;
            }
            ListOp::Insert { pos_pct, value } => {
                self.reserve_one();
                self.elements.insert(position(*pos_pct, len), *value);
                self.modification_count += 1;
            }
            ListOp::RemoveAt { pos_pct } => {
                if len > 0 {
                    self.remove_at(position(*pos_pct, len - 1));
                }
            }
            ListOp::RemoveFirst(value) => {
                if let Some(index) = self.elements.iter().position(|e| e == value) {
                    self.remove_at(index);
                }
            }
            ListOp::RemoveAllOccurrences(value) => {
                self.elements.retain(|e| e != value);
                self.modification_count += len - self.elements.len();
                self.shrink();
            }
            ListOp::Set { pos_pct, value } => {
                if len > 0 {
                    self.elements[position(*pos_pct, len - 1)] = *value;
                }
            }
            ListOp::AddAllAt { pos_pct, values } => {
                if !values.is_empty() {
                    let index = position(*pos_pct, len);
                    self.capacity = self.capacity.max(len + values.len());
                    self.elements.splice(index..index, values.iter().copied());
                    self.modification_count += values.len();
                }
            }
            ListOp::Clear => {
                self.elements.clear();
                self.capacity = self.capacity.min(DEFAULT_FLOOR);
                self.modification_count += 1;
            }
        }
    }
}

fn apply(list: &mut ArrayList<u8>, op: &ListOp) {
    let len = list.len();
    match op {
        ListOp::Push(value) => list.push(*value),
        ListOp::Insert { pos_pct, value } => {
            list.insert(position(*pos_pct, len), *value).unwrap();
        }
        ListOp::RemoveAt { pos_pct } => {
            if len > 0 {
                list.remove_at(position(*pos_pct, len - 1)).unwrap();
            } else {
                assert!(list.remove_at(0).is_err());
            }
        }
        ListOp::RemoveFirst(value) => {
            list.remove_first(value);
        }
        ListOp::RemoveAllOccurrences(value) => {
            list.remove_all_occurrences(value);
        }
        ListOp::Set { pos_pct, value } => {
            if len > 0 {
                list.set(position(*pos_pct, len - 1), *value).unwrap();
            }
        }
        ListOp::AddAllAt { pos_pct, values } => {
            let changed = list
                .add_all_at(position(*pos_pct, len), Some(values.clone()))
                .unwrap();
            assert_eq!(changed, !values.is_empty());
        }
        ListOp::Clear => list.clear(),
    }
}

// =============================================================================
// Model properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Contents, capacity and the modification counter follow the model
    /// after every operation.
    #[test]
    fn list_follows_model(ops in prop::collection::vec(arbitrary_list_op(), 1..120)) {
        let mut list = ArrayList::new();
        let mut model = Model::new();
        for op in &ops {
            apply(&mut list, op);
            model.apply(op);
            prop_assert_eq!(list.to_array(), model.elements.clone());
            prop_assert_eq!(list.capacity(), model.capacity);
            prop_assert_eq!(list.modification_count(), model.modification_count);
            prop_assert!(list.len() <= list.capacity());
        }
    }

    /// `index_of` and `last_index_of` agree with a linear scan.
    #[test]
    fn search_matches_scan(
        values in prop::collection::vec(0u8..6, 0..40),
        needle in 0u8..6,
    ) {
        let list: ArrayList<u8> = values.iter().copied().collect();
        prop_assert_eq!(list.index_of(&needle), values.iter().position(|v| *v == needle));
        prop_assert_eq!(list.last_index_of(&needle), values.iter().rposition(|v| *v == needle));
        prop_assert_eq!(list.contains(&needle), values.contains(&needle));
    }

    /// `remove_all` and `retain_all` match `Vec::retain`.
    #[test]
    fn bulk_removal_matches_retain(
        values in prop::collection::vec(0u8..10, 0..60),
        doomed in prop::collection::vec(0u8..10, 0..5),
    ) {
        let mut list: ArrayList<u8> = values.iter().copied().collect();
        let mut expected = values.clone();
        expected.retain(|v| !doomed.contains(v));
        let changed = list.remove_all(Some(&doomed)).unwrap();
        prop_assert_eq!(changed, expected.len() != values.len());
        prop_assert_eq!(list.to_array(), expected);

        let mut list: ArrayList<u8> = values.iter().copied().collect();
        let mut expected = values.clone();
        expected.retain(|v| doomed.contains(v));
        let changed = list.retain_all(Some(&doomed)).unwrap();
        prop_assert_eq!(changed, expected.len() != values.len());
        prop_assert_eq!(list.to_array(), expected);
    }

    /// Removing through a forward cursor matches `Vec::retain`, and the
    /// cursor never trips over its own removals.
    #[test]
    fn cursor_removal_matches_retain(
        values in prop::collection::vec(0u8..10, 0..60),
        threshold in 0u8..10,
    ) {
        let mut expected = values.clone();
        expected.retain(|v| *v >= threshold);

        let (actual, visited) = GhostToken::new(|mut token| {
            let list: ArrayList<u8> = values.iter().copied().collect();
            let list = list.into_shared();
            let mut cursor = list.iterator(&token);
            let mut visited = 0;
            while cursor.has_next(&token) {
                let value = *cursor.next(&token).unwrap();
                visited += 1;
                if value < threshold {
                    prop_assert_eq!(cursor.remove(&mut token), Ok(value));
                }
            }
            Ok((list.into_inner().to_array(), visited))
        })?;
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(visited, values.len());
    }

    /// A list cursor walking backward from the end sees the reversed list.
    #[test]
    fn list_cursor_walks_backward(values in prop::collection::vec(any::<u8>(), 0..40)) {
        let reversed = GhostToken::new(|token| {
            let list: ArrayList<u8> = values.iter().copied().collect();
            let list = list.into_shared();
            let len = list.borrow(&token).len();
            let mut cursor = list.list_iterator_at(len, &token).unwrap();
            let mut reversed = Vec::new();
            while cursor.has_previous() {
                reversed.push(*cursor.previous(&token).unwrap());
            }
            reversed
        });
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(reversed, expected);
    }
}
