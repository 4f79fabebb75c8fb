//! Property-based tests for ListCursor.

use array_list::{ArrayList, ArrayListError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_forward_walk_matches_snapshot(values: Vec<u32>) {
        let mut list: ArrayList<u32> = values.iter().copied().collect();
        let snapshot = list.to_vec();

        let mut walked = Vec::new();
        let mut cursor = list.cursor();
        while cursor.has_next() {
            walked.push(*cursor.next().unwrap());
        }
        prop_assert!(matches!(cursor.next(), Err(ArrayListError::Exhausted)));
        prop_assert_eq!(walked, snapshot);
    }
}

proptest! {
    #[test]
    fn prop_backward_walk_is_reverse(values: Vec<u32>) {
        let mut list: ArrayList<u32> = values.iter().copied().collect();
        let len = list.len();

        let mut walked = Vec::new();
        let mut cursor = list.cursor_at(len).unwrap();
        while cursor.has_previous() {
            walked.push(*cursor.previous().unwrap());
        }
        prop_assert_eq!(cursor.previous_index(), None);

        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(walked, expected);
    }
}

proptest! {
    #[test]
    fn prop_cursor_filter_matches_retain(values in prop::collection::vec(0u8..10, 0..200), cut in 0u8..10) {
        let mut list: ArrayList<u8> = values.iter().copied().collect();

        let mut cursor = list.cursor();
        while let Ok(&v) = cursor.next() {
            if v < cut {
                cursor.remove().unwrap();
            }
        }

        let mut expected = values.clone();
        expected.retain(|v| *v >= cut);
        prop_assert_eq!(list.to_vec(), expected);
    }
}

proptest! {
    #[test]
    fn prop_insert_before_every_element(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let mut list: ArrayList<i16> = values.iter().copied().collect();

        let mut cursor = list.cursor();
        while cursor.has_next() {
            let v = *cursor.next().unwrap();
            cursor.set(v.wrapping_neg()).unwrap();
            cursor.insert(v).unwrap();
        }

        let expected: Vec<i16> = values.iter().flat_map(|v| [v.wrapping_neg(), *v]).collect();
        prop_assert_eq!(list.len(), values.len() * 2);
        prop_assert_eq!(list.to_vec(), expected);
    }
}
