//! Unit tests for the binary-search routines.
//!
//! Covers full-range and bounded lookup, odd and even lengths, and the
//! insertion-index contract including its tie-break direction.

#![cfg(feature = "search")]

use std::cmp::Ordering;

use veckit::search::{binary_search, binary_search_between, insertion_index};

use rstest::rstest;

fn ascending(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

// =============================================================================
// Lookup
// =============================================================================

#[rstest]
#[case(vec![1, 3, 5, 7, 9], 5, Some(5))]
#[case(vec![1, 3, 5, 7, 9], 4, None)]
#[case(vec![1, 3, 5, 7, 9], 1, Some(1))]
#[case(vec![1, 3, 5, 7, 9], 9, Some(9))]
#[case(vec![1, 3, 5, 7], 7, Some(7))]
#[case(vec![1, 3, 5, 7], 0, None)]
#[case(vec![2], 2, Some(2))]
#[case(vec![2], 3, None)]
#[case(vec![], 1, None)]
fn binary_search_locates_keys(
    #[case] items: Vec<i32>,
    #[case] key: i32,
    #[case] expected: Option<i32>,
) {
    assert_eq!(binary_search(&items, &key, ascending).copied(), expected);
}

#[rstest]
fn binary_search_with_projected_key() {
    #[derive(Debug, PartialEq)]
    struct Account {
        id: u32,
    }
    let accounts = [Account { id: 2 }, Account { id: 5 }, Account { id: 8 }];
    let found = binary_search(&accounts, &5u32, |key, account| key.cmp(&account.id));
    assert_eq!(found, Some(&Account { id: 5 }));
}

#[rstest]
#[case(0, 4, 5, Some(5))]
#[case(1, 3, 1, None)]
#[case(2, 2, 5, Some(5))]
#[case(2, 2, 7, None)]
#[case(3, 1, 5, None)]
#[case(0, 9, 5, None)]
fn binary_search_between_respects_bounds(
    #[case] start: usize,
    #[case] end: usize,
    #[case] key: i32,
    #[case] expected: Option<i32>,
) {
    let items = [1, 3, 5, 7, 9];
    assert_eq!(
        binary_search_between(&items, &key, ascending, start, end).copied(),
        expected
    );
}

// =============================================================================
// Insertion Index
// =============================================================================

#[rstest]
#[case(vec![], 5, 0)]
#[case(vec![1, 3, 5], 0, 0)]
#[case(vec![1, 3, 5], 2, 1)]
#[case(vec![1, 3, 5], 4, 2)]
#[case(vec![1, 3, 5], 6, 3)]
#[case(vec![1, 3, 5], 3, 2)]
#[case(vec![1, 3, 3, 5], 3, 3)]
fn insertion_index_finds_sorted_position(
    #[case] items: Vec<i32>,
    #[case] item: i32,
    #[case] expected: usize,
) {
    assert_eq!(insertion_index(&items, &item, ascending), expected);
}

#[rstest]
fn insertion_index_honors_custom_order() {
    let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());
    let words = ["a", "bb", "dddd"];
    assert_eq!(insertion_index(&words, &"ccc", by_length), 2);
    assert_eq!(insertion_index(&words, &"", by_length), 0);
}
