//! Integration tests for the list-backed sequence representation.
//!
//! `ListSequence` must be observably interchangeable with
//! `ArraySequence`: same operation surface, same results, same
//! failures. These tests replay the shared contract against the linked
//! representation and add checks for the behaviors where the backing
//! differs: O(1) end access after heavy growth at both ends, and
//! chain-level sub-sequencing and concatenation.

use varseq::prelude::*;
use rstest::rstest;

// =============================================================================
// Shared Contract
// =============================================================================

#[rstest]
fn append_prepend_insert_worked_example() {
    let mut sequence = ListSequence::from_slice(&[1, 2, 3, 4, 5]);
    sequence.append(10);
    sequence.prepend(0);
    sequence.insert(99, 2).unwrap();
    let collected: Vec<i32> = sequence.iter().copied().collect();
    assert_eq!(collected, vec![0, 1, 99, 2, 3, 4, 5, 10]);
}

#[rstest]
fn matches_array_sequence_on_same_operations() {
    let mut list = ListSequence::from_slice(&[1, 2, 3]);
    let mut array = ArraySequence::from_slice(&[1, 2, 3]);
    list.append(4);
    array.append(4);
    list.prepend(0);
    array.prepend(0);
    list.insert(9, 2).unwrap();
    array.insert(9, 2).unwrap();
    list.remove(1).unwrap();
    array.remove(1).unwrap();
    let from_list: Vec<i32> = list.iter().copied().collect();
    let from_array: Vec<i32> = array.iter().copied().collect();
    assert_eq!(from_list, from_array);
}

#[rstest]
fn get_past_end_fails() {
    let sequence = ListSequence::from_slice(&[1, 2, 3]);
    assert_eq!(sequence.get(3), Err(IndexOutOfRange { index: 3, len: 3 }));
}

#[rstest]
fn set_overwrites_in_place() {
    let mut sequence = ListSequence::from_slice(&[1, 2, 3]);
    sequence.set(2, 99).unwrap();
    assert_eq!(sequence.get(2), Ok(&99));
}

#[rstest]
fn insert_bounds_match_contract() {
    let mut sequence = ListSequence::from_slice(&[1, 2]);
    sequence.insert(3, 2).unwrap();
    assert_eq!(
        sequence.insert(4, 4),
        Err(IndexOutOfRange { index: 4, len: 3 })
    );
    let collected: Vec<i32> = sequence.iter().copied().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[rstest]
fn remove_interior_head_and_tail() {
    let mut sequence = ListSequence::from_slice(&[0, 1, 2, 3]);
    assert_eq!(sequence.remove(1), Ok(1));
    assert_eq!(sequence.remove(0), Ok(0));
    assert_eq!(sequence.remove(1), Ok(3));
    assert_eq!(sequence.first(), Ok(&2));
    assert_eq!(sequence.last(), Ok(&2));
}

// =============================================================================
// End Access After Growth at Both Ends
// =============================================================================

#[rstest]
fn ends_stay_correct_through_interleaved_growth() {
    let mut sequence = ListSequence::new();
    for value in 0..500 {
        if value % 2 == 0 {
            sequence.append(value);
        } else {
            sequence.prepend(value);
        }
    }
    assert_eq!(sequence.len(), 500);
    assert_eq!(sequence.first(), Ok(&499));
    assert_eq!(sequence.last(), Ok(&498));
}

#[rstest]
fn first_and_last_on_empty_sequence_fail() {
    let sequence: ListSequence<i32> = ListSequence::new();
    assert_eq!(sequence.first(), Err(IndexOutOfRange::empty()));
    assert_eq!(sequence.last(), Err(IndexOutOfRange::empty()));
}

// =============================================================================
// Sub-Sequencing and Concatenation
// =============================================================================

#[rstest]
fn sub_sequence_is_inclusive_and_independent() {
    let original = ListSequence::from_slice(&[0, 1, 2, 3, 4]);
    let mut sub = original.sub_sequence(1, 3).unwrap();
    let collected: Vec<i32> = sub.iter().copied().collect();
    assert_eq!(collected, vec![1, 2, 3]);
    sub.set(0, 99).unwrap();
    assert_eq!(original.get(1), Ok(&1));
}

#[rstest]
#[case(2, 1)]
#[case(0, 5)]
fn sub_sequence_rejects_bad_bounds(#[case] start: usize, #[case] end: usize) {
    let sequence = ListSequence::from_slice(&[0, 1, 2, 3, 4]);
    assert!(sequence.sub_sequence(start, end).is_err());
}

#[rstest]
fn concat_leaves_operands_untouched() {
    let left = ListSequence::from_slice(&[1, 2]);
    let right = ListSequence::from_slice(&[3, 4]);
    let joined = left.concat(&right);
    assert_eq!(joined, ListSequence::from_slice(&[1, 2, 3, 4]));
    assert_eq!(left.len(), 2);
    assert_eq!(right.len(), 2);
}

// =============================================================================
// Transforms over Linked Storage
// =============================================================================

#[rstest]
fn map_filter_reduce_behave_as_on_array() {
    let sequence = ListSequence::from_slice(&[1, 2, 3, 4]);
    assert_eq!(
        sequence.map(|value| value * 10),
        ListSequence::from_slice(&[10, 20, 30, 40])
    );
    assert_eq!(
        sequence.filter(|value| value % 2 == 1),
        ListSequence::from_slice(&[1, 3])
    );
    assert_eq!(sequence.reduce(|total, value| total + value, 0), 10);
}

#[rstest]
fn splice_with_replacement() {
    let sequence = ListSequence::from_slice(&[0, 1, 2, 3, 4]);
    let replacement = ListSequence::from_slice(&[8, 9]);
    let spliced = sequence.splice(-4, 2, Some(&replacement)).unwrap();
    assert_eq!(spliced, ListSequence::from_slice(&[0, 8, 9, 3, 4]));
}

#[rstest]
fn split_returns_one_sub_sequence_per_run() {
    let sequence = ListSequence::from_slice(&[1, 0, 0, 2, 3, 0]);
    let runs = sequence.split(|value| *value == 0);
    assert_eq!(
        runs,
        vec![
            ListSequence::from_slice(&[1]),
            ListSequence::from_slice(&[2, 3]),
        ]
    );
}

// =============================================================================
// Ownership and Operators
// =============================================================================

#[rstest]
fn clone_is_fully_independent() {
    let original = ListSequence::from_slice(&[1, 2, 3]);
    let mut copied = original.clone();
    copied.set(0, 99).unwrap();
    copied.append(4);
    assert_eq!(original, ListSequence::from_slice(&[1, 2, 3]));
}

#[rstest]
fn index_operator_reads_and_writes() {
    let mut sequence = ListSequence::from_slice(&[1, 2, 3]);
    assert_eq!(sequence[2], 3);
    sequence[2] = 30;
    assert_eq!(sequence.get(2), Ok(&30));
}

#[rstest]
#[should_panic(expected = "index 0 out of range for sequence of length 0")]
fn index_operator_panics_on_empty() {
    let sequence: ListSequence<i32> = ListSequence::new();
    let _ = sequence[0];
}

#[rstest]
fn long_sequence_drops_without_overflow() {
    let sequence: ListSequence<u32> = (0..200_000).collect();
    assert_eq!(sequence.len(), 200_000);
    drop(sequence);
}
