//! Property-based tests for the sequence contract.
//!
//! Every representation must satisfy the same laws:
//!
//! - **Order Law**: iteration yields elements in insertion order
//! - **Size Law**: n appends and m removals net to a size of n - m
//! - **Concat Laws**: length adds, elements concatenate, operands
//!   survive unchanged
//! - **Independence Law**: mutating a clone never touches the original
//! - **Interchangeability**: array- and list-backed sequences produce
//!   identical results for identical operations
//!
//! Using proptest, we generate random element vectors and indices to
//! verify these laws across a wide range of inputs.

use proptest::prelude::*;
use varseq::prelude::*;

// =============================================================================
// Order and Size Laws
// =============================================================================

proptest! {
    /// Order Law for ArraySequence: collecting back out returns the input
    #[test]
    fn prop_array_preserves_insertion_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let sequence: ArraySequence<i32> = values.iter().copied().collect();
        let collected: Vec<i32> = sequence.iter().copied().collect();
        prop_assert_eq!(collected, values);
    }

    /// Order Law for ListSequence
    #[test]
    fn prop_list_preserves_insertion_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let sequence: ListSequence<i32> = values.iter().copied().collect();
        let collected: Vec<i32> = sequence.iter().copied().collect();
        prop_assert_eq!(collected, values);
    }

    /// Order Law for SegmentedChain, across segment boundaries
    #[test]
    fn prop_segmented_preserves_insertion_order(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let chain: SegmentedChain<i32> = values.iter().copied().collect();
        let collected: Vec<i32> = chain.iter().copied().collect();
        prop_assert_eq!(collected, values);
        prop_assert!(chain.segment_lengths().iter().all(|&used| used <= SEGMENT_CAPACITY));
    }

    /// Size Law: appends minus removals
    #[test]
    fn prop_size_nets_out(appends in 1usize..60, removals in 0usize..60) {
        let removals = removals.min(appends);
        let mut sequence = ArraySequence::new();
        for value in 0..appends {
            sequence.append(value);
        }
        for _ in 0..removals {
            sequence.remove(0).unwrap();
        }
        prop_assert_eq!(sequence.len(), appends - removals);
    }

    /// Insert at a valid index places the element exactly there
    #[test]
    fn prop_insert_lands_at_requested_index(
        values in prop::collection::vec(any::<i32>(), 1..50),
        index_seed in any::<usize>(),
    ) {
        let index = index_seed % (values.len() + 1);
        let mut sequence: ListSequence<i32> = values.iter().copied().collect();
        sequence.insert(i32::MIN, index).unwrap();
        prop_assert_eq!(sequence.get(index), Ok(&i32::MIN));
        prop_assert_eq!(sequence.len(), values.len() + 1);
    }
}

// =============================================================================
// Concat Laws
// =============================================================================

proptest! {
    /// Concat length and element laws, both operands unchanged
    #[test]
    fn prop_concat_laws(
        left in prop::collection::vec(any::<i32>(), 0..50),
        right in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let first: ArraySequence<i32> = left.iter().copied().collect();
        let second: ArraySequence<i32> = right.iter().copied().collect();
        let joined = first.concat(&second);

        prop_assert_eq!(joined.len(), left.len() + right.len());
        let mut expected = left.clone();
        expected.extend(right.iter().copied());
        let collected: Vec<i32> = joined.iter().copied().collect();
        prop_assert_eq!(collected, expected);
        prop_assert_eq!(first.len(), left.len());
        prop_assert_eq!(second.len(), right.len());
    }

    /// Concat with the empty sequence is identity on elements
    #[test]
    fn prop_concat_empty_is_identity(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence: ListSequence<i32> = values.iter().copied().collect();
        let empty = ListSequence::new();
        prop_assert_eq!(sequence.concat(&empty), sequence.clone());
        prop_assert_eq!(empty.concat(&sequence), sequence);
    }
}

// =============================================================================
// Independence Law
// =============================================================================

proptest! {
    /// Mutating a clone never touches the original
    #[test]
    fn prop_clone_independence(
        values in prop::collection::vec(any::<i32>(), 1..50),
        replacement in any::<i32>(),
    ) {
        let original: ArraySequence<i32> = values.iter().copied().collect();
        let mut copied = original.clone();
        copied.set(0, replacement).unwrap();
        copied.append(replacement);
        let collected: Vec<i32> = original.iter().copied().collect();
        prop_assert_eq!(collected, values);
    }

    /// Immutable::instance yields copies that never affect the wrapper
    #[test]
    fn prop_immutable_instance_isolation(
        values in prop::collection::vec(any::<i32>(), 1..50),
        replacement in any::<i32>(),
    ) {
        let wrapper = Immutable::new(values.iter().copied().collect::<ListSequence<i32>>());
        let mut detached = wrapper.instance();
        detached.set(0, replacement).unwrap();
        let collected: Vec<i32> = wrapper.iter().copied().collect();
        prop_assert_eq!(collected, values);
    }
}

// =============================================================================
// Interchangeability
// =============================================================================

proptest! {
    /// Array- and list-backed sequences agree on transforms
    #[test]
    fn prop_representations_agree_on_transforms(values in prop::collection::vec(-100i32..100, 0..60)) {
        let array: ArraySequence<i32> = values.iter().copied().collect();
        let list: ListSequence<i32> = values.iter().copied().collect();

        let array_mapped: Vec<i32> = array.map(|value| value.wrapping_mul(3)).iter().copied().collect();
        let list_mapped: Vec<i32> = list.map(|value| value.wrapping_mul(3)).iter().copied().collect();
        prop_assert_eq!(array_mapped, list_mapped);

        let array_filtered: Vec<i32> = array.filter(|value| *value >= 0).iter().copied().collect();
        let list_filtered: Vec<i32> = list.filter(|value| *value >= 0).iter().copied().collect();
        prop_assert_eq!(array_filtered, list_filtered);

        prop_assert_eq!(
            array.reduce(|total: i32, value| total.wrapping_add(*value), 0),
            list.reduce(|total: i32, value| total.wrapping_add(*value), 0)
        );
    }

    /// Split runs agree with the std slice splitter (empties dropped)
    #[test]
    fn prop_split_matches_model(values in prop::collection::vec(0i32..5, 0..60)) {
        let sequence: ArraySequence<i32> = values.iter().copied().collect();
        let runs = sequence.split(|value| *value == 0);
        let collected: Vec<Vec<i32>> = runs
            .iter()
            .map(|run| run.iter().copied().collect())
            .collect();
        let expected: Vec<Vec<i32>> = values
            .split(|value| *value == 0)
            .filter(|run| !run.is_empty())
            .map(<[i32]>::to_vec)
            .collect();
        prop_assert_eq!(collected, expected);
    }

    /// Splice agrees with the Vec model
    #[test]
    fn prop_splice_matches_model(
        values in prop::collection::vec(any::<i32>(), 1..50),
        index_seed in any::<usize>(),
        count_seed in any::<usize>(),
        replacement in prop::collection::vec(any::<i32>(), 0..10),
    ) {
        let index = index_seed % values.len();
        let count = count_seed % (values.len() - index + 1);
        let sequence: ArraySequence<i32> = values.iter().copied().collect();
        let patch: ArraySequence<i32> = replacement.iter().copied().collect();

        let index_isize = isize::try_from(index).unwrap();
        let spliced = sequence.splice(index_isize, count, Some(&patch)).unwrap();

        let mut expected = values.clone();
        expected.splice(index..index + count, replacement.iter().copied());
        let collected: Vec<i32> = spliced.iter().copied().collect();
        prop_assert_eq!(collected, expected);
    }

    /// Both deque designs agree after a random push script
    #[test]
    fn prop_deques_agree(script in prop::collection::vec((any::<bool>(), any::<i32>()), 0..60)) {
        let mut segmented: Deque<i32> = Deque::new();
        let mut over_sequence: SequenceDeque<ArraySequence<i32>> = SequenceDeque::new();
        for (front, value) in &script {
            if *front {
                segmented.push_front(*value);
                over_sequence.push_front(*value);
            } else {
                segmented.push_back(*value);
                over_sequence.push_back(*value);
            }
        }
        let from_segmented: Vec<i32> = segmented.iter().copied().collect();
        let from_over_sequence: Vec<i32> = over_sequence.iter().copied().collect();
        prop_assert_eq!(from_segmented, from_over_sequence);
    }
}
