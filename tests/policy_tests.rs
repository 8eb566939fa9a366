//! Integration tests for the mutation-policy wrappers.
//!
//! `Mutable::instance` must hand back the wrapped sequence itself
//! (the very same object, not a copy), while `Immutable::instance`
//! must hand back a detached deep copy that can never affect the
//! original. Both wrappers otherwise expose the full sequence
//! contract by delegation.

use varseq::prelude::*;
use rstest::rstest;

// =============================================================================
// Mutable: In-Place Policy
// =============================================================================

#[rstest]
fn mutable_instance_is_the_wrapped_sequence_itself() {
    let mut wrapper = Mutable::new(ArraySequence::from_slice(&[1, 2, 3]));
    let handle: *const ArraySequence<i32> = wrapper.instance();
    let direct: *const ArraySequence<i32> = wrapper.sequence();
    assert!(std::ptr::eq(handle, direct));
}

#[rstest]
fn mutation_through_instance_is_visible_in_wrapper() {
    let mut wrapper = Mutable::new(ArraySequence::from_slice(&[1, 2]));
    wrapper.instance().append(3);
    wrapper.instance().prepend(0);
    assert_eq!(wrapper.len(), 4);
    assert_eq!(wrapper.sequence(), &ArraySequence::from_slice(&[0, 1, 2, 3]));
}

#[rstest]
fn mutable_clone_is_a_deep_copy() {
    let mut original = Mutable::new(ListSequence::from_slice(&[1, 2, 3]));
    let copied = original.clone();
    original.instance().append(4);
    assert_eq!(copied.len(), 3);
    assert_eq!(original.len(), 4);
}

// =============================================================================
// Immutable: Copy-On-Write Policy
// =============================================================================

#[rstest]
fn immutable_instance_is_a_detached_copy() {
    let wrapper = Immutable::new(ArraySequence::from_slice(&[1, 2]));
    let mut detached = wrapper.instance();
    detached.append(3);
    detached.set(0, 99).unwrap();
    assert_eq!(wrapper.len(), 2);
    assert_eq!(wrapper.sequence(), &ArraySequence::from_slice(&[1, 2]));
    assert_eq!(detached, ArraySequence::from_slice(&[99, 2, 3]));
}

#[rstest]
fn every_instance_call_yields_a_fresh_copy() {
    let wrapper = Immutable::new(ListSequence::from_slice(&[1]));
    let mut first = wrapper.instance();
    let mut second = wrapper.instance();
    first.append(2);
    second.append(3);
    assert_eq!(first, ListSequence::from_slice(&[1, 2]));
    assert_eq!(second, ListSequence::from_slice(&[1, 3]));
    assert_eq!(wrapper.len(), 1);
}

#[rstest]
fn immutable_transforms_allocate_new_results() {
    let wrapper = Immutable::new(ArraySequence::from_slice(&[1, 2, 3]));
    let doubled = wrapper.map(|value| value * 2);
    assert_eq!(doubled.sequence(), &ArraySequence::from_slice(&[2, 4, 6]));
    assert_eq!(wrapper.sequence(), &ArraySequence::from_slice(&[1, 2, 3]));
}

// =============================================================================
// Delegated Sequence Contract
// =============================================================================

#[rstest]
fn wrappers_expose_the_full_read_surface() {
    let wrapper = Immutable::new(ArraySequence::from_slice(&[5, 6, 7]));
    assert_eq!(wrapper.get(1), Ok(&6));
    assert_eq!(wrapper.first(), Ok(&5));
    assert_eq!(wrapper.last(), Ok(&7));
    assert_eq!(wrapper.try_find(|value| *value > 5), Some(&6));
    let collected: Vec<i32> = wrapper.iter().copied().collect();
    assert_eq!(collected, vec![5, 6, 7]);
}

#[rstest]
fn wrappers_report_the_same_bounds_failures() {
    let mut wrapper = Mutable::new(ListSequence::from_slice(&[1]));
    assert_eq!(wrapper.get(1), Err(IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(
        wrapper.instance().insert(0, 3),
        Err(IndexOutOfRange { index: 3, len: 1 })
    );
}

#[rstest]
fn policy_wrappers_work_over_any_representation() {
    let mut adaptive = Mutable::new(AdaptiveSequence::from_slice(&[1, 2]));
    adaptive.instance().append(3);
    assert_eq!(adaptive.len(), 3);

    let immutable = Immutable::new(AdaptiveSequence::from_slice(&[1, 2]));
    let mut detached = immutable.instance();
    detached.append(3);
    assert_eq!(immutable.len(), 2);
}

#[rstest]
fn wrappers_collect_and_extend() {
    let mut wrapper: Mutable<ArraySequence<i32>> = (0..3).collect();
    wrapper.extend(3..5);
    assert_eq!(wrapper.len(), 5);
    assert_eq!(wrapper.into_inner(), ArraySequence::from_slice(&[0, 1, 2, 3, 4]));
}
