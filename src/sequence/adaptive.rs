//! Size-adaptive sequence representation.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::Result;
use crate::storage::LinkedChainIterator;

use super::{ArraySequence, ListSequence, Sequence};

/// Size at which an array-backed [`AdaptiveSequence`] migrates to a
/// list-backed representation.
pub const ADAPTIVE_SWITCH_THRESHOLD: usize = 200;

/// The currently active representation.
#[derive(Clone)]
enum Representation<T> {
    Array(ArraySequence<T>),
    List(ListSequence<T>),
}

/// A sequence that selects its own representation as it grows.
///
/// Starts array-backed. Before every `append`/`prepend`/`insert`, if
/// the active representation is array-backed and already holds
/// [`ADAPTIVE_SWITCH_THRESHOLD`] elements, every element migrates (in
/// order) into a freshly built list-backed representation,
/// the array is discarded, and the mutation lands on the list. All
/// other operations delegate unchanged to whichever representation is
/// active, so callers see one uniform [`Sequence`] contract.
///
/// The switch is one-directional by design: once list-backed, the
/// sequence never reverts to array-backed, even if removals later
/// shrink it below the threshold. (A policy with reverse migration
/// would need hysteresis bounds in both directions to avoid
/// thrashing; this structure deliberately keeps the simpler rule.)
///
/// Transforms and sub-sequences return fresh `AdaptiveSequence`s that
/// restart array-backed: a new collection begins in the initial policy
/// state.
///
/// # Examples
///
/// ```rust
/// use varseq::prelude::*;
///
/// let mut sequence = AdaptiveSequence::new();
/// for value in 0..201 {
///     sequence.append(value);
/// }
/// assert!(sequence.is_list_backed());
/// ```
#[derive(Clone)]
pub struct AdaptiveSequence<T> {
    representation: Representation<T>,
}

impl<T> AdaptiveSequence<T> {
    /// Creates an empty, array-backed sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            representation: Representation::Array(ArraySequence::new()),
        }
    }

    /// Returns `true` while the sequence is still array-backed.
    #[inline]
    #[must_use]
    pub const fn is_array_backed(&self) -> bool {
        matches!(self.representation, Representation::Array(_))
    }

    /// Returns `true` once the sequence has migrated to the
    /// list-backed representation.
    #[inline]
    #[must_use]
    pub const fn is_list_backed(&self) -> bool {
        matches!(self.representation, Representation::List(_))
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> AdaptiveSequenceIterator<'_, T> {
        match &self.representation {
            Representation::Array(array) => AdaptiveSequenceIterator::Array(array.iter()),
            Representation::List(list) => AdaptiveSequenceIterator::List(list.iter()),
        }
    }
}

impl<T: Clone> AdaptiveSequence<T> {
    /// Creates an array-backed sequence holding a copy of `items`.
    ///
    /// Batch construction never migrates, whatever the batch size; the
    /// threshold is checked on the next mutation.
    #[inline]
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            representation: Representation::Array(ArraySequence::from_slice(items)),
        }
    }

    /// Migrates to the list representation when the array one has
    /// reached the switch threshold. The old representation is fully
    /// consumed.
    fn migrate_if_due(&mut self) {
        if let Representation::Array(array) = &mut self.representation {
            if array.len() >= ADAPTIVE_SWITCH_THRESHOLD {
                let migrated: ListSequence<T> = std::mem::take(array).into_iter().collect();
                self.representation = Representation::List(migrated);
            }
        }
    }
}

impl<T: Clone> Sequence for AdaptiveSequence<T> {
    type Item = T;

    fn len(&self) -> usize {
        match &self.representation {
            Representation::Array(array) => array.len(),
            Representation::List(list) => list.len(),
        }
    }

    fn get(&self, index: usize) -> Result<&T> {
        match &self.representation {
            Representation::Array(array) => array.get(index),
            Representation::List(list) => list.get(index),
        }
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        match &mut self.representation {
            Representation::Array(array) => array.get_mut(index),
            Representation::List(list) => list.get_mut(index),
        }
    }

    fn first(&self) -> Result<&T> {
        match &self.representation {
            Representation::Array(array) => array.first(),
            Representation::List(list) => list.first(),
        }
    }

    fn last(&self) -> Result<&T> {
        match &self.representation {
            Representation::Array(array) => array.last(),
            Representation::List(list) => list.last(),
        }
    }

    fn append(&mut self, element: T) {
        self.migrate_if_due();
        match &mut self.representation {
            Representation::Array(array) => array.append(element),
            Representation::List(list) => list.append(element),
        }
    }

    fn prepend(&mut self, element: T) {
        self.migrate_if_due();
        match &mut self.representation {
            Representation::Array(array) => array.prepend(element),
            Representation::List(list) => list.prepend(element),
        }
    }

    fn insert(&mut self, element: T, index: usize) -> Result<()> {
        self.migrate_if_due();
        match &mut self.representation {
            Representation::Array(array) => array.insert(element, index),
            Representation::List(list) => list.insert(element, index),
        }
    }

    /// Removals never migrate: shrinking below the threshold does not
    /// revert a list-backed sequence.
    fn remove(&mut self, index: usize) -> Result<T> {
        match &mut self.representation {
            Representation::Array(array) => array.remove(index),
            Representation::List(list) => list.remove(index),
        }
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`AdaptiveSequence`], dispatching on the
/// active representation.
pub enum AdaptiveSequenceIterator<'a, T> {
    /// Iterating the array-backed representation.
    Array(std::slice::Iter<'a, T>),
    /// Iterating the list-backed representation.
    List(LinkedChainIterator<'a, T>),
}

impl<'a, T> Iterator for AdaptiveSequenceIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self {
            Self::Array(iterator) => iterator.next(),
            Self::List(iterator) => iterator.next(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AdaptiveSequence<T> {
    type Item = &'a T;
    type IntoIter = AdaptiveSequenceIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for AdaptiveSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self.representation {
            Representation::Array(array) => array.into_iter(),
            Representation::List(list) => list.into_iter(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for AdaptiveSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AdaptiveSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for AdaptiveSequence<T> {
    /// Equality compares elements, not representations: an
    /// array-backed and a list-backed sequence with the same contents
    /// are equal.
    fn eq(&self, other: &Self) -> bool {
        Sequence::len(self) == Sequence::len(other) && self.iter().eq(other.iter())
    }
}

impl<T: Clone + Eq> Eq for AdaptiveSequence<T> {}

impl<T> Index<usize> for AdaptiveSequence<T> {
    type Output = T;

    /// Panics with the `IndexOutOfRange` message when `index` is out
    /// of range; use [`Sequence::get`] for the fallible form.
    fn index(&self, index: usize) -> &T {
        match &self.representation {
            Representation::Array(array) => &array[index],
            Representation::List(list) => &list[index],
        }
    }
}

impl<T> IndexMut<usize> for AdaptiveSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match &mut self.representation {
            Representation::Array(array) => &mut array[index],
            Representation::List(list) => &mut list[index],
        }
    }
}

impl<T: Clone> FromIterator<T> for AdaptiveSequence<T> {
    /// Collects into the initial, array-backed representation.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            representation: Representation::Array(iter.into_iter().collect()),
        }
    }
}

impl<T: Clone> Extend<T> for AdaptiveSequence<T> {
    /// Extends one element at a time so the switch threshold applies
    /// mid-batch exactly as it would for repeated `append` calls.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}
