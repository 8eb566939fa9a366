//! The polymorphic sequence capability and its concrete representations.
//!
//! Every sequence in this crate, whether array-backed, list-backed,
//! adaptive, or policy-wrapped, exposes the single [`Sequence`]
//! contract:
//! positional access, end access, insertion, sub-range extraction,
//! concatenation, and the functional transforms (`map`, `reduce`,
//! `filter`, `zip_with`, `interleave`, `splice`, `split`). Callers
//! program against the trait; which representation sits underneath is
//! an invisible implementation choice.
//!
//! # Representations
//!
//! - [`ArraySequence`]: contiguous storage; O(1) access, O(n) front
//!   insertion
//! - [`ListSequence`]: linked storage; O(1) end insertion, O(i) access
//! - [`AdaptiveSequence`]: starts array-backed and migrates to
//!   list-backed past a size threshold
//!
//! # Mutation policy
//!
//! [`Mutable`] and [`Immutable`] wrap any representation and fix what
//! `instance()` hands out: the receiver itself, or a detached copy.
//!
//! # Examples
//!
//! ```rust
//! use varseq::prelude::*;
//!
//! fn describe<S: Sequence<Item = i32>>(sequence: &S) -> i32 {
//!     sequence.reduce(|total, element| total + element, 0)
//! }
//!
//! let array = ArraySequence::from_slice(&[1, 2, 3]);
//! let list = ListSequence::from_slice(&[1, 2, 3]);
//! assert_eq!(describe(&array), describe(&list));
//! ```

mod adaptive;
mod array;
mod list;
mod policy;

pub use adaptive::ADAPTIVE_SWITCH_THRESHOLD;
pub use adaptive::AdaptiveSequence;
pub use adaptive::AdaptiveSequenceIterator;
pub use array::ArraySequence;
pub use list::ListSequence;
pub use policy::Immutable;
pub use policy::Mutable;

use crate::error::{IndexOutOfRange, Result};

/// Resolves a possibly-negative splice index against `len`.
///
/// Negative indices count from the end (`-1` is the last element).
pub(crate) fn resolve_splice_index(index: isize, len: usize) -> Result<usize> {
    if index < 0 {
        match index.checked_add_unsigned(len) {
            Some(resolved) if resolved >= 0 => {
                usize::try_from(resolved).map_err(|_| IndexOutOfRange { index, len })
            }
            _ => Err(IndexOutOfRange { index, len }),
        }
    } else {
        usize::try_from(index).map_err(|_| IndexOutOfRange { index, len })
    }
}

/// The ordered, indexable collection contract.
///
/// A sequence owns its backing representation exclusively; every
/// operation that returns a new sequence returns an independently
/// owned one. Bounds failures are reported as
/// [`IndexOutOfRange`](crate::error::IndexOutOfRange) and never leave
/// a partial mutation behind.
///
/// Implementors provide the positional primitives (`len`, `get`,
/// `get_mut`, `append`, `prepend`, `insert`, `remove`, `iter`); the
/// transforms are defined on top of those and therefore behave
/// identically across representations, differing only in cost.
pub trait Sequence: Clone + Default {
    /// The element type. Elements are opaque values; the sequence only
    /// assumes they can be cloned.
    type Item: Clone;

    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence holding a copy of `items`.
    #[must_use]
    fn from_slice(items: &[Self::Item]) -> Self
    where
        Self: FromIterator<Self::Item>,
    {
        items.iter().cloned().collect()
    }

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Item>;

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    fn set(&mut self, index: usize, element: Self::Item) -> Result<()> {
        *self.get_mut(index)? = element;
        Ok(())
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the sequence is empty.
    fn first(&self) -> Result<&Self::Item> {
        if self.is_empty() {
            return Err(IndexOutOfRange::empty());
        }
        self.get(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the sequence is empty.
    fn last(&self) -> Result<&Self::Item> {
        match self.len() {
            0 => Err(IndexOutOfRange::empty()),
            len => self.get(len - 1),
        }
    }

    /// Appends an element at the back.
    fn append(&mut self, element: Self::Item);

    /// Prepends an element at the front.
    fn prepend(&mut self, element: Self::Item);

    /// Inserts an element before position `index`; `0` and `len` are
    /// the ends.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index > len`. The sequence is
    /// untouched on failure.
    fn insert(&mut self, element: Self::Item, index: usize) -> Result<()>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    fn remove(&mut self, index: usize) -> Result<Self::Item>;

    /// Returns an iterator over the elements in order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// Returns a new, independently owned sequence holding copies of
    /// the elements in the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `end >= len` or `start > end`.
    fn sub_sequence(&self, start: usize, end: usize) -> Result<Self>
    where
        Self: FromIterator<Self::Item>,
    {
        if end >= self.len() {
            return Err(IndexOutOfRange::at(end, self.len()));
        }
        if start > end {
            return Err(IndexOutOfRange::at(start, self.len()));
        }
        Ok(self.iter().skip(start).take(end - start + 1).cloned().collect())
    }

    /// Returns a new sequence holding this sequence's elements
    /// followed by `other`'s. Neither operand is mutated.
    #[must_use]
    fn concat(&self, other: &Self) -> Self
    where
        Self: Extend<Self::Item>,
    {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }

    /// Returns a new sequence of `transform` applied element-wise,
    /// preserving order and size.
    #[must_use]
    fn map<F>(&self, transform: F) -> Self
    where
        Self: FromIterator<Self::Item>,
        F: FnMut(&Self::Item) -> Self::Item,
    {
        self.iter().map(transform).collect()
    }

    /// Left-folds the elements: `accumulator = fold(accumulator,
    /// element)` in order, starting from `start`.
    fn reduce<A, F>(&self, fold: F, start: A) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        self.iter().fold(start, fold)
    }

    /// Returns a new sequence of the elements satisfying `predicate`,
    /// order preserved.
    #[must_use]
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        Self: FromIterator<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Pairs elements positionally with `other` up to the shorter
    /// length, combining each pair with `combine`.
    #[must_use]
    fn zip_with<F>(&self, other: &Self, mut combine: F) -> Self
    where
        Self: FromIterator<Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> Self::Item,
    {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| combine(left, right))
            .collect()
    }

    /// The pairing form of zip: a flattened sequence alternating one
    /// element from each source (`a0 b0 a1 b1 …`), up to the shorter
    /// length. Callers needing combined pairs use
    /// [`zip_with`](Self::zip_with).
    #[must_use]
    fn interleave(&self, other: &Self) -> Self
    where
        Self: FromIterator<Self::Item>,
    {
        self.iter()
            .zip(other.iter())
            .flat_map(|(left, right)| [left.clone(), right.clone()])
            .collect()
    }

    /// Returns a new sequence with `count` elements removed starting
    /// at `index` and `replacement`'s elements (if any) spliced in at
    /// that point. A negative `index` counts from the end (`-1` is the
    /// last element).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the resolved index is outside
    /// `[0, len)` or the removed range extends past the end.
    fn splice(&self, index: isize, count: usize, replacement: Option<&Self>) -> Result<Self>
    where
        Self: Extend<Self::Item>,
    {
        let len = self.len();
        let resolved = resolve_splice_index(index, len)?;
        if resolved >= len || count > len - resolved {
            return Err(IndexOutOfRange { index, len });
        }
        let mut result = Self::new();
        for (position, element) in self.iter().enumerate() {
            if position == resolved {
                if let Some(replacement) = replacement {
                    result.extend(replacement.iter().cloned());
                }
            }
            if position < resolved || position >= resolved + count {
                result.append(element.clone());
            }
        }
        Ok(result)
    }

    /// Partitions the sequence at every element satisfying
    /// `predicate`. The separators themselves are dropped; each
    /// contiguous run of remaining elements becomes one sub-sequence.
    /// Runs are never empty: adjacent separators, or separators at
    /// either end, produce nothing.
    fn split<P>(&self, mut predicate: P) -> Vec<Self>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut runs = Vec::new();
        let mut current = Self::new();
        for element in self.iter() {
            if predicate(element) {
                if !current.is_empty() {
                    runs.push(std::mem::replace(&mut current, Self::new()));
                }
            } else {
                current.append(element.clone());
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }

    /// Returns the element at `index`, or `None` when out of range.
    /// The non-failing counterpart to [`get`](Self::get).
    fn try_get(&self, index: usize) -> Option<&Self::Item> {
        self.get(index).ok()
    }

    /// Returns the first element satisfying `predicate`, or `None`.
    /// Never fails.
    fn try_find<P>(&self, mut predicate: P) -> Option<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_splice_index;
    use crate::error::IndexOutOfRange;

    #[test]
    fn test_resolve_positive_index_is_identity() {
        assert_eq!(resolve_splice_index(3, 10), Ok(3));
    }

    #[test]
    fn test_resolve_negative_index_counts_from_end() {
        assert_eq!(resolve_splice_index(-1, 10), Ok(9));
        assert_eq!(resolve_splice_index(-10, 10), Ok(0));
    }

    #[test]
    fn test_resolve_negative_past_front_fails() {
        assert_eq!(
            resolve_splice_index(-11, 10),
            Err(IndexOutOfRange { index: -11, len: 10 })
        );
    }
}
