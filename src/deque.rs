//! Double-ended queues.
//!
//! Two designs with identical observable behavior:
//!
//! - [`Deque`]: backed by a [`SegmentedChain`], so both ends mutate in
//!   place: `push_front`/`pop_front` touch only the head segment and
//!   `push_back`/`pop_back` only the tail. This is the structure to
//!   reach for.
//! - [`SequenceDeque`]: backed by any [`Sequence`] representation.
//!   Pops rebuild the backing sequence without the removed end, which
//!   costs O(n) per pop; it exists for callers that need deque
//!   operations over a sequence they already hold.
//!
//! # Examples
//!
//! ```rust
//! use varseq::prelude::*;
//!
//! let mut deque = Deque::from_slice(&[2, 3]);
//! deque.push_front(1);
//! deque.push_back(4);
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_back(), Ok(4));
//! assert_eq!(deque.len(), 2);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{IndexOutOfRange, Result};
use crate::sequence::Sequence;
use crate::storage::{SegmentedChain, SegmentedChainIterator};

// =============================================================================
// Segmented Deque
// =============================================================================

/// A double-ended queue over segmented storage.
///
/// # Time Complexity
///
/// | Operation    | Complexity            |
/// |--------------|-----------------------|
/// | `push_front` | O(C)                  |
/// | `push_back`  | O(n / C) walk, O(1) write |
/// | `pop_front`  | O(C)                  |
/// | `pop_back`   | O(n / C + C)          |
/// | `get`        | O(n / C)              |
///
/// `C` is the fixed segment capacity
/// ([`SEGMENT_CAPACITY`](crate::storage::SEGMENT_CAPACITY)).
#[derive(Clone)]
pub struct Deque<T> {
    chain: SegmentedChain<T>,
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: SegmentedChain::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Pushes an element at the front.
    #[inline]
    pub fn push_front(&mut self, element: T) {
        self.chain.prepend(element);
    }

    /// Pushes an element at the back.
    #[inline]
    pub fn push_back(&mut self, element: T) {
        self.chain.append(element);
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the deque is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        self.chain.remove_first()
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the deque is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        self.chain.remove_last()
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the deque is empty.
    #[inline]
    pub fn peek_front(&self) -> Result<&T> {
        self.chain.first()
    }

    /// Returns a reference to the back element without removing it.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the deque is empty.
    #[inline]
    pub fn peek_back(&self) -> Result<&T> {
        self.chain.last()
    }

    /// Returns a reference to the element at `index`, front first.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.chain.get(index)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.chain.get_mut(index)
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> SegmentedChainIterator<'_, T> {
        self.chain.iter()
    }
}

impl<T: Clone> Deque<T> {
    /// Creates a deque holding a copy of `items`, front first.
    #[inline]
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            chain: SegmentedChain::from_slice(items),
        }
    }

    /// Returns a new, independently owned deque holding copies of the
    /// elements in the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `end >= len` or `start > end`.
    pub fn sub_deque(&self, start: usize, end: usize) -> Result<Self> {
        Ok(Self {
            chain: self.chain.sub_chain(start, end)?,
        })
    }

    /// Returns a new deque holding this deque's elements followed by
    /// `other`'s. Neither operand is mutated.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            chain: self.chain.concat(&other.chain),
        }
    }

    /// Copies the elements, front first, into any sequence
    /// representation.
    #[must_use]
    pub fn to_sequence<S>(&self) -> S
    where
        S: Sequence<Item = T> + FromIterator<T>,
    {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Sequence-Backed Deque
// =============================================================================

/// A double-ended queue over an arbitrary [`Sequence`] representation.
///
/// Pushes delegate to `prepend`/`append`. Pops rebuild the backing
/// sequence as the sub-sequence excluding the removed end, so every
/// pop costs O(n) regardless of representation; the observable order
/// and failure behavior match [`Deque`] exactly.
///
/// # Examples
///
/// ```rust
/// use varseq::prelude::*;
///
/// let mut deque: SequenceDeque<ArraySequence<i32>> = SequenceDeque::new();
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
/// assert_eq!(deque.pop_back(), Ok(2));
/// assert_eq!(deque.pop_front(), Ok(0));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SequenceDeque<S> {
    inner: S,
}

impl<S: Sequence> SequenceDeque<S> {
    /// Creates an empty deque.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { inner: S::new() }
    }

    /// Wraps an existing sequence; its first element becomes the
    /// front.
    #[inline]
    #[must_use]
    pub const fn from_sequence(inner: S) -> Self {
        Self { inner }
    }

    /// Creates a deque holding a copy of `items`, front first.
    #[must_use]
    pub fn from_slice(items: &[S::Item]) -> Self
    where
        S: FromIterator<S::Item>,
    {
        Self {
            inner: S::from_slice(items),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pushes an element at the front.
    #[inline]
    pub fn push_front(&mut self, element: S::Item) {
        self.inner.prepend(element);
    }

    /// Pushes an element at the back.
    #[inline]
    pub fn push_back(&mut self, element: S::Item) {
        self.inner.append(element);
    }

    /// Removes and returns the front element, rebuilding the backing
    /// sequence without it.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the deque is empty.
    pub fn pop_front(&mut self) -> Result<S::Item>
    where
        S: FromIterator<S::Item>,
    {
        let element = self.inner.first()?.clone();
        self.inner = match self.inner.len() {
            1 => S::new(),
            len => self.inner.sub_sequence(1, len - 1)?,
        };
        Ok(element)
    }

    /// Removes and returns the back element, rebuilding the backing
    /// sequence without it.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the deque is empty.
    pub fn pop_back(&mut self) -> Result<S::Item>
    where
        S: FromIterator<S::Item>,
    {
        let element = self.inner.last()?.clone();
        self.inner = match self.inner.len() {
            1 => S::new(),
            len => self.inner.sub_sequence(0, len - 2)?,
        };
        Ok(element)
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the deque is empty.
    #[inline]
    pub fn peek_front(&self) -> Result<&S::Item> {
        self.inner.first()
    }

    /// Returns a reference to the back element without removing it.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the deque is empty.
    #[inline]
    pub fn peek_back(&self) -> Result<&S::Item> {
        self.inner.last()
    }

    /// Returns a reference to the element at `index`, front first.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&S::Item> {
        self.inner.get(index)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut S::Item> {
        self.inner.get_mut(index)
    }

    /// Returns a new, independently owned deque holding copies of the
    /// elements in the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `end >= len` or `start > end`.
    pub fn sub_deque(&self, start: usize, end: usize) -> Result<Self>
    where
        S: FromIterator<S::Item>,
    {
        Ok(Self {
            inner: self.inner.sub_sequence(start, end)?,
        })
    }

    /// Returns a new deque holding this deque's elements followed by
    /// `other`'s. Neither operand is mutated.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self
    where
        S: Extend<S::Item>,
    {
        Self {
            inner: self.inner.concat(&other.inner),
        }
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &S::Item> {
        self.inner.iter()
    }

    /// Returns a deep copy of the backing sequence, front first.
    #[must_use]
    pub fn to_sequence(&self) -> S {
        self.inner.clone()
    }

    /// Unwraps the backing sequence.
    #[inline]
    #[must_use]
    pub fn into_sequence(self) -> S {
        self.inner
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    /// Panics with the `IndexOutOfRange` message when `index` is out
    /// of range; use [`get`](Self::get) for the fallible form.
    fn index(&self, index: usize) -> &T {
        match self.chain.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.chain.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            chain: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = SegmentedChainIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Sequence> Index<usize> for SequenceDeque<S> {
    type Output = S::Item;

    /// Panics with the `IndexOutOfRange` message when `index` is out
    /// of range; use [`get`](Self::get) for the fallible form.
    fn index(&self, index: usize) -> &S::Item {
        match self.inner.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<S: Sequence> IndexMut<usize> for SequenceDeque<S> {
    fn index_mut(&mut self, index: usize) -> &mut S::Item {
        match self.inner.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for SequenceDeque<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("SequenceDeque")
            .field(&self.inner)
            .finish()
    }
}

impl<S: Sequence + FromIterator<S::Item>> FromIterator<S::Item> for SequenceDeque<S> {
    fn from_iter<I: IntoIterator<Item = S::Item>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<S: Sequence + Extend<S::Item>> Extend<S::Item> for SequenceDeque<S> {
    fn extend<I: IntoIterator<Item = S::Item>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
