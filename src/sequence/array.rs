//! Array-backed sequence representation.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::error::Result;
use crate::storage::ArrayBuffer;

use super::Sequence;

/// A sequence backed by contiguous storage ([`ArrayBuffer`]).
///
/// Observable behavior is identical to
/// [`ListSequence`](crate::sequence::ListSequence); only the costs
/// differ.
///
/// # Time Complexity
///
/// | Operation | Complexity     |
/// |-----------|----------------|
/// | `get`     | O(1)           |
/// | `append`  | O(1) amortized |
/// | `prepend` | O(n)           |
/// | `insert`  | O(n)           |
///
/// # Examples
///
/// ```rust
/// use varseq::prelude::*;
///
/// let mut sequence = ArraySequence::from_slice(&[1, 2, 3, 4, 5]);
/// sequence.append(10);
/// sequence.prepend(0);
/// sequence.insert(99, 2).unwrap();
/// let collected: Vec<i32> = sequence.iter().copied().collect();
/// assert_eq!(collected, vec![0, 1, 99, 2, 3, 4, 5, 10]);
/// ```
#[derive(Clone)]
pub struct ArraySequence<T> {
    buffer: ArrayBuffer<T>,
}

impl<T> ArraySequence<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: ArrayBuffer::new(),
        }
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buffer.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }
}

impl<T: Clone> ArraySequence<T> {
    /// Creates a sequence holding a copy of `items`.
    #[inline]
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            buffer: ArrayBuffer::from_slice(items),
        }
    }
}

impl<T: Clone> Sequence for ArraySequence<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        self.buffer.get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.buffer.get_mut(index)
    }

    #[inline]
    fn first(&self) -> Result<&T> {
        self.buffer.first()
    }

    #[inline]
    fn last(&self) -> Result<&T> {
        self.buffer.last()
    }

    #[inline]
    fn append(&mut self, element: T) {
        self.buffer.append(element);
    }

    #[inline]
    fn prepend(&mut self, element: T) {
        self.buffer.prepend(element);
    }

    #[inline]
    fn insert(&mut self, element: T, index: usize) -> Result<()> {
        self.buffer.insert(element, index)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Result<T> {
        self.buffer.remove(index)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Contiguous storage copies the sub-range as one slice.
    fn sub_sequence(&self, start: usize, end: usize) -> Result<Self> {
        if end >= self.len() {
            return Err(crate::error::IndexOutOfRange::at(end, self.len()));
        }
        if start > end {
            return Err(crate::error::IndexOutOfRange::at(start, self.len()));
        }
        Ok(Self::from_slice(&self.buffer.as_slice()[start..=end]))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ArraySequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArraySequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for ArraySequence<T> {}

impl<T: Hash> Hash for ArraySequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for ArraySequence<T> {
    type Output = T;

    /// Panics with the `IndexOutOfRange` message when `index` is out
    /// of range; use [`Sequence::get`] for the fallible form.
    fn index(&self, index: usize) -> &T {
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for ArraySequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buffer[index]
    }
}

impl<T> FromIterator<T> for ArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArraySequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for ArraySequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArraySequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
