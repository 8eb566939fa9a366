//! List-backed sequence representation.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::Result;
use crate::storage::{LinkedChain, LinkedChainIterator};

use super::Sequence;

/// A sequence backed by linked storage ([`LinkedChain`]).
///
/// Observable behavior is identical to
/// [`ArraySequence`](crate::sequence::ArraySequence); only the costs
/// differ: both ends grow in O(1), while positional access walks the
/// chain.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `get`     | O(i)       |
/// | `append`  | O(1)       |
/// | `prepend` | O(1)       |
/// | `insert`  | O(i)       |
///
/// # Examples
///
/// ```rust
/// use varseq::prelude::*;
///
/// let mut sequence = ListSequence::from_slice(&[2, 3]);
/// sequence.prepend(1);
/// assert_eq!(sequence.first(), Ok(&1));
/// assert_eq!(sequence.last(), Ok(&3));
/// ```
#[derive(Clone)]
pub struct ListSequence<T> {
    chain: LinkedChain<T>,
}

impl<T> ListSequence<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: LinkedChain::new(),
        }
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> LinkedChainIterator<'_, T> {
        self.chain.iter()
    }
}

impl<T: Clone> ListSequence<T> {
    /// Creates a sequence holding a copy of `items`.
    #[inline]
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            chain: LinkedChain::from_slice(items),
        }
    }
}

impl<T: Clone> Sequence for ListSequence<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.chain.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.chain.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.chain.get_mut(index)
    }

    /// O(1) through the cached head.
    #[inline]
    fn first(&self) -> Result<&T> {
        self.chain.first()
    }

    /// O(1) through the cached tail.
    #[inline]
    fn last(&self) -> Result<&T> {
        self.chain.last()
    }

    #[inline]
    fn append(&mut self, element: T) {
        self.chain.append(element);
    }

    #[inline]
    fn prepend(&mut self, element: T) {
        self.chain.prepend(element);
    }

    fn insert(&mut self, element: T, index: usize) -> Result<()> {
        self.chain.insert(element, index)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.chain.remove(index)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.chain.iter()
    }

    fn sub_sequence(&self, start: usize, end: usize) -> Result<Self> {
        Ok(Self {
            chain: self.chain.sub_chain(start, end)?,
        })
    }

    fn concat(&self, other: &Self) -> Self {
        Self {
            chain: self.chain.concat(&other.chain),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ListSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ListSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
    }
}

impl<T: Eq> Eq for ListSequence<T> {}

impl<T> Index<usize> for ListSequence<T> {
    type Output = T;

    /// Panics with the `IndexOutOfRange` message when `index` is out
    /// of range; use [`Sequence::get`] for the fallible form.
    fn index(&self, index: usize) -> &T {
        match self.chain.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for ListSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.chain.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> FromIterator<T> for ListSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            chain: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ListSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T> IntoIterator for ListSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListSequence<T> {
    type Item = &'a T;
    type IntoIter = LinkedChainIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
