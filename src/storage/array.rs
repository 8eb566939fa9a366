//! Contiguous, owned, resizable element storage.
//!
//! This module provides [`ArrayBuffer`], the array-backed leaf store
//! underneath [`ArraySequence`](crate::sequence::ArraySequence).
//!
//! # Overview
//!
//! `ArrayBuffer` is a thin bounds-checked layer over one contiguous
//! owned block. Growth uses the block's spare capacity geometrically,
//! so `append` is amortized O(1); `prepend` and interior `insert`
//! shift the following suffix and are O(n).
//!
//! # Examples
//!
//! ```rust
//! use varseq::storage::ArrayBuffer;
//!
//! let mut buffer = ArrayBuffer::from_slice(&[1, 2, 3]);
//! buffer.append(4);
//! buffer.prepend(0);
//! assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4]);
//! assert!(buffer.get(5).is_err());
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{IndexOutOfRange, Result};

/// Contiguous owned storage with bounds-checked access.
///
/// # Time Complexity
///
/// | Operation | Complexity        |
/// |-----------|-------------------|
/// | `get`     | O(1)              |
/// | `set`     | O(1)              |
/// | `append`  | O(1) amortized    |
/// | `prepend` | O(n)              |
/// | `insert`  | O(n)              |
/// | `remove`  | O(n)              |
/// | `resize`  | O(n)              |
#[derive(Clone)]
pub struct ArrayBuffer<T> {
    elements: Vec<T>,
}

impl<T> ArrayBuffer<T> {
    /// Creates an empty buffer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty buffer with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the buffer can hold without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.elements
            .get(index)
            .ok_or_else(|| IndexOutOfRange::at(index, self.elements.len()))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or_else(|| IndexOutOfRange::at(index, len))
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    #[inline]
    pub fn set(&mut self, index: usize, element: T) -> Result<()> {
        *self.get_mut(index)? = element;
        Ok(())
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the buffer is empty.
    #[inline]
    pub fn first(&self) -> Result<&T> {
        self.elements.first().ok_or_else(IndexOutOfRange::empty)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the buffer is empty.
    #[inline]
    pub fn last(&self) -> Result<&T> {
        self.elements.last().ok_or_else(IndexOutOfRange::empty)
    }

    /// Appends an element at the back.
    #[inline]
    pub fn append(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Inserts an element at the front, shifting every element right.
    #[inline]
    pub fn prepend(&mut self, element: T) {
        self.elements.insert(0, element);
    }

    /// Inserts an element before position `index`, shifting the
    /// following suffix right. `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index > len`. The buffer is untouched
    /// on failure.
    pub fn insert(&mut self, element: T, index: usize) -> Result<()> {
        if index > self.elements.len() {
            return Err(IndexOutOfRange::at(index, self.elements.len()));
        }
        self.elements.insert(index, element);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the
    /// following suffix left.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.elements.len() {
            return Err(IndexOutOfRange::at(index, self.elements.len()));
        }
        Ok(self.elements.remove(index))
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Clone> ArrayBuffer<T> {
    /// Creates a buffer holding a copy of `items`.
    #[inline]
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            elements: items.to_vec(),
        }
    }

    /// Resizes the buffer to `new_len` elements.
    ///
    /// This is the explicit growth/shrink primitive: the overlapping
    /// prefix is preserved, growth fills new positions with clones of
    /// `fill`, shrinking truncates.
    pub fn resize(&mut self, new_len: usize, fill: T) {
        self.elements.resize(new_len, fill);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ArrayBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBuffer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ArrayBuffer<T> {}

impl<T> Index<usize> for ArrayBuffer<T> {
    type Output = T;

    /// Panics with the [`IndexOutOfRange`] message when `index` is out
    /// of range; use [`ArrayBuffer::get`] for the fallible form.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for ArrayBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> FromIterator<T> for ArrayBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ArrayBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shifts_suffix() {
        let mut buffer = ArrayBuffer::from_slice(&[1, 2, 4]);
        buffer.insert(3, 2).unwrap();
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_at_len_appends() {
        let mut buffer = ArrayBuffer::from_slice(&[1]);
        buffer.insert(2, 1).unwrap();
        assert_eq!(buffer.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_insert_beyond_len_fails_without_mutation() {
        let mut buffer = ArrayBuffer::from_slice(&[1, 2]);
        assert_eq!(
            buffer.insert(9, 3),
            Err(IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(buffer.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_resize_preserves_prefix() {
        let mut buffer = ArrayBuffer::from_slice(&[1, 2, 3]);
        buffer.resize(5, 0);
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 0, 0]);
        buffer.resize(2, 0);
        assert_eq!(buffer.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_remove_returns_element() {
        let mut buffer = ArrayBuffer::from_slice(&[1, 2, 3]);
        assert_eq!(buffer.remove(1), Ok(2));
        assert_eq!(buffer.as_slice(), &[1, 3]);
        assert!(buffer.remove(2).is_err());
    }

    #[test]
    fn test_ends_on_empty_fail() {
        let buffer: ArrayBuffer<i32> = ArrayBuffer::new();
        assert_eq!(buffer.first(), Err(IndexOutOfRange::empty()));
        assert_eq!(buffer.last(), Err(IndexOutOfRange::empty()));
    }

    #[test]
    #[should_panic(expected = "index 2 out of range")]
    fn test_index_operator_panics_out_of_range() {
        let buffer = ArrayBuffer::from_slice(&[1, 2]);
        let _ = buffer[2];
    }
}
