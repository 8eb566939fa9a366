//! Chain of fixed-capacity segments.
//!
//! This module provides [`SegmentedChain`], the chunked leaf store
//! underneath [`Deque`](crate::deque::Deque).
//!
//! # Overview
//!
//! `SegmentedChain` stores elements in segments of at most
//! [`SEGMENT_CAPACITY`] elements, each segment exclusively owning the
//! next. The layout avoids both the "shift the whole array" cost of
//! contiguous storage and the "one allocation per element" cost of a
//! plain linked list:
//!
//! - locating an index walks the chain accumulating segment sizes,
//!   O(n / C) in segment hops plus O(1) within a segment;
//! - `prepend` shifts only the head segment, O(C), never O(n);
//! - inserting into a full segment *splits* it: the upper half moves
//!   into a freshly allocated segment spliced immediately after, and
//!   the element lands in whichever half now owns its offset. Any
//!   single insert is therefore bounded by O(C) element moves plus the
//!   chain walk, and element order is preserved exactly.
//!
//! Dropping a chain detaches segments one at a time in a loop, so an
//! arbitrarily long chain never recurses during teardown.
//!
//! # Examples
//!
//! ```rust
//! use varseq::storage::SegmentedChain;
//!
//! let mut chain: SegmentedChain<u32> = (0..100).collect();
//! chain.prepend(99);
//! assert_eq!(chain.len(), 101);
//! assert_eq!(chain.first(), Ok(&99));
//! assert_eq!(chain.last(), Ok(&99));
//! ```

use std::fmt;

use arrayvec::ArrayVec;
use static_assertions::const_assert;

use crate::error::{IndexOutOfRange, Result};

/// Fixed capacity of one segment.
pub const SEGMENT_CAPACITY: usize = 32;

// Splitting moves half a segment; both halves must be able to take the
// pending element.
const_assert!(SEGMENT_CAPACITY >= 2);

/// One segment: an inline block of up to `SEGMENT_CAPACITY` elements
/// and ownership of the next segment.
struct Segment<T> {
    elements: ArrayVec<T, SEGMENT_CAPACITY>,
    next: Option<Box<Segment<T>>>,
}

impl<T> Segment<T> {
    fn with_element(element: T) -> Self {
        let mut elements = ArrayVec::new();
        elements.push(element);
        Self {
            elements,
            next: None,
        }
    }
}

/// An ordered chain of fixed-capacity segments.
///
/// Invariants: no segment ever holds more than [`SEGMENT_CAPACITY`]
/// elements (the inline block enforces this by construction), no
/// segment is left empty, and element order is the concatenation of
/// segment contents in chain order.
///
/// # Time Complexity
///
/// | Operation      | Complexity            |
/// |----------------|-----------------------|
/// | `get`/`set`    | O(n / C)              |
/// | `append`       | O(n / C) walk, O(1) write |
/// | `prepend`      | O(C)                  |
/// | `insert`       | O(n / C + C)          |
/// | `remove_first` | O(C)                  |
/// | `remove_last`  | O(n / C + C)          |
pub struct SegmentedChain<T> {
    head: Option<Box<Segment<T>>>,
    len: usize,
}

impl<T> SegmentedChain<T> {
    /// Creates an empty chain.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements in the chain.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of segments currently in the chain.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let mut count = 0;
        let mut current = self.head.as_deref();
        while let Some(segment) = current {
            count += 1;
            current = segment.next.as_deref();
        }
        count
    }

    /// Returns the fill level of each segment in chain order.
    ///
    /// Diagnostic accessor; useful for asserting the capacity
    /// invariant from the outside.
    #[must_use]
    pub fn segment_lengths(&self) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(segment) = current {
            lengths.push(segment.elements.len());
            current = segment.next.as_deref();
        }
        lengths
    }

    /// Walks the chain to the segment containing global index `index`.
    fn locate(&self, index: usize) -> Result<(&Segment<T>, usize)> {
        if index >= self.len {
            return Err(IndexOutOfRange::at(index, self.len));
        }
        let mut remaining = index;
        let mut current = self.head.as_deref();
        while let Some(segment) = current {
            if remaining < segment.elements.len() {
                return Ok((segment, remaining));
            }
            remaining -= segment.elements.len();
            current = segment.next.as_deref();
        }
        Err(IndexOutOfRange::at(index, self.len))
    }

    fn locate_mut(&mut self, index: usize) -> Result<(&mut Segment<T>, usize)> {
        if index >= self.len {
            return Err(IndexOutOfRange::at(index, self.len));
        }
        let len = self.len;
        let mut remaining = index;
        let mut current = self.head.as_deref_mut();
        while let Some(segment) = current {
            if remaining < segment.elements.len() {
                return Ok((segment, remaining));
            }
            remaining -= segment.elements.len();
            current = segment.next.as_deref_mut();
        }
        Err(IndexOutOfRange::at(index, len))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let (segment, offset) = self.locate(index)?;
        segment
            .elements
            .get(offset)
            .ok_or_else(|| IndexOutOfRange::at(index, self.len))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        let (segment, offset) = self.locate_mut(index)?;
        segment
            .elements
            .get_mut(offset)
            .ok_or_else(|| IndexOutOfRange::at(index, len))
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    pub fn set(&mut self, index: usize, element: T) -> Result<()> {
        *self.get_mut(index)? = element;
        Ok(())
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the chain is empty.
    #[inline]
    pub fn first(&self) -> Result<&T> {
        self.head
            .as_deref()
            .and_then(|segment| segment.elements.first())
            .ok_or_else(IndexOutOfRange::empty)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the chain is empty.
    pub fn last(&self) -> Result<&T> {
        let mut last = None;
        let mut current = self.head.as_deref();
        while let Some(segment) = current {
            last = segment.elements.last();
            current = segment.next.as_deref();
        }
        last.ok_or_else(IndexOutOfRange::empty)
    }

    /// Appends an element at the back: pushes into the tail segment,
    /// or allocates a new tail segment when the old one is full.
    pub fn append(&mut self, element: T) {
        self.len += 1;
        if self.head.is_none() {
            self.head = Some(Box::new(Segment::with_element(element)));
            return;
        }
        let mut current = self.head.as_deref_mut();
        while let Some(segment) = current {
            if segment.next.is_none() {
                if segment.elements.is_full() {
                    segment.next = Some(Box::new(Segment::with_element(element)));
                } else {
                    segment.elements.push(element);
                }
                return;
            }
            current = segment.next.as_deref_mut();
        }
    }

    /// Prepends an element at the front: shifts the head segment's
    /// contents right by one, or links a new head segment when the old
    /// one is full. O(C), never O(n).
    pub fn prepend(&mut self, element: T) {
        self.len += 1;
        match &mut self.head {
            Some(segment) if !segment.elements.is_full() => {
                segment.elements.insert(0, element);
            }
            _ => {
                let rest = self.head.take();
                let mut fresh = Segment::with_element(element);
                fresh.next = rest;
                self.head = Some(Box::new(fresh));
            }
        }
    }

    /// Inserts an element before global position `index`. The ends
    /// delegate to [`prepend`](Self::prepend) and
    /// [`append`](Self::append); an interior insert into a full
    /// segment splits it first.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index > len`. The chain is untouched
    /// on failure.
    pub fn insert(&mut self, element: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(IndexOutOfRange::at(index, self.len));
        }
        if index == 0 {
            self.prepend(element);
            return Ok(());
        }
        if index == self.len {
            self.append(element);
            return Ok(());
        }
        let (segment, offset) = self.locate_mut(index)?;
        if segment.elements.is_full() {
            // Split: the upper half moves into a fresh segment spliced
            // immediately after, then the element goes into whichever
            // half owns the offset.
            let split_at = SEGMENT_CAPACITY / 2;
            let mut upper: ArrayVec<T, SEGMENT_CAPACITY> =
                segment.elements.drain(split_at..).collect();
            if offset >= split_at {
                upper.insert(offset - split_at, element);
            } else {
                segment.elements.insert(offset, element);
            }
            let rest = segment.next.take();
            segment.next = Some(Box::new(Segment {
                elements: upper,
                next: rest,
            }));
        } else {
            segment.elements.insert(offset, element);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the first element, unlinking the head
    /// segment once it empties.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the chain is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let Some(mut head) = self.head.take() else {
            return Err(IndexOutOfRange::empty());
        };
        let element = head.elements.remove(0);
        self.len -= 1;
        if head.elements.is_empty() {
            self.head = head.next.take();
        } else {
            self.head = Some(head);
        }
        Ok(element)
    }

    /// Removes and returns the last element, unlinking the tail
    /// segment once it empties.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the chain is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|segment| segment.next.is_some())
        {
            let Some(segment) = cursor else { unreachable!() };
            cursor = &mut segment.next;
        }
        let Some(mut tail) = cursor.take() else {
            return Err(IndexOutOfRange::empty());
        };
        match tail.elements.pop() {
            Some(element) => {
                self.len -= 1;
                if !tail.elements.is_empty() {
                    *cursor = Some(tail);
                }
                Ok(element)
            }
            None => {
                *cursor = Some(tail);
                Err(IndexOutOfRange::empty())
            }
        }
    }

    /// Detaches `other`'s segments and links them after this chain's
    /// tail. `other` is left empty.
    fn append_chain(&mut self, mut other: Self) {
        let attached = other.head.take();
        self.len += other.len;
        other.len = 0;
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => {
                    *cursor = attached;
                    return;
                }
                Some(segment) if segment.next.is_none() => {
                    segment.next = attached;
                    return;
                }
                Some(segment) => cursor = &mut segment.next,
            }
        }
    }

    /// Returns an iterator over the elements in chain order.
    #[inline]
    pub fn iter(&self) -> SegmentedChainIterator<'_, T> {
        SegmentedChainIterator {
            segment: self.head.as_deref(),
            offset: 0,
        }
    }
}

impl<T: Clone> SegmentedChain<T> {
    /// Creates a chain holding a copy of `items`.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }

    /// Returns a new chain holding a copy of this chain followed by a
    /// copy of `other`'s elements. Neither operand is mutated.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.append_chain(other.clone());
        result
    }

    /// Returns a new chain holding copies of the elements in the
    /// inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `end >= len` or `start > end`.
    pub fn sub_chain(&self, start: usize, end: usize) -> Result<Self> {
        if end >= self.len {
            return Err(IndexOutOfRange::at(end, self.len));
        }
        if start > end {
            return Err(IndexOutOfRange::at(start, self.len));
        }
        Ok(self.iter().skip(start).take(end - start + 1).cloned().collect())
    }
}

/// Rebuilds a chain from filled chunks, linking back to front so the
/// construction itself never recurses.
fn link_chunks<T>(mut chunks: Vec<ArrayVec<T, SEGMENT_CAPACITY>>) -> Option<Box<Segment<T>>> {
    let mut head = None;
    while let Some(elements) = chunks.pop() {
        if elements.is_empty() {
            continue;
        }
        head = Some(Box::new(Segment {
            elements,
            next: head,
        }));
    }
    head
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`SegmentedChain`], in chain order.
pub struct SegmentedChainIterator<'a, T> {
    segment: Option<&'a Segment<T>>,
    offset: usize,
}

impl<'a, T> Iterator for SegmentedChainIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let segment = self.segment?;
            if let Some(element) = segment.elements.get(self.offset) {
                self.offset += 1;
                return Some(element);
            }
            self.segment = segment.next.as_deref();
            self.offset = 0;
        }
    }
}

impl<T> IntoIterator for SegmentedChain<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the chain, yielding elements in chain order. Segments
    /// are detached one at a time.
    fn into_iter(mut self) -> Self::IntoIter {
        let mut elements = Vec::with_capacity(self.len);
        let mut current = self.head.take();
        while let Some(mut segment) = current {
            current = segment.next.take();
            elements.extend(segment.elements);
        }
        elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SegmentedChain<T> {
    type Item = &'a T;
    type IntoIter = SegmentedChainIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Drop for SegmentedChain<T> {
    /// Iterative release: detach one segment at a time so dropping a
    /// long chain never overflows the stack.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut segment) = current {
            current = segment.next.take();
        }
    }
}

impl<T: Clone> Clone for SegmentedChain<T> {
    fn clone(&self) -> Self {
        let mut chunks = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(segment) = current {
            chunks.push(segment.elements.clone());
            current = segment.next.as_deref();
        }
        Self {
            head: link_chunks(chunks),
            len: self.len,
        }
    }
}

impl<T> Default for SegmentedChain<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SegmentedChain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SegmentedChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SegmentedChain<T> {}

impl<T> FromIterator<T> for SegmentedChain<T> {
    /// Builds the chain by filling whole segments in order, then
    /// linking them back to front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chunks: Vec<ArrayVec<T, SEGMENT_CAPACITY>> = Vec::new();
        for element in iter {
            if chunks.last().is_none_or(ArrayVec::is_full) {
                chunks.push(ArrayVec::new());
            }
            if let Some(chunk) = chunks.last_mut() {
                chunk.push(element);
            }
        }
        let len = chunks.iter().map(ArrayVec::len).sum();
        Self {
            head: link_chunks(chunks),
            len,
        }
    }
}

impl<T> Extend<T> for SegmentedChain<T> {
    /// Builds a chain from the incoming elements and links it after
    /// the tail, so extending does not re-walk the chain per element.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let addition: Self = iter.into_iter().collect();
        self.append_chain(addition);
    }
}

// =============================================================================
// Tests
// =============================================================================
