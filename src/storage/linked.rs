//! Singly-linked owned node chain with head/tail tracking.
//!
//! This module provides [`LinkedChain`], the list-backed leaf store
//! underneath [`ListSequence`](crate::sequence::ListSequence).
//!
//! # Overview
//!
//! `LinkedChain` keeps its nodes in a slot arena (a `Vec` of optional
//! nodes plus a free list) and links them by slot index rather than by
//! owned pointers. The arena keeps the chain free of `unsafe` while
//! still giving O(1) `append` and `prepend` through the cached head
//! and tail slots, and it makes teardown a flat release of one block,
//! so dropping a chain of any length never recurses node by node.
//!
//! Logical ownership is still exclusive: no slot is ever reachable
//! from two chains, and cloning deep-copies the whole arena.
//!
//! # Examples
//!
//! ```rust
//! use varseq::storage::LinkedChain;
//!
//! let mut chain = LinkedChain::from_slice(&[2, 3]);
//! chain.prepend(1);
//! chain.append(4);
//! assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! assert_eq!(chain.first(), Ok(&1));
//! assert_eq!(chain.last(), Ok(&4));
//! ```

use std::fmt;

use crate::error::{IndexOutOfRange, Result};

/// One chain node: an element and the slot index of its successor.
#[derive(Clone)]
struct Node<T> {
    element: T,
    next: Option<usize>,
}

/// A singly-linked chain with cached head, tail and length.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `append`      | O(1)       |
/// | `prepend`     | O(1)       |
/// | `first`/`last`| O(1)       |
/// | `get`/`set`   | O(i)       |
/// | `insert`      | O(i)       |
/// | `remove`      | O(i)       |
/// | `concat`      | O(n + m)   |
#[derive(Clone)]
pub struct LinkedChain<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedChain<T> {
    /// Creates an empty chain.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
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

    fn allocate(&mut self, node: Node<T>) -> usize {
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = Some(node);
            slot
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Walks from the head to the slot holding position `index`.
    fn slot_at(&self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(IndexOutOfRange::at(index, self.len));
        }
        let mut slot = self.head;
        for _ in 0..index {
            slot = slot.and_then(|current| self.node(current)?.next);
        }
        slot.ok_or_else(|| IndexOutOfRange::at(index, self.len))
    }

    /// Returns a reference to the element at `index`, walking from the
    /// head in O(i).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.slot_at(index)?;
        self.node(slot)
            .map(|node| &node.element)
            .ok_or_else(|| IndexOutOfRange::at(index, self.len))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.slot_at(index)?;
        let len = self.len;
        self.node_mut(slot)
            .map(|node| &mut node.element)
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

    /// Returns a reference to the first element in O(1).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the chain is empty.
    #[inline]
    pub fn first(&self) -> Result<&T> {
        self.head
            .and_then(|slot| self.node(slot))
            .map(|node| &node.element)
            .ok_or_else(IndexOutOfRange::empty)
    }

    /// Returns a reference to the last element in O(1).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when the chain is empty.
    #[inline]
    pub fn last(&self) -> Result<&T> {
        self.tail
            .and_then(|slot| self.node(slot))
            .map(|node| &node.element)
            .ok_or_else(IndexOutOfRange::empty)
    }

    /// Appends an element at the back in O(1) via the tail slot.
    pub fn append(&mut self, element: T) {
        let slot = self.allocate(Node {
            element,
            next: None,
        });
        match self.tail {
            Some(tail_slot) => {
                if let Some(node) = self.node_mut(tail_slot) {
                    node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Prepends an element at the front in O(1).
    pub fn prepend(&mut self, element: T) {
        let next = self.head;
        let slot = self.allocate(Node { element, next });
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
        self.len += 1;
    }

    /// Inserts an element before position `index`. Position `0`
    /// delegates to [`prepend`](Self::prepend), position `len` to
    /// [`append`](Self::append); otherwise a new node is spliced after
    /// node `index - 1`.
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
        let previous = self.slot_at(index - 1)?;
        let next = self.node(previous).and_then(|node| node.next);
        let slot = self.allocate(Node { element, next });
        if let Some(node) = self.node_mut(previous) {
            node.next = Some(slot);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, unlinking its node.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index` is outside `[0, len)`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(IndexOutOfRange::at(index, self.len));
        }
        if index == 0 {
            let slot = self
                .head
                .ok_or_else(|| IndexOutOfRange::at(index, self.len))?;
            let node = self.slots[slot]
                .take()
                .ok_or_else(|| IndexOutOfRange::at(index, self.len))?;
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.free.push(slot);
            self.len -= 1;
            return Ok(node.element);
        }
        let previous = self.slot_at(index - 1)?;
        let slot = self
            .node(previous)
            .and_then(|node| node.next)
            .ok_or_else(|| IndexOutOfRange::at(index, self.len))?;
        let node = self.slots[slot]
            .take()
            .ok_or_else(|| IndexOutOfRange::at(index, self.len))?;
        if let Some(previous_node) = self.node_mut(previous) {
            previous_node.next = node.next;
        }
        if self.tail == Some(slot) {
            self.tail = Some(previous);
        }
        self.free.push(slot);
        self.len -= 1;
        Ok(node.element)
    }

    /// Returns an iterator over the elements in chain order.
    #[inline]
    pub fn iter(&self) -> LinkedChainIterator<'_, T> {
        LinkedChainIterator {
            chain: self,
            slot: self.head,
        }
    }
}

impl<T: Clone> LinkedChain<T> {
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
        result.extend(other.iter().cloned());
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

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`LinkedChain`], in chain order.
pub struct LinkedChainIterator<'a, T> {
    chain: &'a LinkedChain<T>,
    slot: Option<usize>,
}

impl<'a, T> Iterator for LinkedChainIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.chain.node(self.slot?)?;
        self.slot = node.next;
        Some(&node.element)
    }
}

impl<T> IntoIterator for LinkedChain<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the chain, yielding elements in chain order.
    fn into_iter(mut self) -> Self::IntoIter {
        let mut elements = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(slot) = current {
            match self.slots.get_mut(slot).and_then(Option::take) {
                Some(node) => {
                    current = node.next;
                    elements.push(node.element);
                }
                None => break,
            }
        }
        elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LinkedChain<T> {
    type Item = &'a T;
    type IntoIter = LinkedChainIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedChain<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedChain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedChain<T> {}

impl<T> FromIterator<T> for LinkedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<T> for LinkedChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
