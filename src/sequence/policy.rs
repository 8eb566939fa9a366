//! Mutation-policy wrappers: in-place vs. copy-on-write handles.
//!
//! Every sequence operation set in this crate can be used under two
//! disciplines, fixed at construction by wrapping the representation:
//!
//! - [`Mutable`]: `instance()` hands back the wrapped sequence itself;
//!   callers mutate in place through the handle they already hold.
//! - [`Immutable`]: `instance()` hands back a detached deep copy, so a
//!   caller that "gets a handle to write through" can never touch the
//!   original.
//!
//! `instance()` is the *only* operation the policy changes. Cloning
//! always produces a fully independent copy, and the transforms
//! (`map`, `filter`, `concat`, …) always allocate a new result,
//! regardless of policy.
//!
//! # Examples
//!
//! ```rust
//! use varseq::prelude::*;
//!
//! let mut mutable = Mutable::new(ArraySequence::from_slice(&[1, 2]));
//! mutable.instance().append(3);
//! assert_eq!(mutable.len(), 3);
//!
//! let immutable = Immutable::new(ArraySequence::from_slice(&[1, 2]));
//! let mut detached = immutable.instance();
//! detached.append(3);
//! assert_eq!(immutable.len(), 2); // original provably unaffected
//! assert_eq!(detached.len(), 3);
//! ```

use std::fmt;

use crate::error::Result;

use super::Sequence;

/// A sequence handle with in-place mutation policy.
///
/// [`instance`](Self::instance) returns the wrapped sequence itself.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Mutable<S> {
    inner: S,
}

impl<S: Sequence> Mutable<S> {
    /// Wraps a sequence under the in-place policy.
    #[inline]
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Creates a wrapped sequence holding a copy of `items`.
    #[must_use]
    pub fn from_slice(items: &[S::Item]) -> Self
    where
        S: FromIterator<S::Item>,
    {
        Self::new(S::from_slice(items))
    }

    /// Returns the mutation handle: the wrapped sequence itself.
    /// Mutations through it are visible in this wrapper.
    #[inline]
    pub fn instance(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Returns read access to the wrapped sequence.
    #[inline]
    #[must_use]
    pub const fn sequence(&self) -> &S {
        &self.inner
    }

    /// Unwraps the sequence, discarding the policy.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// A sequence handle with copy-on-write policy.
///
/// [`instance`](Self::instance) returns a detached deep copy; the
/// wrapped sequence can only change through operations invoked on the
/// wrapper itself, never through a handed-out handle.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Immutable<S> {
    inner: S,
}

impl<S: Sequence> Immutable<S> {
    /// Wraps a sequence under the copy-on-write policy.
    #[inline]
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Creates a wrapped sequence holding a copy of `items`.
    #[must_use]
    pub fn from_slice(items: &[S::Item]) -> Self
    where
        S: FromIterator<S::Item>,
    {
        Self::new(S::from_slice(items))
    }

    /// Returns the mutation handle: an independently owned deep copy.
    /// Mutating it leaves this wrapper's elements untouched.
    #[inline]
    #[must_use]
    pub fn instance(&self) -> S {
        self.inner.clone()
    }

    /// Returns read access to the wrapped sequence.
    #[inline]
    #[must_use]
    pub const fn sequence(&self) -> &S {
        &self.inner
    }

    /// Unwraps the sequence, discarding the policy.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

// =============================================================================
// Sequence Capability (both policies)
// =============================================================================

macro_rules! delegate_sequence {
    ($wrapper:ident) => {
        impl<S: Sequence> Sequence for $wrapper<S> {
            type Item = S::Item;

            #[inline]
            fn len(&self) -> usize {
                self.inner.len()
            }

            #[inline]
            fn get(&self, index: usize) -> Result<&S::Item> {
                self.inner.get(index)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Result<&mut S::Item> {
                self.inner.get_mut(index)
            }

            #[inline]
            fn first(&self) -> Result<&S::Item> {
                self.inner.first()
            }

            #[inline]
            fn last(&self) -> Result<&S::Item> {
                self.inner.last()
            }

            #[inline]
            fn append(&mut self, element: S::Item) {
                self.inner.append(element);
            }

            #[inline]
            fn prepend(&mut self, element: S::Item) {
                self.inner.prepend(element);
            }

            #[inline]
            fn insert(&mut self, element: S::Item, index: usize) -> Result<()> {
                self.inner.insert(element, index)
            }

            #[inline]
            fn remove(&mut self, index: usize) -> Result<S::Item> {
                self.inner.remove(index)
            }

            fn iter(&self) -> impl Iterator<Item = &S::Item> {
                self.inner.iter()
            }
        }

        impl<S: fmt::Debug> fmt::Debug for $wrapper<S> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_tuple(stringify!($wrapper))
                    .field(&self.inner)
                    .finish()
            }
        }

        impl<S: Sequence + FromIterator<S::Item>> FromIterator<S::Item> for $wrapper<S> {
            fn from_iter<I: IntoIterator<Item = S::Item>>(iter: I) -> Self {
                Self {
                    inner: iter.into_iter().collect(),
                }
            }
        }

        impl<S: Sequence + Extend<S::Item>> Extend<S::Item> for $wrapper<S> {
            fn extend<I: IntoIterator<Item = S::Item>>(&mut self, iter: I) {
                self.inner.extend(iter);
            }
        }
    };
}

delegate_sequence!(Mutable);
delegate_sequence!(Immutable);
