//! # varseq
//!
//! Interchangeable sequence representations behind one polymorphic
//! contract, plus double-ended queues built on segmented storage.
//!
//! ## Overview
//!
//! - **Storage**: the leaf stores (contiguous [`ArrayBuffer`],
//!   linked [`LinkedChain`], and chunked [`SegmentedChain`])
//! - **Sequence**: the [`Sequence`] trait and its representations:
//!   [`ArraySequence`], [`ListSequence`], and the threshold-switching
//!   [`AdaptiveSequence`]
//! - **Policy**: [`Mutable`] and [`Immutable`] wrappers fixing, at
//!   construction, whether `instance()` hands out the sequence itself
//!   or a detached copy
//! - **Deque**: [`Deque`] over segmented storage, and
//!   [`SequenceDeque`] over any sequence representation
//!
//! Every bounds failure across the crate is one error kind,
//! [`IndexOutOfRange`]; named operations return `Result`, while the
//! `Index` operators panic with the same message.
//!
//! ## Example
//!
//! ```rust
//! use varseq::prelude::*;
//!
//! let mut sequence = ArraySequence::from_slice(&[1, 2, 3, 4, 5]);
//! sequence.append(10);
//! sequence.prepend(0);
//! sequence.insert(99, 2)?;
//!
//! let collected: Vec<i32> = sequence.iter().copied().collect();
//! assert_eq!(collected, vec![0, 1, 99, 2, 3, 4, 5, 10]);
//! # Ok::<(), varseq::error::IndexOutOfRange>(())
//! ```
//!
//! [`ArrayBuffer`]: crate::storage::ArrayBuffer
//! [`LinkedChain`]: crate::storage::LinkedChain
//! [`SegmentedChain`]: crate::storage::SegmentedChain
//! [`Sequence`]: crate::sequence::Sequence
//! [`ArraySequence`]: crate::sequence::ArraySequence
//! [`ListSequence`]: crate::sequence::ListSequence
//! [`AdaptiveSequence`]: crate::sequence::AdaptiveSequence
//! [`Mutable`]: crate::sequence::Mutable
//! [`Immutable`]: crate::sequence::Immutable
//! [`Deque`]: crate::deque::Deque
//! [`SequenceDeque`]: crate::deque::SequenceDeque
//! [`IndexOutOfRange`]: crate::error::IndexOutOfRange

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use varseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::deque::{Deque, SequenceDeque};
    pub use crate::error::{IndexOutOfRange, Result};
    pub use crate::sequence::{
        ADAPTIVE_SWITCH_THRESHOLD, AdaptiveSequence, ArraySequence, Immutable, ListSequence,
        Mutable, Sequence,
    };
    pub use crate::storage::{ArrayBuffer, LinkedChain, SEGMENT_CAPACITY, SegmentedChain};
}

pub mod deque;
pub mod error;
pub mod sequence;
pub mod storage;
