//! Leaf storage structures backing the sequence representations.
//!
//! Three stores with different cost profiles, one bounds-checked
//! contract:
//!
//! - [`ArrayBuffer`]: contiguous block; O(1) access, O(n) front edits
//! - [`LinkedChain`]: linked nodes; O(1) end edits, O(i) access
//! - [`SegmentedChain`]: fixed-capacity chunks; O(C) edits anywhere,
//!   amortized-cheap access
//!
//! The sequence layer ([`crate::sequence`]) wraps the first two; the
//! deque ([`crate::deque::Deque`]) builds directly on the third.

mod array;
mod linked;
mod segmented;

pub use array::ArrayBuffer;
pub use linked::LinkedChain;
pub use linked::LinkedChainIterator;
pub use segmented::SEGMENT_CAPACITY;
pub use segmented::SegmentedChain;
pub use segmented::SegmentedChainIterator;
