//! Error types for sequence and deque operations.
//!
//! Every position-addressed operation in this crate fails with a single
//! error kind: [`IndexOutOfRange`]. Accessing the ends of an empty
//! structure (`first`, `last`, `peek`, `pop`) reports the same kind,
//! since both conditions mean "no valid element at the requested
//! position". The `try_get`/`try_find` query forms never fail and
//! return [`Option`] instead.

/// Error raised when an operation addresses a position outside the
/// valid range of a structure.
///
/// For element access and removal the valid range is `[0, len)`; for
/// insertion it is `[0, len]`. Ends access on an empty structure is
/// reported as `IndexOutOfRange { index: 0, len: 0 }`.
///
/// The `index` field is signed because [`splice`] resolves negative
/// indices from the end of the sequence and reports the caller's raw
/// index on failure.
///
/// [`splice`]: crate::sequence::Sequence::splice
///
/// # Examples
///
/// ```rust
/// use varseq::prelude::*;
///
/// let sequence = ArraySequence::from_slice(&[1, 2, 3]);
/// let error = sequence.get(3).unwrap_err();
/// assert_eq!(error, IndexOutOfRange { index: 3, len: 3 });
/// assert_eq!(
///     format!("{error}"),
///     "index 3 out of range for sequence of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The requested position.
    pub index: isize,
    /// The length of the structure at the time of the failure.
    pub len: usize,
}

impl IndexOutOfRange {
    /// Creates an error for an unsigned position.
    ///
    /// Positions beyond `isize::MAX` are saturated; such a structure
    /// cannot exist in addressable memory anyway.
    #[inline]
    #[must_use]
    pub fn at(index: usize, len: usize) -> Self {
        Self {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }

    /// Creates the error reported by ends access on an empty structure.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { index: 0, len: 0 }
    }
}

impl std::fmt::Display for IndexOutOfRange {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of range for sequence of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Convenience alias for operations that fail with [`IndexOutOfRange`].
pub type Result<T> = std::result::Result<T, IndexOutOfRange>;
