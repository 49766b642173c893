//! Error types for the vantage-vptree crate.

/// Error type for the fallible operations of the vantage-vptree crate.
///
/// Tree construction and search never fail on their own; these errors only
/// surface through direct use of the exposed selection primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VpTreeError {
    /// Returned when a selection rank falls outside the valid bound.
    #[error("rank {rank} is out of range for {len} elements")]
    OutOfRange {
        /// The requested rank (1-based for `nth_element`, 0-based for `select`).
        rank: usize,
        /// Number of elements the rank was checked against.
        len: usize,
    },

    /// Returned when an inclusive index range does not fit the sequence.
    #[error("range [{left}, {right}] is invalid for a sequence of length {len}")]
    InvalidRange {
        /// First index of the range.
        left: usize,
        /// Last index of the range (inclusive).
        right: usize,
        /// Length of the sequence.
        len: usize,
    },
}
