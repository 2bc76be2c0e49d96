use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KdNearestError {
    /// A coordinate sequence had a different width than the tree's dimension.
    #[error("Dimension mismatch: expected {expected} coordinates, got {actual}.")]
    DimensionMismatch {
        /// The dimension the tree was built with.
        expected: usize,
        /// The number of coordinates actually supplied.
        actual: usize,
    },
}

/// A crate-wide result alias.
pub type Result<T> = std::result::Result<T, KdNearestError>;
