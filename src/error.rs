use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KdTreeError {
    /// A tree was requested from zero points.
    #[error("Cannot build a k-d tree from an empty set of points.")]
    EmptyInput,

    /// A point or query does not have the dimensionality of its batch or tree.
    #[error("Expected a point with {expected} dimensions, got {actual}.")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Encoding the tree to JSON failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KdTreeError>;
