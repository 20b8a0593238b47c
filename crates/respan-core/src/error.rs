//! Error types for respan core.

use thiserror::Error;

/// Precondition failures surfaced by [`crate::redistribute`].
///
/// Both are detected before any grid is allocated; a failed call never
/// returns a partially written grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespanError {
    /// The destination selection is a single cell, so the formula was not
    /// entered as a multi-cell array operation.
    #[error("destination is a single cell, not a multi-cell array selection")]
    NotArrayEntered,

    /// The source block has more than one row and more than one column.
    #[error("source is not a single row or column of values")]
    InvalidSourceShape,
}

pub type Result<T> = std::result::Result<T, RespanError>;
