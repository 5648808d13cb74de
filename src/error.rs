//! Inventory error model.

use thiserror::Error;

/// Result type used by the inventory engine.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Recoverable failures of inventory operations.
///
/// The inventory is left untouched whenever one of these is returned.
/// A search that finds nothing is not an error; see
/// [`SearchOutcome::NotFound`](crate::core::SearchOutcome::NotFound).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    /// An insert was attempted on a full backpack.
    #[error("backpack is full ({capacity} items)")]
    CapacityExceeded { capacity: usize },

    /// An index outside `[0, len)` was used.
    #[error("index {index} out of range for backpack of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Binary search was requested while the items are not sorted by name.
    #[error("backpack must be sorted by name before searching")]
    PreconditionNotMet,
}

/// Reasons a line typed at a prompt is rejected. The prompt is repeated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input. Try again.")]
    Empty,

    #[error("Too long (at most {max} characters). Try again.")]
    TooLong { max: usize },

    #[error("Invalid value. Enter an integer.")]
    NotAnInteger,

    #[error("Out of range [{min}, {max}].")]
    OutOfRange { min: i64, max: i64 },
}

/// Failures that end an interactive session.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
