//! Errors returned by array operations.

use alloc::collections::TryReserveError;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ArrayError> = core::result::Result<T, E>;

/// Failure of an [`Array`](crate::Array) operation.
///
/// Every variant is returned before the array is modified, so the array is
/// still usable (and unchanged) after an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// The index does not resolve to a live element.
    #[error("index {index} is out of bounds for an array of {size} elements")]
    IndexOutOfBounds { index: isize, size: usize },

    /// A pop was attempted on an array with no live elements.
    #[error("cannot pop from an empty array")]
    Empty,

    /// The element passed in does not have the array's element width.
    #[error("element is {actual} bytes wide, the array stores {expected}-byte elements")]
    ElementSizeMismatch { expected: usize, actual: usize },

    /// Element types must occupy at least one byte.
    #[error("element size must be non-zero")]
    ZeroSizedElement,

    /// `capacity * element_size` does not fit in `usize`.
    #[error("a capacity of {capacity} elements of {element_size} bytes overflows the address space")]
    CapacityOverflow { capacity: usize, element_size: usize },

    /// The allocator refused to grow the backing buffer.
    #[error("failed to allocate {requested_bytes} bytes for the element buffer")]
    Allocation {
        requested_bytes: usize,
        #[source]
        source: TryReserveError,
    },
}
