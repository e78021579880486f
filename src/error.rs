//! Error types for numdispatch
//!
//! Recoverable faults (allocation, submission, precondition checks) are
//! reported through [`Error`]. Presenting a dtype outside the dispatched
//! type list is a programming error and panics instead; see
//! [`crate::dispatch`].

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using numdispatch's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in buffer operations
///
/// `Clone` so that the failure of a queued work item can be handed to
/// every waiter of its [`Event`](crate::runtime::Event).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Element type of a buffer differs from the one the operation expects
    #[error("DType mismatch: expected {expected}, got {got}")]
    DTypeMismatch {
        /// DType required by the operation
        expected: DType,
        /// DType actually presented
        got: DType,
    },

    /// `offset + count` reaches past the end of a buffer or host array
    #[error("Range [{offset}, {offset} + {count}) out of bounds for length {len}")]
    OutOfRange {
        /// First element of the requested range
        offset: usize,
        /// Number of elements requested
        count: usize,
        /// Length of the addressed buffer
        len: usize,
    },

    /// Device or host allocation failed
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// The device queue no longer accepts work
    #[error("Device queue is closed")]
    QueueClosed,

    /// Backend-specific error raised while executing device work
    #[error("Backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Create a dtype mismatch error
    pub fn dtype_mismatch(expected: DType, got: DType) -> Self {
        Self::DTypeMismatch { expected, got }
    }

    /// Create an out-of-range error
    pub fn out_of_range(offset: usize, count: usize, len: usize) -> Self {
        Self::OutOfRange { offset, count, len }
    }
}
