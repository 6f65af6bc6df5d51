use crate::mode::ModeKind;
use thiserror::Error;

/// Error types for `Buffer` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BufferError {
    /// A linear-mode buffer (`Normal`, `Lifo`, `Fifo`) is full and rejected a write
    #[error("Capacity exceeded: {mode} buffer holds {capacity} elements and is full")]
    CapacityExceeded {
        /// Number of slots in the buffer
        capacity: usize,
        /// Mode of the buffer that rejected the write
        mode: ModeKind,
    },
    /// There is no written, unread element to return
    #[error("Empty read: {mode} buffer has no element to read")]
    EmptyRead {
        /// Mode of the buffer that was read
        mode: ModeKind,
    },
    /// Direct slot access beyond the buffer length
    #[error("Index out of range: index {index} is beyond buffer length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Number of slots in the buffer
        length: usize,
    },
    /// Range assignment with a value count different from the range length
    #[error("Length mismatch: range holds {expected} slots, but {provided} values were provided")]
    LengthMismatch {
        /// Number of slots in the target range
        expected: usize,
        /// Number of values provided
        provided: usize,
    },
    /// A buffer needs at least one slot
    #[error("Invalid capacity: {capacity}, a buffer needs at least one slot")]
    InvalidCapacity {
        /// Requested capacity
        capacity: usize,
    },
}
