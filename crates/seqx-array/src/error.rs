//! Error types for the dynamic array.
//!
//! Every violated precondition is reported at the call site through one of
//! these variants; the array is always left in its last valid state, with no
//! partial mutation observable on failure.

use std::fmt;

/// Errors raised by [`DynArray`](crate::DynArray) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// An index argument fell outside its operation's legal range.
    ///
    /// Reads are legal in `[0, len)`, the write-append form in `[0, len]`,
    /// and a deletion range must stay within `[0, len)`.
    IndexOutOfBounds {
        /// The offending index (for range deletions, the exclusive end).
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },

    /// A requested capacity was zero; capacities start at 1.
    InvalidCapacity {
        /// The rejected capacity value.
        requested: usize,
    },

    /// A non-growing append was attempted on a full array.
    ///
    /// Only `push` grows; the write-slot form at `index == len` fails
    /// instead of reallocating.
    CapacityExhausted {
        /// The capacity at the time of the call.
        capacity: usize,
    },

    /// A pop or removal was requested on an empty array.
    Underflow,

    /// The underlying buffer allocation failed.
    AllocationFailed {
        /// The size of the failed request in bytes.
        bytes: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            ArrayError::InvalidCapacity { requested } => {
                write!(f, "invalid capacity {requested}: capacity must be at least 1")
            }
            ArrayError::CapacityExhausted { capacity } => {
                write!(f, "array is full at capacity {capacity}: use push to grow")
            }
            ArrayError::Underflow => {
                write!(f, "cannot remove from an empty array")
            }
            ArrayError::AllocationFailed { bytes } => {
                write!(f, "buffer allocation of {bytes} bytes failed")
            }
        }
    }
}

impl std::error::Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ArrayError::IndexOutOfBounds { index: 5, len: 3 };
        assert_eq!(e.to_string(), "index 5 out of bounds for length 3");

        let e = ArrayError::InvalidCapacity { requested: 0 };
        assert!(e.to_string().contains("at least 1"));

        let e = ArrayError::CapacityExhausted { capacity: 4 };
        assert!(e.to_string().contains("full at capacity 4"));

        assert_eq!(ArrayError::Underflow.to_string(), "cannot remove from an empty array");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ArrayError::Underflow);
    }
}
