//! Error types for the node-chain containers.

use std::fmt;

/// Errors raised by the chain containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// A pop, peek, or removal was requested on an empty container.
    Underflow,

    /// An index argument fell outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::Underflow => {
                write!(f, "cannot read or remove from an empty container")
            }
            ChainError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl std::error::Error for ChainError {}
