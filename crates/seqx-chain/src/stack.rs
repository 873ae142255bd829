//! LIFO stack over the node chain.

use std::fmt;

use seqx_log::info;

use crate::error::ChainError;
use crate::list::DoublyLinkedList;

/// A last-in, first-out stack.
///
/// Backed by the growing node chain, so pushes never overflow; pops and
/// peeks fail on empty with the same contract as the array's `pop`.
///
/// # Examples
///
/// ```
/// use seqx_chain::{ChainError, Stack};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(ChainError::Underflow));
/// ```
pub struct Stack<T> {
    chain: DoublyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Stack {
            chain: DoublyLinkedList::new(),
        }
    }

    /// Number of stacked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Pushes `value` on top.
    pub fn push(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Removes and returns the top element.
    ///
    /// Fails with [`ChainError::Underflow`] on an empty stack.
    pub fn pop(&mut self) -> Result<T, ChainError> {
        self.chain.pop_back()
    }

    /// Top element without removing it.
    ///
    /// Fails with [`ChainError::Underflow`] on an empty stack.
    pub fn top(&self) -> Result<&T, ChainError> {
        self.chain.back()
    }

    /// Bottom element, the oldest one still stacked.
    ///
    /// Fails with [`ChainError::Underflow`] on an empty stack.
    pub fn bottom(&self) -> Result<&T, ChainError> {
        self.chain.front()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.chain.clear();
    }
}

impl<T: fmt::Display> Stack<T> {
    /// Logs the contents bottom-to-top, diagnostic only.
    pub fn show(&self) {
        info!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
