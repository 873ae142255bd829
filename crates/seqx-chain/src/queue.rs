//! FIFO queue over the node chain.

use std::fmt;

use seqx_log::info;

use crate::error::ChainError;
use crate::list::DoublyLinkedList;

/// A first-in, first-out queue.
///
/// Backed by the growing node chain, so there is no fixed capacity and no
/// overflow case; only the fail-on-empty contract remains, matching the
/// array's `pop`.
///
/// # Examples
///
/// ```
/// use seqx_chain::{ChainError, Queue};
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.peek(), Ok(&1));
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert_eq!(queue.dequeue(), Err(ChainError::Underflow));
/// ```
pub struct Queue<T> {
    chain: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Queue {
            chain: DoublyLinkedList::new(),
        }
    }

    /// Number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Adds `value` at the rear.
    pub fn enqueue(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Removes and returns the front element.
    ///
    /// Fails with [`ChainError::Underflow`] on an empty queue.
    pub fn dequeue(&mut self) -> Result<T, ChainError> {
        self.chain.pop_front()
    }

    /// Front element without removing it.
    ///
    /// Fails with [`ChainError::Underflow`] on an empty queue.
    pub fn peek(&self) -> Result<&T, ChainError> {
        self.chain.front()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.chain.clear();
    }
}

impl<T: fmt::Display> Queue<T> {
    /// Logs the contents front-to-rear, diagnostic only.
    pub fn show(&self) {
        info!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        for n in 1..=5 {
            queue.enqueue(n);
        }
        assert_eq!(queue.len(), 5);

        for n in 1..=5 {
            assert_eq!(queue.dequeue(), Ok(n));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_empty_underflows() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(queue.dequeue(), Err(ChainError::Underflow));
        assert_eq!(queue.peek(), Err(ChainError::Underflow));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = Queue::new();
        queue.enqueue(7);
        assert_eq!(queue.peek(), Ok(&7));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Ok(7));
    }

    #[test]
    fn test_clear() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.clear();
        assert!(queue.is_empty());

        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Ok(3));
    }

    #[test]
    fn test_display_render() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.to_string(), "{1, 2}");
    }
}
