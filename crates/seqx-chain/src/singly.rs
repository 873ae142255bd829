//! The singly-linked node chain.
//!
//! [`SinglyLinkedList`] is the forward-only sibling of
//! [`DoublyLinkedList`](crate::DoublyLinkedList): one link per node, a tail
//! pointer for O(1) appends, and indexed access that always walks from the
//! head. With no back-links, `pop_back` would cost O(len) and is not
//! offered; callers that need cheap removal at both ends use the doubly
//! chain instead.
//!
//! # Examples
//!
//! ```
//! use seqx_chain::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.push_back(2);
//! list.push_front(1);
//! list.push_back(3);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Ok(&2));
//! assert_eq!(list.pop_front(), Ok(1));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use seqx_log::info;

use crate::error::ChainError;

/// A chain node. Private: no handle to it ever escapes the crate.
struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/// An owned singly-linked list.
///
/// Invariants:
/// - `len` equals the number of nodes reachable from `head` via `next`
/// - `head`/`tail` are both `None` exactly when `len == 0`
/// - `tail` is the unique node with `next == None`
pub struct SinglyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        SinglyLinkedList {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element, failing with [`ChainError::Underflow`] when empty.
    pub fn front(&self) -> Result<&T, ChainError> {
        match self.head {
            // SAFETY: head nodes are live for as long as the list owns them.
            Some(node) => Ok(unsafe { &(*node.as_ptr()).value }),
            None => Err(ChainError::Underflow),
        }
    }

    /// Last element, failing with [`ChainError::Underflow`] when empty.
    pub fn back(&self) -> Result<&T, ChainError> {
        match self.tail {
            // SAFETY: tail nodes are live for as long as the list owns them.
            Some(node) => Ok(unsafe { &(*node.as_ptr()).value }),
            None => Err(ChainError::Underflow),
        }
    }

    /// Prepends `value`.
    pub fn push_front(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            next: self.head,
        })));

        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends `value`.
    pub fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None })));

        match self.tail {
            // SAFETY: the old tail is live; its forward link gains the node.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Result<T, ChainError> {
        let node = self.head.ok_or(ChainError::Underflow)?;
        // SAFETY: the node was created by Box::leak in a push and is
        // reclaimed exactly once.
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Element at `index`, walking forward from the head.
    pub fn get(&self, index: usize) -> Result<&T, ChainError> {
        let node = self.node_at(index)?;
        // SAFETY: node_at returns a live node; the borrow is tied to &self.
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// Inserts `value` right after the element at `index`.
    pub fn insert_after_at(&mut self, index: usize, value: T) -> Result<(), ChainError> {
        let mut target = self.node_at(index)?;
        // SAFETY: target is live; the new node takes over its forward link
        // before anything can observe the chain.
        unsafe {
            let after = target.as_ref().next;
            let node = NonNull::from(Box::leak(Box::new(Node { value, next: after })));
            target.as_mut().next = Some(node);
            if after.is_none() {
                self.tail = Some(node);
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Node at `index`. Forward walk only; there are no back-links.
    fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>, ChainError> {
        if index >= self.len {
            return Err(ChainError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let mut cursor = self.head.expect("non-empty list has a head");
        for _ in 0..index {
            // SAFETY: index < len, so the forward walk stays on chain.
            cursor = unsafe { cursor.as_ref().next }
                .expect("chain shorter than its recorded length");
        }
        Ok(cursor)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Index of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        let mut cursor = self.head;
        let mut index = 0;
        while let Some(node) = cursor {
            // SAFETY: nodes reached through the chain are live.
            unsafe {
                if node.as_ref().value == *value {
                    return Some(index);
                }
                cursor = node.as_ref().next;
            }
            index += 1;
        }
        None
    }

    /// Removes the first element equal to `value`; returns whether one was
    /// found. Absent values and the empty list are a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut prev: Option<NonNull<Node<T>>> = None;
        let mut cursor = self.head;
        while let Some(node) = cursor {
            // SAFETY: nodes reached through the chain are live; the match is
            // reclaimed exactly once and its predecessor relinked around it.
            unsafe {
                if node.as_ref().value == *value {
                    let node = Box::from_raw(node.as_ptr());
                    match prev {
                        Some(mut prev) => prev.as_mut().next = node.next,
                        None => self.head = node.next,
                    }
                    if node.next.is_none() {
                        self.tail = prev;
                    }
                    self.len -= 1;
                    return true;
                }
                prev = cursor;
                cursor = node.as_ref().next;
            }
        }
        false
    }
}

impl<T: fmt::Display> SinglyLinkedList<T> {
    /// Logs the contents in order, diagnostic only.
    pub fn show(&self) {
        info!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    /// Renders the chain as `{a => b => c}`, links spelled out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut cursor = self.head;
        let mut first = true;
        while let Some(node) = cursor {
            if !first {
                write!(f, " => ")?;
            }
            first = false;
            // SAFETY: nodes reached through the chain are live.
            unsafe {
                write!(f, "{}", node.as_ref().value)?;
                cursor = node.as_ref().next;
            }
        }
        write!(f, "}}")
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> SinglyLinkedList<i32> {
        let mut list = SinglyLinkedList::new();
        for &v in values {
            list.push_back(v);
        }
        list
    }

    fn contents(list: &SinglyLinkedList<i32>) -> Vec<i32> {
        (0..list.len()).map(|i| *list.get(i).unwrap()).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), Err(ChainError::Underflow));
        assert_eq!(list.back(), Err(ChainError::Underflow));
    }

    #[test]
    fn test_push_front_and_back() {
        let mut list = SinglyLinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&3));
    }

    #[test]
    fn test_pop_front() {
        let mut list = filled(&[1, 2, 3]);
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Ok(3));
        assert_eq!(list.pop_front(), Err(ChainError::Underflow));
        assert!(list.is_empty());

        // The tail resets when the last node goes; a later push relinks it.
        list.push_back(4);
        assert_eq!(list.back(), Ok(&4));
    }

    #[test]
    fn test_indexed_lookup() {
        let list = filled(&[5, 6, 7]);
        assert_eq!(list.get(0), Ok(&5));
        assert_eq!(list.get(2), Ok(&7));
        assert_eq!(
            list.get(3),
            Err(ChainError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_insert_after_at_middle() {
        let mut list = filled(&[1, 3]);
        list.insert_after_at(0, 2).unwrap();
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_after_at_tail_moves_tail() {
        let mut list = filled(&[1, 2]);
        list.insert_after_at(1, 3).unwrap();
        assert_eq!(list.back(), Ok(&3));

        list.push_back(4);
        assert_eq!(contents(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_after_at_out_of_range() {
        let mut list = filled(&[1]);
        assert_eq!(
            list.insert_after_at(1, 2),
            Err(ChainError::IndexOutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_find() {
        let list = filled(&[5, 6, 7, 6]);
        assert_eq!(list.find(&6), Some(1));
        assert_eq!(list.find(&5), Some(0));
        assert_eq!(list.find(&9), None);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list = filled(&[1, 2, 3, 4]);

        assert!(list.remove(&1));
        assert_eq!(contents(&list), vec![2, 3, 4]);
        assert_eq!(list.front(), Ok(&2));

        assert!(list.remove(&3));
        assert_eq!(contents(&list), vec![2, 4]);

        // Removing the tail must retarget the tail pointer.
        assert!(list.remove(&4));
        assert_eq!(list.back(), Ok(&2));
        list.push_back(5);
        assert_eq!(contents(&list), vec![2, 5]);

        assert!(!list.remove(&9));
    }

    #[test]
    fn test_remove_on_empty_is_noop() {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(!list.remove(&1));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_only_element_resets_both_ends() {
        let mut list = filled(&[7]);
        assert!(list.remove(&7));
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(ChainError::Underflow));
        assert_eq!(list.back(), Err(ChainError::Underflow));

        list.push_front(8);
        assert_eq!(list.back(), Ok(&8));
    }

    #[test]
    fn test_clear() {
        let mut list = filled(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());

        list.push_back(9);
        assert_eq!(contents(&list), vec![9]);
    }

    #[test]
    fn test_display_render() {
        let list = filled(&[1, 2, 3]);
        assert_eq!(list.to_string(), "{1 => 2 => 3}");

        let empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(empty.to_string(), "{}");
    }

    #[test]
    fn test_non_copy_elements() {
        let mut list = SinglyLinkedList::new();
        list.push_back("alpha".to_string());
        list.push_back("beta".to_string());
        list.push_front("gamma".to_string());

        assert_eq!(list.pop_front(), Ok("gamma".to_string()));
        assert!(list.remove(&"beta".to_string()));
        assert_eq!(list.get(0), Ok(&"alpha".to_string()));
    }
}
