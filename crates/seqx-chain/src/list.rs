//! The doubly-linked node chain.
//!
//! [`DoublyLinkedList`] owns its nodes exclusively; the node type never
//! leaves this module, so callers address elements by index or by value.
//! Indexed operations walk from the head or the tail depending on which
//! side of the midpoint the index falls, bounding every lookup at
//! `len / 2` hops.
//!
//! # Examples
//!
//! ```
//! use seqx_chain::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
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
use std::mem;
use std::ptr::NonNull;

use seqx_log::info;

use crate::error::ChainError;

/// A chain node. Private: no handle to it ever escapes the crate.
struct Node<T> {
    value: T,
    prev: Option<NonNull<Node<T>>>,
    next: Option<NonNull<Node<T>>>,
}

/// An owned doubly-linked list.
///
/// Invariants:
/// - `len` equals the number of nodes reachable from `head` via `next`
/// - `head`/`tail` are both `None` exactly when `len == 0`
/// - every node's `prev`/`next` links mirror each other
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        DoublyLinkedList {
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
            prev: None,
            next: self.head,
        })));

        match self.head {
            // SAFETY: the old head is live; its back-link gains the new node.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends `value`.
    pub fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: self.tail,
            next: None,
        })));

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
        // SAFETY: the head node belongs to this chain and is unlinked once.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Result<T, ChainError> {
        let node = self.tail.ok_or(ChainError::Underflow)?;
        // SAFETY: the tail node belongs to this chain and is unlinked once.
        Ok(unsafe { self.unlink(node) })
    }

    /// Element at `index`, walking from the nearer end.
    pub fn get(&self, index: usize) -> Result<&T, ChainError> {
        let node = self.node_at(index)?;
        // SAFETY: node_at returns a live node; the borrow is tied to &self.
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// Replaces the element at `index`.
    pub fn update_at(&mut self, index: usize, value: T) -> Result<(), ChainError> {
        let mut node = self.node_at(index)?;
        // SAFETY: node is live and exclusively reachable through &mut self.
        unsafe { node.as_mut().value = value };
        Ok(())
    }

    /// Inserts `value` right after the element at `index`.
    pub fn insert_after_at(&mut self, index: usize, value: T) -> Result<(), ChainError> {
        let mut target = self.node_at(index)?;
        // SAFETY: target and its neighbor are live; all four affected links
        // are rewired before anything can observe the chain.
        unsafe {
            let after = target.as_ref().next;
            let node = NonNull::from(Box::leak(Box::new(Node {
                value,
                prev: Some(target),
                next: after,
            })));
            target.as_mut().next = Some(node);
            match after {
                Some(mut after) => after.as_mut().prev = Some(node),
                None => self.tail = Some(node),
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Reverses the list in place by swapping values from both ends toward
    /// the middle. No relinking; a no-op on empty and single-element lists.
    pub fn reverse(&mut self) {
        let mut start = self.head;
        let mut end = self.tail;

        for _ in 0..self.len / 2 {
            let mut left = start.expect("reverse cursor left the chain");
            let mut right = end.expect("reverse cursor left the chain");
            // SAFETY: left and right are distinct live nodes; the cursors
            // meet in the middle before they could alias.
            unsafe {
                mem::swap(&mut left.as_mut().value, &mut right.as_mut().value);
                start = left.as_ref().next;
                end = right.as_ref().prev;
            }
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Node at `index`, walking from whichever end is closer.
    fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>, ChainError> {
        if index >= self.len {
            return Err(ChainError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let mid = (self.len - 1) / 2;
        let mut cursor;
        if index <= mid {
            cursor = self.head.expect("non-empty list has a head");
            for _ in 0..index {
                // SAFETY: index < len, so the forward walk stays on chain.
                cursor = unsafe { cursor.as_ref().next }
                    .expect("chain shorter than its recorded length");
            }
        } else {
            cursor = self.tail.expect("non-empty list has a tail");
            for _ in 0..(self.len - 1 - index) {
                // SAFETY: index < len, so the backward walk stays on chain.
                cursor = unsafe { cursor.as_ref().prev }
                    .expect("chain shorter than its recorded length");
            }
        }
        Ok(cursor)
    }

    /// Detaches `node` from the chain and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must belong to this list and must not be used afterwards.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // SAFETY: the node was created by Box::leak in a push and is
        // reclaimed exactly once.
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        match node.prev {
            // SAFETY: neighbor links mirror the unlinked node's links.
            Some(mut prev) => unsafe { prev.as_mut().next = node.next },
            None => self.head = node.next,
        }
        match node.next {
            // SAFETY: neighbor links mirror the unlinked node's links.
            Some(mut next) => unsafe { next.as_mut().prev = node.prev },
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.value
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
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
    /// found. Absent values are a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut cursor = self.head;
        while let Some(node) = cursor {
            // SAFETY: nodes reached through the chain are live; the cursor
            // is advanced before the match is unlinked.
            unsafe {
                let next = node.as_ref().next;
                if node.as_ref().value == *value {
                    self.unlink(node);
                    return true;
                }
                cursor = next;
            }
        }
        false
    }
}

impl<T: fmt::Display> DoublyLinkedList<T> {
    /// Logs the contents in order, diagnostic only.
    pub fn show(&self) {
        info!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    /// Renders the sequence as `{a, b, c}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut cursor = self.head;
        let mut first = true;
        while let Some(node) = cursor {
            if !first {
                write!(f, ", ")?;
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

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> DoublyLinkedList<i32> {
        let mut list = DoublyLinkedList::new();
        for &v in values {
            list.push_back(v);
        }
        list
    }

    fn contents(list: &DoublyLinkedList<i32>) -> Vec<i32> {
        (0..list.len()).map(|i| *list.get(i).unwrap()).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), Err(ChainError::Underflow));
        assert_eq!(list.back(), Err(ChainError::Underflow));
    }

    #[test]
    fn test_push_front_and_back() {
        let mut list = DoublyLinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&3));
    }

    #[test]
    fn test_pop_front_and_back() {
        let mut list = filled(&[1, 2, 3]);
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Err(ChainError::Underflow));
        assert_eq!(list.pop_back(), Err(ChainError::Underflow));
        assert!(list.is_empty());
    }

    #[test]
    fn test_indexed_lookup_from_both_ends() {
        let values: Vec<i32> = (0..11).collect();
        let list = filled(&values);

        // Indices on both sides of the midpoint resolve correctly, so the
        // head walk and the tail walk agree.
        for (index, expected) in values.iter().enumerate() {
            assert_eq!(list.get(index), Ok(expected));
        }
        assert_eq!(
            list.get(11),
            Err(ChainError::IndexOutOfBounds { index: 11, len: 11 })
        );
    }

    #[test]
    fn test_update_at() {
        let mut list = filled(&[1, 2, 3]);
        list.update_at(1, 9).unwrap();
        assert_eq!(contents(&list), vec![1, 9, 3]);
        assert!(list.update_at(3, 0).is_err());
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

        // The new tail links forward correctly for later pushes.
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

        assert!(list.remove(&4));
        assert_eq!(contents(&list), vec![2]);
        assert_eq!(list.back(), Ok(&2));

        assert!(!list.remove(&9));
        assert!(list.remove(&2));
        assert!(list.is_empty());
    }

    #[test]
    fn test_reverse() {
        let mut even = filled(&[1, 2, 3, 4]);
        even.reverse();
        assert_eq!(contents(&even), vec![4, 3, 2, 1]);

        let mut odd = filled(&[1, 2, 3]);
        odd.reverse();
        assert_eq!(contents(&odd), vec![3, 2, 1]);

        let mut single = filled(&[1]);
        single.reverse();
        assert_eq!(contents(&single), vec![1]);

        let mut empty: DoublyLinkedList<i32> = DoublyLinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut list = filled(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(ChainError::Underflow));

        // The list is reusable after a clear.
        list.push_back(9);
        assert_eq!(contents(&list), vec![9]);
    }

    #[test]
    fn test_display_render() {
        let list = filled(&[1, 2, 3]);
        assert_eq!(list.to_string(), "{1, 2, 3}");

        let empty: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert_eq!(empty.to_string(), "{}");
    }

    #[test]
    fn test_non_copy_elements() {
        let mut list = DoublyLinkedList::new();
        list.push_back("alpha".to_string());
        list.push_back("beta".to_string());
        list.push_front("gamma".to_string());

        assert_eq!(list.pop_back(), Ok("beta".to_string()));
        assert!(list.remove(&"gamma".to_string()));
        list.update_at(0, "delta".to_string()).unwrap();
        assert_eq!(list.get(0), Ok(&"delta".to_string()));
    }
}
