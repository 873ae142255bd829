//! `seqx` node-chain containers.
//!
//! This crate provides the pointer-chasing siblings of the dynamic array:
//!
//! - [`SinglyLinkedList`]: a forward-only node chain with O(1) ends
//! - [`DoublyLinkedList`]: an owned node chain with indexed access that
//!   walks from whichever end is nearer to the target
//! - [`Queue`]: FIFO adapter over the doubly-linked chain
//! - [`Stack`]: LIFO adapter over the doubly-linked chain
//!
//! Node structure is private to the crate; callers address elements by
//! index or by value only.

pub mod error;
pub mod list;
pub mod queue;
pub mod singly;
pub mod stack;

pub use error::ChainError;
pub use list::DoublyLinkedList;
pub use queue::Queue;
pub use singly::SinglyLinkedList;
pub use stack::Stack;
