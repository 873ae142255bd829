//! Owned raw storage for the dynamic array.
//!
//! [`RawBuf`] is a single contiguous heap allocation of element slots,
//! allocated through `std::alloc` with an explicit [`Layout`] and released
//! on drop. It tracks only capacity; which slots hold live elements is the
//! caller's business, so the buffer never reads, drops, or copies elements
//! on its own.
//!
//! Reallocation is expressed as "construct a new buffer, move the live
//! prefix, swap" by the caller, so a half-built state is never observable.

use std::alloc::{self, Layout};
use std::mem;
use std::ptr::NonNull;

use crate::error::ArrayError;

/// An owned, uninitialized allocation of `capacity` slots of `T`.
///
/// Invariants:
/// - `capacity >= 1`
/// - for zero-sized `T` the pointer is dangling and nothing is allocated
/// - the allocation is exclusively owned; dropping the buffer releases it
pub struct RawBuf<T> {
    /// Start of the allocation (dangling for zero-sized `T`).
    ptr: NonNull<T>,
    /// Number of element slots.
    cap: usize,
}

// SAFETY: RawBuf exclusively owns its allocation and hands out access only
// through &self/&mut self, so moving it across threads is sound whenever the
// element type allows it.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Allocates a buffer of `capacity` slots.
    ///
    /// Fails with [`ArrayError::InvalidCapacity`] for a zero capacity and
    /// [`ArrayError::AllocationFailed`] when the allocator refuses the
    /// request.
    pub fn new(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Err(ArrayError::InvalidCapacity { requested: 0 });
        }

        if mem::size_of::<T>() == 0 {
            // Zero-sized elements need no storage; any number of them "fit".
            return Ok(RawBuf {
                ptr: NonNull::dangling(),
                cap: capacity,
            });
        }

        let layout = Layout::array::<T>(capacity)
            .map_err(|_| ArrayError::AllocationFailed { bytes: usize::MAX })?;

        // SAFETY: layout has non-zero size (T is not zero-sized and
        // capacity >= 1, both checked above).
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>())
            .ok_or(ArrayError::AllocationFailed { bytes: layout.size() })?;

        Ok(RawBuf { ptr, cap: capacity })
    }

    /// Number of element slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Pointer to the first slot.
    #[must_use]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within `[0, capacity]`; the one-past-the-end pointer
    /// is valid only for provenance arithmetic, never for access.
    #[must_use]
    pub unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        // SAFETY: index stays within the allocation per the contract above.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Moves the value out of slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within `[0, capacity)` and the slot must hold a live
    /// element that is not read again afterwards.
    pub unsafe fn read(&self, index: usize) -> T {
        // SAFETY: per the contract, the slot is in bounds and initialized.
        unsafe { self.slot(index).read() }
    }

    /// Writes `value` into slot `index` without dropping the previous
    /// contents.
    ///
    /// # Safety
    ///
    /// `index` must be within `[0, capacity)`; any previous live element in
    /// the slot is leaked unless it was moved out first.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: per the contract, the slot is in bounds.
        unsafe { self.slot(index).write(value) }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if mem::size_of::<T>() == 0 {
            return;
        }

        // Layout::array succeeded at construction time for this capacity.
        let layout = Layout::array::<T>(self.cap)
            .expect("layout was valid at allocation time");

        // SAFETY: ptr was produced by alloc::alloc with this exact layout
        // and is released exactly once.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_capacity() {
        assert_eq!(
            RawBuf::<u32>::new(0).err(),
            Some(ArrayError::InvalidCapacity { requested: 0 })
        );
    }

    #[test]
    fn test_allocates_requested_slots() {
        let buf = RawBuf::<u64>::new(16).unwrap();
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let mut buf = RawBuf::<u32>::new(4).unwrap();
        unsafe {
            buf.write(0, 7);
            buf.write(3, 11);
            assert_eq!(buf.read(0), 7);
            assert_eq!(buf.read(3), 11);
        }
    }

    #[test]
    fn test_zero_sized_elements() {
        let buf = RawBuf::<()>::new(8).unwrap();
        assert_eq!(buf.capacity(), 8);
    }
}
