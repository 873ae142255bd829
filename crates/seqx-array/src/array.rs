//! The dynamic resizable array.
//!
//! [`DynArray`] owns a single contiguous buffer, a logical length, and a
//! physical capacity. Live elements always occupy the prefix `[0, len)`;
//! slots past `len` are uninitialized and never observed.
//!
//! # Growth and shrink policy
//!
//! Capacity doubles when an append finds the buffer full and halves only
//! once the length falls under a quarter of capacity, never below 1. The
//! gap between the two thresholds is deliberate: halving at half-full would
//! oscillate between reallocations under alternating push/pop at a
//! capacity boundary, while the quarter-full rule keeps both append and
//! remove amortized O(1).
//!
//! # Examples
//!
//! ```
//! use seqx_array::DynArray;
//!
//! let mut arr = DynArray::new();
//! arr.push(10);
//! arr.push(20);
//! arr.push(30);
//!
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.capacity(), 4); // 1 -> 2 -> 4
//! assert_eq!(arr.get(1), Ok(&20));
//!
//! arr.reverse();
//! assert_eq!(arr.get(0), Ok(&30));
//! assert_eq!(arr.pop(), Ok(10));
//! ```

use std::fmt;
use std::mem;
use std::ptr;
use std::slice;

use seqx_log::{info, trace};

use crate::buffer::RawBuf;
use crate::error::ArrayError;

/// A growable contiguous-storage container with amortized O(1) appends.
///
/// Invariants, upheld after every operation:
/// - `len() <= capacity()`
/// - `capacity() >= 1`
/// - the live elements are exactly the prefix `[0, len())`
///
/// The buffer is exclusively owned; every reallocation constructs the new
/// buffer, moves the live prefix, and swaps, so failures leave the array in
/// its prior state.
pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array with the default capacity of 1.
    ///
    /// # Panics
    ///
    /// Panics if the initial one-slot allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqx_array::DynArray;
    ///
    /// let arr: DynArray<i32> = DynArray::new();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.capacity(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let buf = RawBuf::new(1).expect("failed to allocate initial buffer");
        DynArray { buf, len: 0 }
    }

    /// Creates an empty array with the given capacity.
    ///
    /// Fails with [`ArrayError::InvalidCapacity`] for a zero capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqx_array::{ArrayError, DynArray};
    ///
    /// let arr = DynArray::<u8>::with_capacity(16).unwrap();
    /// assert_eq!(arr.capacity(), 16);
    ///
    /// assert_eq!(
    ///     DynArray::<u8>::with_capacity(0).err(),
    ///     Some(ArrayError::InvalidCapacity { requested: 0 })
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(DynArray {
            buf: RawBuf::new(capacity)?,
            len: 0,
        })
    }

    /// Current physical capacity in element slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Current logical element count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bounds-checked read of the element at `index`.
    ///
    /// Reads are legal only inside `[0, len())`; in particular `len()`
    /// itself is always out of bounds.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds { index, len: self.len });
        }
        // SAFETY: index < len, so the slot is in bounds and initialized.
        Ok(unsafe { &*self.buf.slot(index) })
    }

    /// Bounds-checked mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds { index, len: self.len });
        }
        // SAFETY: index < len, so the slot is in bounds and initialized.
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    /// Bounds-checked read, identical to [`get`](Self::get).
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.get(index)
    }

    /// Writes `value` at `index`, the write-slot form.
    ///
    /// - `index < len()`: overwrites and returns the previous element.
    /// - `index == len()`: implicit append. This form never grows; on a
    ///   full array it fails with [`ArrayError::CapacityExhausted`] and the
    ///   length is left untouched. Use [`push`](Self::push) to append with
    ///   growth.
    /// - `index > len()`: [`ArrayError::IndexOutOfBounds`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqx_array::{ArrayError, DynArray};
    ///
    /// let mut arr = DynArray::with_capacity(2).unwrap();
    /// assert_eq!(arr.set(0, 'a'), Ok(None));      // append at index == len
    /// assert_eq!(arr.set(0, 'b'), Ok(Some('a'))); // overwrite
    /// assert_eq!(arr.set(1, 'c'), Ok(None));
    ///
    /// // Full now: the non-growing append is rejected.
    /// assert_eq!(
    ///     arr.set(2, 'd'),
    ///     Err(ArrayError::CapacityExhausted { capacity: 2 })
    /// );
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, ArrayError> {
        if index < self.len {
            // SAFETY: index < len, so the slot holds a live element.
            let old = unsafe { mem::replace(&mut *self.buf.slot(index), value) };
            return Ok(Some(old));
        }
        if index > self.len {
            return Err(ArrayError::IndexOutOfBounds { index, len: self.len });
        }
        if self.len == self.buf.capacity() {
            return Err(ArrayError::CapacityExhausted {
                capacity: self.buf.capacity(),
            });
        }
        // SAFETY: len < capacity, so the slot exists and holds no live
        // element. The length is bumped only after the write lands.
        unsafe { self.buf.write(index, value) };
        self.len += 1;
        Ok(None)
    }

    /// Appends `value`, doubling the capacity first when full.
    ///
    /// Amortized O(1).
    ///
    /// # Panics
    ///
    /// Panics if a required buffer growth fails to allocate.
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.capacity() {
            self.grow();
        }
        // SAFETY: len < capacity after the growth check; the slot holds no
        // live element.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// Fails with [`ArrayError::Underflow`] on an empty array. Afterwards
    /// the shrink rule is evaluated: if `len() < capacity() / 4`, capacity
    /// halves (never below 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqx_array::{ArrayError, DynArray};
    ///
    /// let mut arr = DynArray::new();
    /// arr.push(1);
    /// assert_eq!(arr.pop(), Ok(1));
    /// assert_eq!(arr.pop(), Err(ArrayError::Underflow));
    /// ```
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Underflow);
        }
        self.len -= 1;
        // SAFETY: the old last slot holds a live element that is never
        // read again after this move.
        let value = unsafe { self.buf.read(self.len) };
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Inserts `value` at `index`, shifting `[index, len())` one slot right.
    ///
    /// Legal only for `index < len()`: inserting at `len()` is rejected by
    /// design, `push` is the one growing append. If the array was full, the
    /// buffer grows by exactly one slot for the shift and the doubling rule
    /// is evaluated again after the insert. O(len).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqx_array::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push(1);
    /// arr.push(2);
    /// arr.push(3);
    ///
    /// arr.insert_at(0, 9).unwrap();
    /// assert_eq!(arr.len(), 4);
    /// assert_eq!(arr.get(0), Ok(&9));
    /// assert_eq!(arr.get(1), Ok(&1));
    ///
    /// // Append-by-insert is not a thing here.
    /// assert!(arr.insert_at(arr.len(), 5).is_err());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds { index, len: self.len });
        }

        let was_full = self.len == self.buf.capacity();
        if was_full {
            // One extra slot is all the shift needs; headroom for future
            // appends is restored below.
            let capacity = self.buf.capacity();
            self.reallocate(capacity + 1)
                .expect("failed to grow array buffer");
        }

        // SAFETY: [index, len) are live and len < capacity, so the one-slot
        // right shift stays inside the allocation; the vacated slot is then
        // overwritten without dropping.
        unsafe {
            ptr::copy(
                self.buf.slot(index),
                self.buf.slot(index + 1),
                self.len - index,
            );
            self.buf.slot(index).write(value);
        }
        self.len += 1;

        if was_full {
            self.grow();
        }
        Ok(())
    }

    /// Removes the `length` elements starting at `index`, compacting the
    /// tail leftward.
    ///
    /// `index` must lie in `[0, len())`; after that check a zero `length`
    /// is a no-op, and the range `[index, index + length)` must not extend
    /// past `len()`. The shrink rule is evaluated once afterwards. O(len).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqx_array::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// for v in [10, 20, 30, 40, 50] {
    ///     arr.push(v);
    /// }
    ///
    /// arr.remove_at(1, 2).unwrap();
    /// assert_eq!(arr.len(), 3);
    /// assert_eq!(arr.get(0), Ok(&10));
    /// assert_eq!(arr.get(1), Ok(&40));
    /// assert_eq!(arr.get(2), Ok(&50));
    /// ```
    pub fn remove_at(&mut self, index: usize, length: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds { index, len: self.len });
        }
        if length == 0 {
            return Ok(());
        }

        let end = index
            .checked_add(length)
            .filter(|&end| end <= self.len)
            .ok_or(ArrayError::IndexOutOfBounds {
                index: index.saturating_add(length),
                len: self.len,
            })?;

        // SAFETY: [index, end) are live elements, each dropped exactly
        // once; the tail copy source and destination stay in bounds.
        unsafe {
            for slot in index..end {
                ptr::drop_in_place(self.buf.slot(slot));
            }
            ptr::copy(self.buf.slot(end), self.buf.slot(index), self.len - end);
        }
        self.len -= length;
        self.shrink_if_sparse();
        Ok(())
    }

    /// Removes the last element; convenience wrapper over
    /// [`remove_at`](Self::remove_at).
    ///
    /// Fails with [`ArrayError::Underflow`] on an empty array.
    pub fn pop_back(&mut self) -> Result<(), ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Underflow);
        }
        self.remove_at(self.len - 1, 1)
    }

    /// Removes the first element; convenience wrapper over
    /// [`remove_at`](Self::remove_at).
    ///
    /// Fails with [`ArrayError::Underflow`] on an empty array.
    pub fn pop_front(&mut self) -> Result<(), ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Underflow);
        }
        self.remove_at(0, 1)
    }

    /// Reverses the live prefix in place with symmetric swaps.
    ///
    /// No reallocation; a no-op on an empty array. O(len).
    pub fn reverse(&mut self) {
        for left in 0..self.len / 2 {
            let right = self.len - 1 - left;
            // SAFETY: left < right < len, both slots live and distinct.
            unsafe { ptr::swap(self.buf.slot(left), self.buf.slot(right)) };
        }
    }

    /// Explicitly resizes the buffer to `new_capacity` slots.
    ///
    /// Distinct from the automatic policy: this is the caller-driven form.
    /// A zero capacity is rejected; resizing to the current capacity is a
    /// no-op. Shrinking below `len()` silently drops the tail elements and
    /// clamps the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqx_array::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// for v in 0..4 {
    ///     arr.push(v);
    /// }
    ///
    /// arr.resize(2).unwrap();
    /// assert_eq!(arr.len(), 2);
    /// assert_eq!(arr.capacity(), 2);
    /// assert_eq!(arr.get(1), Ok(&1));
    /// ```
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity == 0 {
            return Err(ArrayError::InvalidCapacity { requested: 0 });
        }
        if new_capacity == self.buf.capacity() {
            return Ok(());
        }
        trace!(
            "resize: capacity {} -> {}",
            self.buf.capacity(),
            new_capacity
        );
        self.reallocate(new_capacity)
    }

    /// Drops all live elements, keeping the capacity.
    pub fn clear(&mut self) {
        // SAFETY: exactly the live prefix is dropped, once; len is zeroed
        // before anything else can observe the slots.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr(),
                self.len,
            ));
        }
        self.len = 0;
    }

    /// The live prefix as a slice. Internal only; the public surface stays
    /// index-based.
    fn live(&self) -> &[T] {
        // SAFETY: [0, len) is the initialized prefix of the buffer.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Doubles the capacity.
    #[cold]
    fn grow(&mut self) {
        let capacity = self.buf.capacity();
        let new_capacity = capacity.saturating_mul(2).max(1);
        trace!("grow: capacity {} -> {}", capacity, new_capacity);
        self.reallocate(new_capacity)
            .expect("failed to grow array buffer");
    }

    /// Halves the capacity when usage falls under a quarter, never below 1.
    fn shrink_if_sparse(&mut self) {
        let capacity = self.buf.capacity();
        if self.len < capacity / 4 {
            let new_capacity = (capacity / 2).max(1);
            if new_capacity < capacity {
                trace!("shrink: capacity {} -> {}", capacity, new_capacity);
                self.reallocate(new_capacity)
                    .expect("failed to shrink array buffer");
            }
        }
    }

    /// Replaces the buffer with one of `new_capacity` slots, moving
    /// `min(new_capacity, len)` live elements and dropping any truncated
    /// tail. The swap is the last step, so a failed allocation leaves the
    /// array untouched.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let next = RawBuf::new(new_capacity)?;
        let keep = self.len.min(new_capacity);

        // SAFETY: the two buffers never overlap; the first `keep` elements
        // move bitwise into the new buffer and are not dropped in the old
        // one, while elements past `keep` are dropped exactly once.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), next.as_ptr(), keep);
            for slot in keep..self.len {
                ptr::drop_in_place(self.buf.slot(slot));
            }
        }

        self.buf = next;
        self.len = keep;
        Ok(())
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Linear scan for the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqx_array::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push("a");
    /// arr.push("b");
    ///
    /// assert_eq!(arr.find(&"b"), Some(1));
    /// assert_eq!(arr.find(&"z"), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize> {
        self.live().iter().position(|element| element == value)
    }

    /// Removes the first occurrence of `value`; returns whether one was
    /// found. Absent values are a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(index) => self.remove_at(index, 1).is_ok(),
            None => false,
        }
    }
}

impl<T: fmt::Display> DynArray<T> {
    /// Logs the live contents in index order, diagnostic only.
    pub fn show(&self) {
        info!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    /// Renders the logical sequence as `{a, b, c}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, element) in self.live().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "}}")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len)
            .field("capacity", &self.buf.capacity())
            .field("elements", &self.live())
            .finish()
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
        // RawBuf releases the allocation.
    }
}
