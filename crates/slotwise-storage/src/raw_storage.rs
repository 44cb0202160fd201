// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;
use core::slice;

use crate::error::StorageError;

/// A block of uninitialized memory sized for `capacity` values of `T`.
///
/// The storage owns bytes, not objects. Writing a `T` into a slot and later
/// dropping it is entirely up to the caller; releasing the block never runs
/// `T::drop`.
///
/// The empty block (capacity 0) holds a dangling pointer and owns no
/// allocation. Blocks of zero-sized `T` never touch the allocator either, but
/// keep the requested capacity.
///
/// # Example
///
/// ```rust
/// use slotwise_storage::RawStorage;
///
/// let mut a = RawStorage::<u8>::with_capacity(16);
/// let mut b = RawStorage::<u8>::new();
///
/// a.swap(&mut b);
/// assert_eq!(a.capacity(), 0);
/// assert_eq!(b.capacity(), 16);
/// ```
pub struct RawStorage<T> {
    buffer: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// Safety: RawStorage exclusively owns its block; sending it sends the slots.
unsafe impl<T: Send> Send for RawStorage<T> {}
// Safety: shared access only hands out `&MaybeUninit<T>` / `*const T`.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// Creates the empty block. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buffer: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block for exactly `capacity` slots.
    ///
    /// A capacity of zero yields the empty block without calling the allocator.
    ///
    /// # Errors
    ///
    /// - [`StorageError::CapacityOverflow`] if the block would exceed
    ///   `isize::MAX` bytes.
    /// - [`StorageError::AllocationFailed`] if the global allocator returns null.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slotwise_storage::{RawStorage, StorageError};
    ///
    /// let storage = RawStorage::<u64>::allocate(8).expect("Failed to allocate(8)");
    /// assert_eq!(storage.capacity(), 8);
    ///
    /// let result = RawStorage::<u64>::allocate(usize::MAX);
    /// assert!(matches!(result, Err(StorageError::CapacityOverflow)));
    /// ```
    pub fn allocate(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| StorageError::CapacityOverflow)?;

        if layout.size() == 0 {
            return Ok(Self {
                buffer: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY (PRECONDITIONS ARE MET): layout has a non-zero size
        let ptr = unsafe { alloc(layout) };
        let buffer = NonNull::new(ptr.cast::<T>()).ok_or(StorageError::AllocationFailed { layout })?;

        trace_event!(capacity, bytes = layout.size(), "raw storage allocated");

        Ok(Self {
            buffer,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Allocates a block for exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocator failure is routed to
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error).
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::allocate(capacity) {
            Ok(storage) => storage,
            Err(error) => error.raise(),
        }
    }

    /// Frees the block and resets `self` to the empty state.
    ///
    /// Does nothing on the empty block. Values still living in the slots are
    /// leaked, not dropped.
    pub fn release(&mut self) {
        let capacity = mem::replace(&mut self.capacity, 0);
        let buffer = mem::replace(&mut self.buffer, NonNull::dangling());

        if capacity == 0 || mem::size_of::<T>() == 0 {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): the same size and alignment passed
        // Layout::array::<T>(capacity) when the block was allocated
        let layout = unsafe {
            Layout::from_size_align_unchecked(mem::size_of::<T>() * capacity, mem::align_of::<T>())
        };

        // SAFETY (PRECONDITIONS ARE MET): buffer was returned by alloc(layout)
        // and has not been freed since; self no longer refers to it
        unsafe { dealloc(buffer.as_ptr().cast::<u8>(), layout) };

        trace_event!(capacity, bytes = layout.size(), "raw storage released");
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` for the empty block.
    #[inline]
    pub fn is_unallocated(&self) -> bool {
        self.capacity == 0
    }

    /// Returns a pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_ptr()
    }

    /// Returns the address of slot `offset`.
    ///
    /// `offset == capacity` is allowed and yields the past-the-end address.
    ///
    /// # Safety
    ///
    /// `offset` must not exceed [`capacity`](Self::capacity). The bound is only
    /// checked in debug builds. Whether the slot holds a live `T` is the
    /// caller's business.
    #[inline]
    pub unsafe fn offset(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.capacity,
            "offset (is {offset}) should be <= capacity (is {})",
            self.capacity
        );

        // SAFETY (PRECONDITIONS ARE MET): offset <= capacity keeps the result
        // inside the block or one past its end
        unsafe { self.buffer.as_ptr().add(offset) }
    }

    /// Views every slot as possibly uninitialized memory.
    #[inline]
    pub fn as_uninit_slice(&self) -> &[MaybeUninit<T>] {
        // SAFETY (PRECONDITIONS ARE MET): buffer is valid (or dangling with a
        // zero byte size) for capacity slots, and MaybeUninit<T> has no
        // validity requirements
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().cast::<MaybeUninit<T>>(), self.capacity) }
    }

    /// Mutable view of every slot as possibly uninitialized memory.
    #[inline]
    pub fn as_uninit_mut_slice(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY (PRECONDITIONS ARE MET): as above, and &mut self guarantees
        // exclusive access
        unsafe {
            slice::from_raw_parts_mut(self.buffer.as_ptr().cast::<MaybeUninit<T>>(), self.capacity)
        }
    }

    /// Exchanges blocks with `other` in constant time.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buffer, &mut other.buffer);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the block out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Index<usize> for RawStorage<T> {
    type Output = MaybeUninit<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(
            index < self.capacity,
            "index (is {index}) should be < capacity (is {})",
            self.capacity
        );

        &self.as_uninit_slice()[index]
    }
}

impl<T> IndexMut<usize> for RawStorage<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(
            index < self.capacity,
            "index (is {index}) should be < capacity (is {})",
            self.capacity
        );

        &mut self.as_uninit_mut_slice()[index]
    }
}

impl<T> core::fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawStorage")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
