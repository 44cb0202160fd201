// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::convert::Infallible;
use core::mem;
use core::ptr;
use core::slice;

use slotwise_storage::{RawStorage, StorageError};

use crate::error::EmplaceError;
use crate::guard::InitGuard;

/// Test behaviour for injecting failures in `Vector` operations.
///
/// This is only available with the `test-utils` feature and allows users
/// to exercise allocation-failure paths without exhausting memory.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// use slotwise_vector::{EmplaceError, Vector, VectorBehaviour};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_growth_failure() {
///         let mut vec = Vector::new();
///         vec.push_back(1u8);
///
///         // Inject failure
///         vec.change_behaviour(VectorBehaviour::FailAtGrowth);
///
///         // Growing fails, nothing changes
///         let result = vec.try_emplace_back(|| Ok::<u8, ()>(2));
///         assert!(matches!(result, Err(EmplaceError::Storage(_))));
///         assert_eq!(vec.len(), 1);
///
///         // Reset to normal behaviour
///         vec.change_behaviour(VectorBehaviour::None);
///         vec.push_back(2);
///     }
/// }
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VectorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every block replacement fails with `StorageError::AllocationFailed`.
    FailAtGrowth,
}

/// A growable array built directly on a [`RawStorage`] block.
///
/// `len` counts the constructed prefix of the block. Everything past it is raw
/// memory. Element addresses (and slices borrowed from the vector) are only
/// stable until the next operation that replaces the block.
///
/// # Example
///
/// ```rust
/// use slotwise_vector::Vector;
///
/// let mut vec: Vector<u64> = Vector::with_len(3);
/// assert_eq!(vec.as_slice(), &[0, 0, 0]);
///
/// vec[1] = 5;
/// vec.resize(5);
/// assert_eq!(vec.as_slice(), &[0, 5, 0, 0, 0]);
/// assert_eq!(vec.capacity(), 5);
/// ```
pub struct Vector<T> {
    storage: RawStorage<T>,
    len: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: VectorBehaviour,
}

impl<T> Vector<T> {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            len: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: VectorBehaviour::None,
        }
    }

    fn from_parts(storage: RawStorage<T>, len: usize) -> Self {
        debug_assert!(len <= storage.capacity());

        Self {
            storage,
            len,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: VectorBehaviour::None,
        }
    }

    /// Creates a vector of `len` default values with capacity exactly `len`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow or if `T::default()` panics. In the latter
    /// case every value built so far is dropped and the block is freed first.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Fallible version of [`with_len`](Self::with_len).
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the block cannot be allocated.
    pub fn try_with_len(len: usize) -> Result<Self, StorageError>
    where
        T: Default,
    {
        Self::try_from_fn(len, |_| T::default())
    }

    /// Creates a vector of `len` values, the `i`-th produced by `f(i)`.
    ///
    /// Capacity is exactly `len`.
    pub fn from_fn<F>(len: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        match Self::try_from_fn(len, f) {
            Ok(vec) => vec,
            Err(error) => error.raise(),
        }
    }

    /// Fallible version of [`from_fn`](Self::from_fn).
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the block cannot be allocated.
    pub fn try_from_fn<F>(len: usize, mut f: F) -> Result<Self, StorageError>
    where
        F: FnMut(usize) -> T,
    {
        let mut storage = RawStorage::allocate(len)?;
        let mut guard = InitGuard::new(storage.as_mut_ptr());

        for index in 0..len {
            // SAFETY (PRECONDITIONS ARE MET): index < len == capacity, and
            // slot index is the next unwritten one
            unsafe { guard.write(f(index)) };
        }

        let len = guard.finish();
        Ok(Self::from_parts(storage, len))
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: VectorBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the current block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns a pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are constructed
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are constructed and
        // &mut self is exclusive
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Exchanges contents with `other` in constant time.
    ///
    /// Failure-injection behaviour stays with each vector.
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with no block.
    ///
    /// ```rust
    /// use slotwise_vector::Vector;
    ///
    /// let mut source: Vector<u8> = Vector::with_len(4);
    /// let moved = source.take();
    ///
    /// assert_eq!(moved.len(), 4);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }

    // =========================================================================
    // Growth
    // =========================================================================

    fn allocate(&self, capacity: usize) -> Result<RawStorage<T>, StorageError> {
        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, VectorBehaviour::FailAtGrowth) {
            let layout = core::alloc::Layout::array::<T>(capacity)
                .map_err(|_| StorageError::CapacityOverflow)?;
            return Err(StorageError::AllocationFailed { layout });
        }

        RawStorage::allocate(capacity)
    }

    fn grown_capacity(&self) -> Result<usize, StorageError> {
        match self.capacity() {
            0 => Ok(1),
            capacity => capacity.checked_mul(2).ok_or(StorageError::CapacityOverflow),
        }
    }

    /// Installs `target` as the block. The old block goes away without
    /// running any destructor, so its live elements must have been relocated.
    fn install(&mut self, mut target: RawStorage<T>) {
        debug_event!(
            old_capacity = self.capacity(),
            new_capacity = target.capacity(),
            len = self.len,
            "vector storage replaced"
        );

        self.storage.swap(&mut target);
    }

    /// Ensures capacity for at least `new_capacity` elements.
    ///
    /// Does nothing if the current block is large enough; capacity never
    /// shrinks. Otherwise allocates a block of exactly `new_capacity` slots
    /// and relocates every element into it.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocator failure is routed to
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error).
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(error) = self.try_reserve(new_capacity) {
            error.raise();
        }
    }

    /// Fallible version of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the new block cannot be allocated. The
    /// vector is left untouched.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), StorageError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let target = self.allocate(new_capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): target holds new_capacity > len slots
        unsafe { relocate(&self.storage, 0, self.len, &target, 0) };

        self.install(target);
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// Growing reserves exactly `new_len` if needed; shrinking drops the tail
    /// and keeps the block.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Fallible version of [`resize`](Self::resize).
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if a larger block is needed and cannot be
    /// allocated. The vector is left untouched.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), StorageError>
    where
        T: Default,
    {
        self.try_resize_with(new_len, T::default)
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// If `f` panics, the values it already produced are dropped and the
    /// length is unchanged. A block grown for the call is kept.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if let Err(error) = self.try_resize_with(new_len, f) {
            error.raise();
        }
    }

    fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), StorageError>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        self.try_reserve(new_len)?;

        // SAFETY (PRECONDITIONS ARE MET): len < new_len <= capacity
        let mut guard = InitGuard::new(unsafe { self.storage.offset(self.len) });

        for _ in self.len..new_len {
            // SAFETY (PRECONDITIONS ARE MET): the guard never writes past
            // new_len - len slots, all of them inside the block
            unsafe { guard.write(f()) };
        }

        self.len += guard.finish();
        Ok(())
    }

    /// Drops every element past `new_len`. Does nothing if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): new_len < len <= capacity
        let first = unsafe { self.storage.offset(new_len) };
        let tail = ptr::slice_from_raw_parts_mut(first, self.len - new_len);

        // Shorten first: a panicking destructor must not expose dropped slots.
        self.len = new_len;

        // SAFETY (PRECONDITIONS ARE MET): the tail was live and is no longer
        // reachable through self
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element, keeping the block.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    // =========================================================================
    // Back insertion / removal
    // =========================================================================

    /// Appends `value`. Amortized O(1).
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocator failure is routed to
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error).
    pub fn push_back(&mut self, value: T) {
        self.emplace_back(|| value);
    }

    /// Constructs a value with `f` directly at the end and returns it.
    ///
    /// If `f` panics the vector is unchanged, including on the growth path:
    /// the new block is allocated and the value built into it before any
    /// existing element is relocated.
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_back(|| Ok::<T, Infallible>(f())) {
            Ok(slot) => slot,
            Err(EmplaceError::Storage(error)) => error.raise(),
            Err(EmplaceError::Construct(never)) => match never {},
        }
    }

    /// Constructs a value with the fallible `f` at the end and returns it.
    ///
    /// # Errors
    ///
    /// - [`EmplaceError::Storage`] if the vector is full and a larger block
    ///   cannot be allocated. `f` is not called.
    /// - [`EmplaceError::Construct`] if `f` fails.
    ///
    /// Either way the vector keeps its length, capacity and block.
    pub fn try_emplace_back<E, F>(&mut self, f: F) -> Result<&mut T, EmplaceError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.len < self.capacity() {
            let value = f().map_err(EmplaceError::Construct)?;

            // SAFETY (PRECONDITIONS ARE MET): len < capacity, slot len is raw
            unsafe { self.storage.offset(self.len).write(value) };
        } else {
            let target = self.allocate(self.grown_capacity()?)?;
            let value = f().map_err(EmplaceError::Construct)?;

            // SAFETY (PRECONDITIONS ARE MET): target holds 2 * capacity >= len + 1
            // slots; the new value goes in before anything is relocated
            unsafe {
                target.offset(self.len).write(value);
                relocate(&self.storage, 0, self.len, &target, 0);
            }

            self.install(target);
        }

        self.len += 1;

        let last = self.len - 1;
        Ok(&mut self.as_mut_slice()[last])
    }

    /// Removes and returns the last element, or `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): slot len was live and is now outside
        // the constructed prefix, so ownership moves to the caller
        Some(unsafe { self.storage.offset(self.len).read() })
    }

    // =========================================================================
    // Positional insertion / removal
    // =========================================================================

    /// Inserts `value` at `index`, shifting later elements back.
    ///
    /// Returns the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace(index, || value)
    }

    /// Constructs a value with `f` at `index`, shifting later elements back.
    ///
    /// `f` runs before any element is touched, so a panic in it leaves the
    /// vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn emplace<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace(index, || Ok::<T, Infallible>(f())) {
            Ok(slot) => slot,
            Err(EmplaceError::Storage(error)) => error.raise(),
            Err(EmplaceError::Construct(never)) => match never {},
        }
    }

    /// Constructs a value with the fallible `f` at `index`.
    ///
    /// With spare capacity the value is built first, the tail `[index, len)`
    /// moves back one slot and the value lands at `index`. At capacity a
    /// block twice as large is allocated, the value is built at `index` in
    /// it, then the prefix and suffix are relocated around it.
    ///
    /// # Errors
    ///
    /// - [`EmplaceError::Storage`] if a larger block cannot be allocated.
    /// - [`EmplaceError::Construct`] if `f` fails.
    ///
    /// Either way the vector is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn try_emplace<E, F>(&mut self, index: usize, f: F) -> Result<&mut T, EmplaceError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );

        if self.len < self.capacity() {
            let value = f().map_err(EmplaceError::Construct)?;

            // SAFETY (PRECONDITIONS ARE MET): index <= len < capacity, so both
            // the shifted tail [index + 1, len + 1) and slot index fit the block
            unsafe {
                let slot = self.storage.offset(index);
                ptr::copy(slot, slot.add(1), self.len - index);
                slot.write(value);
            }
        } else {
            let target = self.allocate(self.grown_capacity()?)?;
            let value = f().map_err(EmplaceError::Construct)?;

            // SAFETY (PRECONDITIONS ARE MET): target holds >= len + 1 slots;
            // the new value goes in before anything is relocated
            unsafe {
                target.offset(index).write(value);
                relocate(&self.storage, 0, index, &target, 0);
                relocate(&self.storage, index, self.len - index, &target, index + 1);
            }

            self.install(target);
        }

        self.len += 1;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// forward.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );

        // SAFETY (PRECONDITIONS ARE MET): index < len; the removed value is
        // read out before the tail (index, len) is moved over it
        unsafe {
            let slot = self.storage.offset(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drops the element at `index`, shifting later elements forward.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) {
        drop(self.remove(index));
    }
}

/// Moves `count` live elements from `source[from..]` to `target[at..]`.
///
/// Moves are bitwise and cannot fail, so there is no copy fallback.
///
/// # Safety
///
/// `source[from..from + count]` must be live, `target[at..at + count]` must be
/// raw, and the two blocks must differ. Afterwards the source range is raw.
unsafe fn relocate<T>(
    source: &RawStorage<T>,
    from: usize,
    count: usize,
    target: &RawStorage<T>,
    at: usize,
) {
    // SAFETY (PRECONDITIONS ARE MET): guaranteed by the caller
    unsafe { ptr::copy_nonoverlapping(source.offset(from), target.offset(at), count) };
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are live; the block
        // is released afterwards by RawStorage::drop
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}
