// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem;
use core::ptr;

/// Tracks a run of values being constructed into consecutive raw slots.
///
/// If dropped before [`finish`](Self::finish), every value written so far is
/// dropped in order. Used wherever a range is built element by element and a
/// panicking constructor must not leave half a range behind.
pub(crate) struct InitGuard<T> {
    dst: *mut T,
    initialized: usize,
}

impl<T> InitGuard<T> {
    pub(crate) fn new(dst: *mut T) -> Self {
        Self { dst, initialized: 0 }
    }

    /// Writes `value` into the next slot.
    ///
    /// # Safety
    ///
    /// `dst + initialized` must be a valid, uninitialized slot.
    #[inline]
    pub(crate) unsafe fn write(&mut self, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): guaranteed by the caller
        unsafe { self.dst.add(self.initialized).write(value) };
        self.initialized += 1;
    }

    /// Disarms the guard and returns how many values it wrote.
    #[inline]
    pub(crate) fn finish(self) -> usize {
        let initialized = self.initialized;
        mem::forget(self);
        initialized
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): exactly `initialized` slots starting
        // at dst were written and nobody else owns them yet
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.dst, self.initialized)) };
    }
}
