// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for slotwise-storage.

use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur when acquiring a raw block.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StorageError {
    /// The requested capacity does not fit in a valid allocation layout.
    ///
    /// Raised when `capacity * size_of::<T>()` would exceed `isize::MAX`, or
    /// when doubling a capacity overflows `usize`.
    #[error("capacity overflow: requested block exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The global allocator could not provide the requested block.
    #[error("allocation failed for layout {layout:?}")]
    AllocationFailed {
        /// Layout of the block that could not be allocated.
        layout: Layout,
    },
}

impl StorageError {
    /// Turns the error into the outcome used by infallible entry points.
    ///
    /// Overflow panics. Allocator failure is forwarded to
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error), which aborts
    /// by default.
    #[cold]
    #[inline(never)]
    pub fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::AllocationFailed { layout } => alloc::alloc::handle_alloc_error(layout),
        }
    }
}
