// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned blocks of uninitialized, element-sized slots.
//!
//! [`RawStorage<T>`] owns exactly one contiguous allocation sized for a fixed
//! number of `T` slots. It allocates and frees bytes and nothing else: no slot
//! is ever assumed to hold a live `T`, and dropping the storage never runs a
//! destructor on its contents. Tracking which slots are constructed is the job
//! of the container built on top of it.
//!
//! # Core Guarantees
//!
//! - **Fixed size**: a block is never resized in place. Replacing it means
//!   allocating a new block, relocating, and releasing the old one.
//! - **Exclusive ownership**: `RawStorage` cannot be cloned. Ownership moves
//!   with [`RawStorage::swap`] or [`RawStorage::take`] in constant time.
//! - **Explicit failure**: [`RawStorage::allocate`] reports overflow and
//!   allocator failure through [`StorageError`] instead of aborting.
//!
//! # Example
//!
//! ```rust
//! use slotwise_storage::{RawStorage, StorageError};
//!
//! fn example() -> Result<(), StorageError> {
//!     let mut storage = RawStorage::<u32>::allocate(4)?;
//!     assert_eq!(storage.capacity(), 4);
//!
//!     storage[0].write(7);
//!     // SAFETY: slot 0 was written just above
//!     let value = unsafe { storage[0].assume_init_read() };
//!     assert_eq!(value, 7);
//!
//!     let moved = storage.take();
//!     assert_eq!(moved.capacity(), 4);
//!     assert_eq!(storage.capacity(), 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - `tracing`: emits `trace` events when blocks are allocated and released.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
mod raw_storage;

#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use raw_storage::RawStorage;
