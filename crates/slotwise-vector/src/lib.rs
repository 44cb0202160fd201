// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array over raw storage with explicit exception-safety contracts.
//!
//! `Vector<T>` owns one [`RawStorage<T>`](slotwise_storage::RawStorage) block
//! and a live-element count. Slots `[0, len)` hold constructed values, slots
//! `[len, capacity)` are raw memory. Every operation states what happens to
//! that invariant when construction fails, either by panicking or through the
//! `try_*` variants that accept fallible constructors.
//!
//! # Core Guarantees
//!
//! - **Construct before relocate**: on every growth path the new element is
//!   built inside the new block before any existing element moves. A failed
//!   construction leaves the container exactly as it was.
//! - **Geometric growth**: appends and insertions at capacity grow to
//!   `max(1, 2 * capacity)`; [`Vector::reserve`] allocates exactly and never
//!   shrinks.
//! - **Unwinding**: partially built ranges (sized construction, cloning,
//!   resizing) drop what they built before the failure propagates.
//! - **Basic guarantee for in-place assignment**: `clone_from` into a vector
//!   with enough capacity assigns element by element; a panic midway leaves a
//!   valid, partially updated vector.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use slotwise_vector::Vector;
//!
//! let mut vec = Vector::new();
//! vec.push_back(1);
//! vec.push_back(2);
//! vec.push_back(3);
//!
//! assert_eq!(vec.as_slice(), &[1, 2, 3]);
//! assert_eq!(vec.capacity(), 4);
//!
//! let slot = vec.insert(1, 9);
//! assert_eq!(*slot, 9);
//! assert_eq!(vec.as_slice(), &[1, 9, 2, 3]);
//!
//! vec.erase(2);
//! assert_eq!(vec.as_slice(), &[1, 9, 3]);
//! ```
//!
//! # Example: Fallible Construction
//!
//! ```rust
//! use slotwise_vector::{EmplaceError, Vector};
//!
//! let mut vec: Vector<u32> = Vector::new();
//! vec.push_back(1);
//!
//! let result = vec.try_emplace_back(|| "not a number".parse::<u32>());
//! assert!(matches!(result, Err(EmplaceError::Construct(_))));
//!
//! // Strong guarantee: nothing changed
//! assert_eq!(vec.len(), 1);
//! assert_eq!(vec.capacity(), 1);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! slotwise-vector = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use `VectorBehaviour` to drive the error paths:
//!
//! ```rust
//! // test-utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use slotwise_vector::{Vector, VectorBehaviour};
//!
//!     #[test]
//!     fn test_handles_growth_failure() {
//!         let mut vec: Vector<u8> = Vector::new();
//!         vec.change_behaviour(VectorBehaviour::FailAtGrowth);
//!
//!         assert!(vec.try_reserve(16).is_err());
//!     }
//! }
//! ```
//!
//! # Features
//!
//! - `tracing`: emits `debug` events whenever the vector replaces its block.
//! - `test-utils`: exposes `VectorBehaviour` for failure injection.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
mod guard;
mod impls;
mod vector;

#[cfg(test)]
mod tests;

pub use error::EmplaceError;
pub use slotwise_storage::StorageError;
pub use vector::Vector;

#[cfg(any(test, feature = "test-utils"))]
pub use vector::VectorBehaviour;
