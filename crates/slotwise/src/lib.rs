// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Growable arrays built from first principles on raw, uninitialized storage.</em></p>
//!
//! ---
//!
//! Slotwise splits a dynamic array into the two layers it is made of:
//!
//! - [`storage`]: [`RawStorage<T>`], one owned block of uninitialized slots.
//!   It allocates and frees bytes and knows nothing about object lifetimes.
//! - [`vector`]: [`Vector<T>`], a live-element count on top of one block. It
//!   decides when to grow, where to construct, and what to unwind when a
//!   constructor fails.
//!
//! # Features
//!
//! - 🧱 **Explicit layers** — raw memory and object lifetimes are separate types
//! - 🔁 **Amortized O(1) appends** — capacity doubles from 1, `reserve` is exact
//! - 🛡️ **Stated guarantees** — every operation documents what survives a failing constructor
//! - 🧪 **Failure injection** — `test-utils` simulates allocation failures on demand
//! - 📦 **`no_std` compatible** — needs only `alloc`
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! slotwise = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use slotwise::Vector;
//!
//! let mut vec = Vector::new();
//! for value in [1, 2, 3] {
//!     vec.push_back(value);
//! }
//!
//! assert_eq!(vec.len(), 3);
//! assert_eq!(vec.capacity(), 4);
//!
//! let copy = vec.clone();
//! vec.erase(0);
//!
//! assert_eq!(vec.as_slice(), &[2, 3]);
//! assert_eq!(copy.as_slice(), &[1, 2, 3]);
//! ```
//!
//! # Raw storage
//!
//! ```rust
//! use slotwise::{RawStorage, StorageError};
//!
//! fn example() -> Result<(), StorageError> {
//!     let mut block = RawStorage::<String>::allocate(2)?;
//!
//!     block[0].write(String::from("slot"));
//!     // SAFETY: slot 0 was written just above; reading it moves ownership out
//!     let value = unsafe { block[0].assume_init_read() };
//!     assert_eq!(value, "slot");
//!
//!     // Dropping the block frees bytes only.
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use slotwise_storage as storage;
pub use slotwise_vector as vector;

pub use slotwise_storage::{RawStorage, StorageError};
pub use slotwise_vector::{EmplaceError, Vector};

#[cfg(feature = "test-utils")]
pub use slotwise_vector::VectorBehaviour;
