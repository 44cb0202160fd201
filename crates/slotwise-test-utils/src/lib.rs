// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Slotwise crates.
//!
//! Instrumented element types for checking object lifetimes and failure
//! paths of containers built on raw storage:
//!
//! - [`Ledger`] / [`Tracked`]: counts live values and records drop order, so
//!   tests can assert "no leak, no double drop".
//! - [`Fragile`]: a value whose constructor fails on [`Fragile::TRIGGER`] and
//!   whose `Clone` panics on [`Fragile::CLONE_TRIGGER`].
//!
//! ## License
//!
//! GPL-3.0-only

mod fragile;
mod ledger;
mod panic;

pub use fragile::{ConstructionFailed, Fragile};
pub use ledger::{Ledger, Tracked};
pub use panic::panics;
