// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for slotwise-vector.

use slotwise_storage::StorageError;
use thiserror::Error;

/// Error returned by the fallible emplace operations.
///
/// Either failure leaves the vector untouched.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EmplaceError<E> {
    /// A replacement block could not be acquired.
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),

    /// The element constructor reported an error.
    #[error("element construction failed: {0:?}")]
    Construct(E),
}
