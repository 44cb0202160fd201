// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Error returned by [`Fragile::try_new`] for the trigger value.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("construction failed for trigger value {value}")]
pub struct ConstructionFailed {
    /// The rejected value.
    pub value: i32,
}

/// A value with designated failure points.
///
/// - Constructing it from [`Fragile::TRIGGER`] fails (`try_new`) or panics (`new`).
/// - Cloning a value equal to [`Fragile::CLONE_TRIGGER`] panics.
///
/// `Default` yields `0`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Fragile {
    value: i32,
}

impl Fragile {
    /// Value rejected by the constructors.
    pub const TRIGGER: i32 = 13;

    /// Value whose clone panics.
    pub const CLONE_TRIGGER: i32 = 7;

    /// Fallible constructor.
    pub fn try_new(value: i32) -> Result<Self, ConstructionFailed> {
        if value == Self::TRIGGER {
            return Err(ConstructionFailed { value });
        }

        Ok(Self { value })
    }

    /// Panicking constructor.
    ///
    /// # Panics
    ///
    /// Panics if `value == Fragile::TRIGGER`.
    pub fn new(value: i32) -> Self {
        match Self::try_new(value) {
            Ok(fragile) => fragile,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the payload.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        if self.value == Self::CLONE_TRIGGER {
            panic!("clone failed for trigger value {}", self.value);
        }

        Self { value: self.value }
    }
}

impl PartialEq<i32> for Fragile {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}
