// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Default)]
struct LedgerState {
    live: Cell<isize>,
    constructed: Cell<usize>,
    drops: RefCell<Vec<i32>>,
}

/// Shared bookkeeping for [`Tracked`] values.
///
/// Every construction (including clones) increments the live count, every drop
/// decrements it and appends the dropped value to the drop log.
///
/// # Example
///
/// ```rust
/// use slotwise_test_utils::Ledger;
///
/// let ledger = Ledger::new();
/// let a = ledger.track(1);
/// let b = a.clone();
/// assert_eq!(ledger.live(), 2);
///
/// drop(a);
/// drop(b);
/// assert_eq!(ledger.live(), 0);
/// assert_eq!(ledger.drop_log(), vec![1, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    state: Rc<LedgerState>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a tracked value bound to this ledger.
    pub fn track(&self, value: i32) -> Tracked {
        self.record_construction();

        Tracked {
            value,
            ledger: self.clone(),
        }
    }

    /// Number of tracked values currently alive.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than constructed (a double drop).
    pub fn live(&self) -> usize {
        let live = self.state.live.get();
        assert!(live >= 0, "more drops than constructions: live count is {live}");
        live as usize
    }

    /// Total number of constructions, clones included.
    pub fn constructed(&self) -> usize {
        self.state.constructed.get()
    }

    /// Values in the order they were dropped.
    pub fn drop_log(&self) -> Vec<i32> {
        self.state.drops.borrow().clone()
    }

    /// Forgets the drop log without touching the counters.
    pub fn clear_drop_log(&self) {
        self.state.drops.borrow_mut().clear();
    }

    fn record_construction(&self) {
        self.state.live.set(self.state.live.get() + 1);
        self.state.constructed.set(self.state.constructed.get() + 1);
    }

    fn record_drop(&self, value: i32) {
        self.state.live.set(self.state.live.get() - 1);
        self.state.drops.borrow_mut().push(value);
    }
}

/// A value whose lifetime is recorded in a [`Ledger`].
#[derive(Debug)]
pub struct Tracked {
    value: i32,
    ledger: Ledger,
}

impl Tracked {
    /// Returns the payload.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.ledger.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.record_drop(self.value);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialEq<i32> for Tracked {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}
