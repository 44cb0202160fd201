// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use slotwise_test_utils::{Fragile, Ledger, panics};

use crate::vector::Vector;

// =============================================================================
// clone()
// =============================================================================

#[test]
fn test_clone_copies_in_order() {
    let original: Vector<u32> = (1..=5).collect();
    let copy = original.clone();

    assert_eq!(copy, original);
    assert_eq!(copy.len(), original.len());
}

#[test]
fn test_clone_capacity_matches_len() {
    let mut original: Vector<u32> = Vector::new();
    original.reserve(64);
    original.extend([1, 2, 3]);

    let copy = original.clone();

    assert_eq!(copy.capacity(), 3);
}

#[test]
fn test_clone_of_empty_does_not_allocate() {
    let mut original: Vector<u32> = Vector::new();
    original.reserve(8);

    let copy = original.clone();

    assert_eq!(copy.capacity(), 0);
}

#[test]
fn test_clone_is_deep() {
    let original: Vector<Vector<u32>> = (0..3).map(|i| Vector::from_fn(2, |j| (i * 10 + j) as u32)).collect();
    let mut copy = original.clone();

    copy[0][0] = 99;
    copy[2].push_back(7);

    assert_eq!(original[0].as_slice(), &[0, 1]);
    assert_eq!(original[2].as_slice(), &[20, 21]);
    assert_ne!(copy, original);
}

#[test]
fn test_clone_panic_unwinds_copies() {
    let original: Vector<Fragile> = [1, 2, Fragile::CLONE_TRIGGER, 4]
        .into_iter()
        .map(Fragile::new)
        .collect();

    assert!(panics(|| {
        let _ = original.clone();
    }));

    assert_eq!(original.len(), 4);
}

#[test]
fn test_clone_tracks_every_copy() {
    let ledger = Ledger::new();
    let original: Vector<_> = (1..=3).map(|i| ledger.track(i)).collect();

    let copy = original.clone();
    assert_eq!(ledger.live(), 6);

    drop(copy);
    assert_eq!(ledger.live(), 3);
}

// =============================================================================
// clone_from() - capacity insufficient (copy-and-swap)
// =============================================================================

#[test]
fn test_clone_from_grows_via_copy_and_swap() {
    let source: Vector<u32> = (1..=5).collect();
    let mut target: Vector<u32> = Vector::from_fn(2, |_| 0);

    target.clone_from(&source);

    assert_eq!(target, source);
    assert_eq!(target.capacity(), 5);
}

#[test]
fn test_clone_from_copy_and_swap_is_strong() {
    let source: Vector<Fragile> = [1, Fragile::CLONE_TRIGGER, 3].into_iter().map(Fragile::new).collect();
    let mut target: Vector<Fragile> = Vector::from_fn(1, |_| Fragile::new(42));
    let block = target.as_ptr();

    assert!(panics(|| target.clone_from(&source)));

    assert_eq!(target.len(), 1);
    assert_eq!(target.capacity(), 1);
    assert_eq!(target.as_ptr(), block);
    assert_eq!(target[0], 42);
}

// =============================================================================
// clone_from() - capacity sufficient (in place)
// =============================================================================

#[test]
fn test_clone_from_in_place_longer_source() {
    let source: Vector<u32> = (1..=4).collect();
    let mut target: Vector<u32> = Vector::new();
    target.reserve(8);
    target.extend([9, 9]);
    let block = target.as_ptr();

    target.clone_from(&source);

    assert_eq!(target.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(target.capacity(), 8);
    assert_eq!(target.as_ptr(), block);
}

#[test]
fn test_clone_from_in_place_shorter_source_drops_excess() {
    let ledger = Ledger::new();
    let source: Vector<_> = (1..=2).map(|i| ledger.track(i)).collect();
    let mut target: Vector<_> = (10..=14).map(|i| ledger.track(i)).collect();
    let capacity = target.capacity();

    ledger.clear_drop_log();
    target.clone_from(&source);

    assert_eq!(target.as_slice(), source.as_slice());
    assert_eq!(target.capacity(), capacity);
    assert_eq!(ledger.live(), 4);
    // Two values overwritten in place, three excess values dropped.
    assert_eq!(ledger.drop_log(), vec![10, 11, 12, 13, 14]);
}

#[test]
fn test_clone_from_empty_source_clears() {
    let source: Vector<u32> = Vector::new();
    let mut target: Vector<u32> = (1..=3).collect();

    target.clone_from(&source);

    assert!(target.is_empty());
    assert_eq!(target.capacity(), 4);
}

#[test]
fn test_clone_from_in_place_panic_is_basic() {
    let source: Vector<Fragile> = [1, 2, Fragile::CLONE_TRIGGER, 4, 5].into_iter().map(Fragile::new).collect();
    let mut target: Vector<Fragile> = Vector::new();
    target.reserve(8);
    target.push_back(Fragile::new(0));

    assert!(panics(|| target.clone_from(&source)));

    // Valid but partially updated: the prefix was assigned, the failing
    // element was never constructed.
    assert_eq!(target.as_slice(), &[Fragile::new(1), Fragile::new(2)]);
    assert_eq!(target.capacity(), 8);
}
