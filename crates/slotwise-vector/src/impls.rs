// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Deref, DerefMut};

use crate::vector::Vector;

impl<T: Clone> Clone for Vector<T> {
    /// Copy-constructs every element, in order, into a block sized to `len`.
    ///
    /// A panicking `clone` drops the copies made so far and frees the block.
    fn clone(&self) -> Self {
        let source = self.as_slice();
        Self::from_fn(source.len(), |index| source[index].clone())
    }

    /// Copy-assigns `source` into `self`.
    ///
    /// If `self` cannot hold `source.len()` elements, a full copy is built
    /// first and swapped in: a panic leaves `self` untouched.
    ///
    /// Otherwise the common prefix is assigned in place with `clone_from`, the
    /// remaining source elements are cloned into the spare slots and any
    /// excess elements of `self` are dropped. A panic on this path leaves
    /// `self` valid but partially updated.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.len() {
            let mut copy = source.clone();
            self.swap(&mut copy);
            return;
        }

        let common = self.len().min(source.len());
        self.as_mut_slice()[..common].clone_from_slice(&source[..common]);

        for item in &source[common..] {
            // Capacity was checked above: no block replacement happens here.
            self.push_back(item.clone());
        }

        self.truncate(source.len());
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
