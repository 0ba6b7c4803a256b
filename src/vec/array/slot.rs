// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Element;

// Alloc imports
use alloc::{boxed::Box, vec};

/// Storage cell for one element.
pub(crate) type Slot<T> = T;

#[inline]
pub(crate) fn new_slot<T: Element>(value: T) -> Slot<T> {
    value
}

/// Allocates `capacity` slots and copies `prefix` into the front.
///
/// The tail is filled with `T::default()`.
pub(crate) fn alloc_slots<T: Element>(capacity: usize, prefix: &[T]) -> Box<[Slot<T>]> {
    debug_assert!(prefix.len() <= capacity);
    let mut buf = vec![T::default(); capacity].into_boxed_slice();
    buf[..prefix.len()].copy_from_slice(prefix);
    buf
}
