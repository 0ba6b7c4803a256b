// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Element;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::mem::MaybeUninit;

/// Storage cell for one element; only `[0..len)` is initialized.
pub(crate) type Slot<T> = MaybeUninit<T>;

#[inline]
pub(crate) fn new_slot<T: Element>(value: T) -> Slot<T> {
    MaybeUninit::new(value)
}

/// Allocates `capacity` uninitialized slots and copies `prefix` into the front.
pub(crate) fn alloc_slots<T: Element>(capacity: usize, prefix: &[T]) -> Box<[Slot<T>]> {
    debug_assert!(prefix.len() <= capacity);
    let mut buf = Box::<[T]>::new_uninit_slice(capacity);
    for (slot, x) in buf.iter_mut().zip(prefix) {
        slot.write(*x);
    }
    buf
}
