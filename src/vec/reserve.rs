// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{Element, StepVec, alloc_slots};

impl<T: Element> StepVec<T> {
    /// Ensures `capacity() >= n`.
    ///
    /// - If the buffer already holds at least `n` slots, this is a no-op.
    /// - Otherwise a buffer of **exactly** `n` slots replaces the current one;
    ///   `[0..len)` is copied over in order and the old buffer is released.
    ///
    /// `reserve(0)` never allocates, so a vector created with
    /// `with_capacity(0)` stays unallocated until something is stored.
    ///
    /// Reallocation invalidates every outstanding cursor.
    #[inline]
    pub fn reserve(&mut self, n: usize) {
        if n <= self.capacity() {
            return;
        }
        self.reallocate(n);
    }

    /// Reallocates to a buffer of exactly `len()` slots.
    ///
    /// Contents and order are preserved; an empty vector releases its buffer
    /// and reports `capacity() == 0`. Always invalidates outstanding cursors,
    /// even when the capacity already equals the length.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            trace!("step-vec: releasing buffer of {} slots", self.capacity());
            self.buf = None;
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.reallocate(self.len);
    }

    /// Replaces the buffer wholesale with one of `capacity` slots.
    pub(crate) fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        trace!(
            "step-vec: reallocating {} -> {} slots ({} live)",
            self.capacity(),
            capacity,
            self.len
        );
        let fresh = alloc_slots(capacity, self.as_slice());
        // The old buffer is dropped here, after its prefix has been copied.
        self.buf = Some(fresh);
        self.generation = self.generation.wrapping_add(1);
    }
}
