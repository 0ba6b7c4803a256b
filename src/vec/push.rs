// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{Element, StepVec, new_slot};

impl<T: Element> StepVec<T> {
    /// Appends `value` at the end.
    ///
    /// When the buffer is full (or unallocated) it first grows additively to
    /// `len + GROWTH_STEP` slots, which invalidates outstanding cursors.
    /// Amortized `O(1)`.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            self.reserve(len + Self::GROWTH_STEP);
        }
        self.slots_mut()[len] = new_slot(value);
        self.len = len + 1;
    }
}
