// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{Element, StepVec};

impl<T: Element> StepVec<T> {
    /// Returns the initialized prefix as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.buf {
            // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
            // and `self.len <= buf.len()`, so this creates a valid shared slice of `T`.
            Some(buf) => unsafe { core::slice::from_raw_parts(buf.as_ptr() as *const T, self.len) },
            None => &[],
        }
    }

    /// Returns the initialized prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        match &mut self.buf {
            // SAFETY: By invariant, all elements in `buf[..len]` are initialized,
            // and `len <= buf.len()`. We have exclusive access via `&mut self`, so it
            // is sound to create a mutable slice over `buf[..len]`.
            Some(buf) => unsafe { core::slice::from_raw_parts_mut(buf.as_mut_ptr() as *mut T, len) },
            None => &mut [],
        }
    }
}
