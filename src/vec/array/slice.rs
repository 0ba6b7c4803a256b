// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{Element, StepVec};

impl<T: Element> StepVec<T> {
    /// Returns the initialized prefix as a shared slice (`&buf[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.buf {
            Some(buf) => &buf[..self.len],
            None => &[],
        }
    }

    /// Returns the initialized prefix as a mutable slice (`&mut buf[..len]`).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        match &mut self.buf {
            Some(buf) => &mut buf[..len],
            None => &mut [],
        }
    }
}
