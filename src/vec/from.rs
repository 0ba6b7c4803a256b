// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{Element, StepVec};

impl<T: Element> StepVec<T> {
    /// Bulk-loads `src` into a fresh vector.
    ///
    /// Capacity is `max(src.len(), DEFAULT_CAPACITY)`, so loading never
    /// reallocates.
    #[inline]
    pub fn from_slice(src: &[T]) -> Self {
        let mut v = Self::with_capacity(src.len().max(Self::DEFAULT_CAPACITY));
        v.extend_from_slice(src);
        v
    }
}

impl<T: Element, const M: usize> From<[T; M]> for StepVec<T> {
    fn from(src: [T; M]) -> Self {
        Self::from_slice(&src)
    }
}

impl<T: Element, const M: usize> From<&[T; M]> for StepVec<T> {
    fn from(src: &[T; M]) -> Self {
        Self::from_slice(src)
    }
}

impl<T: Element> From<&[T]> for StepVec<T> {
    fn from(src: &[T]) -> Self {
        Self::from_slice(src)
    }
}
