// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{Element, StepVec};

impl<T: Element> Extend<T> for StepVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Element + 'a> Extend<&'a T> for StepVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Element> StepVec<T> {
    /// Appends every element of `src` in order.
    ///
    /// Elements go through [`push_back`](Self::push_back), so the buffer grows
    /// in `GROWTH_STEP` increments exactly as if they were pushed one by one.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.extend(src.iter().copied());
    }
}
