// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StepVec`](crate::StepVec).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&StepVec` and `&mut StepVec` iterate as slices.
//! - Collecting into a `StepVec` appends through `push_back`.
//!
//! Positional, checked iteration lives in [`cursor`](crate::Cursor).

// Crate imports
use crate::vec::{Element, StepVec};

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `StepVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T: Element> {
    pub(crate) v: StepVec<T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T: Element> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(self.v.as_slice()[i])
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T: Element> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.v.as_slice()[self.back])
        } else {
            None
        }
    }
}
impl<T: Element> FusedIterator for IntoIter<T> {}
impl<T: Element> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: Element> IntoIterator for &'a StepVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T: Element> IntoIterator for &'a mut StepVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T: Element> IntoIterator for StepVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            v: self,
        }
    }
}

impl<T: Element> FromIterator<T> for StepVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
