// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{Element, StepVec},
};

impl<T: Element> StepVec<T> {
    /// Removes and returns the last element.
    ///
    /// Returns [`Error::EmptyContainer`] if the vector is empty. Capacity is
    /// never changed.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        let last = self.as_slice().last().copied().ok_or(Error::EmptyContainer)?;
        self.len -= 1;
        Ok(last)
    }
}
