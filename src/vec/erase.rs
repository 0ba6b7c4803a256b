// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    cursor::{Cursor, CursorMut},
    error::Error,
    vec::{Element, StepVec},
};

impl<T: Element> StepVec<T> {
    /// Removes the element at `position`, shifting later elements one slot
    /// toward the front.
    ///
    /// Valid positions are `begin()..end()`. Returns a cursor to the element
    /// that now occupies the erased slot, which equals `end()` when the last
    /// element was erased. Never reallocates.
    ///
    /// # Errors
    ///
    /// - [`Error::IteratorOutOfBounds`] if `position` is at or past `end()`,
    ///   or was issued by another vector.
    /// - [`Error::InvalidatedIterator`] if `position` predates the last
    ///   reallocation.
    ///
    /// The vector is unchanged on error.
    pub fn erase<C: Into<Cursor<T>>>(&mut self, position: C) -> Result<CursorMut<T>, Error> {
        let index = self.index_of(position)?;
        let len = self.len;
        if index == len {
            return Err(Error::IteratorOutOfBounds);
        }

        // Shift left: [index+1..len) -> [index..len-1)
        self.slots_mut().copy_within(index + 1..len, index);

        self.len = len - 1;
        Ok(self.cursor_mut_at(index))
    }
}
