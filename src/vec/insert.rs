// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    cursor::{Cursor, CursorMut},
    error::Error,
    vec::{Element, StepVec, new_slot},
};

impl<T: Element> StepVec<T> {
    /// Inserts `value` immediately before `position`, shifting later elements
    /// one slot toward the end.
    ///
    /// Valid positions are `begin()..=end()`; inserting at `end()` appends.
    /// Returns a cursor to the inserted element.
    ///
    /// When the buffer is full it first grows **multiplicatively** to
    /// `max(capacity * 2, GROWTH_STEP)` slots, which invalidates every
    /// outstanding cursor (including `position`).
    ///
    /// # Errors
    ///
    /// - [`Error::IteratorOutOfBounds`] if `position` is past `end()` or was
    ///   issued by another vector.
    /// - [`Error::InvalidatedIterator`] if `position` predates the last
    ///   reallocation.
    ///
    /// The vector is unchanged on error.
    pub fn insert<C: Into<Cursor<T>>>(
        &mut self,
        position: C,
        value: T,
    ) -> Result<CursorMut<T>, Error> {
        let index = self.index_of(position)?;
        let len = self.len;
        let capacity = self.capacity();
        if len == capacity {
            self.reserve(capacity.saturating_mul(2).max(Self::GROWTH_STEP));
        }

        // Shift right: [index..len) -> [index+1..len+1)
        let slots = self.slots_mut();
        slots.copy_within(index..len, index + 1);
        slots[index] = new_slot(value);

        self.len = len + 1;
        Ok(self.cursor_mut_at(index))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, StepVec};

    #[test]
    fn test_insert_at_begin() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[2, 4, 6]);
        let it = v.insert(v.begin(), 1).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 4, 6]);
        assert_eq!(v.len(), 4);
        assert_eq!(v.get_at(it), Ok(&1));
        assert_eq!(it, v.begin());
    }

    #[test]
    fn test_insert_in_middle_shifts_right() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[10, 20, 30]);
        let mut pos = v.begin();
        pos.advance();
        let it = v.insert(pos, 15).unwrap();
        assert_eq!(v.as_slice(), &[10, 15, 20, 30]);
        assert_eq!(v.index_of(it), Ok(1));
    }

    #[test]
    fn test_insert_at_end_matches_push_back() {
        let mut a: StepVec<i32> = StepVec::from_slice(&[1, 2]);
        let mut b = a.clone();
        let it = a.insert(a.end(), 3).unwrap();
        b.push_back(3);
        assert_eq!(a, b);
        assert_eq!(a.get_at(it), Ok(&3));
    }

    #[test]
    fn test_insert_into_empty() {
        let mut v: StepVec<i32> = StepVec::with_capacity(0);
        let it = v.insert(v.begin(), 9).unwrap();
        assert_eq!(v.capacity(), 5);
        assert_eq!(v.as_slice(), &[9]);
        assert_eq!(v.get_at(it), Ok(&9));
    }

    #[test]
    fn test_insert_grows_multiplicatively() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(v.capacity(), 6);
        v.insert(v.begin(), 0).unwrap();
        assert_eq!(v.capacity(), 12);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);

        // Not full: no growth.
        v.insert(v.end(), 7).unwrap();
        assert_eq!(v.capacity(), 12);

        let mut small: StepVec<i32> = StepVec::with_capacity(1);
        small.push_back(1);
        small.insert(small.end(), 2).unwrap();
        // Doubling 1 gives 2, floored at the growth step.
        assert_eq!(small.capacity(), 5);
    }

    #[test]
    fn test_insert_past_end_errors_and_is_noop() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[1, 2]);
        let mut pos = v.end();
        pos.advance();
        let cap = v.capacity();
        assert_eq!(v.insert(pos, 99), Err(Error::IteratorOutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn test_insert_foreign_cursor_errors() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[1, 2]);
        let other: StepVec<i32> = StepVec::from_slice(&[1, 2]);
        assert_eq!(v.insert(other.begin(), 0), Err(Error::IteratorOutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_insert_stale_cursor_errors() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[1, 2]);
        let stale = v.begin();
        v.reserve(10);
        assert_eq!(v.insert(stale, 0), Err(Error::InvalidatedIterator));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_insert_in_place_cursor_semantics() {
        let mut v: StepVec<i32> = StepVec::with_capacity(10);
        v.extend_from_slice(&[1, 2, 3, 4]);
        let before = v.begin(); // offset 0 -> 1
        let mut at = v.begin();
        at.advance(); // offset 1 -> 2
        let mut after = at;
        after.advance(); // offset 2 -> 3

        v.insert(at, 9).unwrap();
        assert_eq!(v.as_slice(), &[1, 9, 2, 3, 4]);

        // Before the insertion point: same element.
        assert_eq!(v.get_at(before), Ok(&1));
        // At and after: same slot, now holding the shifted contents.
        assert_eq!(v.get_at(at), Ok(&9));
        assert_eq!(v.get_at(after), Ok(&2));
    }

    #[test]
    fn test_insert_with_growth_invalidates_position() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[1, 2, 3, 4, 5]);
        let pos = v.begin();
        let it = v.insert(pos, 0).unwrap();
        assert_eq!(v.get_at(pos), Err(Error::InvalidatedIterator));
        assert_eq!(v.get_at(it), Ok(&0));
    }

    #[test]
    fn test_insert_accepts_mutable_cursor() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[5]);
        let pos = v.end_mut();
        v.insert(pos, 6).unwrap();
        assert_eq!(v.as_slice(), &[5, 6]);
    }
}
