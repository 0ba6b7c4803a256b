// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor positions into a [`StepVec`](crate::StepVec).
//!
//! A cursor is a `Copy` value naming one slot of one vector's buffer. It
//! records three things:
//!
//! - the identity of the vector that issued it;
//! - the buffer generation at the time it was issued;
//! - an offset from the start of the buffer.
//!
//! Cursors hold no borrow, so they can be passed back into mutating calls such
//! as [`StepVec::insert`] and [`StepVec::erase`]. Every use is checked:
//!
//! - a cursor issued by another vector is rejected with
//!   [`Error::IteratorOutOfBounds`];
//! - a cursor issued before the vector last reallocated is rejected with
//!   [`Error::InvalidatedIterator`];
//! - dereferencing at or past `end()` is rejected with
//!   [`Error::IteratorOutOfBounds`].
//!
//! Shifting elements in place (insert or erase without growth) does not change
//! the generation. A cursor before the affected position keeps naming the
//! same element; a cursor at or after it keeps its offset and therefore names
//! whatever element was shifted into that slot.
//!
//! Advancing is plain offset arithmetic and is not checked; a cursor advanced
//! past `end()` fails every later checked use.

// Crate imports
use crate::{
    error::Error,
    vec::{Element, StepVec},
};

// Core imports
use core::{
    fmt,
    marker::PhantomData,
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_CONTAINER_ID: AtomicUsize = AtomicUsize::new(0);

/// Hands out a fresh identity for a newly constructed vector.
pub(crate) fn next_container_id() -> usize {
    NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed)
}

/// A read-only position within a [`StepVec`].
///
/// Issued by [`StepVec::begin`] and [`StepVec::end`], or converted from a
/// [`CursorMut`]. Dereference it with [`StepVec::get_at`].
pub struct Cursor<T> {
    pub(crate) container: usize,
    pub(crate) generation: usize,
    pub(crate) offset: usize,
    _marker: PhantomData<fn() -> T>,
}

/// A position within a [`StepVec`] that also permits mutation through
/// [`StepVec::get_at_mut`].
///
/// Issued by [`StepVec::begin_mut`], [`StepVec::end_mut`], [`StepVec::insert`]
/// and [`StepVec::erase`]. Converts into a [`Cursor`]; there is no conversion
/// the other way.
pub struct CursorMut<T> {
    inner: Cursor<T>,
}

impl<T> Cursor<T> {
    pub(crate) const fn new(container: usize, generation: usize, offset: usize) -> Self {
        Self {
            container,
            generation,
            offset,
            _marker: PhantomData,
        }
    }

    /// Moves to the next slot and returns the new position (prefix increment).
    #[inline]
    pub fn advance(&mut self) -> Self {
        self.offset = self.offset.wrapping_add(1);
        *self
    }

    /// Moves to the next slot and returns the previous position (postfix
    /// increment).
    #[inline]
    pub fn advance_post(&mut self) -> Self {
        let prev = *self;
        self.offset = self.offset.wrapping_add(1);
        prev
    }

    /// Signed slot distance `self - origin`.
    ///
    /// Returns `None` when the two cursors were not issued by the same vector
    /// under the same buffer generation.
    pub fn offset_from<C: Into<Cursor<T>>>(self, origin: C) -> Option<isize> {
        let origin = origin.into();
        if self.container != origin.container || self.generation != origin.generation {
            return None;
        }
        Some((self.offset as isize).wrapping_sub(origin.offset as isize))
    }
}

impl<T> CursorMut<T> {
    pub(crate) const fn new(container: usize, generation: usize, offset: usize) -> Self {
        Self {
            inner: Cursor::new(container, generation, offset),
        }
    }

    /// Moves to the next slot and returns the new position (prefix increment).
    #[inline]
    pub fn advance(&mut self) -> Self {
        self.inner.advance();
        *self
    }

    /// Moves to the next slot and returns the previous position (postfix
    /// increment).
    #[inline]
    pub fn advance_post(&mut self) -> Self {
        let prev = *self;
        self.inner.advance();
        prev
    }

    /// Signed slot distance `self - origin`; see [`Cursor::offset_from`].
    #[inline]
    pub fn offset_from<C: Into<Cursor<T>>>(self, origin: C) -> Option<isize> {
        self.inner.offset_from(origin)
    }

    /// Returns the read-only view of this position.
    #[inline]
    pub const fn as_cursor(&self) -> Cursor<T> {
        self.inner
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    fn from(c: CursorMut<T>) -> Self {
        c.inner
    }
}

impl<T> Copy for Cursor<T> {}
impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for CursorMut<T> {}
impl<T> Clone for CursorMut<T> {
    fn clone(&self) -> Self {
        *self
    }
}

// Equality is by position: same vector, same buffer generation, same slot.
impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
            && self.generation == other.generation
            && self.offset == other.offset
    }
}
impl<T> Eq for Cursor<T> {}
impl<T> PartialEq for CursorMut<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
impl<T> Eq for CursorMut<T> {}
impl<T> PartialEq<CursorMut<T>> for Cursor<T> {
    fn eq(&self, other: &CursorMut<T>) -> bool {
        *self == other.inner
    }
}
impl<T> PartialEq<Cursor<T>> for CursorMut<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        self.inner == *other
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("container", &self.container)
            .field("generation", &self.generation)
            .field("offset", &self.offset)
            .finish()
    }
}
impl<T> fmt::Debug for CursorMut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("container", &self.inner.container)
            .field("generation", &self.inner.generation)
            .field("offset", &self.inner.offset)
            .finish()
    }
}

impl<T: Element> StepVec<T> {
    #[inline]
    pub(crate) fn cursor_at(&self, offset: usize) -> Cursor<T> {
        Cursor::new(self.id, self.generation, offset)
    }

    #[inline]
    pub(crate) fn cursor_mut_at(&mut self, offset: usize) -> CursorMut<T> {
        CursorMut::new(self.id, self.generation, offset)
    }

    /// Read-only cursor at the first element, equal to [`end`](Self::end)
    /// when empty.
    #[inline]
    pub fn begin(&self) -> Cursor<T> {
        self.cursor_at(0)
    }

    /// Read-only cursor at the virtual slot after the last element.
    #[inline]
    pub fn end(&self) -> Cursor<T> {
        self.cursor_at(self.len)
    }

    /// Mutable cursor at the first element, equal to [`end_mut`](Self::end_mut)
    /// when empty.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<T> {
        self.cursor_mut_at(0)
    }

    /// Mutable cursor at the virtual slot after the last element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<T> {
        let len = self.len;
        self.cursor_mut_at(len)
    }

    /// Recovers the index named by `cursor`, in `0..=len()`.
    ///
    /// # Errors
    ///
    /// - [`Error::IteratorOutOfBounds`] if the cursor belongs to another vector
    ///   or lies past `end()`.
    /// - [`Error::InvalidatedIterator`] if it predates the last reallocation.
    pub fn index_of<C: Into<Cursor<T>>>(&self, cursor: C) -> Result<usize, Error> {
        let cursor = cursor.into();
        if cursor.container != self.id {
            return Err(Error::IteratorOutOfBounds);
        }
        if cursor.generation != self.generation {
            return Err(Error::InvalidatedIterator);
        }
        if cursor.offset > self.len {
            return Err(Error::IteratorOutOfBounds);
        }
        Ok(cursor.offset)
    }

    /// Dereferences `cursor`.
    ///
    /// Fails like [`index_of`](Self::index_of), and additionally with
    /// [`Error::IteratorOutOfBounds`] when the cursor sits at `end()`.
    pub fn get_at<C: Into<Cursor<T>>>(&self, cursor: C) -> Result<&T, Error> {
        let index = self.index_of(cursor)?;
        self.as_slice().get(index).ok_or(Error::IteratorOutOfBounds)
    }

    /// Dereferences a mutable `cursor`.
    ///
    /// Only [`CursorMut`] is accepted here; fails like [`get_at`](Self::get_at).
    pub fn get_at_mut(&mut self, cursor: CursorMut<T>) -> Result<&mut T, Error> {
        let index = self.index_of(cursor)?;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IteratorOutOfBounds)
    }
}
