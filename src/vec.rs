// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StepVec` type and its inherent API.
//!
//! `StepVec<T>` is a growable vector specialized for `Copy` types. It stores
//! elements in one exclusively owned heap buffer and tracks a logical length.
//! Methods generally mirror slice/vector semantics, with fallible variants
//! wherever a precondition can be violated.

#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod array;
#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;

mod erase;
mod extend;
mod from;
mod insert;
mod pop;
mod push;
mod reserve;

#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub(crate) use array::{Slot, alloc_slots, new_slot};
#[cfg(feature = "unsafe-maybe-uninit")]
pub(crate) use maybe_uninit::{Slot, alloc_slots, new_slot};

// Crate imports
use crate::{cursor::next_container_id, error::Error};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// Element bound for [`StepVec`].
///
/// In the default backend this is `Copy + Default`: fresh buffers are filled
/// eagerly with `T::default()`. With the `unsafe-maybe-uninit` feature it is
/// just `Copy`. It is implemented for every type meeting the bound.
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub trait Element: Copy + Default {}
#[cfg(not(feature = "unsafe-maybe-uninit"))]
impl<T: Copy + Default> Element for T {}

/// Element bound for [`StepVec`].
///
/// With the `unsafe-maybe-uninit` feature this is just `Copy`. It is
/// implemented for every type meeting the bound.
#[cfg(feature = "unsafe-maybe-uninit")]
pub trait Element: Copy {}
#[cfg(feature = "unsafe-maybe-uninit")]
impl<T: Copy> Element for T {}

/// A growable, heap-backed vector for `Copy` types.
///
/// `StepVec<T>` owns a buffer of `capacity` slots and a logical length
/// `len ∈ 0..=capacity`.
///
/// # Layout and invariants
///
/// - The buffer is `None` only while `capacity() == 0`; it is never partially
///   replaced. Reallocation builds a new buffer, copies `[0..len)` into it and
///   drops the old one.
/// - Only the prefix `buf[..len]` is visible through the API. Slots in
///   `[len..capacity)` are never read.
/// - Every reallocation bumps an internal generation counter; cursors issued
///   under an older generation are rejected (see [`Cursor`](crate::Cursor)).
///
/// # Growth
///
/// | operation                  | when full, new capacity          |
/// |----------------------------|----------------------------------|
/// | [`push_back`](Self::push_back) | `len + GROWTH_STEP`          |
/// | [`insert`](Self::insert)   | `max(capacity * 2, GROWTH_STEP)` |
/// | [`reserve(n)`](Self::reserve) | exactly `n` (if `n > capacity`) |
/// | [`shrink_to_fit`](Self::shrink_to_fit) | exactly `len`        |
///
/// # Cloning
///
/// [`Clone::clone`] and [`Clone::clone_from`] repopulate the target through
/// [`push_back`](Self::push_back), so the capacity of the result follows the
/// growth policy rather than mirroring the source's capacity.
///
/// # Examples
///
/// ```rust
/// use step_vec::StepVec;
///
/// let mut v: StepVec<u8> = StepVec::new();
/// assert_eq!(v.capacity(), StepVec::<u8>::DEFAULT_CAPACITY);
/// v.push_back(1);
/// v.extend_from_slice(&[2, 3]);
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.at(3), Err(step_vec::Error::IndexOutOfRange { index: 3, len: 3 }));
/// ```
pub struct StepVec<T: Element> {
    pub(crate) buf: Option<Box<[Slot<T>]>>,
    pub(crate) len: usize,
    pub(crate) id: usize,
    pub(crate) generation: usize,
}

impl<T: Element> StepVec<T> {
    /// Capacity reserved by [`new`](Self::new) and the floor used when
    /// bulk-loading.
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Number of slots added when [`push_back`](Self::push_back) finds the
    /// buffer full.
    pub const GROWTH_STEP: usize = 5;

    /// Constructs an empty vector with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots reserved.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty vector with exactly `n` slots reserved.
    ///
    /// `with_capacity(0)` allocates nothing.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        let mut v = Self {
            buf: None,
            len: 0,
            id: next_container_id(),
            generation: 0,
        };
        v.reserve(n);
        v
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.as_ref().map_or(0, |buf| buf.len())
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets `len = 0`. The buffer is kept and outstanding cursors stay in
    /// the same generation.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the initialized prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// The whole backing buffer, including the uninitialized tail.
    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<T>] {
        match &mut self.buf {
            Some(buf) => &mut buf[..],
            None => &mut [],
        }
    }
}

impl<T: Element> Default for StepVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for StepVec<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        out.extend_from_slice(self.as_slice());
        out
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from_slice(source.as_slice());
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for StepVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Renders `[e0, e1, ..., en-1]`; an empty vector renders as `[]`.
impl<T: Element + fmt::Display> fmt::Display for StepVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut sep = "";
        for x in self.as_slice() {
            write!(f, "{sep}{x}")?;
            sep = ", ";
        }
        f.write_str("]")
    }
}

impl<T: Element + PartialEq> PartialEq for StepVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Element + Eq> Eq for StepVec<T> {}
impl<T: Element + Ord> Ord for StepVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Element + PartialOrd> PartialOrd for StepVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Element + Hash> Hash for StepVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Element> Deref for StepVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T: Element> DerefMut for StepVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Element> AsRef<[T]> for StepVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Element> AsMut<[T]> for StepVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T: Element> Borrow<[T]> for StepVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Element> BorrowMut<[T]> for StepVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StepVec;
    use crate::Error;
    use alloc::{format, string::ToString};

    #[test]
    fn test_new_reserves_default_capacity() {
        let v: StepVec<i32> = StepVec::new();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 5);
        assert_eq!(StepVec::<i32>::DEFAULT_CAPACITY, 5);
        assert_eq!(StepVec::<i32>::GROWTH_STEP, 5);

        let d: StepVec<i32> = StepVec::default();
        assert_eq!(d.capacity(), 5);
    }

    #[test]
    fn test_with_capacity() {
        let v: StepVec<u8> = StepVec::with_capacity(12);
        assert_eq!(v.capacity(), 12);
        assert!(v.is_empty());

        let z: StepVec<u8> = StepVec::with_capacity(0);
        assert_eq!(z.capacity(), 0);
        assert!(z.buf.is_none());
    }

    #[test]
    fn test_at_boundaries() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[7, 8, 9]);
        assert_eq!(v.at(2), Ok(&9));
        assert_eq!(v.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        *v.at_mut(0).unwrap() = 70;
        assert_eq!(v.at_mut(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(v.as_slice(), &[70, 8, 9]);

        let empty: StepVec<i32> = StepVec::new();
        assert_eq!(empty.at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_at_never_reaches_reserved_tail() {
        let mut v: StepVec<i32> = StepVec::with_capacity(10);
        v.push_back(1);
        assert_eq!(v.capacity(), 10);
        for i in 1..10 {
            assert!(v.at(i).is_err());
            assert!(v.get(i).is_none());
        }
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[1, 2, 3, 4, 5, 6]);
        let cap = v.capacity();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), cap);
        assert!(v.at(0).is_err());
        v.push_back(9);
        assert_eq!(v.as_slice(), &[9]);
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn test_clone_is_independent_copy() {
        let mut v: StepVec<i32> = StepVec::from_slice(&[1, 2, 3]);
        let mut c = v.clone();
        assert_eq!(c, v);

        v[1] = 20;
        c[2] = 30;
        c.push_back(4);

        assert_eq!(v.as_slice(), &[1, 20, 3]);
        assert_eq!(c.as_slice(), &[1, 2, 30, 4]);
    }

    #[test]
    fn test_clone_capacity_follows_repopulation() {
        let mut v: StepVec<i32> = StepVec::with_capacity(100);
        v.extend_from_slice(&[1, 2, 3]);
        let c = v.clone();
        assert_eq!(c.capacity(), 3);
        assert_eq!(c.as_slice(), &[1, 2, 3]);

        let empty: StepVec<i32> = StepVec::new();
        let c2 = empty.clone();
        assert!(c2.is_empty());
        assert_eq!(c2.capacity(), 0);
    }

    #[test]
    fn test_clone_from_clears_then_repopulates() {
        let source: StepVec<i32> = StepVec::from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        let mut target: StepVec<i32> = StepVec::from_slice(&[9, 9]);
        assert_eq!(target.capacity(), 5);

        target.clone_from(&source);
        assert_eq!(target.as_slice(), source.as_slice());
        // 5 slots, then one additive step when the sixth element arrives.
        assert_eq!(target.capacity(), 10);

        target.push_back(8);
        assert_eq!(source.len(), 7);
        assert_eq!(target.len(), 8);
    }

    #[test]
    fn test_clone_gets_its_own_identity() {
        let v: StepVec<i32> = StepVec::from_slice(&[1, 2]);
        let c = v.clone();
        assert_ne!(v.begin(), c.begin());
        assert_eq!(c.get_at(v.begin()), Err(Error::IteratorOutOfBounds));
    }

    #[test]
    fn test_display_rendering() {
        let v: StepVec<i32> = StepVec::from_slice(&[1, 2, 4, 6]);
        assert_eq!(v.to_string(), "[1, 2, 4, 6]");

        let one: StepVec<i32> = StepVec::from_slice(&[42]);
        assert_eq!(one.to_string(), "[42]");

        let empty: StepVec<f64> = StepVec::new();
        assert_eq!(empty.to_string(), "[]");

        let floats: StepVec<f64> = StepVec::from_slice(&[1.5, 2.0]);
        assert_eq!(format!("{floats}"), "[1.5, 2]");
    }

    #[test]
    fn test_debug_structure() {
        let v: StepVec<i32> = StepVec::from_slice(&[1, 2]);
        let dbg = format!("{v:?}");
        assert!(dbg.contains("StepVec"));
        assert!(dbg.contains("len: 2"));
        assert!(dbg.contains("capacity: 5"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_eq_ord_hash_via_slice() {
        use core::cmp::Ordering;
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a: StepVec<i32> = StepVec::from_slice(&[1, 2, 3]);
        let mut b: StepVec<i32> = StepVec::with_capacity(40);
        b.extend_from_slice(&[1, 2, 3]);
        let c: StepVec<i32> = StepVec::from_slice(&[1, 2, 4]);

        // Capacity plays no part in equality.
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_slice_views() {
        use core::borrow::{Borrow, BorrowMut};

        let mut v: StepVec<i32> = StepVec::from_slice(&[1, 2, 3]);
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2, 3]);
        assert_eq!(v.first(), Some(&1));
        assert_eq!(v.last(), Some(&3));
        assert!(v.contains(&2));
        assert!(!v.contains(&5));

        let aref: &[i32] = v.as_ref();
        assert_eq!(aref, &[1, 2, 3]);
        v.as_mut()[0] = 10;
        BorrowMut::<[i32]>::borrow_mut(&mut v)[1] = 20;
        let b: &[i32] = Borrow::<[i32]>::borrow(&v);
        assert_eq!(b, &[10, 20, 3]);

        for x in v.iter_mut() {
            *x += 1;
        }
        assert_eq!(v.iter().copied().sum::<i32>(), 36);
        *v.get_mut(2).unwrap() = 0;
        assert_eq!(v.get(2), Some(&0));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn test_capacity_never_below_len() {
        let mut v: StepVec<u32> = StepVec::with_capacity(0);
        for i in 0..40 {
            v.push_back(i);
            assert!(v.capacity() >= v.len());
            if i % 3 == 0 {
                v.insert(v.begin(), i).unwrap();
                assert!(v.capacity() >= v.len());
            }
            if i % 7 == 0 {
                v.shrink_to_fit();
                assert_eq!(v.capacity(), v.len());
            }
        }
        while v.pop_back().is_ok() {
            assert!(v.capacity() >= v.len());
        }
    }
}
