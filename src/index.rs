// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`StepVec`](crate::StepVec).
//!
//! `Index` / `IndexMut` mirror slice behavior and **panic** on out-of-range
//! access. Use [`StepVec::at`](crate::StepVec::at) /
//! [`StepVec::at_mut`](crate::StepVec::at_mut) for the fallible form. Views
//! are restricted to the initialized prefix `[0..len)`; the reserved tail is
//! never reachable.

// Crate imports
use crate::vec::{Element, StepVec};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T: Element> Index<usize> for StepVec<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        match self.at(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Element> IndexMut<usize> for StepVec<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match self.at_mut(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! impl_range_index {
    ($($range:ty),+ $(,)?) => {$(
        impl<T: Element> Index<$range> for StepVec<T> {
            type Output = [T];
            fn index(&self, r: $range) -> &Self::Output {
                &self.as_slice()[r]
            }
        }
        impl<T: Element> IndexMut<$range> for StepVec<T> {
            fn index_mut(&mut self, r: $range) -> &mut Self::Output {
                &mut self.as_mut_slice()[r]
            }
        }
    )+};
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>,
    RangeFull,
);
