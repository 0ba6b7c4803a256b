// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `step-vec`
//!
//! A `no_std` (+ `alloc`), growable, heap-backed vector type for `Copy`
//! elements, **with no `unsafe` by default**.
//!
//! The core type, [`StepVec<T>`], owns one contiguous heap buffer of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`. Only the
//! prefix `[0..len)` is ever readable.
//!
//! ## Growth policy
//!
//! Growth is deliberately asymmetric:
//!
//! - [`StepVec::push_back`] grows **additively**: a full buffer is replaced by
//!   one with [`StepVec::GROWTH_STEP`] more slots.
//! - [`StepVec::insert`] grows **multiplicatively**: a full buffer is replaced
//!   by one with `max(capacity * 2, GROWTH_STEP)` slots.
//!
//! [`StepVec::reserve`] allocates exactly the requested number of slots and
//! [`StepVec::shrink_to_fit`] reallocates to exactly `len` slots. Every
//! reallocation replaces the buffer wholesale.
//!
//! ## Cursors
//!
//! Positions are expressed with two small `Copy` value types:
//!
//! - [`Cursor`]: a read-only position, issued by [`StepVec::begin`] /
//!   [`StepVec::end`];
//! - [`CursorMut`]: a position that also permits mutation through
//!   [`StepVec::get_at_mut`], issued by [`StepVec::begin_mut`] /
//!   [`StepVec::end_mut`], [`StepVec::insert`] and [`StepVec::erase`].
//!
//! A `CursorMut` converts into a `Cursor` (never the reverse) and both kinds
//! compare equal when they name the same slot of the same buffer. Cursors
//! hold no borrow; instead each one records the identity and the buffer
//! generation of the container that issued it. Any reallocation bumps the
//! generation, and a cursor from an older generation is rejected with
//! [`Error::InvalidatedIterator`].
//!
//! ## Errors
//!
//! Precondition violations are reported, never swallowed, and leave the
//! container unchanged:
//!
//! - [`Error::EmptyContainer`] from [`StepVec::pop_back`] on an empty vector;
//! - [`Error::IndexOutOfRange`] from [`StepVec::at`] / [`StepVec::at_mut`];
//! - [`Error::IteratorOutOfBounds`] for cursors outside the valid range or
//!   issued by another container.
//!
//! `v[i]` follows slice semantics and **panics** on out-of-range indices.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` as a plain sequence.
//! - `unsafe-maybe-uninit`: backing slots become `MaybeUninit<T>`, removing
//!   the `T: Default` requirement. A small amount of internal `unsafe` is used
//!   to treat only `[0..len)` as initialized.
//! - `log`: emits `log::trace!` records on every reallocation.
//!
//! ## Example
//!
//! ```rust
//! use step_vec::{StepVec, step_vec};
//!
//! let mut v: StepVec<i32> = step_vec![2, 4, 6];
//! let it = v.insert(v.begin(), 1).unwrap();
//! assert_eq!(v.get_at(it), Ok(&1));
//! assert_eq!(v.to_string(), "[1, 2, 4, 6]");
//!
//! let next = v.erase(v.begin()).unwrap();
//! assert_eq!(v.get_at(next), Ok(&2));
//! assert_eq!(v.pop_back(), Ok(6));
//! assert_eq!(v.as_slice(), &[2, 4]);
//! ```

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Emits a `log::trace!` record when the `log` feature is enabled.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
    };
}

// Modules
mod cursor;
mod error;
mod index;
mod iter;
mod macros;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::{Element, StepVec};
