// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// `unsafe-maybe-uninit` backend: slots are `MaybeUninit<T>`.
//
// - Elements in `buf[..len]` are initialized `T` values.
// - Elements in `buf[len..capacity]` are logically uninitialized and must
//   never be read as `T`.
// - All public methods maintain these invariants.

mod slice;
mod slot;

pub(crate) use slot::{Slot, alloc_slots, new_slot};
