// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Safe backend: slots are plain `T` values.
//
// - Fresh buffers are filled with `T::default()`, so `Element` requires
//   `T: Copy + Default` here.
// - Slots in `buf[len..capacity]` hold stale or default values and are never
//   read through the public API.

mod slice;
mod slot;

pub(crate) use slot::{Slot, alloc_slots, new_slot};
