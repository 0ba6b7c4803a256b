// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StepVec`.
//!
//! These errors represent precondition violations. They are `Copy` and
//! implement `core::error::Error`.

// External imports - thiserror
use thiserror::Error;

/// Errors returned by operations on [`StepVec`](crate::StepVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A removal was attempted on a vector with `len() == 0`.
    #[error("container is empty")]
    EmptyContainer,
    /// Indexed access with `index >= len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
    /// A cursor lies outside the range the operation accepts, or was issued
    /// by a different vector.
    #[error("iterator position out of bounds")]
    IteratorOutOfBounds,
    /// A cursor was issued before the vector last reallocated its buffer.
    #[error("iterator invalidated by reallocation")]
    InvalidatedIterator,
}
