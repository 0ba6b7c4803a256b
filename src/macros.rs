// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Bulk-loads a [`StepVec`](crate::StepVec) from a literal list.
///
/// Equivalent to [`StepVec::from_slice`](crate::StepVec::from_slice): the
/// capacity is the number of values, floored at `DEFAULT_CAPACITY`.
/// `step_vec![]` is [`StepVec::new`](crate::StepVec::new).
///
/// ```rust
/// use step_vec::step_vec;
///
/// let v = step_vec![1.0_f64, 2.5, 4.0];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 5);
/// assert_eq!(v.to_string(), "[1, 2.5, 4]");
/// ```
#[macro_export]
macro_rules! step_vec {
    () => {
        $crate::StepVec::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::StepVec::from_slice(&[$($x),+])
    };
}
