// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Index bounds checking for array access, ie the half open interval `[0, length)`.

/// Result of simple array access bounds checking `[0, length)`.
///
/// There is no "underflow" variant because indices are [`usize`] and array access always
/// starts at `0`.
///
/// ```
/// use r3bl_bounded_array::{ArrayBoundsCheck, ArrayOverflowResult};
///
/// assert_eq!(4_usize.overflows(5), ArrayOverflowResult::Within);
/// assert_eq!(5_usize.overflows(5), ArrayOverflowResult::Overflowed);
/// assert_eq!(0_usize.overflows(0), ArrayOverflowResult::Overflowed);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArrayOverflowResult {
    /// Index is within valid bounds for array access.
    Within,

    /// Index has overflowed (is at or past the length).
    Overflowed,
}

pub trait ArrayBoundsCheck: Copy {
    /// Check whether `self` is a valid index into a collection of `length` elements. An
    /// empty collection has no valid index.
    fn overflows(self, length: usize) -> ArrayOverflowResult;
}

impl ArrayBoundsCheck for usize {
    fn overflows(self, length: usize) -> ArrayOverflowResult {
        if self < length {
            ArrayOverflowResult::Within
        } else {
            ArrayOverflowResult::Overflowed
        }
    }
}
