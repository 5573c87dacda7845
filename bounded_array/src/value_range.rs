// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Value range validation for the elements of a [`BoundedArray`].
//!
//! The valid range is the closed interval `[MIN_VALUE, MAX_VALUE]`, ie `[-100, 100]`.
//! Both ends are inclusive, so `-100` and `100` are valid, and `-101` and `101` are not.
//!
//! [`BoundedArray`]: crate::BoundedArray

/// Smallest value that a checked write accepts.
pub const MIN_VALUE: i32 = -100;

/// Largest value that a checked write accepts.
pub const MAX_VALUE: i32 = 100;

/// Result of checking a value against `[MIN_VALUE, MAX_VALUE]`.
///
/// This is a three state result (like a range bounds check) so that callers can tell
/// which side of the range a value fell off of.
///
/// ```
/// use r3bl_bounded_array::{ValueRangeCheck, ValueRangeResult};
///
/// assert_eq!((-101_i32).check_value_range(), ValueRangeResult::Underflowed);
/// assert_eq!(0_i32.check_value_range(), ValueRangeResult::Within);
/// assert_eq!(101_i32.check_value_range(), ValueRangeResult::Overflowed);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueRangeResult {
    /// Value is below [`MIN_VALUE`].
    Underflowed,

    /// Value is in `[MIN_VALUE, MAX_VALUE]`.
    Within,

    /// Value is above [`MAX_VALUE`].
    Overflowed,
}

/// Check a numeric value against `[MIN_VALUE, MAX_VALUE]`.
///
/// Implemented for [`i32`] (the element type) and [`i64`] (the type that element-wise
/// arithmetic is carried out in, so that `i32::MAX + 1` can't wrap around into range).
pub trait ValueRangeCheck: Copy {
    fn check_value_range(self) -> ValueRangeResult;

    fn is_valid_value(self) -> bool {
        self.check_value_range() == ValueRangeResult::Within
    }
}

impl ValueRangeCheck for i64 {
    fn check_value_range(self) -> ValueRangeResult {
        if self < i64::from(MIN_VALUE) {
            ValueRangeResult::Underflowed
        } else if self > i64::from(MAX_VALUE) {
            ValueRangeResult::Overflowed
        } else {
            ValueRangeResult::Within
        }
    }
}

impl ValueRangeCheck for i32 {
    fn check_value_range(self) -> ValueRangeResult { i64::from(self).check_value_range() }
}
