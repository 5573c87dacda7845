// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::fmt::{Display, Formatter, Result};

use crate::{CombineOp, MAX_VALUE, MIN_VALUE};

/// Type alias for results of every fallible [`BoundedArray`] operation.
///
/// [`BoundedArray`]: crate::BoundedArray
pub type BoundedArrayResult<T> = core::result::Result<T, BoundedArrayError>;

/// Errors from [`BoundedArray`] operations.
///
/// There are only two kinds, and both are recoverable. A rejected operation leaves the
/// container exactly as it was before the call.
///
/// | Variant               | Cause                                                         |
/// | :-------------------- | :------------------------------------------------------------ |
/// | [`OutOfRange`]        | An index is not in `[0, length)`                              |
/// | [`InvalidArgument`]   | A value to be written or produced is not in `[-100, 100]`     |
///
/// Since this implements [`miette::Diagnostic`], it can be converted into a
/// [`miette::Report`] with `?` in any function that returns [`miette::Result`].
///
/// [`BoundedArray`]: crate::BoundedArray
/// [`OutOfRange`]: Self::OutOfRange
/// [`InvalidArgument`]: Self::InvalidArgument
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum BoundedArrayError {
    #[error("Index {index} is out of range for array of size {length}")]
    #[diagnostic(
        code(r3bl_bounded_array::out_of_range),
        help("Valid indices are 0 up to (but not including) the size of the array")
    )]
    OutOfRange { index: usize, length: usize },

    /// The `value` is an [`i64`] so that results of element-wise arithmetic that don't
    /// fit in an [`i32`] are still reported exactly.
    #[error(
        "{origin} {value}{at} is outside valid range [{min}, {max}]",
        at = .origin.position_suffix(),
        min = MIN_VALUE,
        max = MAX_VALUE
    )]
    #[diagnostic(
        code(r3bl_bounded_array::invalid_argument),
        help("Use a value between -100 and 100 (both inclusive)")
    )]
    InvalidArgument { value: i64, origin: ValueOrigin },
}

/// Which operation produced the value that was rejected. This only affects the error
/// message and the [`BoundedArrayError::position()`] accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    /// [`BoundedArray::set_checked()`](crate::BoundedArray::set_checked).
    Written,
    /// [`BoundedArray::push_back()`](crate::BoundedArray::push_back).
    Appended,
    /// `TryFrom<Vec<i32>>` or `TryFrom<&[i32]>`.
    Converted { position: usize },
    /// [`BoundedArray::try_clone()`](crate::BoundedArray::try_clone).
    Copied { position: usize },
    /// [`BoundedArray::assign_from()`](crate::BoundedArray::assign_from).
    Assigned { position: usize },
    /// [`BoundedArray::add()`](crate::BoundedArray::add) or
    /// [`BoundedArray::subtract()`](crate::BoundedArray::subtract).
    Combined { op: CombineOp, position: usize },
}

impl Display for ValueOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ValueOrigin::Written | ValueOrigin::Converted { .. } => write!(f, "Value"),
            ValueOrigin::Appended => write!(f, "Appended value"),
            ValueOrigin::Copied { .. } => write!(f, "Copied value"),
            ValueOrigin::Assigned { .. } => write!(f, "Assigned value"),
            ValueOrigin::Combined { op, .. } => write!(f, "{} value", op.past_tense()),
        }
    }
}

impl ValueOrigin {
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            ValueOrigin::Written | ValueOrigin::Appended => None,
            ValueOrigin::Converted { position }
            | ValueOrigin::Copied { position }
            | ValueOrigin::Assigned { position }
            | ValueOrigin::Combined { position, .. } => Some(*position),
        }
    }

    fn position_suffix(&self) -> String {
        self.position()
            .map(|position| format!(" at position {position}"))
            .unwrap_or_default()
    }
}

impl BoundedArrayError {
    pub fn new_out_of_range(index: usize, length: usize) -> Self {
        BoundedArrayError::OutOfRange { index, length }
    }

    pub fn new_invalid_argument(value: impl Into<i64>, origin: ValueOrigin) -> Self {
        BoundedArrayError::InvalidArgument {
            value: value.into(),
            origin,
        }
    }

    /// The offending index (for [`Self::OutOfRange`]) or the position where the offending
    /// value was found (for [`Self::InvalidArgument`], when known).
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            BoundedArrayError::OutOfRange { index, .. } => Some(*index),
            BoundedArrayError::InvalidArgument { origin, .. } => origin.position(),
        }
    }
}
