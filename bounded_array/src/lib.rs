// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_bounded_array
//!
//! A [`BoundedArray`] is an owned, contiguous, growable sequence of [`i32`] values where
//! every value written through a checked path must be in the inclusive range `[-100,
//! 100]` ([`MIN_VALUE`] to [`MAX_VALUE`]).
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Two write paths](#two-write-paths)
//! - [Element-wise arithmetic](#element-wise-arithmetic)
//! - [Errors](#errors)
//! - [Logging](#logging)
//!
//! <!-- /TOC -->
//!
//! # Two write paths
//!
//! | Operation                          | Index checked | Value checked |
//! | :--------------------------------- | :------------ | :------------ |
//! | [`BoundedArray::set_checked()`]    | yes           | yes           |
//! | [`BoundedArray::push_back()`]      | n/a           | yes           |
//! | [`BoundedArray::set_unchecked()`]  | yes           | no            |
//! | [`BoundedArray::at_mut()`]         | yes           | no            |
//!
//! The unchecked writers are the low level escape hatch. Copies
//! ([`BoundedArray::try_clone()`], [`BoundedArray::assign_from()`]) re-check every
//! element, so a value placed by them makes a copy fail. Combining
//! ([`BoundedArray::add()`], [`BoundedArray::subtract()`]) checks only the result, so such
//! a value is accepted as an operand as long as each combined value is in range.
//!
//! ```
//! use r3bl_bounded_array::{BoundedArray, BoundedArrayError};
//!
//! let mut array = BoundedArray::new(5);
//! array.set_checked(0, 10).unwrap();
//! array.set_checked(1, -50).unwrap();
//! array.set_checked(2, 100).unwrap();
//! assert_eq!(array.to_string(), "[10, -50, 100, 0, 0]");
//!
//! let result = array.set_checked(3, 150);
//! assert!(matches!(result, Err(BoundedArrayError::InvalidArgument { .. })));
//! assert_eq!(array.to_string(), "[10, -50, 100, 0, 0]");
//!
//! // The unchecked path is allowed to store an out of range value.
//! array.set_unchecked(3, 500).unwrap();
//! assert_eq!(array.get(3).unwrap(), 500);
//! ```
//!
//! # Element-wise arithmetic
//!
//! [`BoundedArray::add()`] and [`BoundedArray::subtract()`] accept operands of different
//! lengths. The result has the length of the longer operand, and missing positions in
//! the shorter one count as `0`. If any result value falls outside the valid range, no
//! result is produced at all.
//!
//! ```
//! use r3bl_bounded_array::BoundedArray;
//!
//! let lhs = BoundedArray::try_from(vec![10, 20, 30]).unwrap();
//! let rhs = BoundedArray::try_from(vec![5, 15]).unwrap();
//! assert_eq!(lhs.add(&rhs).unwrap().to_string(), "[15, 35, 30]");
//! assert_eq!((&lhs - &rhs).unwrap().to_string(), "[5, 5, 30]");
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns a [`BoundedArrayResult`]. The error type
//! [`BoundedArrayError`] has exactly two kinds, `OutOfRange` and `InvalidArgument`, and it
//! implements [`miette::Diagnostic`] so it can be bubbled up into a [`miette::Result`]
//! with `?`. A failed operation never leaves a partially modified container behind.
//!
//! # Logging
//!
//! Rejected operations are reported with [`tracing::debug!`]. Nothing is printed unless a
//! subscriber is installed, eg with [`try_initialize_logging_global()`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod bounded_array;
pub mod bounded_array_error;
pub mod combine;
pub mod decl_macros;
pub mod index_bounds;
pub mod log;
pub mod value_range;

// Re-export.
pub use bounded_array::*;
pub use bounded_array_error::*;
pub use combine::*;
pub use index_bounds::*;
pub use log::*;
pub use value_range::*;
