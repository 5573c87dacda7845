// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{ArrayBoundsCheck, ArrayOverflowResult, BoundedArrayError, BoundedArrayResult,
            CombineOp, ValueOrigin, ValueRangeCheck, combine_elementwise, ok};

/// An owned, contiguous, growable sequence of [`i32`] values constrained to `[-100, 100]`
/// ([`MIN_VALUE`] to [`MAX_VALUE`]).
///
/// # Invariants
///
/// 1. Every value written through a checked operation ([`Self::set_checked`],
///    [`Self::push_back`], [`Self::assign_from`], [`Self::try_clone`], `TryFrom`,
///    [`Self::add`], [`Self::subtract`]) is in range at the moment it is written. Values
///    written through [`Self::set_unchecked`] or [`Self::at_mut`] are not checked.
/// 2. Each instance exclusively owns its storage. There is no [`Clone`] impl, since a
///    copy re-validates every element and can fail. Use [`Self::try_clone`] instead.
/// 3. An index is accepted only if it is in `[0, len)`.
///
/// # Modules
///
/// * `constructor`: [`Self::new`], [`Default`], and `TryFrom` conversions.
/// * `validation`: [`Self::is_valid_index`] and [`Self::is_valid_value`].
/// * `accessor`: [`Self::get`], [`Self::at`], [`Self::at_mut`].
/// * `mutator`: [`Self::set_unchecked`], [`Self::set_checked`], [`Self::push_back`].
/// * `copy`: [`Self::try_clone`] and [`Self::assign_from`].
/// * `arithmetic`: [`Self::add`], [`Self::subtract`], and the `+` / `-` operators.
/// * `size`: [`Self::size`], [`Self::len`], [`Self::is_empty`].
/// * `iterator`: [`Self::iter`] and [`Self::as_slice`].
/// * `display`: [`Display`] and [`Self::print`].
///
/// # Examples
///
/// ```
/// use r3bl_bounded_array::{BoundedArray, BoundedArrayError};
///
/// let mut array = BoundedArray::new(3);
/// assert_eq!(array.size(), 3);
/// assert_eq!(array.to_string(), "[0, 0, 0]");
///
/// array.push_back(42).unwrap();
/// assert_eq!(array.size(), 4);
/// assert_eq!(array.get(3).unwrap(), 42);
///
/// assert_eq!(
///     array.get(5),
///     Err(BoundedArrayError::OutOfRange { index: 5, length: 4 })
/// );
/// ```
///
/// [`MIN_VALUE`]: crate::MIN_VALUE
/// [`MAX_VALUE`]: crate::MAX_VALUE
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundedArray {
    storage: Vec<i32>,
}

mod constructor {
    use super::*;

    impl BoundedArray {
        /// Create an array with `size` elements, all set to `0`. A `size` of `0` is legal
        /// and yields an empty array.
        ///
        /// # Panics
        ///
        /// Only if the allocation itself fails, eg for a `size` (like `usize::MAX`) whose
        /// byte length exceeds `isize::MAX`.
        #[must_use]
        pub fn new(size: usize) -> Self {
            Self {
                storage: vec![0; size],
            }
        }
    }

    /// Every element is checked. The first offending value is reported along with its
    /// position.
    impl TryFrom<Vec<i32>> for BoundedArray {
        type Error = BoundedArrayError;

        fn try_from(storage: Vec<i32>) -> BoundedArrayResult<Self> {
            check_all_values(&storage, |position| ValueOrigin::Converted { position })?;
            ok!(Self { storage })
        }
    }

    impl TryFrom<&[i32]> for BoundedArray {
        type Error = BoundedArrayError;

        fn try_from(values: &[i32]) -> BoundedArrayResult<Self> {
            Self::try_from(values.to_vec())
        }
    }

    /// Returns an error for the first value in `values` that is out of range. The
    /// `origin_at` function describes where the value came from, given its position.
    pub(super) fn check_all_values(
        values: &[i32],
        origin_at: impl Fn(usize) -> ValueOrigin,
    ) -> BoundedArrayResult<()> {
        match values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_valid_value())
        {
            Some((position, value)) => {
                let error =
                    BoundedArrayError::new_invalid_argument(*value, origin_at(position));
                // % is Display, ? is Debug.
                tracing::debug!(message = "Rejected out of range value", error = %error);
                Err(error)
            }
            None => ok!(),
        }
    }
}

mod validation {
    use super::*;

    impl BoundedArray {
        /// `true` iff `0 <= index < len`.
        #[must_use]
        pub fn is_valid_index(&self, index: usize) -> bool {
            index.overflows(self.storage.len()) == ArrayOverflowResult::Within
        }

        /// `true` iff `-100 <= value <= 100`.
        #[must_use]
        pub fn is_valid_value(value: i32) -> bool { value.is_valid_value() }

        /// # Errors
        ///
        /// [`BoundedArrayError::OutOfRange`] if `index` is not in `[0, len)`.
        pub(super) fn check_index(&self, index: usize) -> BoundedArrayResult<()> {
            if self.is_valid_index(index) {
                return ok!();
            }
            let error = BoundedArrayError::new_out_of_range(index, self.storage.len());
            tracing::debug!(message = "Rejected out of range index", error = %error);
            Err(error)
        }

        pub(super) fn check_value(
            value: i32,
            origin: ValueOrigin,
        ) -> BoundedArrayResult<()> {
            if value.is_valid_value() {
                return ok!();
            }
            let error = BoundedArrayError::new_invalid_argument(value, origin);
            tracing::debug!(message = "Rejected out of range value", error = %error);
            Err(error)
        }
    }
}

mod accessor {
    use super::*;

    impl BoundedArray {
        /// Read the element at `index`.
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::OutOfRange`] if `index >= len`.
        pub fn get(&self, index: usize) -> BoundedArrayResult<i32> {
            self.at(index).copied()
        }

        /// Read only reference to the element at `index`.
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::OutOfRange`] if `index >= len`.
        pub fn at(&self, index: usize) -> BoundedArrayResult<&i32> {
            self.check_index(index)?;
            ok!(&self.storage[index])
        }

        /// Writable reference to the element at `index`. This is the lower level escape
        /// hatch, just like [`Self::set_unchecked`], so values written through it are
        /// **not** range checked.
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::OutOfRange`] if `index >= len`.
        pub fn at_mut(&mut self, index: usize) -> BoundedArrayResult<&mut i32> {
            self.check_index(index)?;
            ok!(&mut self.storage[index])
        }
    }
}

mod mutator {
    use super::*;

    impl BoundedArray {
        /// Write `value` at `index` without checking its range. The caller takes
        /// responsibility for out of range values (eg: `500`) ending up in storage.
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::OutOfRange`] if `index >= len`.
        pub fn set_unchecked(&mut self, index: usize, value: i32) -> BoundedArrayResult<()> {
            *self.at_mut(index)? = value;
            ok!()
        }

        /// Write `value` at `index`. The index is checked before the value, so if both
        /// are invalid [`BoundedArrayError::OutOfRange`] is the one reported.
        ///
        /// # Errors
        ///
        /// - [`BoundedArrayError::OutOfRange`] if `index >= len`.
        /// - [`BoundedArrayError::InvalidArgument`] if `value` is not in `[-100, 100]`.
        pub fn set_checked(&mut self, index: usize, value: i32) -> BoundedArrayResult<()> {
            self.check_index(index)?;
            Self::check_value(value, ValueOrigin::Written)?;
            self.storage[index] = value;
            ok!()
        }

        /// Append `value` at the end. The array is left unmodified if `value` is invalid.
        ///
        /// Storage grows via [`Vec::push`], so appends are amortized `O(1)`.
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::InvalidArgument`] if `value` is not in `[-100, 100]`.
        pub fn push_back(&mut self, value: i32) -> BoundedArrayResult<()> {
            Self::check_value(value, ValueOrigin::Appended)?;
            self.storage.push(value);
            tracing::trace!(
                message = "Appended value",
                value = value,
                len = self.storage.len()
            );
            ok!()
        }
    }
}

mod copy {
    use super::{constructor::check_all_values, *};

    impl BoundedArray {
        /// Deep copy into freshly allocated storage. Every element is re-validated, so a
        /// value that got in through [`Self::set_unchecked`] makes the copy fail, and no
        /// copy is observable.
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::InvalidArgument`] for the first out of range element.
        pub fn try_clone(&self) -> BoundedArrayResult<Self> {
            check_all_values(&self.storage, |position| ValueOrigin::Copied { position })?;
            ok!(Self {
                storage: self.storage.clone(),
            })
        }

        /// Replace the entire contents (and length) of `self` with a deep copy of
        /// `other`. All incoming elements are validated before anything changes, so on
        /// failure `self` keeps its old length and contents.
        ///
        /// Assigning an array to itself can't be expressed, since `&mut self` and
        /// `other` can't alias.
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::InvalidArgument`] for the first out of range element of
        /// `other`.
        pub fn assign_from(&mut self, other: &BoundedArray) -> BoundedArrayResult<()> {
            check_all_values(&other.storage, |position| ValueOrigin::Assigned {
                position,
            })?;
            self.storage.clone_from(&other.storage);
            tracing::trace!(message = "Assigned contents", len = self.storage.len());
            ok!()
        }
    }
}

mod arithmetic {
    use std::ops::{Add, Sub};

    use super::*;

    impl BoundedArray {
        /// Element-wise sum. The result is as long as the longer operand, and a missing
        /// position in the shorter operand counts as `0`. Neither operand is modified.
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::InvalidArgument`] for the first sum that is out of range.
        /// No partial result is produced.
        pub fn add(&self, other: &BoundedArray) -> BoundedArrayResult<BoundedArray> {
            self.combine(other, CombineOp::Add)
        }

        /// Element-wise difference (`self - other`). Same length and failure rules as
        /// [`Self::add`].
        ///
        /// # Errors
        ///
        /// [`BoundedArrayError::InvalidArgument`] for the first difference that is out of
        /// range. No partial result is produced.
        pub fn subtract(&self, other: &BoundedArray) -> BoundedArrayResult<BoundedArray> {
            self.combine(other, CombineOp::Subtract)
        }

        /// # Errors
        ///
        /// [`BoundedArrayError::InvalidArgument`] for the first combined value that is
        /// out of range.
        pub fn combine(
            &self,
            other: &BoundedArray,
            op: CombineOp,
        ) -> BoundedArrayResult<BoundedArray> {
            match combine_elementwise(&self.storage, &other.storage, op) {
                Ok(storage) => ok!(BoundedArray { storage }),
                Err(error) => {
                    tracing::debug!(
                        message = "Rejected element-wise combine",
                        op = %op,
                        error = %error
                    );
                    Err(error)
                }
            }
        }
    }

    impl Add for &BoundedArray {
        type Output = BoundedArrayResult<BoundedArray>;

        fn add(self, rhs: Self) -> Self::Output { BoundedArray::add(self, rhs) }
    }

    impl Sub for &BoundedArray {
        type Output = BoundedArrayResult<BoundedArray>;

        fn sub(self, rhs: Self) -> Self::Output { self.subtract(rhs) }
    }
}

mod size {
    use super::*;

    impl BoundedArray {
        #[must_use]
        pub fn size(&self) -> usize { self.storage.len() }

        #[must_use]
        pub fn len(&self) -> usize { self.storage.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.storage.is_empty() }
    }
}

mod iterator {
    use super::*;

    impl BoundedArray {
        #[must_use]
        pub fn iter(&self) -> std::slice::Iter<'_, i32> { self.storage.iter() }

        #[must_use]
        pub fn as_slice(&self) -> &[i32] { &self.storage }
    }

    impl<'a> IntoIterator for &'a BoundedArray {
        type Item = &'a i32;
        type IntoIter = std::slice::Iter<'a, i32>;

        fn into_iter(self) -> Self::IntoIter { self.storage.iter() }
    }
}

mod display {
    use super::*;

    /// Renders as `[v0, v1, ..., vn-1]`. An empty array renders as `[]`.
    impl Display for BoundedArray {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "[")?;
            for (index, value) in self.storage.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")
        }
    }

    impl BoundedArray {
        /// Print the [`Display`] rendering followed by a newline to `stdout`.
        pub fn print(&self) {
            println!("{self}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn array(values: &[i32]) -> BoundedArray { BoundedArray::try_from(values).unwrap() }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(5)]
    #[test_case(1_000)]
    fn test_new_is_zero_filled(size: usize) {
        let it = BoundedArray::new(size);
        assert_eq!(it.size(), size);
        assert_eq!(it.len(), size);
        assert_eq!(it.is_empty(), size == 0);
        assert!(it.iter().all(|value| *value == 0));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_new_past_allocation_limit_panics() {
        let _unused = BoundedArray::new(usize::MAX);
    }

    #[test]
    fn test_default_is_empty() {
        let it = BoundedArray::default();
        assert!(it.is_empty());
        assert_eq!(it.to_string(), "[]");
    }

    #[test]
    fn test_try_from_rejects_first_invalid_value() {
        let result = BoundedArray::try_from(vec![1, 2, 101, -101]);
        assert_eq!(
            result,
            Err(BoundedArrayError::new_invalid_argument(
                101,
                ValueOrigin::Converted { position: 2 }
            ))
        );
        assert_eq!(array(&[-100, 0, 100]).as_slice(), &[-100, 0, 100]);
    }

    #[test]
    fn test_is_valid_index_and_value() {
        let it = BoundedArray::new(3);
        assert!(it.is_valid_index(0));
        assert!(it.is_valid_index(2));
        assert!(!it.is_valid_index(3));
        assert!(!BoundedArray::new(0).is_valid_index(0));

        assert!(BoundedArray::is_valid_value(-100));
        assert!(BoundedArray::is_valid_value(100));
        assert!(!BoundedArray::is_valid_value(-101));
        assert!(!BoundedArray::is_valid_value(101));
    }

    #[test]
    fn test_get_and_at() {
        let mut it = array(&[7, 8, 9]);
        assert_eq!(it.get(0).unwrap(), 7);
        assert_eq!(*it.at(2).unwrap(), 9);
        assert_eq!(it.get(3), Err(BoundedArrayError::new_out_of_range(3, 3)));
        assert_eq!(it.at(usize::MAX), Err(BoundedArrayError::new_out_of_range(usize::MAX, 3)));
        assert_eq!(it.at_mut(3), Err(BoundedArrayError::new_out_of_range(3, 3)));
    }

    #[test]
    fn test_at_mut_does_not_check_value() {
        let mut it = BoundedArray::new(2);
        *it.at_mut(1).unwrap() = -500;
        assert_eq!(it.get(1).unwrap(), -500);
    }

    #[test]
    fn test_set_unchecked_permits_out_of_range_value() {
        let mut it = BoundedArray::new(3);
        it.set_unchecked(1, 500).unwrap();
        assert_eq!(it.get(1).unwrap(), 500);
        assert_eq!(
            it.set_unchecked(3, 1),
            Err(BoundedArrayError::new_out_of_range(3, 3))
        );
    }

    #[test_case(0, 100, Ok(()); "max value")]
    #[test_case(1, -100, Ok(()); "min value")]
    #[test_case(1, 101, Err(BoundedArrayError::new_invalid_argument(101, ValueOrigin::Written)); "too big")]
    #[test_case(2, -101, Err(BoundedArrayError::new_invalid_argument(-101, ValueOrigin::Written)); "too small")]
    #[test_case(3, 1, Err(BoundedArrayError::new_out_of_range(3, 3)); "bad index")]
    #[test_case(3, 150, Err(BoundedArrayError::new_out_of_range(3, 3)); "index checked before value")]
    fn test_set_checked(index: usize, value: i32, expected: BoundedArrayResult<()>) {
        let mut it = array(&[1, 2, 3]);
        let result = it.set_checked(index, value);
        assert_eq!(result, expected);
        match result {
            Ok(()) => assert_eq!(it.get(index).unwrap(), value),
            Err(_) => assert_eq!(it.as_slice(), &[1, 2, 3]),
        }
    }

    #[test]
    fn test_push_back() {
        let mut it = array(&[1, 2]);
        it.push_back(-100).unwrap();
        assert_eq!(it.as_slice(), &[1, 2, -100]);

        assert_eq!(
            it.push_back(101),
            Err(BoundedArrayError::new_invalid_argument(101, ValueOrigin::Appended))
        );
        assert_eq!(it.as_slice(), &[1, 2, -100]);

        let mut empty = BoundedArray::new(0);
        empty.push_back(5).unwrap();
        assert_eq!(empty.as_slice(), &[5]);
    }

    #[test]
    fn test_push_back_many() {
        let mut it = BoundedArray::default();
        for value in -100..=100 {
            it.push_back(value).unwrap();
        }
        assert_eq!(it.size(), 201);
        assert_eq!(it.get(0).unwrap(), -100);
        assert_eq!(it.get(200).unwrap(), 100);
    }

    #[test]
    fn test_try_clone_is_deep_copy() {
        let original = array(&[10, -20, 30]);
        let mut copy = original.try_clone().unwrap();
        assert_eq!(copy, original);

        copy.set_checked(0, 99).unwrap();
        assert_eq!(original.as_slice(), &[10, -20, 30]);
        assert_eq!(copy.as_slice(), &[99, -20, 30]);
    }

    #[test]
    fn test_try_clone_rejects_unchecked_value() {
        let mut original = BoundedArray::new(3);
        original.set_unchecked(2, 150).unwrap();
        assert_eq!(
            original.try_clone(),
            Err(BoundedArrayError::new_invalid_argument(
                150,
                ValueOrigin::Copied { position: 2 }
            ))
        );
    }

    #[test]
    fn test_assign_from_changes_length_and_contents() {
        let mut target = array(&[1, 2, 3, 4]);
        let source = array(&[-7, 8]);
        target.assign_from(&source).unwrap();
        assert_eq!(target.as_slice(), &[-7, 8]);
        assert_eq!(source.as_slice(), &[-7, 8]);

        target.set_checked(0, 0).unwrap();
        assert_eq!(source.get(0).unwrap(), -7);
    }

    #[test]
    fn test_assign_from_is_transactional() {
        let mut target = array(&[1, 2, 3]);
        let mut source = BoundedArray::new(5);
        source.set_unchecked(4, -200).unwrap();

        assert_eq!(
            target.assign_from(&source),
            Err(BoundedArrayError::new_invalid_argument(
                -200,
                ValueOrigin::Assigned { position: 4 }
            ))
        );
        assert_eq!(target.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_assign_from_equal_contents_is_noop() {
        let mut target = array(&[4, 5, 6]);
        let same = target.try_clone().unwrap();
        target.assign_from(&same).unwrap();
        assert_eq!(target, same);
    }

    #[test]
    fn test_add_and_subtract() {
        let lhs = array(&[10, 20, 30]);
        let rhs = array(&[5, 15]);

        assert_eq!(lhs.add(&rhs).unwrap().as_slice(), &[15, 35, 30]);
        assert_eq!(lhs.subtract(&rhs).unwrap().as_slice(), &[5, 5, 30]);
        assert_eq!(rhs.subtract(&lhs).unwrap().as_slice(), &[-5, -5, -30]);
        assert_eq!((&lhs + &rhs).unwrap().as_slice(), &[15, 35, 30]);
        assert_eq!((&lhs - &rhs).unwrap().as_slice(), &[5, 5, 30]);

        // Operands are untouched.
        assert_eq!(lhs.as_slice(), &[10, 20, 30]);
        assert_eq!(rhs.as_slice(), &[5, 15]);
    }

    #[test]
    fn test_add_out_of_range_produces_no_result() {
        let lhs = array(&[90]);
        let rhs = array(&[90]);
        assert_eq!(
            lhs.add(&rhs),
            Err(BoundedArrayError::new_invalid_argument(
                180,
                ValueOrigin::Combined {
                    op: CombineOp::Add,
                    position: 0
                }
            ))
        );
    }

    #[test]
    fn test_combine_with_empty() {
        let lhs = array(&[1, -2]);
        let empty = BoundedArray::default();
        assert_eq!(lhs.add(&empty).unwrap(), lhs.try_clone().unwrap());
        assert_eq!(empty.subtract(&lhs).unwrap().as_slice(), &[-1, 2]);
        assert!(empty.add(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_combine_checks_result_not_operands() {
        // An out of range operand is accepted when the combined value is in range.
        let mut lhs = BoundedArray::new(2);
        lhs.set_unchecked(1, 150).unwrap();
        let rhs = array(&[0, -60]);
        assert_eq!(lhs.add(&rhs).unwrap().as_slice(), &[0, 90]);
        assert_eq!(
            lhs.subtract(&rhs),
            Err(BoundedArrayError::new_invalid_argument(
                210,
                ValueOrigin::Combined {
                    op: CombineOp::Subtract,
                    position: 1
                }
            ))
        );

        // Copies re-check every element, operand or not.
        assert_eq!(lhs.try_clone().unwrap_err().position(), Some(1));
    }

    #[test_case(&[], "[]")]
    #[test_case(&[7], "[7]")]
    #[test_case(&[10, -50, 100, 0, 0], "[10, -50, 100, 0, 0]")]
    fn test_display(values: &[i32], expected: &str) {
        assert_eq!(array(values).to_string(), expected);
    }

    #[test]
    fn test_iter() {
        let it = array(&[3, 2, 1]);
        let collected: Vec<i32> = (&it).into_iter().copied().collect();
        assert_eq!(collected, vec![3, 2, 1]);
        assert_eq!(it.iter().sum::<i32>(), 6);
    }
}
