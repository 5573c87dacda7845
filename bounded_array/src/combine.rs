// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Element-wise merge of two sequences of possibly different lengths.
//!
//! The result is as long as the longer input. A position that only exists in one input
//! is combined with `0` from the other:
//!
//! ```text
//! lhs      [10, 20, 30]
//! rhs      [ 5, 15]  0     <- missing position counts as 0
//! add      [15, 35, 30]
//! subtract [ 5,  5, 30]
//! ```

use strum_macros::{AsRefStr, Display, EnumIter};

use crate::{BoundedArrayError, BoundedArrayResult, ValueOrigin, ValueRangeCheck};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CombineOp {
    Add,
    Subtract,
}

impl CombineOp {
    /// Carried out in [`i64`] so that no pair of [`i32`] operands can overflow, even ones
    /// placed by the unchecked write path.
    #[must_use]
    pub fn apply(self, lhs: i32, rhs: i32) -> i64 {
        let (lhs, rhs) = (i64::from(lhs), i64::from(rhs));
        match self {
            CombineOp::Add => lhs + rhs,
            CombineOp::Subtract => lhs - rhs,
        }
    }

    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            CombineOp::Add => "Added",
            CombineOp::Subtract => "Subtracted",
        }
    }
}

/// Combine `lhs` and `rhs` position by position with `op`. Every result value must be in
/// the valid range, otherwise the first offending value (and its position) is returned as
/// an error and nothing else is produced.
///
/// # Errors
///
/// [`BoundedArrayError::InvalidArgument`] when a combined value is out of range.
pub fn combine_elementwise(
    lhs: &[i32],
    rhs: &[i32],
    op: CombineOp,
) -> BoundedArrayResult<Vec<i32>> {
    let result_len = lhs.len().max(rhs.len());
    let operand_at =
        |slice: &[i32], position: usize| slice.get(position).copied().unwrap_or(0);

    (0..result_len)
        .map(|position| {
            let combined = op.apply(operand_at(lhs, position), operand_at(rhs, position));
            // The range check guarantees the value fits in an i32.
            match (combined.is_valid_value(), i32::try_from(combined)) {
                (true, Ok(value)) => Ok(value),
                _ => Err(BoundedArrayError::new_invalid_argument(
                    combined,
                    ValueOrigin::Combined { op, position },
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test_case(&[10, 20, 30], &[5, 15], CombineOp::Add, &[15, 35, 30]; "add longer lhs")]
    #[test_case(&[10, 20, 30], &[5, 15], CombineOp::Subtract, &[5, 5, 30]; "subtract longer lhs")]
    #[test_case(&[5, 15], &[10, 20, 30], CombineOp::Add, &[15, 35, 30]; "add longer rhs")]
    #[test_case(&[5, 15], &[10, 20, 30], CombineOp::Subtract, &[-5, -5, -30]; "subtract longer rhs")]
    #[test_case(&[], &[], CombineOp::Add, &[]; "both empty")]
    #[test_case(&[], &[-100, 100], CombineOp::Subtract, &[100, -100]; "empty lhs")]
    #[test_case(&[50, -50], &[50, -50], CombineOp::Add, &[100, -100]; "hits both ends")]
    fn test_combine_elementwise(lhs: &[i32], rhs: &[i32], op: CombineOp, expected: &[i32]) {
        assert_eq!(combine_elementwise(lhs, rhs, op).unwrap(), expected.to_vec());
    }

    #[test]
    fn test_combine_elementwise_reports_first_offending_value() {
        let result = combine_elementwise(&[0, 90, -90], &[0, 90, 90], CombineOp::Add);
        assert_eq!(
            result,
            Err(BoundedArrayError::new_invalid_argument(
                180,
                ValueOrigin::Combined {
                    op: CombineOp::Add,
                    position: 1
                }
            ))
        );

        let result = combine_elementwise(&[0, -90, -90], &[0, 0, 90], CombineOp::Subtract);
        assert_eq!(
            result,
            Err(BoundedArrayError::new_invalid_argument(
                -180,
                ValueOrigin::Combined {
                    op: CombineOp::Subtract,
                    position: 2
                }
            ))
        );
    }

    #[test]
    fn test_combine_elementwise_does_not_overflow_i32() {
        let result = combine_elementwise(&[i32::MAX], &[i32::MAX], CombineOp::Add);
        assert_eq!(
            result,
            Err(BoundedArrayError::new_invalid_argument(
                2 * i64::from(i32::MAX),
                ValueOrigin::Combined {
                    op: CombineOp::Add,
                    position: 0
                }
            ))
        );
    }

    #[test]
    fn test_combine_op_names() {
        let names: Vec<String> = CombineOp::iter().map(|it| it.to_string()).collect();
        assert_eq!(names, vec!["add".to_string(), "subtract".to_string()]);
        assert_eq!(CombineOp::Subtract.as_ref(), "subtract");
        assert_eq!(CombineOp::Add.past_tense(), "Added");
    }
}
