// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` at the end of a function body.
///
/// ```
/// use r3bl_bounded_array::{BoundedArray, BoundedArrayResult, throws};
///
/// fn fill(array: &mut BoundedArray) -> BoundedArrayResult<()> {
///     throws!({
///         array.set_checked(0, 1)?;
///         array.push_back(2)?;
///     });
/// }
///
/// let mut array = BoundedArray::new(1);
/// fill(&mut array).unwrap();
/// assert_eq!(array.to_string(), "[1, 2]");
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}
