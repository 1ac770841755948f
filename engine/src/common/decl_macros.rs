// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Ok(())`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of a function body.
///
/// Here's an example.
/// ```
/// use sortviz_engine::{CommonResult, throws};
/// fn run_one_sort() -> CommonResult<()> {
///   throws!({
///     let _array = sortviz_engine::generate_random_array(10);
///   });
/// }
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
