// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use r3bl_algo_runner::throws;
///
/// fn install() -> miette::Result<()> {
///     throws!({
///         let answer = "42".parse::<u8>().map_err(|e| miette::miette!("{e}"))?;
///         assert_eq!(answer, 42);
///     });
/// }
/// # install().unwrap();
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

/// Short for `Ok(())` or `Ok($value)`.
///
/// ```
/// use r3bl_algo_runner::{ok, RunResult};
///
/// fn unit() -> RunResult<()> { ok!() }
/// fn value() -> RunResult<u8> { ok!(7) }
/// # assert!(unit().is_ok());
/// # assert_eq!(value().unwrap(), 7);
/// ```
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
