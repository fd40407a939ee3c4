// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext};

/// Probe every index in order, up to and including the first match.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn linear_search<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    target: f64,
) -> RunResult<Option<usize>>
where
    T: Element,
    O: RunObserver<T>,
{
    for index in 0..ctx.len() {
        ctx.check_cancelled()?;
        if ctx.compare_to_key(index, target).await? == Ordering::Equal {
            return Ok(Some(index));
        }
    }
    Ok(None)
}
