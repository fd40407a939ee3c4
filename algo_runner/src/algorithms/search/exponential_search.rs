// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext, binary_search_range};

/// Check index 0, then double a probe index while the probed key is `<=` the target.
/// That brackets the target in `[bound / 2, min(bound, len - 1)]`, which is binary
/// searched.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn exponential_search<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    target: f64,
) -> RunResult<Option<usize>>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    if ctx.compare_to_key(0, target).await? == Ordering::Equal {
        return Ok(Some(0));
    }

    let mut bound = 1;
    while bound < len {
        ctx.check_cancelled()?;
        if ctx.compare_to_key(bound, target).await? == Ordering::Greater {
            break;
        }
        bound *= 2;
    }

    binary_search_range(ctx, target, bound / 2, bound.min(len - 1) + 1).await
}
