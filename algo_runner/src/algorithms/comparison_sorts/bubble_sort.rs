// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext, ok};

/// Compare every adjacent pair on every pass, there's no early exit. After pass `p` the
/// last `p + 1` slots hold their final values.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn bubble_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    for pass in 0..len.saturating_sub(1) {
        ctx.check_cancelled()?;
        let last_unsorted = len - 1 - pass;
        for index in 0..last_unsorted {
            ctx.check_cancelled()?;
            if ctx.compare(index, index + 1).await? == Ordering::Greater {
                ctx.swap(index, index + 1).await?;
            }
        }
        ctx.mark_sorted(last_unsorted);
    }
    ctx.mark_sorted(0);
    ok!()
}
