// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Element, RunObserver, RunResult, StepContext, insertion_sort_range,
            merge_adjacent};

const MIN_MERGE: usize = 64;

/// Shift `len` right until it's below 64, OR-ing in every bit shifted out. The result
/// is between 32 and 64 for large inputs, so that `len / min_run` is close to a power of
/// two and the merges stay balanced.
#[must_use]
pub fn min_run_length(len: usize) -> usize {
    let mut len = len;
    let mut shifted_out = 0;
    while len >= MIN_MERGE {
        shifted_out |= len & 1;
        len >>= 1;
    }
    len + shifted_out
}

/// Simplified tim sort: insertion sort fixed size runs, then merge them pairwise with a
/// doubling width. Ties take the left element, so it's stable.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn tim_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    let min_run = min_run_length(len);

    for run_start in (0..len).step_by(min_run) {
        ctx.check_cancelled()?;
        insertion_sort_range(ctx, run_start, (run_start + min_run).min(len)).await?;
    }

    let mut width = min_run;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            ctx.check_cancelled()?;
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            if mid < end {
                merge_adjacent(ctx, start, mid, end).await?;
            }
        }
        width *= 2;
    }
    Ok(())
}
