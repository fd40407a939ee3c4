// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Element, RunObserver, RunResult, StepContext, WorkStack, heap_sort_range,
            insertion_sort_range, lomuto_partition};

/// Ranges this small are finished with insertion sort, regardless of depth.
pub const INTRO_SORT_INSERTION_THRESHOLD: usize = 16;

/// Partitioning depth allowed before a range falls back to heap sort:
/// `2 * floor(log2(len))`.
#[must_use]
pub fn intro_sort_depth_budget(len: usize) -> u32 {
    if len == 0 { 0 } else { 2 * len.ilog2() }
}

/// Quick sort, until either a range is small enough for insertion sort, or the range
/// has been partitioned too many times, in which case it's finished with heap sort. Not
/// stable.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn intro_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let mut stack: WorkStack<(usize, usize, u32)> = WorkStack::new();
    stack.push((0, ctx.len(), intro_sort_depth_budget(ctx.len())));

    while let Some((start, end, depth_budget)) = stack.pop() {
        ctx.check_cancelled()?;
        let len = end - start;

        if len <= 1 {
            ctx.mark_range_sorted(start..end);
        } else if len <= INTRO_SORT_INSERTION_THRESHOLD {
            insertion_sort_range(ctx, start, end).await?;
            ctx.mark_range_sorted(start..end);
        } else if depth_budget == 0 {
            tracing::trace!(start, end, "depth budget spent, heap sorting range");
            heap_sort_range(ctx, start, end).await?;
        } else {
            let pivot_index = lomuto_partition(ctx, start, end).await?;
            ctx.mark_sorted(pivot_index);
            stack.push((pivot_index + 1, end, depth_budget - 1));
            stack.push((start, pivot_index, depth_budget - 1));
        }
    }
    Ok(())
}
