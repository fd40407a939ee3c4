// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext};

/// Build a max heap, then repeatedly swap the root to the end of the shrinking heap.
/// Not stable.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn heap_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    heap_sort_range(ctx, 0, len).await
}

/// Heap sort just `start..end`, which is how intro sort finishes a range once its depth
/// budget runs out. Slots are marked sorted as they're filled.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn heap_sort_range<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    start: usize,
    end: usize,
) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let heap_len = end - start;

    for root in (0..heap_len / 2).rev() {
        ctx.check_cancelled()?;
        sift_down(ctx, start, root, heap_len).await?;
    }

    for last in (1..heap_len).rev() {
        ctx.check_cancelled()?;
        ctx.swap(start, start + last).await?;
        ctx.mark_sorted(start + last);
        sift_down(ctx, start, 0, last).await?;
    }
    ctx.mark_sorted(start);
    Ok(())
}

/// Heapify as a loop. Indices are relative to `offset`.
async fn sift_down<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    offset: usize,
    mut root: usize,
    heap_len: usize,
) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    loop {
        ctx.check_cancelled()?;
        let left = 2 * root + 1;
        if left >= heap_len {
            return Ok(());
        }

        let mut largest = root;
        if ctx.compare(offset + left, offset + largest).await? == Ordering::Greater {
            largest = left;
        }
        let right = left + 1;
        if right < heap_len
            && ctx.compare(offset + right, offset + largest).await? == Ordering::Greater
        {
            largest = right;
        }

        if largest == root {
            return Ok(());
        }
        ctx.swap(offset + root, offset + largest).await?;
        root = largest;
    }
}
