// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Annotation, Element, RunObserver, RunResult, StepContext, WorkStack};

/// Pending merge sort work. Popping `Split`s before their `Merge` reproduces the order
/// of the recursive algorithm: left half, right half, then merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeWork {
    Split { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
}

/// Top down merge sort: split at the midpoint, sort both halves, merge them.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn merge_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let mut stack: WorkStack<MergeWork> = WorkStack::new();
    stack.push(MergeWork::Split {
        start: 0,
        end: ctx.len(),
    });

    while let Some(work) = stack.pop() {
        ctx.check_cancelled()?;
        match work {
            MergeWork::Split { start, end } => {
                if end - start < 2 {
                    continue;
                }
                let mid = start + (end - start) / 2;
                stack.push(MergeWork::Merge { start, mid, end });
                stack.push(MergeWork::Split { start: mid, end });
                stack.push(MergeWork::Split { start, end: mid });
            }
            MergeWork::Merge { start, mid, end } => {
                merge_adjacent(ctx, start, mid, end).await?;
            }
        }
    }
    Ok(())
}

/// Merge the sorted ranges `start..mid` and `mid..end` back into `start..end`. Both
/// halves are copied into their own buffers first. Ties take the left element, which
/// keeps the merge stable. Every write back counts as a swap.
///
/// When the merge spans the whole sequence, each written slot is final, so it's marked
/// sorted right away.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn merge_adjacent<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    start: usize,
    mid: usize,
    end: usize,
) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let left: Vec<T> = ctx.items()[start..mid].to_vec();
    let right: Vec<T> = ctx.items()[mid..end].to_vec();
    let is_final_merge = start == 0 && end == ctx.len();

    let (mut i, mut j) = (0, 0);
    for dest in start..end {
        ctx.check_cancelled()?;
        let take_left = if i < left.len() && j < right.len() {
            let ordering = ctx
                .compare_keys(
                    left[i].sort_key(),
                    right[j].sort_key(),
                    &[
                        (dest, Annotation::Comparing),
                        (mid + j, Annotation::Comparing),
                    ],
                )
                .await?;
            ordering != Ordering::Greater
        } else {
            i < left.len()
        };

        let item = if take_left {
            i += 1;
            left[i - 1].clone()
        } else {
            j += 1;
            right[j - 1].clone()
        };
        ctx.place(dest, item).await?;
        if is_final_merge {
            ctx.mark_sorted(dest);
        }
    }
    Ok(())
}
