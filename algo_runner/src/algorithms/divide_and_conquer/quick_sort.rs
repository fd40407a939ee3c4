// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Annotation, Element, RunObserver, RunResult, StepContext, WorkStack};

/// Quick sort with the Lomuto partition scheme, pivot is the last element of the range.
/// Left partitions are finished before right ones. Pending ranges go on a
/// [`WorkStack`], so sorted or reversed input (the worst case for this pivot choice) is
/// slow but can't blow the native stack.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn quick_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let mut stack: WorkStack<(usize, usize)> = WorkStack::new();
    stack.push((0, ctx.len()));

    while let Some((start, end)) = stack.pop() {
        ctx.check_cancelled()?;
        match end - start {
            0 => {}
            1 => ctx.mark_sorted(start),
            _ => {
                let pivot_index = lomuto_partition(ctx, start, end).await?;
                ctx.mark_sorted(pivot_index);
                // Pushed right first, so left is popped first.
                stack.push((pivot_index + 1, end));
                stack.push((start, pivot_index));
            }
        }
    }
    Ok(())
}

/// Partition `start..end` around the element at `end - 1`. Returns the final index of
/// the pivot: everything before it is smaller, everything after it is not.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn lomuto_partition<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    start: usize,
    end: usize,
) -> RunResult<usize>
where
    T: Element,
    O: RunObserver<T>,
{
    let pivot = end - 1;
    let mut store = start;

    for index in start..pivot {
        ctx.check_cancelled()?;
        let ordering = ctx
            .compare_highlighted(
                index,
                pivot,
                &[(index, Annotation::Comparing), (pivot, Annotation::Pivot)],
            )
            .await?;
        if ordering == Ordering::Less {
            if store != index {
                ctx.swap(store, index).await?;
            }
            store += 1;
        }
    }

    if store != pivot {
        ctx.swap(store, pivot).await?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use crate::{Annotation, SortAlgorithm, sort_recorded};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_first_partition() {
        let (outcome, observer) = sort_recorded(SortAlgorithm::Quick, &[3, 7, 1, 5]).await;
        assert_eq!(outcome.sequence, vec![1, 3, 5, 7]);

        // Pivot 5: 3 stays, 7 stays, 1 swaps with 7, then the pivot swaps into slot 2.
        let snapshots = observer.sequence_snapshots();
        assert_eq!(snapshots[0], vec![3, 1, 7, 5]);
        assert_eq!(snapshots[1], vec![3, 1, 5, 7]);

        // The pivot is tagged while it's being compared against.
        assert_eq!(
            observer.annotation_snapshots()[0],
            vec![
                Annotation::Comparing,
                Annotation::Default,
                Annotation::Default,
                Annotation::Pivot,
            ]
        );
    }

    #[tokio::test]
    async fn test_sorted_input_worst_case() {
        let input: Vec<i32> = (0..50).collect();
        let (outcome, _) = sort_recorded(SortAlgorithm::Quick, &input).await;
        assert_eq!(outcome.sequence, input);
        // n (n - 1) / 2 comparisons, and no swaps since every element is already at its
        // store index.
        assert_eq!(outcome.stats.comparisons, 50 * 49 / 2);
        assert_eq!(outcome.stats.swaps, 0);
    }
}
