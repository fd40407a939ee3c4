// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext, ok};

/// Walk each element left by adjacent swaps until its left neighbor is not greater.
/// Equal keys never pass each other, so this is stable.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn insertion_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    insertion_sort_range(ctx, 0, len).await
}

/// Insertion sort the half open range `start..end` only. Intro sort and tim sort use
/// this for small ranges and runs.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn insertion_sort_range<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    start: usize,
    end: usize,
) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    for next in start + 1..end {
        ctx.check_cancelled()?;
        let mut index = next;
        while index > start {
            ctx.check_cancelled()?;
            if ctx.compare(index - 1, index).await? != Ordering::Greater {
                break;
            }
            ctx.swap(index - 1, index).await?;
            index -= 1;
        }
    }
    ok!()
}

#[cfg(test)]
mod tests {
    use crate::{SortAlgorithm, sort_recorded};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_counts_on_reversed_input() {
        let (outcome, _) = sort_recorded(SortAlgorithm::Insertion, &[4, 3, 2, 1]).await;
        assert_eq!(outcome.sequence, vec![1, 2, 3, 4]);
        assert_eq!(outcome.stats.comparisons, 6);
        assert_eq!(outcome.stats.swaps, 6);
    }

    #[tokio::test]
    async fn test_sorted_input_takes_one_comparison_per_element() {
        let (outcome, _) = sort_recorded(SortAlgorithm::Insertion, &[1, 2, 3, 4, 5]).await;
        assert_eq!(outcome.stats.comparisons, 4);
        assert_eq!(outcome.stats.swaps, 0);
    }

    #[tokio::test]
    async fn test_is_stable() {
        let input = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let (outcome, _) = sort_recorded(SortAlgorithm::Insertion, &input).await;
        assert_eq!(
            outcome.sequence,
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }
}
