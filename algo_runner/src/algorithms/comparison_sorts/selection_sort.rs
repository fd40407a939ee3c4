// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext, ok};

/// Find the minimum of the unsorted tail and swap it to the front. Not stable, the swap
/// can jump an element over one with an equal key.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn selection_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    for front in 0..len.saturating_sub(1) {
        ctx.check_cancelled()?;
        let mut min_index = front;
        for index in front + 1..len {
            ctx.check_cancelled()?;
            if ctx.compare(index, min_index).await? == Ordering::Less {
                min_index = index;
            }
        }
        if min_index != front {
            ctx.swap(front, min_index).await?;
        }
        ctx.mark_sorted(front);
    }
    ctx.mark_sorted(len.saturating_sub(1));
    ok!()
}

#[cfg(test)]
mod tests {
    use crate::{SortAlgorithm, sort_recorded};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_counts() {
        let (outcome, _) = sort_recorded(SortAlgorithm::Selection, &[3, 1, 2]).await;
        assert_eq!(outcome.sequence, vec![1, 2, 3]);
        // 2 + 1 comparisons. [3,1,2] -> [1,3,2] -> [1,2,3].
        assert_eq!(outcome.stats.comparisons, 3);
        assert_eq!(outcome.stats.swaps, 2);
    }

    #[tokio::test]
    async fn test_is_not_stable() {
        let input = [(2, 'a'), (2, 'b'), (1, 'c')];
        let (outcome, _) = sort_recorded(SortAlgorithm::Selection, &input).await;
        assert_eq!(outcome.sequence, vec![(1, 'c'), (2, 'b'), (2, 'a')]);
    }
}
