// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext};

/// Classic halving search over the whole sequence.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn binary_search<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    target: f64,
) -> RunResult<Option<usize>>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    binary_search_range(ctx, target, 0, len).await
}

/// Halving search over the half open range `start..end`. The midpoint rounds down, so
/// the probes for `[1, 3, 5, 7, 9, 11]` and target `7` are indices 2, 4, then 3.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn binary_search_range<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    target: f64,
    start: usize,
    end: usize,
) -> RunResult<Option<usize>>
where
    T: Element,
    O: RunObserver<T>,
{
    let (mut low, mut high) = (start, end);
    while low < high {
        ctx.check_cancelled()?;
        let mid = low + (high - 1 - low) / 2;
        match ctx.compare_to_key(mid, target).await? {
            Ordering::Equal => return Ok(Some(mid)),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use crate::{Annotation, Completion, SearchAlgorithm, search_recorded};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_probe_sequence() {
        let (outcome, observer) =
            search_recorded(SearchAlgorithm::Binary, &[1, 3, 5, 7, 9, 11], 7.0).await;
        assert_eq!(outcome.completion, Completion::Found(3));
        assert_eq!(outcome.stats.comparisons, 3);

        let probes: Vec<usize> = observer
            .annotation_snapshots()
            .iter()
            .filter_map(|it| it.iter().position(|&a| a == Annotation::Comparing))
            .collect();
        assert_eq!(probes, vec![2, 4, 3]);
    }

    #[tokio::test]
    async fn test_miss_below_and_above() {
        let input = [1, 3, 5, 7, 9, 11];
        let (below, _) = search_recorded(SearchAlgorithm::Binary, &input, 0.0).await;
        let (above, _) = search_recorded(SearchAlgorithm::Binary, &input, 12.0).await;
        let (between, _) = search_recorded(SearchAlgorithm::Binary, &input, 4.0).await;
        assert_eq!(below.completion, Completion::NotFound);
        assert_eq!(above.completion, Completion::NotFound);
        assert_eq!(between.completion, Completion::NotFound);
    }

    #[tokio::test]
    async fn test_every_index_is_found() {
        let input = [2, 4, 6, 8, 10, 12, 14];
        for (index, value) in input.iter().enumerate() {
            let (outcome, _) =
                search_recorded(SearchAlgorithm::Binary, &input, f64::from(*value)).await;
            assert_eq!(outcome.completion, Completion::Found(index));
        }
    }
}
