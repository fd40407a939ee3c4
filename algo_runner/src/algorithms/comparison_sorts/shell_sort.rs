// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext, ok};

/// Gapped insertion sort with gaps `n/2, n/4, ..., 1`. The last pass is a plain
/// insertion sort over an almost sorted sequence. Not stable.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn shell_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    let mut gap = len / 2;
    while gap > 0 {
        for next in gap..len {
            ctx.check_cancelled()?;
            let mut index = next;
            while index >= gap {
                ctx.check_cancelled()?;
                if ctx.compare(index - gap, index).await? != Ordering::Greater {
                    break;
                }
                ctx.swap(index - gap, index).await?;
                index -= gap;
            }
        }
        gap /= 2;
    }
    ok!()
}

#[cfg(test)]
mod tests {
    use crate::{SortAlgorithm, sort_recorded};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_gap_sequence_on_reversed_input() {
        let (outcome, _) = sort_recorded(SortAlgorithm::Shell, &[4, 3, 2, 1]).await;
        assert_eq!(outcome.sequence, vec![1, 2, 3, 4]);
        // Gap 2: (4,2) and (3,1) swap -> [2,1,4,3].
        // Gap 1: (2,1) swap, (2,4) ok, (4,3) swap, (2,3) ok -> [1,2,3,4].
        assert_eq!(outcome.stats.comparisons, 6);
        assert_eq!(outcome.stats.swaps, 4);
    }
}
