// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Annotation, Element, RunObserver, RunResult, StepContext, ok};

/// Repeatedly pull a maximal non-decreasing "strand" out of the unsorted residue, and
/// merge it into the sorted result. The working copy is laid out as `result`, then
/// `strand`, then what's left of the residue, so a UI always sees every element.
///
/// Counting: one comparison per strand extension check and per merge step, and one
/// swap per element written by a merge. Stable, since ties in the merge keep the
/// element that was already in the result first.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn strand_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let mut residue: Vec<T> = ctx.items().to_vec();
    let mut result: Vec<T> = Vec::with_capacity(residue.len());

    while !residue.is_empty() {
        ctx.check_cancelled()?;
        let (strand, rest) = extract_strand(ctx, result.len(), residue).await?;
        residue = rest;

        // Lay out `result ++ strand ++ residue` before merging.
        for (index, item) in result.iter().chain(&strand).chain(&residue).enumerate() {
            ctx.write(index, item.clone());
        }
        ctx.publish_sequence();

        result = merge_into_result(ctx, result, strand).await?;
    }
    ok!()
}

/// Split `residue` into a strand and what's left. The first element always starts the
/// strand. `offset` is where the residue starts in the working copy, for highlights.
async fn extract_strand<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    offset: usize,
    residue: Vec<T>,
) -> RunResult<(Vec<T>, Vec<T>)>
where
    T: Element,
    O: RunObserver<T>,
{
    let mut strand: Vec<T> = Vec::new();
    let mut rest: Vec<T> = Vec::with_capacity(residue.len());
    let mut strand_tail_index = offset;

    for (position, item) in residue.into_iter().enumerate() {
        ctx.check_cancelled()?;
        let index = offset + position;
        let Some(tail) = strand.last() else {
            strand.push(item);
            continue;
        };
        let tail_key = tail.sort_key();
        let ordering = ctx
            .compare_keys(
                item.sort_key(),
                tail_key,
                &[
                    (index, Annotation::Comparing),
                    (strand_tail_index, Annotation::Comparing),
                ],
            )
            .await?;
        if ordering == Ordering::Less {
            rest.push(item);
        } else {
            strand.push(item);
            strand_tail_index = index;
        }
    }

    Ok((strand, rest))
}

/// Stable two way merge of `result` and `strand`, written into the front of the working
/// copy as it goes.
async fn merge_into_result<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    result: Vec<T>,
    strand: Vec<T>,
) -> RunResult<Vec<T>>
where
    T: Element,
    O: RunObserver<T>,
{
    let result_len = result.len();
    let mut merged: Vec<T> = Vec::with_capacity(result_len + strand.len());
    let (mut left, mut right) = (0, 0);

    while left < result_len || right < strand.len() {
        ctx.check_cancelled()?;
        let take_left = if left < result_len && right < strand.len() {
            let ordering = ctx
                .compare_keys(
                    result[left].sort_key(),
                    strand[right].sort_key(),
                    &[
                        (merged.len(), Annotation::Comparing),
                        (result_len + right, Annotation::Comparing),
                    ],
                )
                .await?;
            ordering != Ordering::Greater
        } else {
            left < result_len
        };

        let item = if take_left {
            left += 1;
            result[left - 1].clone()
        } else {
            right += 1;
            strand[right - 1].clone()
        };
        ctx.place(merged.len(), item.clone()).await?;
        merged.push(item);
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use crate::{SortAlgorithm, sort_recorded};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_sorted_input_is_a_single_strand() {
        let (outcome, observer) = sort_recorded(SortAlgorithm::Strand, &[1, 2, 3, 4]).await;
        assert_eq!(outcome.sequence, vec![1, 2, 3, 4]);
        // Three extension checks, then four writes into the empty result.
        assert_eq!(outcome.stats.comparisons, 3);
        assert_eq!(outcome.stats.swaps, 4);
        assert_eq!(observer.sequence_snapshots().last().unwrap(), &vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_multiple_strands() {
        let (outcome, _) = sort_recorded(SortAlgorithm::Strand, &[5, 1, 4, 2, 3]).await;
        assert_eq!(outcome.sequence, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_is_stable() {
        let input = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
        let (outcome, _) = sort_recorded(SortAlgorithm::Strand, &input).await;
        assert_eq!(
            outcome.sequence,
            vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]
        );
    }
}
