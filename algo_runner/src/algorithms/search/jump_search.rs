// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext};

/// Block size for jump search: `floor(sqrt(len))`, at least 1.
#[must_use]
pub fn jump_block_size(len: usize) -> usize { len.isqrt().max(1) }

/// Jump ahead one block at a time while the last element of the block is below the
/// target, then scan that block linearly.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn jump_search<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    target: f64,
) -> RunResult<Option<usize>>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    let block = jump_block_size(len);

    let mut block_start = 0;
    loop {
        ctx.check_cancelled()?;
        if block_start >= len {
            return Ok(None);
        }
        let block_last = (block_start + block).min(len) - 1;
        if ctx.compare_to_key(block_last, target).await? != Ordering::Less {
            break;
        }
        block_start += block;
    }

    let block_end = (block_start + block).min(len);
    for index in block_start..block_end {
        ctx.check_cancelled()?;
        match ctx.compare_to_key(index, target).await? {
            Ordering::Equal => return Ok(Some(index)),
            Ordering::Greater => return Ok(None),
            Ordering::Less => {}
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Completion, SearchAlgorithm, search_recorded};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(1, 1)]
    #[test_case(8, 2)]
    #[test_case(9, 3)]
    #[test_case(100, 10)]
    fn test_block_size(len: usize, expected: usize) {
        assert_eq!(jump_block_size(len), expected);
    }

    #[tokio::test]
    async fn test_jumps_then_scans() {
        let input: Vec<i32> = (0..9).map(|it| it * 10).collect();
        let (outcome, _) = search_recorded(SearchAlgorithm::Jump, &input, 50.0).await;
        assert_eq!(outcome.completion, Completion::Found(5));
        // Block ends 2 and 5, then scan 3, 4, 5.
        assert_eq!(outcome.stats.comparisons, 5);
    }

    #[tokio::test]
    async fn test_target_past_the_end() {
        let input = [1, 2, 3, 4, 5];
        let (outcome, _) = search_recorded(SearchAlgorithm::Jump, &input, 6.0).await;
        assert_eq!(outcome.completion, Completion::NotFound);
    }
}
